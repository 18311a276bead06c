//! # Domain Models
//!
//! Pure configuration types with minimal dependencies (`serde`, `strum`).
//! Keep it lean: no I/O and no validation here. Raw values come in as [`config::RawConfig`],
//! validated values go out as [`settings::DeploymentSettings`]; the kernel crate does the
//! work in between.

pub mod config;
pub mod constants;
pub mod secret;
pub mod settings;

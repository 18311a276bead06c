//! Kernel of the RCTab preflight: everything between a stack's raw configuration and
//! the settings handed to the deployed services.
//!
//! * [`config`] reads `Pulumi.<stack>` plus `RCTAB__` environment overrides into a
//!   [`RawConfig`](rctab_domain::config::RawConfig).
//! * [`validate`] holds the stateless validators.
//! * [`settings`] composes them into a [`DeploymentSettings`](rctab_domain::settings::DeploymentSettings).
//! * [`render`] derives the per-service app settings.
//!
//! ```rust,no_run
//! use rctab_kernel::prelude::*;
//!
//! let raw = load_raw_config(None::<&str>, "dev").unwrap();
//! let settings = resolve_settings(&raw, "dev", ResolveMode::Aggregate).unwrap();
//! for setting in render_app_settings(&settings, ServiceTarget::Api) {
//!     println!("{}", setting.name);
//! }
//! ```
pub mod config;
pub mod prelude;
pub mod render;
pub mod settings;
pub mod validate;

pub use rctab_domain as domain;

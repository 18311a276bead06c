#![allow(unreachable_pub)]

//! # Macros
//!
//! Procedural macros shared by the preflight crates.
//!
//! ## Usage
//! ```toml
//! [dependencies]
//! rctab-derive = { path = "../infra/derive" }
//! thiserror = "2"
//! ```
//!
//! Examples below are `ignore`d because a proc-macro crate cannot use its own macros in doctests;
//! see `tests/ui` for compiled cases.

mod macros;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Attribute macro for defining configuration-time error enums.
///
/// # Features
///
/// * **Automatic Derives**: Injects `#[derive(Debug, thiserror::Error)]` unless already present.
/// * **Context Support**: Generates a companion `...Ext` trait that adds `.context()`
///   to any `Result` that can be converted into this error type.
/// * **Context Access**: Generates `context_label(&self) -> Option<&str>` returning the
///   context attached to the variant, if any.
/// * **Standard Conversions**: Implements `From<T>` for variants containing a `source` field,
///   enabling the use of the `?` operator for upstream errors.
/// * **Internal Fallback**: Provides `From<&'static str>` and `From<String>` implementations
///   if an `Internal { message, context }` variant is present.
///
/// # Requirements
///
/// 1. The macro must be applied to an **enum**.
/// 2. Variants that support context must include a `context: Option<Cow<'static, str>>` field.
/// 3. Variants wrapping another error must include a `source: T` field (or one marked with
///    `#[source]`/`#[from]`) and a `context` field.
/// 4. Tuple or unit variants are rejected.
///
/// # Example
///
/// ```rust,ignore
/// use rctab_derive::rctab_error;
/// use std::borrow::Cow;
///
/// #[rctab_error]
/// pub enum LoadError {
///     #[error("IO error{}: {source}", format_context(.context))]
///     Io { source: std::io::Error, context: Option<Cow<'static, str>> },
///
///     #[error("Internal fault{}: {message}", format_context(.context))]
///     Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
///
/// fn read(path: &str) -> Result<String, LoadError> {
///     std::fs::read_to_string(path).context("Reading stack file")
/// }
/// ```
#[proc_macro_attribute]
pub fn rctab_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    macros::error::expand_derive(input).into()
}

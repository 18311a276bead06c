use std::borrow::Cow;
use std::path::PathBuf;

/// Configuration-time validation failures.
///
/// Every message carries the offending value and, where there is one, the allowed
/// set or pattern. The `context` field holds the configuration key once the caller
/// attaches it with [`ValidationErrorExt::context`].
#[rctab_derive::rctab_error]
#[derive(Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid length{}: {message} (got '{value}')", format_context(.context))]
    InvalidLength {
        value: String,
        message: Cow<'static, str>,
        context: Option<Cow<'static, str>>,
    },

    #[error("Invalid pattern{}: '{value}' must match the pattern '{pattern}'", format_context(.context))]
    InvalidPattern { value: String, pattern: &'static str, context: Option<Cow<'static, str>> },

    #[error("Invalid value{}: '{value}' is not one of {}", format_context(.context), .allowed.join(", "))]
    InvalidEnum {
        value: String,
        allowed: &'static [&'static str],
        context: Option<Cow<'static, str>>,
    },

    #[error("Invalid UUID{}: '{value}' is not a valid UUID", format_context(.context))]
    InvalidUuid { value: String, context: Option<Cow<'static, str>> },

    #[error("Invalid integer{}: '{value}' is not a valid integer", format_context(.context))]
    InvalidInteger { value: String, context: Option<Cow<'static, str>> },

    #[error("Invalid format{}: '{value}' is not a valid {expected}", format_context(.context))]
    InvalidFormat { value: String, expected: &'static str, context: Option<Cow<'static, str>> },

    #[error(
        "Missing choice{}: one of '{first}' or '{second}' should be set but neither is",
        format_context(.context)
    )]
    MissingChoice { first: &'static str, second: &'static str, context: Option<Cow<'static, str>> },

    #[error(
        "Ambiguous choice{}: only one of '{first}' or '{second}' should be set but both are",
        format_context(.context)
    )]
    AmbiguousChoice {
        first: &'static str,
        second: &'static str,
        context: Option<Cow<'static, str>>,
    },

    #[error("Not found{}: '{}' is not an existing file", format_context(.context), .path.display())]
    NotFound { path: PathBuf, context: Option<Cow<'static, str>> },

    #[error("Missing setting{}: required key '{key}' is not set", format_context(.context))]
    Missing { key: &'static str, context: Option<Cow<'static, str>> },
}

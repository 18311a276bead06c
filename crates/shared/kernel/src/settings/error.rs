use crate::validate::ValidationError;
use std::borrow::Cow;

/// Failure to resolve a stack's configuration into [`DeploymentSettings`](rctab_domain::settings::DeploymentSettings).
#[rctab_derive::rctab_error]
pub enum SettingsError {
    /// The first validation failure, in fail-fast mode.
    #[error("Invalid configuration{}: {source}", format_context(.context))]
    Validation { source: ValidationError, context: Option<Cow<'static, str>> },

    /// Every validation failure, in aggregate mode.
    #[error("{} invalid configuration value(s){}:\n{}", .errors.len(), format_context(.context), list_errors(.errors))]
    Aggregate { errors: Vec<ValidationError>, context: Option<Cow<'static, str>> },

    #[error("Internal settings error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

impl SettingsError {
    /// All validation failures carried by this error, in the order they were found.
    #[must_use]
    pub fn validation_errors(&self) -> &[ValidationError] {
        match self {
            Self::Validation { source, .. } => std::slice::from_ref(source),
            Self::Aggregate { errors, .. } => errors,
            Self::Internal { .. } => &[],
        }
    }
}

fn list_errors(errors: &[ValidationError]) -> String {
    errors.iter().map(|e| format!("  - {e}")).collect::<Vec<_>>().join("\n")
}

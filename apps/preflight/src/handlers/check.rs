use crate::models::args::StackArgs;
use anyhow::{Context, Result};
use rctab_kernel::config::load_raw_config;
use rctab_kernel::domain::settings::DeploymentSettings;
use rctab_kernel::settings::{ResolveMode, resolve_settings};
use tracing::info;

/// Loads and validates a stack's configuration.
///
/// # Errors
/// Returns an error if the configuration cannot be read or any value is invalid.
pub fn load_settings(args: &StackArgs, mode: ResolveMode) -> Result<DeploymentSettings> {
    let raw = load_raw_config(args.config.as_ref(), &args.stack)
        .with_context(|| format!("Could not read configuration for stack '{}'", args.stack))?;

    resolve_settings(&raw, &args.stack, mode)
        .with_context(|| format!("Stack '{}' failed validation", args.stack))
}

/// Validates the stack and prints a short summary of the derived names.
///
/// # Errors
/// Returns an error if the configuration is unreadable or invalid.
pub fn check_stack(args: &StackArgs, all_errors: bool) -> Result<()> {
    let mode = if all_errors { ResolveMode::Aggregate } else { ResolveMode::FailFast };
    let settings = load_settings(args, mode)?;
    let id = &settings.identifier;

    info!(stack = %args.stack, "Stack configuration is valid");
    println!("Stack '{}' is valid", args.stack);
    println!("  identifier:      {id}");
    println!("  key vault:       {}", id.key_vault_name());
    println!("  database server: {}*", id.database_server_prefix());
    println!("  billing scope:   {}", settings.billing_scope.setting_name());
    println!("  rctab tag:       {}", settings.rctab_tag);

    Ok(())
}

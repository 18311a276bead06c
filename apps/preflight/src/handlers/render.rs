use crate::handlers::check::load_settings;
use crate::models::args::{OutputFormat, StackArgs, TargetArg};
use crate::models::report::ServiceReport;
use anyhow::{Context, Result};
use rctab_kernel::settings::ResolveMode;

/// Prints the app settings for the selected services.
///
/// # Errors
/// Returns an error if the configuration is unreadable or invalid, or if JSON encoding fails.
pub fn render_settings(
    args: &StackArgs,
    target: TargetArg,
    format: OutputFormat,
    show_secrets: bool,
) -> Result<()> {
    let settings = load_settings(args, ResolveMode::Aggregate)?;
    let reports: Vec<_> = target
        .targets()
        .into_iter()
        .map(|service| ServiceReport::build(&settings, service, show_secrets))
        .collect();

    match format {
        OutputFormat::Env => {
            let blocks: Vec<_> = reports.iter().map(ServiceReport::to_env).collect();
            print!("{}", blocks.join("\n"));
        },
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&reports).context("Failed to encode settings")?;
            println!("{json}");
        },
    }

    Ok(())
}

//! # RCTab Preflight
//!
//! Reads a stack's configuration, validates every value, and shows what each
//! deployed service would receive. Nothing is provisioned.

#![allow(clippy::print_stdout)]

pub mod handlers;
pub mod models;

use crate::handlers::{check, render};
use crate::models::args::{AppCommands, Cli, LoggingArgs};
use anyhow::Result;
use clap::Parser;
use rctab_logger::Logger;

fn init_logging(args: &LoggingArgs) -> Result<Logger> {
    let builder =
        Logger::builder().name(env!("CARGO_PKG_NAME")).log_level(args.log_level).json(args.json_logs);

    let logger = match &args.log_dir {
        Some(dir) => builder.path(dir).init()?,
        None => builder.init()?,
    };
    Ok(logger)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let _log = init_logging(&cli.logging)?;

    match cli.command {
        AppCommands::Check { stack, all_errors } => check::check_stack(&stack, all_errors)?,
        AppCommands::Render { stack, target, format, show_secrets } => {
            render::render_settings(&stack, target, format, show_secrets)?;
        },
    }

    Ok(())
}

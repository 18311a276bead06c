//! # CLI Argument Definitions

use clap::{Args, Parser, Subcommand, ValueEnum};
use rctab_kernel::domain::settings::{LogLevel, ServiceTarget};
use rctab_kernel::validate::validate_log_level;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "rctab-preflight")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(arg_required_else_help = true)]
#[command(about = "Validate an RCTab stack configuration before deploying it")]
pub struct Cli {
    #[command(flatten)]
    pub logging: LoggingArgs,

    #[command(subcommand)]
    pub command: AppCommands,
}

#[derive(Debug, Args)]
pub struct LoggingArgs {
    /// Log level for this tool (CRITICAL, FATAL, ERROR, WARNING, WARN, INFO, DEBUG, NOTSET)
    #[arg(long, global = true, default_value = "WARNING", value_parser = parse_log_level)]
    pub log_level: LogLevel,

    /// Also write rolling log files into this directory
    #[arg(long, global = true)]
    pub log_dir: Option<PathBuf>,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub json_logs: bool,
}

/// Which stack to read and where its configuration lives.
#[derive(Debug, Args)]
pub struct StackArgs {
    /// Stack name, e.g. 'dev' or 'prod'
    #[arg(short, long)]
    pub stack: String,

    /// Stack configuration file (defaults to Pulumi.<stack>.* in the working directory)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
pub enum AppCommands {
    /// Validate the stack configuration and exit non-zero if anything is invalid
    Check {
        #[command(flatten)]
        stack: StackArgs,

        /// Report every invalid value instead of stopping at the first
        #[arg(long)]
        all_errors: bool,
    },
    /// Print the app settings each service would receive
    Render {
        #[command(flatten)]
        stack: StackArgs,

        #[arg(short, long, value_enum, default_value_t = TargetArg::All)]
        target: TargetArg,

        #[arg(short, long, value_enum, default_value_t = OutputFormat::Env)]
        format: OutputFormat,

        /// Print secret values instead of masking them
        #[arg(long)]
        show_secrets: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TargetArg {
    Api,
    Usage,
    Status,
    Controller,
    All,
}

impl TargetArg {
    #[must_use]
    pub fn targets(self) -> Vec<ServiceTarget> {
        match self {
            Self::Api => vec![ServiceTarget::Api],
            Self::Usage => vec![ServiceTarget::Usage],
            Self::Status => vec![ServiceTarget::Status],
            Self::Controller => vec![ServiceTarget::Controller],
            Self::All => ServiceTarget::ALL.to_vec(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// `NAME=value` lines grouped per service
    Env,
    /// A JSON document keyed by service
    Json,
}

fn parse_log_level(value: &str) -> Result<LogLevel, String> {
    validate_log_level(Some(value))
        .map_err(|e| e.to_string())?
        .ok_or_else(|| "log level is required".to_owned())
}

use config::{Config, Environment, File, Value, ValueKind};
use rctab_domain::config::RawConfig;
use rctab_domain::constants::STACK_FILE_STEM;
use std::borrow::Cow;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Prefix of environment variables that override stack file values.
pub const ENV_PREFIX: &str = "RCTAB";
/// Separator between the prefix and the key, e.g. `RCTAB__TICKER`.
pub const ENV_SEPARATOR: &str = "__";
/// Top-level table holding namespaced `<project>:<key>` entries in a Pulumi stack file.
pub const CONFIG_TABLE: &str = "config";

/// Failure to read a stack's configuration sources.
#[rctab_derive::rctab_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },

    #[error("Config shape error{}: {source}", format_context(.context))]
    Shape { source: serde_json::Error, context: Option<Cow<'static, str>> },
}

/// Default location of a stack's configuration file, `Pulumi.<stack>`.
///
/// The extension is left off so any supported format (`.yaml`, `.toml`, `.json`, ...) is found.
#[must_use]
pub fn default_stack_file(stack: &str) -> PathBuf {
    PathBuf::from(format!("{STACK_FILE_STEM}.{stack}"))
}

/// Loads the raw configuration of `stack` from its stack file and the environment.
///
/// Layers, lowest priority first:
/// 1. **Stack file**: `path`, or `Pulumi.<stack>` when `None`. Values may sit under a
///    `config:` table with `<project>:` key prefixes (the Pulumi layout) or at the top level.
/// 2. **Environment**: `RCTAB__<KEY>` variables, e.g. `RCTAB__TICKER=tkr`.
///
/// Scalars are taken as strings. Structured values (encrypted `secure:` entries, arrays,
/// nested tables) are skipped with a warning. Unknown keys are ignored.
///
/// # Errors
/// * [`ConfigError::Config`] if the file is missing or cannot be parsed.
/// * [`ConfigError::Shape`] if the collected values do not fit [`RawConfig`].
pub fn load_raw_config(path: Option<impl AsRef<Path>>, stack: &str) -> Result<RawConfig, ConfigError> {
    let effective_path =
        path.map_or_else(|| default_stack_file(stack), |p| p.as_ref().to_path_buf());

    info!("Loading stack configuration from {}", effective_path.display());

    let mut top = Config::builder()
        .add_source(File::from(effective_path.as_path()).required(true))
        .add_source(Environment::with_prefix(ENV_PREFIX).separator(ENV_SEPARATOR))
        .build()
        .context("Failed to build config")?
        .try_deserialize::<HashMap<String, Value>>()
        .context("Failed to read config")?;

    let mut entries = serde_json::Map::new();
    if let Some(namespaced) = top.remove(CONFIG_TABLE) {
        match namespaced.kind {
            ValueKind::Table(table) => collect_scalars(&mut entries, table),
            _ => warn!(key = CONFIG_TABLE, "Ignoring non-table 'config' entry"),
        }
    }
    collect_scalars(&mut entries, top);

    debug!(keys = entries.len(), "Configuration keys collected");
    serde_json::from_value(serde_json::Value::Object(entries)).context("Failed to map config keys")
}

/// Copies scalar values into `entries` under their un-namespaced key; later calls win.
fn collect_scalars<I>(entries: &mut serde_json::Map<String, serde_json::Value>, values: I)
where
    I: IntoIterator<Item = (String, Value)>,
{
    for (key, value) in values {
        let name = strip_namespace(&key).to_owned();
        match value.kind {
            ValueKind::Nil => debug!(key = %key, "Skipping empty value"),
            ValueKind::Table(_) | ValueKind::Array(_) => {
                warn!(key = %key, "Skipping structured value (encrypted or nested entries are not read)");
            },
            _ => match value.into_string() {
                Ok(text) => {
                    entries.insert(name, serde_json::Value::String(text));
                },
                Err(err) => warn!(key = %key, error = %err, "Skipping unreadable value"),
            },
        }
    }
}

/// `rctab:ticker` -> `ticker`; keys without a namespace are returned as-is.
#[must_use]
pub fn strip_namespace(key: &str) -> &str {
    key.split_once(':').map_or(key, |(_, name)| name)
}

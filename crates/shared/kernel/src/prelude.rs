pub use crate::config::{ConfigError, ConfigErrorExt, load_raw_config};
pub use crate::render::{EmailReceiver, email_receivers, linux_fx_version, render_app_settings};
pub use crate::settings::{ResolveMode, SettingsError, SettingsErrorExt, resolve_settings};
pub use crate::validate::{ValidationError, ValidationErrorExt};
pub use rctab_domain::config::RawConfig;
pub use rctab_domain::secret::Secret;
pub use rctab_domain::settings::{AppSetting, DeploymentSettings, ServiceTarget, SettingValue};

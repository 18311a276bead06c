//! Output shapes for the `render` command.

use rctab_kernel::domain::settings::{AppSetting, DeploymentSettings, ServiceTarget, SettingValue};
use rctab_kernel::render::{linux_fx_version, render_app_settings};
use serde::Serialize;

const MASK: &str = "***";

/// One rendered setting, with the value masked unless secrets are shown.
#[derive(Debug, Serialize)]
pub struct SettingLine {
    pub name: &'static str,
    pub value: String,
    pub secret: bool,
}

impl SettingLine {
    fn new(setting: &AppSetting, show_secrets: bool) -> Self {
        let value = match &setting.value {
            SettingValue::Secret(_) if !show_secrets => MASK.to_owned(),
            other => other.expose().to_owned(),
        };
        Self { name: setting.name, value, secret: setting.value.is_secret() }
    }
}

/// Everything a single service receives.
#[derive(Debug, Serialize)]
pub struct ServiceReport {
    pub service: &'static str,
    pub image: String,
    pub settings: Vec<SettingLine>,
}

impl ServiceReport {
    #[must_use]
    pub fn build(settings: &DeploymentSettings, target: ServiceTarget, show_secrets: bool) -> Self {
        Self {
            service: target.component(),
            image: linux_fx_version(settings, target),
            settings: render_app_settings(settings, target)
                .iter()
                .map(|setting| SettingLine::new(setting, show_secrets))
                .collect(),
        }
    }

    /// `# <service>` header followed by `NAME=value` lines.
    #[must_use]
    pub fn to_env(&self) -> String {
        let mut out = format!("# {} ({})\n", self.service, self.image);
        for line in &self.settings {
            out.push_str(line.name);
            out.push('=');
            out.push_str(&shell_quote(&line.value));
            out.push('\n');
        }
        out
    }
}

/// Single-quotes values a POSIX shell would otherwise split or expand.
fn shell_quote(value: &str) -> String {
    let plain = value
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | ':' | '/' | '@'));
    if plain && !value.is_empty() {
        value.to_owned()
    } else {
        format!("'{}'", value.replace('\'', r"'\''"))
    }
}

//! # App Settings
//!
//! Turns validated [`DeploymentSettings`] into the name/value pairs each deployed
//! service receives. Values only known at deploy time (connection strings, keys,
//! database host and password) are not produced here.

use rctab_domain::constants::{
    API_TIMEOUT_SECONDS, APP_MODULE, FUNCTIONS_EXTENSION_VERSION, HTTP_LOGGING_RETENTION_DAYS,
    RCTAB_APP_USER, SESSION_TIMEOUT_MINUTES, WEBSITES_PORT,
};
use rctab_domain::secret::Secret;
use rctab_domain::settings::{AppSetting, DeploymentSettings, ServiceTarget};

use crate::validate::split_list;

/// An administrator to notify, derived from `admin_email_recipients`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailReceiver {
    /// Local part of the address, used as the receiver name.
    pub name: String,
    pub email: String,
}

/// Renders the ordered app settings for one service.
#[must_use]
pub fn render_app_settings(settings: &DeploymentSettings, target: ServiceTarget) -> Vec<AppSetting> {
    match target {
        ServiceTarget::Api => api_settings(settings),
        ServiceTarget::Usage => {
            let mut out = function_settings(settings);
            let scope = &settings.billing_scope;
            out.push(AppSetting::secret(scope.setting_name(), scope.value().clone()));
            out
        },
        ServiceTarget::Status => {
            let ad = &settings.active_directory;
            let mut out = function_settings(settings);
            out.push(AppSetting::secret("AZURE_TENANT_ID", ad.tenant_id.clone()));
            out.push(AppSetting::secret("AZURE_CLIENT_ID", ad.status_client_id.clone()));
            out.push(AppSetting::secret("AZURE_CLIENT_SECRET", ad.status_client_secret.clone()));
            out
        },
        ServiceTarget::Controller => function_settings(settings),
    }
}

/// The container image setting for a service, e.g. `DOCKER|turingrc/rctab-api:1.latest`.
#[must_use]
pub fn linux_fx_version(settings: &DeploymentSettings, target: ServiceTarget) -> String {
    format!("DOCKER|{}", settings.images.for_target(target))
}

fn registry_settings(settings: &DeploymentSettings) -> [AppSetting; 4] {
    let registry = &settings.registry;
    [
        AppSetting::secret("DOCKER_REGISTRY_SERVER_URL", registry.url.clone()),
        AppSetting::secret("DOCKER_REGISTRY_SERVER_USERNAME", registry.username.clone()),
        AppSetting::secret("DOCKER_REGISTRY_SERVER_PASSWORD", registry.password.clone()),
        AppSetting::plain("DOCKER_ENABLE_CI", settings.auto_deploy.to_string()),
    ]
}

fn api_settings(settings: &DeploymentSettings) -> Vec<AppSetting> {
    let ad = &settings.active_directory;
    let mut out = vec![
        AppSetting::secret("TENANT_ID", ad.tenant_id.clone()),
        AppSetting::secret("CLIENT_ID", ad.api_client_id.clone()),
        AppSetting::secret("CLIENT_SECRET", ad.api_client_secret.clone()),
        AppSetting::plain("WEBSITES_ENABLE_APP_SERVICE_STORAGE", "false"),
        AppSetting::plain("WEBSITES_PORT", WEBSITES_PORT),
        AppSetting::plain("WEBSITE_HTTPLOGGING_RETENTION_DAYS", HTTP_LOGGING_RETENTION_DAYS),
        AppSetting::plain("FORWARDED_ALLOW_IPS", "*"),
    ];
    out.extend(registry_settings(settings));
    out.extend([
        AppSetting::plain("ORGANISATION", settings.organisation.clone()),
        AppSetting::plain("APP_MODULE", APP_MODULE),
        AppSetting::plain("TIMEOUT", API_TIMEOUT_SECONDS),
        AppSetting::plain("DB_USER", RCTAB_APP_USER),
        AppSetting::plain("SSL_REQUIRED", "true"),
        AppSetting::plain("SESSION_EXPIRE_TIME_MINUTES", SESSION_TIMEOUT_MINUTES),
    ]);
    out.extend(additional_settings(settings));
    out
}

/// Optional settings, included only when present and non-empty.
fn additional_settings(settings: &DeploymentSettings) -> Vec<AppSetting> {
    let n = &settings.notifications;
    let secret = |name, value: &Option<Secret<String>>| {
        value.as_ref().filter(|v| !v.is_empty()).map(|v| AppSetting::secret(name, v.clone()))
    };
    let plain = |name, value: Option<String>| {
        value.filter(|v| !v.is_empty()).map(|v| AppSetting::plain(name, v))
    };

    [
        secret("SENDGRID_API_KEY", &n.sendgrid_api_key),
        secret("SENDGRID_SENDER_EMAIL", &n.sendgrid_sender_email),
        plain("EXPIRY_EMAIL_FREQ", n.expiry_email_freq.clone()),
        plain("NOTIFIABLE_ROLES", n.notifiable_roles.clone()),
        plain("ROLES_FILTER", n.roles_filter.clone()),
        secret("ADMIN_EMAIL_RECIPIENTS", &n.admin_email_recipients),
        plain("IGNORE_WHITELIST", settings.ignore_whitelist.map(|flag| flag.to_string())),
        plain("WHITELIST", settings.whitelist.clone()),
        plain("LOG_LEVEL", settings.log_level.map(|level| level.to_string())),
    ]
    .into_iter()
    .flatten()
    .collect()
}

fn function_settings(settings: &DeploymentSettings) -> Vec<AppSetting> {
    let mut out = vec![AppSetting::plain("WEBSITES_ENABLE_APP_SERVICE_STORAGE", "false")];
    let [url, username, password, ci] = registry_settings(settings);
    out.extend([
        url,
        username,
        password,
        AppSetting::plain("WEBSITES_PORT", WEBSITES_PORT),
        ci,
        AppSetting::plain("FUNCTIONS_EXTENSION_VERSION", FUNCTIONS_EXTENSION_VERSION),
    ]);
    out
}

/// Splits an admin recipient list into named receivers.
///
/// Accepts either the normalized `["a@x", "b@y"]` form or a plain comma list.
/// Blank entries are skipped.
#[must_use]
pub fn email_receivers(recipients: &str) -> Vec<EmailReceiver> {
    split_list(recipients)
        .into_iter()
        .filter(|email| !email.is_empty())
        .map(|email| EmailReceiver {
            name: email.split('@').next().unwrap_or(&email).trim().to_owned(),
            email,
        })
        .collect()
}

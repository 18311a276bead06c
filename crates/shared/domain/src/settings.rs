use crate::secret::Secret;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::net::IpAddr;
use std::path::PathBuf;
use strum_macros::{Display, EnumString, VariantNames};

/// The `{ticker}-{stack}` prefix used to name every provisioned resource.
///
/// [`Identifier::compose`] does not check naming rules; build identifiers through
/// the kernel's `validate_identifier` so the ticker and length constraints hold.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Identifier(String);

impl Identifier {
    #[must_use]
    pub fn compose(ticker: &str, stack: &str) -> Self {
        Self(format!("{ticker}-{stack}"))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Name prefix for an `rctab-<kind>-` resource, e.g. `rctab-app-plan-tkr-prod-`.
    #[must_use]
    pub fn resource_prefix(&self, kind: &str) -> String {
        format!("rctab-{kind}-{}-", self.0)
    }

    #[must_use]
    pub fn key_vault_name(&self) -> String {
        format!("{}-vlt", self.0)
    }

    /// Database server names must be lowercase.
    #[must_use]
    pub fn database_server_prefix(&self) -> String {
        format!("{}-rctab-", self.0).to_lowercase()
    }

    #[must_use]
    pub fn function_app_prefix(&self, target: ServiceTarget) -> String {
        let first = target.component().chars().next().unwrap_or('f');
        format!("{first}-function-{}-", self.0)
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Identifier {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Accepted log levels for the deployed services, always in canonical uppercase.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumString,
    VariantNames,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum LogLevel {
    Critical,
    Fatal,
    Error,
    Warning,
    Warn,
    Info,
    Debug,
    NotSet,
}

/// Element type of a comma-separated list setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum ListKind {
    Uuid,
    Int,
    String,
}

/// The resolved side of the billing-account / management-group choice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BillingScope {
    BillingAccount(Secret<String>),
    ManagementGroup(Secret<String>),
}

impl BillingScope {
    /// Name of the app setting the usage function expects for this branch.
    #[must_use]
    pub const fn setting_name(&self) -> &'static str {
        match self {
            Self::BillingAccount(_) => "BILLING_ACCOUNT_ID",
            Self::ManagementGroup(_) => "MGMT_GROUP",
        }
    }

    #[must_use]
    pub const fn value(&self) -> &Secret<String> {
        match self {
            Self::BillingAccount(v) | Self::ManagementGroup(v) => v,
        }
    }
}

/// A deployed service that receives app settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, VariantNames)]
#[strum(serialize_all = "lowercase")]
pub enum ServiceTarget {
    Api,
    Usage,
    Status,
    Controller,
}

impl ServiceTarget {
    pub const ALL: [Self; 4] = [Self::Api, Self::Usage, Self::Status, Self::Controller];

    #[must_use]
    pub const fn component(self) -> &'static str {
        match self {
            Self::Api => "api",
            Self::Usage => "usage",
            Self::Status => "status",
            Self::Controller => "controller",
        }
    }

    #[must_use]
    pub const fn is_function(self) -> bool {
        !matches!(self, Self::Api)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DockerRegistry {
    pub url: Secret<String>,
    pub username: Secret<String>,
    pub password: Secret<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DockerImages {
    pub api: String,
    pub usage: String,
    pub status: String,
    pub controller: String,
}

impl DockerImages {
    #[must_use]
    pub fn for_target(&self, target: ServiceTarget) -> &str {
        match target {
            ServiceTarget::Api => &self.api,
            ServiceTarget::Usage => &self.usage,
            ServiceTarget::Status => &self.status,
            ServiceTarget::Controller => &self.controller,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveDirectory {
    pub server_admin: Secret<String>,
    pub tenant_id: Secret<String>,
    pub api_client_id: Secret<String>,
    pub api_client_secret: Secret<String>,
    pub status_client_id: Secret<String>,
    pub status_client_secret: Secret<String>,
}

/// Optional notification settings; lists are already normalized to JSON-array strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Notifications {
    pub sendgrid_api_key: Option<Secret<String>>,
    pub sendgrid_sender_email: Option<Secret<String>>,
    pub expiry_email_freq: Option<String>,
    pub notifiable_roles: Option<String>,
    pub roles_filter: Option<String>,
    pub admin_email_recipients: Option<Secret<String>>,
}

/// Fully validated configuration for one stack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeploymentSettings {
    pub organisation: String,
    pub stack: String,
    pub identifier: Identifier,
    pub rctab_tag: String,
    pub auto_deploy: bool,
    pub registry: DockerRegistry,
    pub images: DockerImages,
    pub primary_ip: Secret<IpAddr>,
    pub db_root_cert_path: PathBuf,
    pub active_directory: ActiveDirectory,
    pub notifications: Notifications,
    pub ignore_whitelist: Option<bool>,
    pub whitelist: Option<String>,
    pub log_level: Option<LogLevel>,
    pub billing_scope: BillingScope,
}

/// Value of a rendered app setting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingValue {
    Plain(String),
    Secret(Secret<String>),
}

impl SettingValue {
    #[must_use]
    pub const fn is_secret(&self) -> bool {
        matches!(self, Self::Secret(_))
    }

    /// The raw value, regardless of secrecy.
    #[must_use]
    pub fn expose(&self) -> &str {
        match self {
            Self::Plain(v) => v,
            Self::Secret(v) => v.as_str(),
        }
    }
}

/// A name/value pair attached to a deployed service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppSetting {
    pub name: &'static str,
    pub value: SettingValue,
}

impl AppSetting {
    pub fn plain(name: &'static str, value: impl Into<String>) -> Self {
        Self { name, value: SettingValue::Plain(value.into()) }
    }

    pub const fn secret(name: &'static str, value: Secret<String>) -> Self {
        Self { name, value: SettingValue::Secret(value) }
    }
}

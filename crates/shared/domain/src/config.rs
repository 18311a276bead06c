use crate::secret::Secret;
use serde::Deserialize;

/// Untyped configuration exactly as read from the stack file and environment.
///
/// Every key is optional: absence means "not configured" and is resolved
/// against defaults or reported as missing by the kernel. Keys that the
/// deployment treats as secrets are wrapped in [`Secret`].
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RawConfig {
    pub organisation: Option<String>,
    pub ticker: Option<String>,
    pub rctab_tag: Option<String>,
    pub auto_deploy: Option<String>,

    pub docker_registry_server_url: Option<Secret<String>>,
    pub docker_registry_server_username: Option<Secret<String>>,
    pub docker_registry_server_password: Option<Secret<String>>,
    pub docker_api_image: Option<String>,
    pub docker_usage_image: Option<String>,
    pub docker_status_image: Option<String>,
    pub docker_controller_image: Option<String>,

    pub primary_ip_address: Option<Secret<String>>,
    pub db_root_cert_path: Option<String>,

    pub ad_server_admin: Option<Secret<String>>,
    pub ad_tenant_id: Option<Secret<String>>,
    pub ad_api_client_id: Option<Secret<String>>,
    pub ad_api_client_secret: Option<Secret<String>>,
    pub ad_status_client_id: Option<Secret<String>>,
    pub ad_status_client_secret: Option<Secret<String>>,

    pub sendgrid_api_key: Option<Secret<String>>,
    pub sendgrid_sender_email: Option<Secret<String>>,
    pub expiry_email_freq: Option<String>,
    pub notifiable_roles: Option<String>,
    pub roles_filter: Option<String>,
    pub admin_email_recipients: Option<Secret<String>>,

    pub ignore_whitelist: Option<String>,
    pub whitelist: Option<String>,
    pub log_level: Option<String>,

    pub billing_account_id: Option<Secret<String>>,
    pub usage_mgmt_group: Option<Secret<String>>,
}

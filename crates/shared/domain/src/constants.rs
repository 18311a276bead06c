//! Hardcoded deployment values and configuration key names.

pub const SESSION_TIMEOUT_MINUTES: &str = "90";
pub const DATABASE_NAME: &str = "RCTab";
pub const APP_MODULE: &str = "rctab:app";
pub const RCTAB_APP_USER: &str = "rctab-api-user";

pub const DEFAULT_RCTAB_TAG: &str = "1.latest";
pub const DEFAULT_AUTO_DEPLOY: bool = true;
pub const DEFAULT_DOCKER_REGISTRY_SERVER_URL: &str = "https://index.docker.io/v1";
pub const DEFAULT_IMAGE_NAMESPACE: &str = "turingrc";

pub const FUNCTIONS_EXTENSION_VERSION: &str = "~4";
pub const WEBSITES_PORT: &str = "80";
pub const HTTP_LOGGING_RETENTION_DAYS: &str = "30";
pub const API_TIMEOUT_SECONDS: &str = "300";

/// Stem of a stack configuration file; the stack name and format extension follow.
pub const STACK_FILE_STEM: &str = "Pulumi";

/// Default image reference for a component, e.g. `turingrc/rctab-api:1.latest`.
#[must_use]
pub fn default_image(component: &str, tag: &str) -> String {
    format!("{DEFAULT_IMAGE_NAMESPACE}/rctab-{component}:{tag}")
}

/// Configuration keys as they appear in the stack file.
pub mod keys {
    pub const ORGANISATION: &str = "organisation";
    pub const TICKER: &str = "ticker";
    pub const STACK: &str = "stack";
    pub const RCTAB_TAG: &str = "rctab_tag";
    pub const AUTO_DEPLOY: &str = "auto_deploy";

    pub const DOCKER_REGISTRY_SERVER_URL: &str = "docker_registry_server_url";
    pub const DOCKER_REGISTRY_SERVER_USERNAME: &str = "docker_registry_server_username";
    pub const DOCKER_REGISTRY_SERVER_PASSWORD: &str = "docker_registry_server_password";
    pub const DOCKER_API_IMAGE: &str = "docker_api_image";
    pub const DOCKER_USAGE_IMAGE: &str = "docker_usage_image";
    pub const DOCKER_STATUS_IMAGE: &str = "docker_status_image";
    pub const DOCKER_CONTROLLER_IMAGE: &str = "docker_controller_image";

    pub const PRIMARY_IP_ADDRESS: &str = "primary_ip_address";
    pub const DB_ROOT_CERT_PATH: &str = "db_root_cert_path";

    pub const AD_SERVER_ADMIN: &str = "ad_server_admin";
    pub const AD_TENANT_ID: &str = "ad_tenant_id";
    pub const AD_API_CLIENT_ID: &str = "ad_api_client_id";
    pub const AD_API_CLIENT_SECRET: &str = "ad_api_client_secret";
    pub const AD_STATUS_CLIENT_ID: &str = "ad_status_client_id";
    pub const AD_STATUS_CLIENT_SECRET: &str = "ad_status_client_secret";

    pub const SENDGRID_API_KEY: &str = "sendgrid_api_key";
    pub const SENDGRID_SENDER_EMAIL: &str = "sendgrid_sender_email";
    pub const EXPIRY_EMAIL_FREQ: &str = "expiry_email_freq";
    pub const NOTIFIABLE_ROLES: &str = "notifiable_roles";
    pub const ROLES_FILTER: &str = "roles_filter";
    pub const ADMIN_EMAIL_RECIPIENTS: &str = "admin_email_recipients";

    pub const IGNORE_WHITELIST: &str = "ignore_whitelist";
    pub const WHITELIST: &str = "whitelist";
    pub const LOG_LEVEL: &str = "log_level";

    pub const BILLING_ACCOUNT_ID: &str = "billing_account_id";
    pub const USAGE_MGMT_GROUP: &str = "usage_mgmt_group";
}

//! # Settings Resolution
//!
//! Composes the validators in [`crate::validate`] over a [`RawConfig`]: every key is
//! validated exactly once, defaults are substituted explicitly, the billing/management
//! group rule runs after both values are known, and nothing is returned unless the
//! whole configuration is valid.

mod error;

pub use error::{SettingsError, SettingsErrorExt};

use crate::validate::{
    ValidationError, ValidationErrorExt, format_delimited_list, require, require_existing_path,
    resolve_exclusive_choice, validate_boolean_string, validate_identifier, validate_ip_address,
    validate_log_level,
};
use rctab_domain::config::RawConfig;
use rctab_domain::constants::keys::{
    AD_API_CLIENT_ID, AD_API_CLIENT_SECRET, AD_SERVER_ADMIN, AD_STATUS_CLIENT_ID,
    AD_STATUS_CLIENT_SECRET, AD_TENANT_ID, ADMIN_EMAIL_RECIPIENTS, AUTO_DEPLOY,
    DB_ROOT_CERT_PATH, EXPIRY_EMAIL_FREQ, IGNORE_WHITELIST, LOG_LEVEL, NOTIFIABLE_ROLES,
    ORGANISATION, PRIMARY_IP_ADDRESS, ROLES_FILTER, TICKER, WHITELIST,
};
use rctab_domain::constants::{
    DEFAULT_AUTO_DEPLOY, DEFAULT_DOCKER_REGISTRY_SERVER_URL, DEFAULT_RCTAB_TAG, default_image,
};
use rctab_domain::secret::Secret;
use rctab_domain::settings::{
    ActiveDirectory, DeploymentSettings, DockerImages, DockerRegistry, ListKind, Notifications,
    ServiceTarget,
};
use std::path::PathBuf;
use tracing::{debug, info, instrument};

/// Context label for the billing account / management group rule.
pub const BILLING_CHOICE: &str = "billing_account_id/usage_mgmt_group";

/// How [`resolve_settings`] reacts to an invalid value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ResolveMode {
    /// Stop at the first invalid value.
    #[default]
    FailFast,
    /// Validate every key, then report all invalid values together.
    Aggregate,
}

/// Collects validation outcomes according to the [`ResolveMode`].
#[derive(Debug)]
struct Checks {
    mode: ResolveMode,
    errors: Vec<ValidationError>,
}

impl Checks {
    const fn new(mode: ResolveMode) -> Self {
        Self { mode, errors: Vec::new() }
    }

    /// Tags a failure with its key, then either returns it or records it.
    fn check<T>(
        &mut self,
        key: &'static str,
        result: Result<T, ValidationError>,
    ) -> Result<Option<T>, SettingsError> {
        match ValidationErrorExt::context(result, key) {
            Ok(value) => Ok(Some(value)),
            Err(err) => match self.mode {
                ResolveMode::FailFast => Err(err.into()),
                ResolveMode::Aggregate => {
                    debug!(key, error = %err, "Recording validation failure");
                    self.errors.push(err);
                    Ok(None)
                },
            },
        }
    }

    fn required<T>(&mut self, key: &'static str, value: Option<T>) -> Result<Option<T>, SettingsError> {
        self.check(key, require(key, value))
    }

    fn finish(self) -> Result<(), SettingsError> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(SettingsError::Aggregate { errors: self.errors, context: None })
        }
    }
}

fn resolved<T>(value: Option<T>, key: &'static str) -> Result<T, SettingsError> {
    value.ok_or_else(|| SettingsError::Internal {
        message: format!("'{key}' passed validation but was not resolved").into(),
        context: None,
    })
}

/// Validates a stack's raw configuration and derives its [`DeploymentSettings`].
///
/// `stack` is supplied by the host (it is not read from the configuration). Keys are
/// checked in a fixed order; the certificate path check runs last.
///
/// # Errors
/// * [`SettingsError::Validation`] with the first failure in [`ResolveMode::FailFast`].
/// * [`SettingsError::Aggregate`] with every failure in [`ResolveMode::Aggregate`].
#[instrument(skip(raw))]
pub fn resolve_settings(
    raw: &RawConfig,
    stack: &str,
    mode: ResolveMode,
) -> Result<DeploymentSettings, SettingsError> {
    let mut checks = Checks::new(mode);

    let organisation = checks.required(ORGANISATION, raw.organisation.clone())?;
    let identifier = match checks.required(TICKER, raw.ticker.as_deref())? {
        Some(ticker) => checks.check(TICKER, validate_identifier(ticker, stack))?,
        None => None,
    };

    let rctab_tag = raw.rctab_tag.clone().unwrap_or_else(|| DEFAULT_RCTAB_TAG.to_owned());
    let auto_deploy = checks
        .check(AUTO_DEPLOY, validate_boolean_string(raw.auto_deploy.as_deref()))?
        .map(|flag| flag.unwrap_or(DEFAULT_AUTO_DEPLOY));

    let registry = DockerRegistry {
        url: raw
            .docker_registry_server_url
            .clone()
            .unwrap_or_else(|| Secret::from(DEFAULT_DOCKER_REGISTRY_SERVER_URL)),
        username: raw.docker_registry_server_username.clone().unwrap_or_default(),
        password: raw.docker_registry_server_password.clone().unwrap_or_default(),
    };
    let image = |configured: &Option<String>, target: ServiceTarget| {
        configured.clone().unwrap_or_else(|| default_image(target.component(), &rctab_tag))
    };
    let images = DockerImages {
        api: image(&raw.docker_api_image, ServiceTarget::Api),
        usage: image(&raw.docker_usage_image, ServiceTarget::Usage),
        status: image(&raw.docker_status_image, ServiceTarget::Status),
        controller: image(&raw.docker_controller_image, ServiceTarget::Controller),
    };

    let primary_ip = checks.check(
        PRIMARY_IP_ADDRESS,
        require(PRIMARY_IP_ADDRESS, raw.primary_ip_address.as_ref())
            .and_then(|ip| validate_ip_address(ip.as_str()))
            .map(Secret::new),
    )?;
    let db_root_cert_path =
        checks.required(DB_ROOT_CERT_PATH, raw.db_root_cert_path.as_deref())?.map(PathBuf::from);

    let server_admin = checks.required(AD_SERVER_ADMIN, raw.ad_server_admin.clone())?;
    let tenant_id = checks.required(AD_TENANT_ID, raw.ad_tenant_id.clone())?;
    let api_client_id = checks.required(AD_API_CLIENT_ID, raw.ad_api_client_id.clone())?;
    let api_client_secret =
        checks.required(AD_API_CLIENT_SECRET, raw.ad_api_client_secret.clone())?;
    let status_client_id = checks.required(AD_STATUS_CLIENT_ID, raw.ad_status_client_id.clone())?;
    let status_client_secret =
        checks.required(AD_STATUS_CLIENT_SECRET, raw.ad_status_client_secret.clone())?;

    let expiry_email_freq = checks.check(
        EXPIRY_EMAIL_FREQ,
        format_delimited_list(raw.expiry_email_freq.as_deref(), ListKind::Int),
    )?;
    let notifiable_roles = checks.check(
        NOTIFIABLE_ROLES,
        format_delimited_list(raw.notifiable_roles.as_deref(), ListKind::String),
    )?;
    let roles_filter = checks.check(
        ROLES_FILTER,
        format_delimited_list(raw.roles_filter.as_deref(), ListKind::String),
    )?;
    let admin_email_recipients = checks.check(
        ADMIN_EMAIL_RECIPIENTS,
        format_delimited_list(
            raw.admin_email_recipients.as_ref().map(Secret::as_str),
            ListKind::String,
        ),
    )?;

    let ignore_whitelist =
        checks.check(IGNORE_WHITELIST, validate_boolean_string(raw.ignore_whitelist.as_deref()))?;
    let whitelist =
        checks.check(WHITELIST, format_delimited_list(raw.whitelist.as_deref(), ListKind::Uuid))?;
    let log_level = checks.check(LOG_LEVEL, validate_log_level(raw.log_level.as_deref()))?;

    let billing = raw.billing_account_id.as_ref().map_or("", Secret::as_str);
    let mgmt = raw.usage_mgmt_group.as_ref().map_or("", Secret::as_str);
    let billing_scope = checks.check(BILLING_CHOICE, resolve_exclusive_choice(billing, mgmt))?;

    if let Some(path) = &db_root_cert_path {
        checks.check(DB_ROOT_CERT_PATH, require_existing_path(path).map(|_| ()))?;
    }

    checks.finish()?;

    let settings = DeploymentSettings {
        organisation: resolved(organisation, ORGANISATION)?,
        stack: stack.to_owned(),
        identifier: resolved(identifier, TICKER)?,
        rctab_tag,
        auto_deploy: resolved(auto_deploy, AUTO_DEPLOY)?,
        registry,
        images,
        primary_ip: resolved(primary_ip, PRIMARY_IP_ADDRESS)?,
        db_root_cert_path: resolved(db_root_cert_path, DB_ROOT_CERT_PATH)?,
        active_directory: ActiveDirectory {
            server_admin: resolved(server_admin, AD_SERVER_ADMIN)?,
            tenant_id: resolved(tenant_id, AD_TENANT_ID)?,
            api_client_id: resolved(api_client_id, AD_API_CLIENT_ID)?,
            api_client_secret: resolved(api_client_secret, AD_API_CLIENT_SECRET)?,
            status_client_id: resolved(status_client_id, AD_STATUS_CLIENT_ID)?,
            status_client_secret: resolved(status_client_secret, AD_STATUS_CLIENT_SECRET)?,
        },
        notifications: Notifications {
            sendgrid_api_key: raw.sendgrid_api_key.clone(),
            sendgrid_sender_email: raw.sendgrid_sender_email.clone(),
            expiry_email_freq: resolved(expiry_email_freq, EXPIRY_EMAIL_FREQ)?,
            notifiable_roles: resolved(notifiable_roles, NOTIFIABLE_ROLES)?,
            roles_filter: resolved(roles_filter, ROLES_FILTER)?,
            admin_email_recipients: resolved(admin_email_recipients, ADMIN_EMAIL_RECIPIENTS)?
                .map(Secret::new),
        },
        ignore_whitelist: resolved(ignore_whitelist, IGNORE_WHITELIST)?,
        whitelist: resolved(whitelist, WHITELIST)?,
        log_level: resolved(log_level, LOG_LEVEL)?,
        billing_scope: resolved(billing_scope, BILLING_CHOICE)?,
    };

    info!(identifier = %settings.identifier, tag = %settings.rctab_tag, "Configuration resolved");
    Ok(settings)
}

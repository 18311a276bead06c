use rctab_kernel::domain::config::RawConfig;
use rctab_kernel::domain::secret::Secret;
use rctab_kernel::domain::settings::{BillingScope, LogLevel};
use rctab_kernel::settings::{ResolveMode, SettingsError, resolve_settings};
use rctab_kernel::validate::ValidationError;
use std::path::Path;
use tempfile::NamedTempFile;

fn secret(value: &str) -> Option<Secret<String>> {
    Some(Secret::from(value))
}

fn complete(cert: &Path) -> RawConfig {
    RawConfig {
        organisation: Some("Turing".to_owned()),
        ticker: Some("tkr".to_owned()),
        primary_ip_address: secret("192.168.123.132"),
        db_root_cert_path: Some(cert.display().to_string()),
        ad_server_admin: secret("admin-group"),
        ad_tenant_id: secret("tenant"),
        ad_api_client_id: secret("api-client"),
        ad_api_client_secret: secret("api-secret"),
        ad_status_client_id: secret("status-client"),
        ad_status_client_secret: secret("status-secret"),
        billing_account_id: secret("billing"),
        ..RawConfig::default()
    }
}

#[test]
fn resolves_minimal_configuration_with_defaults() {
    let cert = NamedTempFile::new().unwrap();
    let settings = resolve_settings(&complete(cert.path()), "dev", ResolveMode::FailFast).unwrap();

    assert_eq!(settings.identifier.as_str(), "tkr-dev");
    assert_eq!(settings.stack, "dev");
    assert_eq!(settings.rctab_tag, "1.latest");
    assert!(settings.auto_deploy);
    assert_eq!(settings.registry.url.as_str(), "https://index.docker.io/v1");
    assert!(settings.registry.username.is_empty());
    assert_eq!(settings.images.api, "turingrc/rctab-api:1.latest");
    assert_eq!(settings.images.controller, "turingrc/rctab-controller:1.latest");
    assert_eq!(settings.primary_ip.expose().to_string(), "192.168.123.132");
    assert_eq!(settings.db_root_cert_path, cert.path());
    assert_eq!(settings.ignore_whitelist, None);
    assert_eq!(settings.whitelist, None);
    assert_eq!(settings.log_level, None);
    assert_eq!(settings.notifications.expiry_email_freq, None);
    assert!(matches!(settings.billing_scope, BillingScope::BillingAccount(_)));
}

#[test]
fn optional_values_are_normalized() {
    let cert = NamedTempFile::new().unwrap();
    let raw = RawConfig {
        rctab_tag: Some("2.0.1".to_owned()),
        auto_deploy: Some("false".to_owned()),
        ignore_whitelist: Some("true".to_owned()),
        whitelist: Some("00000000-0000-0000-0000-000000000000".to_owned()),
        expiry_email_freq: Some("1, 7, 14, 21".to_owned()),
        notifiable_roles: Some("Owner, Contributor".to_owned()),
        admin_email_recipients: secret("ada@example.org"),
        log_level: Some("debug".to_owned()),
        docker_usage_image: Some("registry.example.org/usage:dev".to_owned()),
        billing_account_id: None,
        usage_mgmt_group: secret("mgmt"),
        ..complete(cert.path())
    };

    let settings = resolve_settings(&raw, "dev", ResolveMode::FailFast).unwrap();
    assert!(!settings.auto_deploy);
    assert_eq!(settings.ignore_whitelist, Some(true));
    assert_eq!(
        settings.whitelist.as_deref(),
        Some(r#"["00000000-0000-0000-0000-000000000000"]"#)
    );
    assert_eq!(
        settings.notifications.expiry_email_freq.as_deref(),
        Some(r#"["1", "7", "14", "21"]"#)
    );
    assert_eq!(
        settings.notifications.notifiable_roles.as_deref(),
        Some(r#"["Owner", "Contributor"]"#)
    );
    assert_eq!(
        settings.notifications.admin_email_recipients.as_ref().map(Secret::as_str),
        Some(r#"["ada@example.org"]"#)
    );
    assert_eq!(settings.log_level, Some(LogLevel::Debug));
    assert_eq!(settings.images.api, "turingrc/rctab-api:2.0.1");
    assert_eq!(settings.images.usage, "registry.example.org/usage:dev");
    assert!(matches!(&settings.billing_scope, BillingScope::ManagementGroup(v) if v.as_str() == "mgmt"));
}

#[test]
fn fail_fast_stops_at_first_invalid_key() {
    let cert = NamedTempFile::new().unwrap();
    let raw = RawConfig {
        ticker: Some("t".to_owned()),
        log_level: Some("loud".to_owned()),
        ..complete(cert.path())
    };

    let err = resolve_settings(&raw, "dev", ResolveMode::FailFast).unwrap_err();
    let errors = err.validation_errors();
    assert_eq!(errors.len(), 1);
    assert!(matches!(errors[0], ValidationError::InvalidLength { .. }));
    assert_eq!(errors[0].context_label(), Some("ticker"));
}

#[test]
fn aggregate_reports_every_invalid_key_in_order() {
    let cert = NamedTempFile::new().unwrap();
    let raw = RawConfig {
        ticker: Some("t".to_owned()),
        primary_ip_address: secret("092.168.123.132"),
        log_level: Some("loud".to_owned()),
        usage_mgmt_group: secret("mgmt"),
        ..complete(cert.path())
    };

    let err = resolve_settings(&raw, "dev", ResolveMode::Aggregate).unwrap_err();
    let SettingsError::Aggregate { errors, .. } = &err else {
        panic!("expected aggregate error, got {err}");
    };
    let keys: Vec<_> = errors.iter().map(|e| e.context_label().unwrap_or_default()).collect();
    assert_eq!(
        keys,
        ["ticker", "primary_ip_address", "log_level", "billing_account_id/usage_mgmt_group"]
    );
    assert!(err.to_string().starts_with("4 invalid configuration value(s)"), "{err}");
}

#[test]
fn missing_required_keys_are_named() {
    let err = resolve_settings(&RawConfig::default(), "dev", ResolveMode::Aggregate).unwrap_err();
    let missing: Vec<_> = err
        .validation_errors()
        .iter()
        .filter_map(|e| match e {
            ValidationError::Missing { key, .. } => Some(*key),
            _ => None,
        })
        .collect();
    assert_eq!(
        missing,
        [
            "organisation",
            "ticker",
            "primary_ip_address",
            "db_root_cert_path",
            "ad_server_admin",
            "ad_tenant_id",
            "ad_api_client_id",
            "ad_api_client_secret",
            "ad_status_client_id",
            "ad_status_client_secret",
        ]
    );
    assert!(err.validation_errors().iter().any(|e| matches!(e, ValidationError::MissingChoice { .. })));
}

#[test]
fn certificate_path_is_checked_last() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.pem");
    let raw = RawConfig { usage_mgmt_group: secret("mgmt"), ..complete(&missing) };

    let err = resolve_settings(&raw, "dev", ResolveMode::Aggregate).unwrap_err();
    let errors = err.validation_errors();
    assert_eq!(errors.len(), 2);
    assert!(matches!(errors[0], ValidationError::AmbiguousChoice { .. }));
    assert!(matches!(errors[1], ValidationError::NotFound { .. }));
}

#[test]
fn empty_choice_values_count_as_unset() {
    let cert = NamedTempFile::new().unwrap();
    let raw = RawConfig {
        billing_account_id: secret(""),
        usage_mgmt_group: secret("mgmt"),
        ..complete(cert.path())
    };
    let settings = resolve_settings(&raw, "dev", ResolveMode::FailFast).unwrap();
    assert!(matches!(settings.billing_scope, BillingScope::ManagementGroup(_)));
}

use rctab_kernel::domain::config::RawConfig;
use rctab_kernel::domain::secret::Secret;
use rctab_kernel::domain::settings::{DeploymentSettings, ServiceTarget, SettingValue};
use rctab_kernel::render::{linux_fx_version, render_app_settings};
use rctab_kernel::settings::{ResolveMode, resolve_settings};
use tempfile::NamedTempFile;

fn settings(cert: &NamedTempFile, extra: impl FnOnce(&mut RawConfig)) -> DeploymentSettings {
    let mut raw = RawConfig {
        organisation: Some("Turing".to_owned()),
        ticker: Some("tkr".to_owned()),
        primary_ip_address: Some(Secret::from("10.0.0.1")),
        db_root_cert_path: Some(cert.path().display().to_string()),
        ad_server_admin: Some(Secret::from("admin")),
        ad_tenant_id: Some(Secret::from("tenant")),
        ad_api_client_id: Some(Secret::from("api-client")),
        ad_api_client_secret: Some(Secret::from("api-secret")),
        ad_status_client_id: Some(Secret::from("status-client")),
        ad_status_client_secret: Some(Secret::from("status-secret")),
        usage_mgmt_group: Some(Secret::from("mgmt")),
        ..RawConfig::default()
    };
    extra(&mut raw);
    resolve_settings(&raw, "prod", ResolveMode::FailFast).unwrap()
}

fn names(target: ServiceTarget, settings: &DeploymentSettings) -> Vec<&'static str> {
    render_app_settings(settings, target).iter().map(|s| s.name).collect()
}

fn value<'a>(rendered: &'a [rctab_kernel::domain::settings::AppSetting], name: &str) -> Option<&'a SettingValue> {
    rendered.iter().find(|s| s.name == name).map(|s| &s.value)
}

#[test]
fn api_settings_without_optional_values() {
    let cert = NamedTempFile::new().unwrap();
    let settings = settings(&cert, |_| {});
    let rendered = render_app_settings(&settings, ServiceTarget::Api);

    assert_eq!(rendered[0].name, "TENANT_ID");
    assert!(rendered[0].value.is_secret());
    assert_eq!(value(&rendered, "ORGANISATION"), Some(&SettingValue::Plain("Turing".to_owned())));
    assert_eq!(value(&rendered, "DOCKER_ENABLE_CI"), Some(&SettingValue::Plain("true".to_owned())));
    assert_eq!(value(&rendered, "SESSION_EXPIRE_TIME_MINUTES").map(SettingValue::expose), Some("90"));
    assert_eq!(value(&rendered, "DB_USER").map(SettingValue::expose), Some("rctab-api-user"));
    for optional in ["SENDGRID_API_KEY", "EXPIRY_EMAIL_FREQ", "WHITELIST", "LOG_LEVEL", "IGNORE_WHITELIST"] {
        assert!(value(&rendered, optional).is_none(), "{optional}");
    }
}

#[test]
fn api_settings_include_normalized_optional_values() {
    let cert = NamedTempFile::new().unwrap();
    let settings = settings(&cert, |raw| {
        raw.log_level = Some("warning".to_owned());
        raw.expiry_email_freq = Some("7, 1".to_owned());
        raw.ignore_whitelist = Some("false".to_owned());
        raw.sendgrid_api_key = Some(Secret::from("sg-key"));
        raw.roles_filter = Some(String::new());
    });
    let rendered = render_app_settings(&settings, ServiceTarget::Api);

    assert_eq!(value(&rendered, "LOG_LEVEL").map(SettingValue::expose), Some("WARNING"));
    assert_eq!(value(&rendered, "EXPIRY_EMAIL_FREQ").map(SettingValue::expose), Some(r#"["7", "1"]"#));
    assert_eq!(value(&rendered, "IGNORE_WHITELIST").map(SettingValue::expose), Some("false"));
    assert!(value(&rendered, "SENDGRID_API_KEY").is_some_and(SettingValue::is_secret));
    assert!(value(&rendered, "ROLES_FILTER").is_none());
}

#[test]
fn function_settings_per_target() {
    let cert = NamedTempFile::new().unwrap();
    let settings = settings(&cert, |_| {});

    let controller = names(ServiceTarget::Controller, &settings);
    assert_eq!(
        controller,
        [
            "WEBSITES_ENABLE_APP_SERVICE_STORAGE",
            "DOCKER_REGISTRY_SERVER_URL",
            "DOCKER_REGISTRY_SERVER_USERNAME",
            "DOCKER_REGISTRY_SERVER_PASSWORD",
            "WEBSITES_PORT",
            "DOCKER_ENABLE_CI",
            "FUNCTIONS_EXTENSION_VERSION",
        ]
    );

    let usage = render_app_settings(&settings, ServiceTarget::Usage);
    let last = usage.last().unwrap();
    assert_eq!(last.name, "MGMT_GROUP");
    assert_eq!(last.value.expose(), "mgmt");

    let status = names(ServiceTarget::Status, &settings);
    assert_eq!(&status[status.len() - 3..], ["AZURE_TENANT_ID", "AZURE_CLIENT_ID", "AZURE_CLIENT_SECRET"]);
}

#[test]
fn image_setting_uses_resolved_image() {
    let cert = NamedTempFile::new().unwrap();
    let settings = settings(&cert, |raw| raw.rctab_tag = Some("2.1".to_owned()));
    assert_eq!(linux_fx_version(&settings, ServiceTarget::Status), "DOCKER|turingrc/rctab-status:2.1");
}

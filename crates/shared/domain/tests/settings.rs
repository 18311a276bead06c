use rctab_domain::constants::default_image;
use rctab_domain::secret::Secret;
use rctab_domain::settings::{BillingScope, Identifier, ListKind, LogLevel, ServiceTarget};
use std::str::FromStr;
use strum::VariantNames;

#[test]
fn log_level_names_are_canonical_uppercase() {
    assert_eq!(
        LogLevel::VARIANTS,
        &["CRITICAL", "FATAL", "ERROR", "WARNING", "WARN", "INFO", "DEBUG", "NOTSET"]
    );
    assert_eq!(LogLevel::NotSet.to_string(), "NOTSET");
    assert_eq!(LogLevel::from_str("WARNING").ok(), Some(LogLevel::Warning));
    assert!(LogLevel::from_str("info").is_err(), "parsing is exact; callers uppercase first");
}

#[test]
fn identifier_derives_resource_names() {
    let id = Identifier::compose("TKR", "Prod");
    assert_eq!(id.as_str(), "TKR-Prod");
    assert_eq!(id.resource_prefix("app-plan"), "rctab-app-plan-TKR-Prod-");
    assert_eq!(id.key_vault_name(), "TKR-Prod-vlt");
    assert_eq!(id.database_server_prefix(), "tkr-prod-rctab-");
    assert_eq!(id.function_app_prefix(ServiceTarget::Usage), "u-function-TKR-Prod-");
    assert_eq!(id.function_app_prefix(ServiceTarget::Controller), "c-function-TKR-Prod-");
}

#[test]
fn billing_scope_names_its_setting() {
    let billing = BillingScope::BillingAccount(Secret::from("1234"));
    let mgmt = BillingScope::ManagementGroup(Secret::from("mg"));

    assert_eq!(billing.setting_name(), "BILLING_ACCOUNT_ID");
    assert_eq!(mgmt.setting_name(), "MGMT_GROUP");
    assert_eq!(mgmt.value().as_str(), "mg");
}

#[test]
fn service_targets_parse_from_lowercase_names() {
    assert_eq!(ServiceTarget::from_str("status").ok(), Some(ServiceTarget::Status));
    assert!(ServiceTarget::Usage.is_function());
    assert!(!ServiceTarget::Api.is_function());
    assert_eq!(ListKind::Uuid.to_string(), "uuid");
}

#[test]
fn default_images_follow_the_tag() {
    assert_eq!(default_image("api", "1.latest"), "turingrc/rctab-api:1.latest");
    assert_eq!(default_image("controller", "2.0.1"), "turingrc/rctab-controller:2.0.1");
}

#[test]
fn secrets_are_redacted_when_formatted() {
    let secret: Secret<String> = Secret::from("hunter2");
    assert_eq!(secret.to_string(), "***");
    assert_eq!(format!("{secret:?}"), "Secret(***)");
    assert_eq!(secret.expose(), "hunter2");
}

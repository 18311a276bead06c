use rctab_domain::config::RawConfig;
use rctab_domain::secret::Secret;
use serde_json::json;

#[test]
fn raw_config_defaults_to_unset() {
    let raw = RawConfig::default();
    assert!(raw.ticker.is_none());
    assert!(raw.auto_deploy.is_none());
    assert!(raw.billing_account_id.is_none());
}

#[test]
fn raw_config_deserializes_known_keys_and_ignores_others() {
    let value = json!({
        "ticker": "tkr",
        "organisation": "Turing",
        "ad_api_client_secret": "hunter2",
        "azure-native:location": "uksouth"
    });

    let raw: RawConfig = serde_json::from_value(value).expect("raw config deserialize");
    assert_eq!(raw.ticker.as_deref(), Some("tkr"));
    assert_eq!(raw.organisation.as_deref(), Some("Turing"));
    assert_eq!(raw.ad_api_client_secret, Some(Secret::from("hunter2")));
    assert!(raw.whitelist.is_none());
}

#[test]
fn raw_config_debug_never_prints_secrets() {
    let value = json!({ "ad_api_client_secret": "hunter2", "ticker": "tkr" });
    let raw: RawConfig = serde_json::from_value(value).expect("raw config deserialize");

    let debug = format!("{raw:?}");
    assert!(!debug.contains("hunter2"));
    assert!(debug.contains("Secret(***)"));
    assert!(debug.contains("tkr"));
}

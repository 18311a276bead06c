//! # Config Validator
//!
//! Independent, stateless checks that turn raw configuration strings into typed values.
//! Each function either returns the normalized value or a [`ValidationError`] naming the
//! offending input; none of them retries or partially succeeds.
//!
//! Optional inputs follow one rule: `None` means "not configured" and passes through
//! untouched, so callers substitute defaults explicitly.
//!
//! ```rust
//! use rctab_kernel::validate::{format_delimited_list, validate_log_level};
//! use rctab_kernel::domain::settings::{ListKind, LogLevel};
//!
//! assert_eq!(validate_log_level(Some("info")).unwrap(), Some(LogLevel::Info));
//! assert_eq!(
//!     format_delimited_list(Some("abc, def"), ListKind::String).unwrap().as_deref(),
//!     Some(r#"["abc", "def"]"#)
//! );
//! ```

mod error;

pub use error::{ValidationError, ValidationErrorExt};

use rctab_domain::settings::{BillingScope, Identifier, ListKind, LogLevel};
use rctab_domain::secret::Secret;
use regex::Regex;
use std::net::IpAddr;
use std::path::Path;
use std::str::FromStr;
use std::sync::LazyLock;
use strum::VariantNames;
use tracing::debug;
use uuid::Uuid;

/// Pattern every padded identifier candidate must fully match.
pub const IDENTIFIER_PATTERN: &str = r"^[a-zA-Z0-9-]{3,20}$";

/// Stand-in for the longest random suffix Azure may append to a resource name.
pub const RANDOM_SUFFIX_PLACEHOLDER: &str = "abcdefgh";

pub const TICKER_MIN_LEN: usize = 2;
pub const TICKER_MAX_LEN: usize = 6;

pub const BOOLEAN_VALUES: &[&str] = &["true", "false"];

const CANONICAL_UUID_LEN: usize = 36;

static IDENTIFIER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(IDENTIFIER_PATTERN).expect("identifier pattern is a valid regex"));

/// Validates a ticker/stack pair and returns the combined `{ticker}-{stack}` identifier.
///
/// The ticker must be 2 to 6 characters long. The combination is checked with the
/// worst-case random suffix appended, so names that would only break once Azure
/// adds its suffix are rejected here rather than halfway through a deployment.
///
/// # Errors
/// * [`ValidationError::InvalidLength`] if the ticker is too short or too long.
/// * [`ValidationError::InvalidPattern`] if `{ticker}-{stack}-abcdefgh` does not match
///   [`IDENTIFIER_PATTERN`].
pub fn validate_identifier(ticker: &str, stack: &str) -> Result<Identifier, ValidationError> {
    let len = ticker.chars().count();
    if len < TICKER_MIN_LEN {
        return Err(ValidationError::InvalidLength {
            value: ticker.to_owned(),
            message: format!("Ticker cannot be less than {TICKER_MIN_LEN} characters").into(),
            context: None,
        });
    }
    if len > TICKER_MAX_LEN {
        return Err(ValidationError::InvalidLength {
            value: ticker.to_owned(),
            message: format!("Ticker cannot be more than {TICKER_MAX_LEN} characters").into(),
            context: None,
        });
    }

    let candidate = format!("{ticker}-{stack}-{RANDOM_SUFFIX_PLACEHOLDER}");
    if !IDENTIFIER_RE.is_match(&candidate) {
        return Err(ValidationError::InvalidPattern {
            value: candidate,
            pattern: IDENTIFIER_PATTERN,
            context: None,
        });
    }

    let identifier = Identifier::compose(ticker, stack);
    debug!(identifier = %identifier, "Identifier validated");
    Ok(identifier)
}

/// Checks an optional `"true"`/`"false"` flag. Matching is case-sensitive.
///
/// # Errors
/// Returns [`ValidationError::InvalidEnum`] for any present value other than the two literals.
pub fn validate_boolean_string(value: Option<&str>) -> Result<Option<bool>, ValidationError> {
    value
        .map(|v| match v {
            "true" => Ok(true),
            "false" => Ok(false),
            other => Err(ValidationError::InvalidEnum {
                value: other.to_owned(),
                allowed: BOOLEAN_VALUES,
                context: None,
            }),
        })
        .transpose()
}

/// Normalizes a comma-separated list into a JSON string array, e.g. `a, b` -> `["a", "b"]`.
///
/// Elements are trimmed and checked left to right according to `kind`; the first bad
/// element is reported. Output is always an array of strings, integers included.
/// Input that is already a JSON string array is re-normalized from its elements, so
/// feeding the output back in returns it unchanged.
///
/// `None` and the empty string pass through as-is.
///
/// # Errors
/// * [`ValidationError::InvalidUuid`] for a `ListKind::Uuid` element that is not a hyphenated UUID.
/// * [`ValidationError::InvalidInteger`] for a `ListKind::Int` element that is not all ASCII digits.
pub fn format_delimited_list(
    value: Option<&str>,
    kind: ListKind,
) -> Result<Option<String>, ValidationError> {
    let Some(raw) = value else {
        return Ok(None);
    };
    if raw.is_empty() {
        return Ok(Some(String::new()));
    }

    let items = split_list(raw);
    for item in &items {
        check_list_item(item, kind)?;
    }

    let quoted: Vec<String> = items.iter().map(|item| quote_json(item)).collect();
    debug!(kind = %kind, count = items.len(), "List normalized");
    Ok(Some(format!("[{}]", quoted.join(", "))))
}

pub(crate) fn split_list(raw: &str) -> Vec<String> {
    if raw.trim_start().starts_with('[') {
        if let Ok(items) = serde_json::from_str::<Vec<String>>(raw) {
            return items.iter().map(|item| item.trim().to_owned()).collect();
        }
    }
    raw.split(',').map(|item| item.trim().to_owned()).collect()
}

fn check_list_item(item: &str, kind: ListKind) -> Result<(), ValidationError> {
    match kind {
        ListKind::Uuid if !is_valid_uuid(item) => {
            Err(ValidationError::InvalidUuid { value: item.to_owned(), context: None })
        },
        ListKind::Int if !is_decimal(item) => {
            Err(ValidationError::InvalidInteger { value: item.to_owned(), context: None })
        },
        _ => Ok(()),
    }
}

fn quote_json(item: &str) -> String {
    serde_json::Value::from(item).to_string()
}

/// True for a UUID in canonical hyphenated 8-4-4-4-12 form (any hex case).
#[must_use]
pub fn is_valid_uuid(candidate: &str) -> bool {
    candidate.len() == CANONICAL_UUID_LEN && Uuid::try_parse(candidate).is_ok()
}

fn is_decimal(candidate: &str) -> bool {
    !candidate.is_empty() && candidate.bytes().all(|b| b.is_ascii_digit())
}

/// Uppercases an optional log level and checks it against [`LogLevel`].
///
/// # Errors
/// Returns [`ValidationError::InvalidEnum`] with the uppercased value and the allowed levels.
pub fn validate_log_level(value: Option<&str>) -> Result<Option<LogLevel>, ValidationError> {
    value
        .map(|v| {
            let upper = v.to_uppercase();
            LogLevel::from_str(&upper).map_err(|_| ValidationError::InvalidEnum {
                value: upper,
                allowed: LogLevel::VARIANTS,
                context: None,
            })
        })
        .transpose()
}

/// Parses an IPv4 or IPv6 address. Syntax only; nothing is resolved or contacted.
///
/// Octets with leading zeros (`092.168.1.1`) are rejected.
///
/// # Errors
/// Returns [`ValidationError::InvalidFormat`] if the value is not an IP address.
pub fn validate_ip_address(value: &str) -> Result<IpAddr, ValidationError> {
    IpAddr::from_str(value).map_err(|_| ValidationError::InvalidFormat {
        value: value.to_owned(),
        expected: "IPv4 or IPv6 address",
        context: None,
    })
}

/// Picks the billing account or the management group; exactly one must be non-empty.
///
/// Takes both values at once so the rule is checked once, after both are known.
///
/// # Errors
/// * [`ValidationError::MissingChoice`] if both are empty.
/// * [`ValidationError::AmbiguousChoice`] if both are set.
pub fn resolve_exclusive_choice(
    billing_account_id: &str,
    usage_mgmt_group: &str,
) -> Result<BillingScope, ValidationError> {
    use rctab_domain::constants::keys::{BILLING_ACCOUNT_ID, USAGE_MGMT_GROUP};

    match (billing_account_id.is_empty(), usage_mgmt_group.is_empty()) {
        (false, true) => Ok(BillingScope::BillingAccount(Secret::from(billing_account_id))),
        (true, false) => Ok(BillingScope::ManagementGroup(Secret::from(usage_mgmt_group))),
        (true, true) => Err(ValidationError::MissingChoice {
            first: BILLING_ACCOUNT_ID,
            second: USAGE_MGMT_GROUP,
            context: None,
        }),
        (false, false) => Err(ValidationError::AmbiguousChoice {
            first: BILLING_ACCOUNT_ID,
            second: USAGE_MGMT_GROUP,
            context: None,
        }),
    }
}

/// Checks that `path` names an existing regular file. The contents are not read.
///
/// # Errors
/// Returns [`ValidationError::NotFound`] if the path is missing or not a regular file.
pub fn require_existing_path(path: &Path) -> Result<&Path, ValidationError> {
    if path.is_file() {
        Ok(path)
    } else {
        Err(ValidationError::NotFound { path: path.to_path_buf(), context: None })
    }
}

/// Unwraps a required setting.
///
/// # Errors
/// Returns [`ValidationError::Missing`] naming `key` when the value is absent.
pub fn require<T>(key: &'static str, value: Option<T>) -> Result<T, ValidationError> {
    value.ok_or(ValidationError::Missing { key, context: None })
}

use rctab_derive::rctab_error;
use std::borrow::Cow;

#[rctab_error]
pub enum KeyError {
    #[error("Missing key{}: {key}", format_context(.context))]
    Missing { key: &'static str, context: Option<Cow<'static, str>> },

    #[error("Unlabelled failure: {reason}")]
    Bare { reason: String },
}

fn missing() -> Result<(), KeyError> {
    Err(KeyError::Missing { key: "ticker", context: None })
}

fn main() {
    let err = missing().context("stack file").unwrap_err();
    assert_eq!(err.context_label(), Some("stack file"));
    assert_eq!(err.to_string(), "Missing key (stack file): ticker");

    let bare = KeyError::Bare { reason: "n/a".to_owned() };
    assert_eq!(bare.context_label(), None);
}

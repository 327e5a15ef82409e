//! Opaque, caller-supplied JSON.
//!
//! Payloads are validated for well-formedness and otherwise passed through
//! untouched. Malformed input never fails the caller: it is logged at error
//! level and the field is left unset.

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::error;

/// A payload as handed to a `with_payload` setter.
#[derive(Clone, Debug, PartialEq)]
pub enum RawPayload {
    /// JSON text, parsed before storage.
    Text(String),
    /// An already-parsed value.
    Json(Value),
}

impl From<&str> for RawPayload {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

impl From<String> for RawPayload {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<Value> for RawPayload {
    fn from(value: Value) -> Self {
        Self::Json(value)
    }
}

impl RawPayload {
    /// Resolve into a storable value, or `None` if malformed or null.
    pub(crate) fn resolve(self, platform: &'static str, field: &'static str) -> Option<Value> {
        let value = match self {
            Self::Json(value) => value,
            Self::Text(text) => parse_lenient(&text, platform, field)?,
        };
        (!value.is_null()).then_some(value)
    }
}

/// Parse JSON text into `T`, logging and returning `None` on failure.
pub(crate) fn parse_lenient<T: DeserializeOwned>(
    text: &str,
    platform: &'static str,
    field: &'static str,
) -> Option<T> {
    match serde_json::from_str(text) {
        Ok(parsed) => Some(parsed),
        Err(err) => {
            error!(platform, field, error = %err, "malformed JSON, leaving field unset");
            None
        }
    }
}

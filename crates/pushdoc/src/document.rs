//! The assembled notification document.

use std::fmt;

use pushdoc_core::Fragment;
use serde::Serialize;
use serde_json::Value;

use crate::message::MESSAGE_KEY;
use crate::platform::SETTINGS_KEY;
use crate::target::TARGET_KEY;

/// A push-notification request body.
///
/// Holds a `message` section and, when configured, `target` and `settings`
/// sections. Serializes as the bare JSON object.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Document(Fragment);

impl Document {
    pub(crate) fn from_fragment(fragment: Fragment) -> Self {
        Self(fragment)
    }

    pub(crate) fn fragment_mut(&mut self) -> &mut Fragment {
        &mut self.0
    }

    /// The `message` section.
    pub fn message(&self) -> Option<&Value> {
        self.0.get(MESSAGE_KEY)
    }

    /// The alert text.
    pub fn alert(&self) -> Option<&str> {
        self.message()?.get("alert")?.as_str()
    }

    /// The `target` section, if configured.
    pub fn target(&self) -> Option<&Value> {
        self.0.get(TARGET_KEY)
    }

    /// The `settings` section, if any platform was configured.
    pub fn settings(&self) -> Option<&Value> {
        self.0.get(SETTINGS_KEY)
    }

    /// One platform's fragment inside `settings`, e.g. `"gcm"`.
    pub fn platform(&self, key: &str) -> Option<&Value> {
        self.settings()?.get(key)
    }

    /// The underlying JSON object.
    pub fn as_map(&self) -> &Fragment {
        &self.0
    }

    /// Consume into a JSON value.
    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }

    /// Compact JSON text.
    pub fn to_json_string(&self) -> String {
        Value::Object(self.0.clone()).to_string()
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_json_string())
    }
}

impl From<Document> for Value {
    fn from(document: Document) -> Self {
        document.into_value()
    }
}

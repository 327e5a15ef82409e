//! The mandatory message section.

use pushdoc_core::{Fragment, Result, ValidationError};
use serde_json::Value;
use tracing::warn;

/// Section key of the message in a document.
pub const MESSAGE_KEY: &str = "message";

/// Alert text plus an optional URL.
///
/// The alert is the one field exempt from omit-if-absent: it is always
/// emitted, even when empty.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Message {
    alert: String,
    url: Option<String>,
}

impl Message {
    /// Create a message. An empty alert is accepted but logged.
    pub fn new(alert: impl Into<String>) -> Self {
        let alert = alert.into();
        if alert.is_empty() {
            warn!("notification alert is empty");
        }
        Self { alert, url: None }
    }

    /// Create a message from an alert that may be absent.
    pub fn try_new(alert: Option<String>) -> Result<Self> {
        alert.map(Self::new).ok_or(ValidationError::MissingAlert)
    }

    /// Attach a URL. An empty URL leaves it unset.
    #[must_use]
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = non_empty_url(url.into());
        self
    }

    /// The alert text.
    pub fn alert(&self) -> &str {
        &self.alert
    }

    /// The URL, if set.
    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    /// Seed fragment for the `message` section.
    pub fn build(&self) -> Fragment {
        let mut fragment = Fragment::new();
        let _ = fragment.insert("alert".into(), Value::String(self.alert.clone()));
        if let Some(url) = &self.url {
            let _ = fragment.insert("url".into(), Value::String(url.clone()));
        }
        fragment
    }
}

/// Fragment carrying only `url`, empty when `url` is empty.
pub(crate) fn url_fragment(url: String) -> Fragment {
    non_empty_url(url)
        .map(|url| Fragment::from_iter([("url".to_owned(), Value::String(url))]))
        .unwrap_or_default()
}

fn non_empty_url(url: String) -> Option<String> {
    (!url.is_empty()).then_some(url)
}

//! The delivery target section.

use pushdoc_core::Fragment;
use serde::{Deserialize, Serialize};

use crate::projector::project;

/// Section key of the target in a document.
pub const TARGET_KEY: &str = "target";

/// Platforms a notification can be restricted to.
///
/// Serialized as the delivery service's fixed protocol codes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Platform {
    /// iOS devices.
    #[serde(rename = "A")]
    Apple,
    /// Android devices.
    #[serde(rename = "G")]
    Google,
    /// Chrome browser web push.
    #[serde(rename = "WEB_CHROME")]
    WebChrome,
    /// Firefox browser web push.
    #[serde(rename = "WEB_FIREFOX")]
    WebFirefox,
    /// Safari browser web push.
    #[serde(rename = "WEB_SAFARI")]
    WebSafari,
    /// Chrome app and extension push.
    #[serde(rename = "APPEXT_CHROME")]
    AppExtChrome,
}

impl Platform {
    /// Protocol code sent on the wire.
    pub const fn code(self) -> &'static str {
        match self {
            Self::Apple => "A",
            Self::Google => "G",
            Self::WebChrome => "WEB_CHROME",
            Self::WebFirefox => "WEB_FIREFOX",
            Self::WebSafari => "WEB_SAFARI",
            Self::AppExtChrome => "APPEXT_CHROME",
        }
    }
}

/// Who receives the notification. Every list is optional.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Target {
    #[serde(skip_serializing_if = "Option::is_none")]
    device_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    user_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    platforms: Option<Vec<Platform>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tag_names: Option<Vec<String>>,
}

impl Target {
    /// An empty target.
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict delivery to these device ids.
    #[must_use]
    pub fn with_device_ids<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.device_ids = non_empty(ids.into_iter().map(Into::into).collect());
        self
    }

    /// Deliver to every device of these users.
    #[must_use]
    pub fn with_user_ids<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.user_ids = non_empty(ids.into_iter().map(Into::into).collect());
        self
    }

    /// Restrict delivery to these platforms.
    #[must_use]
    pub fn with_platforms(mut self, platforms: impl IntoIterator<Item = Platform>) -> Self {
        self.platforms = non_empty(platforms.into_iter().collect());
        self
    }

    /// Deliver to devices subscribed to these tags.
    #[must_use]
    pub fn with_tag_names<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tag_names = non_empty(tags.into_iter().map(Into::into).collect());
        self
    }

    /// Whether no list is set.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Project into the `target` fragment.
    pub fn build(&self) -> Fragment {
        project(self, TARGET_KEY)
    }
}

fn non_empty<T>(items: Vec<T>) -> Option<Vec<T>> {
    (!items.is_empty()).then_some(items)
}

//! Google Cloud Messaging (Android) settings.

use serde::{Deserialize, Serialize};

use crate::payload::parse_lenient;

/// Delivery priority of an Android notification.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GcmPriority {
    /// Platform default.
    Default,
    /// Lowest priority.
    Min,
    /// Below default.
    Low,
    /// Above default.
    High,
    /// Highest priority.
    Max,
}

/// How much of the notification shows on a secure lock screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Visibility {
    /// Shown in full.
    Public,
    /// Shown without its contents.
    Private,
    /// Not shown.
    Secret,
}

/// Expandable-notification options.
///
/// `type` is one of the service's style names (`picture_notification`,
/// `bigtext_notification`, `inbox_notification`); it is passed through
/// without validation.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct GcmStyle {
    #[serde(rename = "type", default, skip_serializing_if = "is_blank")]
    kind: Option<String>,
    #[serde(default, skip_serializing_if = "is_blank")]
    url: Option<String>,
    #[serde(default, skip_serializing_if = "is_blank")]
    title: Option<String>,
    #[serde(default, skip_serializing_if = "is_blank")]
    text: Option<String>,
    #[serde(default, skip_serializing_if = "no_lines")]
    lines: Option<Vec<String>>,
}

impl GcmStyle {
    /// A style with nothing set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Style name, e.g. `picture_notification`.
    #[must_use]
    pub fn with_type(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }

    /// Picture URL for `picture_notification`.
    #[must_use]
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Expanded title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Expanded body for `bigtext_notification`.
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Lines for `inbox_notification`.
    #[must_use]
    pub fn with_lines<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.lines = Some(lines.into_iter().map(Into::into).collect());
        self
    }

    /// Whether every field is unset or empty.
    pub fn is_empty(&self) -> bool {
        is_blank(&self.kind)
            && is_blank(&self.url)
            && is_blank(&self.title)
            && is_blank(&self.text)
            && no_lines(&self.lines)
    }
}

#[allow(clippy::ref_option)]
fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().is_none_or(str::is_empty)
}

#[allow(clippy::ref_option)]
fn no_lines(value: &Option<Vec<String>>) -> bool {
    value.as_ref().is_none_or(Vec::is_empty)
}

platform_settings! {
    /// Settings applied to Android devices.
    GcmSettings => "gcm" {
        /// Group key; newer notifications with the same key replace older ones.
        with_collapse_key => collapse_key: text,
        /// Hold the notification until the device is active.
        with_delay_while_idle => delay_while_idle: flag,
        /// Custom JSON delivered with the notification.
        with_payload => payload: payload,
        /// Delivery priority.
        with_priority => priority: choice<GcmPriority>,
        /// Sound file on the device played on arrival.
        with_sound => sound: text,
        /// Seconds the service keeps the notification while the device is offline.
        with_time_to_live => time_to_live: int,
        /// Icon packaged with the client application.
        with_icon => icon: text,
        /// Lock screen visibility.
        with_visibility => visibility: choice<Visibility>,
        /// Device group sync.
        with_sync => sync: flag,
        /// Expandable-notification style. An empty style stays unset.
        with_style => style: nested<GcmStyle>,
    }
}

impl GcmSettings {
    /// Set the style from JSON text.
    ///
    /// Text that is not a well-formed style object is logged and leaves the
    /// style unset.
    #[must_use]
    pub fn with_style_json(self, text: &str) -> Self {
        match parse_lenient::<GcmStyle>(text, "gcm", "style") {
            Some(style) => self.with_style(style),
            None => self,
        }
    }
}

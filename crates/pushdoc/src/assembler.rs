//! The notification builder.
//!
//! A [`NotificationBuilder`] owns the in-progress [`Document`] and moves
//! through two states:
//!
//! - **building**: created from a validated [`Message`]; every `set_*` call
//!   projects its section, merges it into the document and stays here;
//! - **consumed**: after [`build`](NotificationBuilder::build) detaches the
//!   document. Every later call fails with [`ValidationError::Consumed`].
//!
//! A `set_*` call whose fragment comes out empty leaves the document
//! untouched.
//!
//! Repeated calls for the same platform replace that platform's settings
//! under the default [`MergeStrategy::Shallow`]; fields set only in the
//! earlier call are dropped. Opt into [`MergeStrategy::Deep`] to accumulate.

use pushdoc_core::{Fragment, MergeStrategy, Result, ValidationError};
use pushdoc_settings::PushdocSettings;
use serde_json::Value;
use tracing::debug;

use crate::delivery::{Delivery, DeliveryError, DeliveryReport};
use crate::document::Document;
use crate::merge::{attach, keyed};
use crate::message::{MESSAGE_KEY, Message, url_fragment};
use crate::platform::{
    ApnsSettings, ChromeAppExtSettings, ChromeWebSettings, FirefoxWebSettings, GcmSettings,
    PlatformSettings, SETTINGS_KEY, SafariWebSettings,
};
use crate::target::{TARGET_KEY, Target};

/// Single-use builder for a push-notification document.
#[derive(Debug)]
pub struct NotificationBuilder {
    document: Option<Document>,
    strategy: MergeStrategy,
}

impl NotificationBuilder {
    /// Start a notification with the given alert.
    pub fn new(alert: impl Into<String>) -> Self {
        Self::from_message(Message::new(alert))
    }

    /// Start a notification from an alert that may be absent.
    pub fn try_new(alert: Option<String>) -> Result<Self> {
        Message::try_new(alert).map(Self::from_message)
    }

    /// Start a notification from a prepared message.
    pub fn from_message(message: Message) -> Self {
        let seed = Fragment::from_iter([(MESSAGE_KEY.to_owned(), Value::Object(message.build()))]);
        Self {
            document: Some(Document::from_fragment(seed)),
            strategy: MergeStrategy::default(),
        }
    }

    /// Start a notification using the merge strategy from `settings`.
    pub fn from_settings(alert: impl Into<String>, settings: &PushdocSettings) -> Self {
        Self::new(alert).with_merge_strategy(settings.merge.strategy)
    }

    /// Choose how repeated configuration of one section combines.
    #[must_use]
    pub fn with_merge_strategy(mut self, strategy: MergeStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// The active merge strategy.
    pub fn merge_strategy(&self) -> MergeStrategy {
        self.strategy
    }

    /// Whether [`build`](Self::build) has already run.
    pub fn is_consumed(&self) -> bool {
        self.document.is_none()
    }

    /// The document assembled so far.
    pub fn document(&self) -> Result<&Document> {
        self.document.as_ref().ok_or(ValidationError::Consumed)
    }

    /// Attach a URL to the message. An empty URL is a no-op.
    pub fn set_message_url(&mut self, url: impl Into<String>) -> Result<&mut Self> {
        self.merge_section(MESSAGE_KEY, url_fragment(url.into()))
    }

    /// Configure who receives the notification.
    pub fn set_target(&mut self, target: Target) -> Result<&mut Self> {
        self.merge_section(TARGET_KEY, target.build())
    }

    /// Configure any platform's settings.
    pub fn set_platform_settings<P: PlatformSettings>(&mut self, settings: P) -> Result<&mut Self> {
        self.merge_section(SETTINGS_KEY, keyed(P::PLATFORM_KEY, settings.build()))
    }

    /// Configure iOS settings.
    pub fn set_apns_settings(&mut self, settings: ApnsSettings) -> Result<&mut Self> {
        self.set_platform_settings(settings)
    }

    /// Configure Android settings.
    pub fn set_gcm_settings(&mut self, settings: GcmSettings) -> Result<&mut Self> {
        self.set_platform_settings(settings)
    }

    /// Configure Chrome web push settings.
    pub fn set_chrome_settings(&mut self, settings: ChromeWebSettings) -> Result<&mut Self> {
        self.set_platform_settings(settings)
    }

    /// Configure Firefox web push settings.
    pub fn set_firefox_web_settings(&mut self, settings: FirefoxWebSettings) -> Result<&mut Self> {
        self.set_platform_settings(settings)
    }

    /// Configure Chrome app and extension settings.
    pub fn set_chrome_app_ext_settings(
        &mut self,
        settings: ChromeAppExtSettings,
    ) -> Result<&mut Self> {
        self.set_platform_settings(settings)
    }

    /// Configure Safari web push settings.
    pub fn set_safari_web_settings(&mut self, settings: SafariWebSettings) -> Result<&mut Self> {
        self.set_platform_settings(settings)
    }

    /// Detach the finished document.
    ///
    /// The builder is consumed afterwards; calling this again fails.
    pub fn build(&mut self) -> Result<Document> {
        let document = self.document.take().ok_or(ValidationError::Consumed)?;
        debug!(sections = document.as_map().len(), "notification built");
        Ok(document)
    }

    /// Build the document and hand it to `delivery`.
    pub async fn send_with(
        &mut self,
        delivery: &dyn Delivery,
    ) -> std::result::Result<DeliveryReport, DeliveryError> {
        let document = self.build()?;
        delivery.deliver(document).await
    }

    fn merge_section(&mut self, section: &str, fragment: Fragment) -> Result<&mut Self> {
        let strategy = self.strategy;
        let document = self.document.as_mut().ok_or(ValidationError::Consumed)?;
        let _ = attach(document.fragment_mut(), section, fragment, strategy);
        Ok(self)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::{ApnsType, GcmPriority};
    use crate::target::Platform;
    use assert_matches::assert_matches;
    use proptest::prelude::*;
    use serde_json::json;

    // ── lifecycle ───────────────────────────────────────────────────

    #[test]
    fn build_alert_only() {
        let mut builder = NotificationBuilder::new("Hi");
        let document = builder.build().unwrap();
        assert_eq!(document.into_value(), json!({"message": {"alert": "Hi"}}));
    }

    #[test]
    fn try_new_without_alert_fails() {
        assert_matches!(
            NotificationBuilder::try_new(None),
            Err(ValidationError::MissingAlert)
        );
    }

    #[test]
    fn second_build_fails_with_consumed() {
        let mut builder = NotificationBuilder::new("Hi");
        assert!(!builder.is_consumed());
        let _ = builder.build().unwrap();
        assert!(builder.is_consumed());
        assert_matches!(builder.build(), Err(ValidationError::Consumed));
    }

    #[test]
    fn configuration_after_build_fails() {
        let mut builder = NotificationBuilder::new("Hi");
        let _ = builder.build().unwrap();

        assert_matches!(builder.set_message_url("https://x"), Err(ValidationError::Consumed));
        assert_matches!(
            builder.set_target(Target::new().with_device_ids(["d1"])),
            Err(ValidationError::Consumed)
        );
        assert_matches!(
            builder.set_gcm_settings(GcmSettings::new().with_sync(true)),
            Err(ValidationError::Consumed)
        );
        assert_matches!(builder.document(), Err(ValidationError::Consumed));
    }

    #[test]
    fn empty_configuration_after_build_still_fails() {
        let mut builder = NotificationBuilder::new("Hi");
        let _ = builder.build().unwrap();
        assert_matches!(
            builder.set_safari_web_settings(SafariWebSettings::new()),
            Err(ValidationError::Consumed)
        );
    }

    // ── configuration ───────────────────────────────────────────────

    #[test]
    fn message_url_merges_into_message() {
        let mut builder = NotificationBuilder::new("Hi");
        let _ = builder.set_message_url("https://example.com").unwrap();
        assert_eq!(
            builder.document().unwrap().message(),
            Some(&json!({"alert": "Hi", "url": "https://example.com"}))
        );
    }

    #[test]
    fn empty_url_is_noop() {
        let mut builder = NotificationBuilder::new("Hi");
        let _ = builder.set_message_url("").unwrap();
        assert_eq!(
            builder.build().unwrap().into_value(),
            json!({"message": {"alert": "Hi"}})
        );
    }

    #[test]
    fn chained_configuration() {
        let mut builder = NotificationBuilder::new("Hi");
        let _ = builder
            .set_target(Target::new().with_platforms([Platform::Apple]))
            .unwrap()
            .set_apns_settings(ApnsSettings::new().with_type(ApnsType::Silent))
            .unwrap();
        let document = builder.build().unwrap();
        assert_eq!(document.target(), Some(&json!({"platforms": ["A"]})));
        assert_eq!(document.platform("apns"), Some(&json!({"type": "SILENT"})));
    }

    #[test]
    fn same_platform_twice_keeps_only_second_call() {
        let mut builder = NotificationBuilder::new("Hi");
        let _ = builder
            .set_gcm_settings(GcmSettings::new().with_sound("a.mp3").with_icon("ic"))
            .unwrap();
        let _ = builder
            .set_gcm_settings(GcmSettings::new().with_priority(GcmPriority::Low))
            .unwrap();
        assert_eq!(
            builder.document().unwrap().settings(),
            Some(&json!({"gcm": {"priority": "LOW"}}))
        );
    }

    #[test]
    fn deep_strategy_accumulates_same_platform() {
        let mut builder = NotificationBuilder::new("Hi").with_merge_strategy(MergeStrategy::Deep);
        let _ = builder
            .set_gcm_settings(GcmSettings::new().with_sound("a.mp3"))
            .unwrap();
        let _ = builder
            .set_gcm_settings(GcmSettings::new().with_priority(GcmPriority::Low))
            .unwrap();
        assert_eq!(
            builder.document().unwrap().platform("gcm"),
            Some(&json!({"sound": "a.mp3", "priority": "LOW"}))
        );
    }

    #[test]
    fn strategy_from_settings() {
        let mut settings = PushdocSettings::default();
        settings.merge.strategy = MergeStrategy::Deep;
        let builder = NotificationBuilder::from_settings("Hi", &settings);
        assert_eq!(builder.merge_strategy(), MergeStrategy::Deep);
        assert_eq!(
            NotificationBuilder::new("Hi").merge_strategy(),
            MergeStrategy::Shallow
        );
    }

    #[test]
    fn second_target_overrides_colliding_lists_only() {
        let mut builder = NotificationBuilder::new("Hi");
        let _ = builder
            .set_target(Target::new().with_device_ids(["d1"]).with_tag_names(["news"]))
            .unwrap();
        let _ = builder
            .set_target(Target::new().with_device_ids(["d2"]))
            .unwrap();
        assert_eq!(
            builder.document().unwrap().target(),
            Some(&json!({"deviceIds": ["d2"], "tagNames": ["news"]}))
        );
    }

    struct BrokenSettings;

    impl serde::Serialize for BrokenSettings {
        fn serialize<S: serde::Serializer>(&self, _: S) -> std::result::Result<S::Ok, S::Error> {
            Err(<S::Error as serde::ser::Error>::custom("broken record"))
        }
    }

    impl PlatformSettings for BrokenSettings {
        const PLATFORM_KEY: &'static str = "broken";
    }

    #[test]
    fn unserializable_settings_leave_document_unchanged() {
        let (logs, _guard) = pushdoc_core::logging::capture_logs();
        let mut builder = NotificationBuilder::new("Hi");
        let _ = builder
            .set_gcm_settings(GcmSettings::new().with_priority(GcmPriority::High))
            .unwrap();
        let before = builder.document().unwrap().clone();

        let _ = builder.set_platform_settings(BrokenSettings).unwrap();

        assert_eq!(builder.document().unwrap(), &before);
        assert_eq!(builder.document().unwrap().platform("broken"), None);
        assert!(logs.count_at_level(tracing::Level::WARN) >= 1);
    }

    // ── properties ──────────────────────────────────────────────────

    proptest! {
        #[test]
        fn any_alert_builds_to_message_only(alert in ".*") {
            let mut builder = NotificationBuilder::new(alert.clone());
            let document = builder.build().unwrap();
            prop_assert_eq!(document.into_value(), json!({"message": {"alert": alert}}));
        }

        #[test]
        fn empty_argument_sets_leave_document_unchanged(alert in "[a-zA-Z ]{0,20}") {
            let mut builder = NotificationBuilder::new(alert.clone());
            let before = builder.document().unwrap().clone();

            let _ = builder
                .set_message_url("").unwrap()
                .set_target(Target::new().with_user_ids(Vec::<String>::new())).unwrap()
                .set_apns_settings(ApnsSettings::new().with_sound("")).unwrap()
                .set_gcm_settings(GcmSettings::new().with_payload("not json")).unwrap()
                .set_chrome_settings(ChromeWebSettings::new()).unwrap()
                .set_firefox_web_settings(FirefoxWebSettings::new().with_title("")).unwrap()
                .set_chrome_app_ext_settings(ChromeAppExtSettings::new()).unwrap()
                .set_safari_web_settings(SafariWebSettings::new().with_url_args(Vec::<String>::new())).unwrap();

            prop_assert_eq!(builder.document().unwrap(), &before);
        }
    }
}

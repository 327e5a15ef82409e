//! Apple Push Notification service settings.

use serde::{Deserialize, Serialize};

/// How iOS presents the notification.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ApnsType {
    /// Alert shown to the user.
    Default,
    /// Alert shown and payload delivered to the app.
    Mixed,
    /// Background delivery, nothing shown.
    Silent,
}

platform_settings! {
    /// Settings applied to iOS devices.
    ApnsSettings => "apns" {
        /// Number shown as the badge of the application icon.
        with_badge => badge: int,
        /// Category identifier for interactive notifications.
        with_category => category: text,
        /// Title of the action key.
        with_action_key => action_key: text,
        /// Custom JSON delivered with the notification.
        with_payload => payload: payload,
        /// Sound file in the application bundle played on arrival.
        with_sound => sound: text,
        /// Presentation type.
        with_type => kind as "type": choice<ApnsType>,
        /// Key of a localized title string.
        with_title_loc_key => title_loc_key: text,
        /// Key of a localized alert string.
        with_loc_key => loc_key: text,
        /// Image in the app bundle used as the launch image.
        with_launch_image => launch_image: text,
        /// Values substituted into the `title_loc_key` string.
        with_title_loc_args => title_loc_args: list,
        /// Values substituted into the `loc_key` string.
        with_loc_args => loc_args: list,
        /// Title of a rich notification.
        with_title => title: text,
        /// Subtitle of a rich notification.
        with_subtitle => subtitle: text,
        /// Link to media attached to a rich notification.
        with_attachment_url => attachment_url: text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::PlatformSettings;
    use pushdoc_core::logging::capture_logs;
    use serde_json::{Value, json};
    use tracing::Level;

    #[test]
    fn new_settings_are_empty() {
        let settings = ApnsSettings::new();
        assert!(settings.is_empty());
        assert!(settings.build().is_empty());
        assert_eq!(ApnsSettings::PLATFORM_KEY, "apns");
    }

    #[test]
    fn every_field_uses_its_wire_name() {
        let settings = ApnsSettings::new()
            .with_badge(3)
            .with_category("reply")
            .with_action_key("Open")
            .with_payload(json!({"orderId": 7}))
            .with_sound("chime.caf")
            .with_type(ApnsType::Mixed)
            .with_title_loc_key("T_KEY")
            .with_loc_key("L_KEY")
            .with_launch_image("launch.png")
            .with_title_loc_args(["a"])
            .with_loc_args(["b", "c"])
            .with_title("Title")
            .with_subtitle("Sub")
            .with_attachment_url("https://cdn.example.com/a.gif");

        assert_eq!(
            Value::Object(settings.build()),
            json!({
                "badge": 3,
                "category": "reply",
                "actionKey": "Open",
                "payload": {"orderId": 7},
                "sound": "chime.caf",
                "type": "MIXED",
                "titleLocKey": "T_KEY",
                "locKey": "L_KEY",
                "launchImage": "launch.png",
                "titleLocArgs": ["a"],
                "locArgs": ["b", "c"],
                "title": "Title",
                "subtitle": "Sub",
                "attachmentUrl": "https://cdn.example.com/a.gif"
            })
        );
    }

    #[test]
    fn zero_badge_is_kept() {
        let settings = ApnsSettings::new().with_badge(0);
        assert_eq!(Value::Object(settings.build()), json!({"badge": 0}));
    }

    #[test]
    fn empty_values_stay_unset() {
        let settings = ApnsSettings::new()
            .with_sound("")
            .with_loc_args(Vec::<String>::new());
        assert!(settings.is_empty());
    }

    #[test]
    fn empty_value_clears_previous_one() {
        let settings = ApnsSettings::new().with_title("first").with_title("");
        assert!(settings.is_empty());
    }

    #[test]
    fn malformed_payload_is_omitted_other_fields_kept() {
        let (logs, _guard) = capture_logs();
        let settings = ApnsSettings::new()
            .with_sound("chime.caf")
            .with_payload("{\"orderId\": ")
            .with_badge(1);

        assert_eq!(
            Value::Object(settings.build()),
            json!({"sound": "chime.caf", "badge": 1})
        );
        let events = logs.events_for_target("pushdoc::payload");
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].level, Level::ERROR);
        assert_eq!(events[0].field("platform"), Some("apns"));
    }

    #[test]
    fn apns_type_wire_values() {
        assert_eq!(serde_json::to_value(ApnsType::Default).unwrap(), json!("DEFAULT"));
        assert_eq!(serde_json::to_value(ApnsType::Silent).unwrap(), json!("SILENT"));
    }
}

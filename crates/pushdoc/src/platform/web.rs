//! Browser and Chrome app/extension settings.

platform_settings! {
    /// Settings applied to Chrome web push.
    ChromeWebSettings => "chromeWeb" {
        /// Notification title.
        with_title => title: text,
        /// URL of the notification icon.
        with_icon_url => icon_url: text,
        /// Seconds the service keeps the notification while the browser is offline.
        with_time_to_live => time_to_live: int,
        /// Custom JSON delivered with the notification.
        with_payload => payload: payload,
    }
}

platform_settings! {
    /// Settings applied to Firefox web push.
    FirefoxWebSettings => "firefoxWeb" {
        /// Notification title.
        with_title => title: text,
        /// URL of the notification icon.
        with_icon_url => icon_url: text,
        /// Seconds the service keeps the notification while the browser is offline.
        with_time_to_live => time_to_live: int,
        /// Custom JSON delivered with the notification.
        with_payload => payload: payload,
    }
}

platform_settings! {
    /// Settings applied to Chrome apps and extensions.
    ChromeAppExtSettings => "chromeAppExt" {
        /// Group key; newer notifications with the same key replace older ones.
        with_collapse_key => collapse_key: text,
        /// Hold the notification until the device is active.
        with_delay_while_idle => delay_while_idle: flag,
        /// Notification title.
        with_title => title: text,
        /// URL of the notification icon.
        with_icon_url => icon_url: text,
        /// Seconds the service keeps the notification while the device is offline.
        with_time_to_live => time_to_live: int,
        /// Custom JSON delivered with the notification.
        with_payload => payload: payload,
    }
}

platform_settings! {
    /// Settings applied to Safari web push.
    SafariWebSettings => "safariWeb" {
        /// Notification title.
        with_title => title: text,
        /// Arguments substituted into the website's URL format string.
        with_url_args => url_args: list,
        /// Label of the action button.
        with_action => action: text,
    }
}

//! Per-platform delivery settings.
//!
//! Every platform is an optional-field record declared through
//! [`platform_settings!`]: one line per field naming its setter, its JSON
//! key and its kind. The macro derives the record, the `with_*` setters and
//! the [`PlatformSettings`] impl, so the six platforms differ only in their
//! field tables.
//!
//! Field kinds:
//!
//! | Kind | Stored as | Unset when |
//! |---|---|---|
//! | `text` | `String` | empty |
//! | `list` | `Vec<String>` | empty |
//! | `int` | `i32` | never, once set |
//! | `flag` | `bool` | never, once set |
//! | `choice<T>` | `T` | never, once set |
//! | `payload` | opaque JSON | malformed or null |
//! | `nested<T>` | `T` | `T::is_empty()` |

use pushdoc_core::Fragment;
use serde::Serialize;

use crate::projector::project;

/// Section key under which platform fragments are collected.
pub const SETTINGS_KEY: &str = "settings";

/// An optional-field record for one delivery platform.
pub trait PlatformSettings: Serialize {
    /// Key of this platform inside the `settings` section.
    const PLATFORM_KEY: &'static str;

    /// Project the set fields into this platform's fragment.
    fn build(&self) -> Fragment {
        project(self, Self::PLATFORM_KEY)
    }

    /// Whether no field is set.
    fn is_empty(&self) -> bool {
        self.build().is_empty()
    }
}

macro_rules! platform_settings {
    (@ty text) => { String };
    (@ty list) => { Vec<String> };
    (@ty int) => { i32 };
    (@ty flag) => { bool };
    (@ty payload) => { ::serde_json::Value };
    (@ty choice<$ty:ty>) => { $ty };
    (@ty nested<$ty:ty>) => { $ty };

    (@setter $(#[$doc:meta])* $setter:ident, $field:ident, $key:literal, text) => {
        $(#[$doc])*
        #[must_use]
        pub fn $setter(mut self, value: impl Into<String>) -> Self {
            let value = value.into();
            self.$field = (!value.is_empty()).then_some(value);
            self
        }
    };
    (@setter $(#[$doc:meta])* $setter:ident, $field:ident, $key:literal, list) => {
        $(#[$doc])*
        #[must_use]
        pub fn $setter<I, S>(mut self, values: I) -> Self
        where
            I: IntoIterator<Item = S>,
            S: Into<String>,
        {
            let values: Vec<String> = values.into_iter().map(Into::into).collect();
            self.$field = (!values.is_empty()).then_some(values);
            self
        }
    };
    (@setter $(#[$doc:meta])* $setter:ident, $field:ident, $key:literal, int) => {
        $(#[$doc])*
        #[must_use]
        pub fn $setter(mut self, value: i32) -> Self {
            self.$field = Some(value);
            self
        }
    };
    (@setter $(#[$doc:meta])* $setter:ident, $field:ident, $key:literal, flag) => {
        $(#[$doc])*
        #[must_use]
        pub fn $setter(mut self, value: bool) -> Self {
            self.$field = Some(value);
            self
        }
    };
    (@setter $(#[$doc:meta])* $setter:ident, $field:ident, $key:literal, choice<$ty:ty>) => {
        $(#[$doc])*
        #[must_use]
        pub fn $setter(mut self, value: $ty) -> Self {
            self.$field = Some(value);
            self
        }
    };
    (@setter $(#[$doc:meta])* $setter:ident, $field:ident, $key:literal, payload) => {
        $(#[$doc])*
        ///
        /// Malformed JSON text is logged and leaves the field unset.
        #[must_use]
        pub fn $setter(mut self, payload: impl Into<$crate::payload::RawPayload>) -> Self {
            self.$field = payload.into().resolve($key, stringify!($field));
            self
        }
    };
    (@setter $(#[$doc:meta])* $setter:ident, $field:ident, $key:literal, nested<$ty:ty>) => {
        $(#[$doc])*
        #[must_use]
        pub fn $setter(mut self, value: $ty) -> Self {
            self.$field = (!value.is_empty()).then_some(value);
            self
        }
    };

    (
        $(#[$meta:meta])*
        $name:ident => $key:literal {
            $(
                $(#[$doc:meta])*
                $setter:ident => $field:ident $(as $rename:literal)? : $kind:ident $(<$ty:ty>)?
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Debug, Default, PartialEq, ::serde::Serialize)]
        #[serde(rename_all = "camelCase")]
        pub struct $name {
            $(
                #[serde(skip_serializing_if = "Option::is_none")]
                $(#[serde(rename = $rename)])?
                $field: Option<platform_settings!(@ty $kind $(<$ty>)?)>,
            )*
        }

        impl $name {
            /// Start with every field unset.
            pub fn new() -> Self {
                Self::default()
            }

            $(
                platform_settings!(@setter $(#[$doc])* $setter, $field, $key, $kind $(<$ty>)?);
            )*
        }

        impl $crate::platform::PlatformSettings for $name {
            const PLATFORM_KEY: &'static str = $key;
        }
    };
}

mod apns;
mod gcm;
mod web;

pub use apns::{ApnsSettings, ApnsType};
pub use gcm::{GcmPriority, GcmSettings, GcmStyle, Visibility};
pub use web::{ChromeAppExtSettings, ChromeWebSettings, FirefoxWebSettings, SafariWebSettings};

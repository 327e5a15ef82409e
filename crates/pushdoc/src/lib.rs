//! # pushdoc
//!
//! Builds push-notification request documents.
//!
//! A [`NotificationBuilder`] starts from a mandatory alert and accepts any
//! number of optional sections: a delivery [`Target`] and per-platform
//! settings ([`ApnsSettings`], [`GcmSettings`], [`ChromeWebSettings`],
//! [`FirefoxWebSettings`], [`ChromeAppExtSettings`], [`SafariWebSettings`]).
//! Each section is projected into a minimal JSON fragment holding only the
//! fields that were set, then merged into the document. [`build`] detaches
//! the finished [`Document`]; the builder refuses any further use.
//!
//! ```no_run
//! use pushdoc::{GcmPriority, GcmSettings, NotificationBuilder, Platform, Target};
//!
//! let mut builder = NotificationBuilder::new("Hi");
//! builder
//!     .set_target(Target::new().with_device_ids(["d1"]).with_platforms([Platform::Google]))?
//!     .set_gcm_settings(GcmSettings::new().with_priority(GcmPriority::High))?;
//! let document = builder.build()?;
//! # Ok::<(), pushdoc::ValidationError>(())
//! ```
//!
//! Merging is shallow by default: configuring the same platform twice keeps
//! only the second call's fields. See [`MergeStrategy`].
//!
//! [`build`]: NotificationBuilder::build

#![deny(unsafe_code)]

pub mod assembler;
pub mod delivery;
pub mod document;
pub mod merge;
pub mod message;
pub mod payload;
pub mod platform;
pub mod projector;
pub mod target;

pub use assembler::NotificationBuilder;
pub use delivery::{Delivery, DeliveryError, DeliveryReport};
pub use document::Document;
pub use message::Message;
pub use payload::RawPayload;
pub use platform::{
    ApnsSettings, ApnsType, ChromeAppExtSettings, ChromeWebSettings, FirefoxWebSettings,
    GcmPriority, GcmSettings, GcmStyle, PlatformSettings, SafariWebSettings, Visibility,
};
pub use pushdoc_core::{Fragment, MergeStrategy, Result, ValidationError};
pub use target::{Platform, Target};

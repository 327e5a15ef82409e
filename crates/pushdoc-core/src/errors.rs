//! Caller-visible error types.
//!
//! Only two conditions ever reach the caller as an `Err`: a notification
//! without an alert, and a builder that is used after `build()`. Everything
//! else (malformed payloads, serialization hiccups) is logged and degrades to
//! an omitted field.

use thiserror::Error;

/// Fatal validation failures raised by the notification builder.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The mandatory alert text was absent at construction.
    #[error("notification alert must not be null")]
    MissingAlert,
    /// The builder was used after `build()` detached its document.
    #[error("notification builder already consumed by build()")]
    Consumed,
}

impl ValidationError {
    /// Machine-readable error code.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::MissingAlert => "MISSING_ALERT",
            Self::Consumed => "BUILDER_CONSUMED",
        }
    }
}

/// Result type for builder operations.
pub type Result<T> = std::result::Result<T, ValidationError>;

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

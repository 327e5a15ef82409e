//! Hand-off point to the delivery service.
//!
//! This crate only assembles documents. Sending them is the job of a
//! [`Delivery`] implementation supplied by the caller.

use async_trait::async_trait;
use pushdoc_core::ValidationError;
use serde::{Deserialize, Serialize};

use crate::document::Document;

/// Outcome of a successful hand-off.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryReport {
    /// Status code reported by the service.
    pub status: u16,
    /// Response body, if the service returned one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

impl DeliveryReport {
    /// Whether the status is in the 2xx range.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Errors reported while handing a notification off.
#[derive(Debug, thiserror::Error)]
pub enum DeliveryError {
    /// The builder could not produce a document.
    #[error("cannot deliver: {0}")]
    Unbuildable(#[from] ValidationError),

    /// The service refused the document.
    #[error("delivery rejected ({status}): {message}")]
    Rejected {
        /// Status code reported by the service.
        status: u16,
        /// Error description.
        message: String,
    },

    /// The document never reached the service.
    #[error("delivery transport failed: {0}")]
    Transport(String),
}

/// Sends finished documents to a delivery service.
#[async_trait]
pub trait Delivery: Send + Sync {
    /// Attempt delivery of `document`.
    async fn deliver(&self, document: Document) -> Result<DeliveryReport, DeliveryError>;
}

//! Settings type definitions.
//!
//! All types use `#[serde(rename_all = "camelCase")]` and `#[serde(default)]`
//! so a settings file only needs the values it changes.

use pushdoc_core::MergeStrategy;
use serde::{Deserialize, Serialize};

use crate::errors::{Result, SettingsError};

/// Log levels accepted by `logging.level`.
const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error", "off"];

/// Root settings type.
///
/// # JSON Format
///
/// ```json
/// {
///   "merge": { "strategy": "shallow" },
///   "logging": { "level": "warn" }
/// }
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PushdocSettings {
    /// How fragments combine with existing document sections.
    pub merge: MergeSettings,
    /// Logging configuration.
    pub logging: LoggingSettings,
}

impl PushdocSettings {
    /// Reject values no component can act on.
    pub fn validate(&self) -> Result<()> {
        if !is_known_level(&self.logging.level) {
            return Err(SettingsError::InvalidValue(format!(
                "unknown log level: {}",
                self.logging.level
            )));
        }
        Ok(())
    }

    /// Install the stderr tracing subscriber at `logging.level`.
    pub fn init_logging(&self) {
        pushdoc_core::logging::init_subscriber(&self.logging.level);
    }
}

/// Merge behavior for repeated configuration calls.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MergeSettings {
    /// `shallow` replaces a platform's settings on every call; `deep`
    /// accumulates fields across calls.
    pub strategy: MergeStrategy,
}

/// Logging configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LoggingSettings {
    /// Minimum level handed to the tracing subscriber.
    pub level: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

/// Whether `level` names a tracing level (case-insensitive).
pub fn is_known_level(level: &str) -> bool {
    LOG_LEVELS.contains(&level.to_lowercase().as_str())
}

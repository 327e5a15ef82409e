//! Settings loading with deep merge and environment variable overrides.
//!
//! Loading flow:
//! 1. Start with compiled [`PushdocSettings::default()`]
//! 2. If the settings file exists, deep-merge its values over the defaults
//! 3. Apply environment variable overrides (highest priority)
//! 4. Validate

use std::path::{Path, PathBuf};

use pushdoc_core::{MergeStrategy, deep_merge};
use serde_json::Value;
use tracing::debug;

use crate::errors::Result;
use crate::types::{PushdocSettings, is_known_level};

/// Resolve the settings file path.
///
/// `$PUSHDOC_HOME/settings.json` when `PUSHDOC_HOME` is set, otherwise
/// `~/.pushdoc/settings.json`.
pub fn settings_path() -> PathBuf {
    if let Some(dir) = read_env_string("PUSHDOC_HOME") {
        return PathBuf::from(dir).join("settings.json");
    }
    let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".to_string());
    PathBuf::from(home).join(".pushdoc").join("settings.json")
}

/// Load settings from the default path with env var overrides.
pub fn load_settings() -> Result<PushdocSettings> {
    load_settings_from_path(&settings_path())
}

/// Load settings from a specific path with env var overrides.
///
/// A missing file yields defaults. Invalid JSON or an invalid value is an
/// error.
pub fn load_settings_from_path(path: &Path) -> Result<PushdocSettings> {
    let defaults = serde_json::to_value(PushdocSettings::default())?;

    let merged = if path.exists() {
        debug!(?path, "loading settings from file");
        let content = std::fs::read_to_string(path)?;
        let user: Value = serde_json::from_str(&content)?;
        deep_merge(defaults, user)
    } else {
        debug!(?path, "settings file not found, using defaults");
        defaults
    };

    let mut settings: PushdocSettings = serde_json::from_value(merged)?;
    apply_env_overrides(&mut settings);
    settings.validate()?;
    Ok(settings)
}

/// Apply `PUSHDOC_*` environment variable overrides.
///
/// Invalid values are logged and ignored (fall back to file/default).
pub fn apply_env_overrides(settings: &mut PushdocSettings) {
    if let Some(v) = read_env_strategy("PUSHDOC_MERGE_STRATEGY") {
        settings.merge.strategy = v;
    }
    if let Some(v) = read_env_level("PUSHDOC_LOG_LEVEL") {
        settings.logging.level = v;
    }
}

// ── Env var readers ─────────────────────────────────────────────────────────

fn read_env_string(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}

fn read_env_strategy(name: &str) -> Option<MergeStrategy> {
    let val = read_env_string(name)?;
    let result = MergeStrategy::parse(&val);
    if result.is_none() {
        tracing::warn!(key = name, value = %val, "invalid merge strategy env var, ignoring");
    }
    result
}

fn read_env_level(name: &str) -> Option<String> {
    let val = read_env_string(name)?;
    if is_known_level(&val) {
        Some(val.to_lowercase())
    } else {
        tracing::warn!(key = name, value = %val, "invalid log level env var, ignoring");
        None
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

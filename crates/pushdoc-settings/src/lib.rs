//! # pushdoc-settings
//!
//! Configuration for the notification builder, loaded from three layers
//! (in priority order):
//! 1. **Compiled defaults** — [`PushdocSettings::default()`]
//! 2. **Settings file** — `~/.pushdoc/settings.json` (deep-merged over defaults)
//! 3. **Environment variables** — `PUSHDOC_*` overrides (highest priority)
//!
//! # Usage
//!
//! ```no_run
//! use pushdoc_settings::get_settings;
//!
//! let settings = get_settings();
//! println!("merge strategy: {}", settings.merge.strategy);
//! ```

#![deny(unsafe_code)]

pub mod errors;
pub mod loader;
pub mod types;

pub use errors::{Result, SettingsError};
pub use loader::{load_settings, load_settings_from_path, settings_path};
pub use types::*;

use std::sync::OnceLock;

/// Global settings singleton, loaded on first access.
static SETTINGS: OnceLock<PushdocSettings> = OnceLock::new();

/// Get the global settings instance.
///
/// On first call, loads settings from the settings file with env var
/// overrides. If loading fails, logs the failure and returns compiled
/// defaults.
pub fn get_settings() -> &'static PushdocSettings {
    SETTINGS.get_or_init(|| {
        load_settings().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "failed to load settings, using defaults");
            PushdocSettings::default()
        })
    })
}

/// Initialize the global settings with a specific value.
///
/// Returns the settings back if the global was already initialized.
pub fn init_settings(settings: PushdocSettings) -> std::result::Result<(), PushdocSettings> {
    SETTINGS.set(settings)
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

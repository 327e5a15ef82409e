//! JSON fragments and the rules for combining them.
//!
//! A [`Fragment`] is a JSON object holding only explicitly-set fields. Two
//! fragments are combined with one of two rules:
//!
//! - [`shallow_merge`]: union of keys, incoming value replaces the existing
//!   one wholesale on collision. No recursion.
//! - [`field_merge`]: like shallow, except two colliding objects are
//!   themselves unioned one level down. Values below that level (payloads,
//!   styles, lists) are replaced wholesale.
//!
//! [`MergeStrategy`] selects between them. Shallow is the default and is what
//! makes a repeated settings call for one platform replace, not extend, the
//! previous call.
//!
//! [`deep_merge`] is the unbounded recursive variant used to layer a settings
//! file over compiled defaults. It never touches notification documents.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A minimal JSON object containing only explicitly-set fields.
pub type Fragment = Map<String, Value>;

/// Combine two fragments, letting `incoming` win on every colliding key.
///
/// Colliding values are replaced entirely, including nested objects.
pub fn shallow_merge(mut existing: Fragment, incoming: Fragment) -> Fragment {
    for (key, value) in incoming {
        let _ = existing.insert(key, value);
    }
    existing
}

/// Combine two fragments one level deep.
///
/// Where both sides hold an object under the same key, the two objects are
/// shallow-merged; every other collision is won by `incoming`. Applied to the
/// `settings` section this unions fields per platform while each field value
/// is stored exactly as the last call supplied it.
pub fn field_merge(mut existing: Fragment, incoming: Fragment) -> Fragment {
    for (key, value) in incoming {
        let merged = match (existing.remove(&key), value) {
            (Some(Value::Object(current)), Value::Object(fields)) => {
                Value::Object(shallow_merge(current, fields))
            }
            (_, value) => value,
        };
        let _ = existing.insert(key, merged);
    }
    existing
}

/// Layer a user settings value over the compiled defaults.
///
/// Nested sections merge recursively so a file only needs the keys it
/// changes. A `null` in the file leaves the default in place; arrays and
/// scalars replace the default.
pub fn deep_merge(target: Value, source: Value) -> Value {
    match (target, source) {
        (Value::Object(mut target_map), Value::Object(source_map)) => {
            for (key, source_val) in source_map {
                if source_val.is_null() {
                    continue;
                }
                let merged = if let Some(target_val) = target_map.remove(&key) {
                    deep_merge(target_val, source_val)
                } else {
                    source_val
                };
                let _ = target_map.insert(key, merged);
            }
            Value::Object(target_map)
        }
        (_, source) => source,
    }
}

/// How a new fragment is combined with an existing document section.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MergeStrategy {
    /// Last write wins per key, no recursion.
    #[default]
    Shallow,
    /// Repeated calls for one platform accumulate fields; each field value
    /// is still replaced whole.
    Deep,
}

impl MergeStrategy {
    /// Merge `incoming` into `existing` under this strategy.
    #[must_use]
    pub fn merge(self, existing: Fragment, incoming: Fragment) -> Fragment {
        match self {
            Self::Shallow => shallow_merge(existing, incoming),
            Self::Deep => field_merge(existing, incoming),
        }
    }

    /// Parse a strategy name (case-insensitive). Returns `None` if unknown.
    #[must_use]
    pub fn parse(val: &str) -> Option<Self> {
        match val.trim().to_lowercase().as_str() {
            "shallow" => Some(Self::Shallow),
            "deep" => Some(Self::Deep),
            _ => None,
        }
    }
}

impl fmt::Display for MergeStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Shallow => write!(f, "shallow"),
            Self::Deep => write!(f, "deep"),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

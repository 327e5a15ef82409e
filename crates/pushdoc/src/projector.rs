//! Omit-if-absent projection of optional-field records into fragments.
//!
//! A field survives projection when it is non-null and, for strings and
//! arrays, non-empty. Numbers and booleans survive whenever present, so
//! `false` and `0` stay distinguishable from "not configured". Projection is
//! top-level only: nested values (opaque payloads in particular) are kept
//! verbatim.

use pushdoc_core::Fragment;
use serde::Serialize;
use serde_json::Value;
use tracing::warn;

/// Project `record` into a fragment holding only its set fields.
///
/// Serialization failures and records that do not serialize to an object
/// are logged and yield an empty fragment, which callers treat as nothing
/// to merge.
pub fn project<T: Serialize + ?Sized>(record: &T, section: &str) -> Fragment {
    match serde_json::to_value(record) {
        Ok(Value::Object(mut fields)) => {
            fields.retain(|_, value| is_set(value));
            fields
        }
        Ok(other) => {
            warn!(section, kind = json_kind(&other), "record did not project to an object, dropping");
            Fragment::new()
        }
        Err(error) => {
            warn!(section, %error, "failed to serialize fragment, dropping");
            Fragment::new()
        }
    }
}

/// Whether `value` counts as explicitly set.
pub fn is_set(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Bool(_) | Value::Number(_) | Value::Object(_) => true,
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use pushdoc_core::logging::capture_logs;
    use serde::ser::Error as _;
    use serde_json::json;
    use tracing::Level;

    #[derive(Serialize)]
    #[serde(rename_all = "camelCase")]
    struct Sparse {
        title: Option<String>,
        tags: Option<Vec<String>>,
        badge: Option<i32>,
        sync: Option<bool>,
        payload: Option<Value>,
    }

    struct Unserializable;

    impl Serialize for Unserializable {
        fn serialize<S: serde::Serializer>(&self, _: S) -> std::result::Result<S::Ok, S::Error> {
            Err(S::Error::custom("boom"))
        }
    }

    #[test]
    fn drops_null_and_empty_fields() {
        let record = Sparse {
            title: Some(String::new()),
            tags: Some(vec![]),
            badge: None,
            sync: None,
            payload: None,
        };
        assert!(project(&record, "test").is_empty());
    }

    #[test]
    fn keeps_false_and_zero() {
        let record = Sparse {
            title: None,
            tags: None,
            badge: Some(0),
            sync: Some(false),
            payload: None,
        };
        assert_eq!(
            Value::Object(project(&record, "test")),
            json!({"badge": 0, "sync": false})
        );
    }

    #[test]
    fn keeps_nested_values_verbatim() {
        let record = Sparse {
            title: Some("t".into()),
            tags: Some(vec!["a".into()]),
            badge: None,
            sync: None,
            payload: Some(json!({"empty": "", "none": null, "list": []})),
        };
        let fragment = project(&record, "test");
        assert_eq!(fragment["payload"], json!({"empty": "", "none": null, "list": []}));
        assert_eq!(fragment["tags"], json!(["a"]));
    }

    #[test]
    fn serialization_failure_yields_empty_and_warns() {
        let (logs, _guard) = capture_logs();
        assert!(project(&Unserializable, "gcm").is_empty());
        assert!(logs.has_event(Level::WARN, "failed to serialize fragment"));
    }

    #[test]
    fn non_object_yields_empty() {
        let (logs, _guard) = capture_logs();
        assert!(project(&42, "apns").is_empty());
        let events = logs.events();
        assert_eq!(events[0].field("kind"), Some("number"));
    }

    #[test]
    fn is_set_rules() {
        assert!(!is_set(&Value::Null));
        assert!(!is_set(&json!("")));
        assert!(!is_set(&json!([])));
        assert!(is_set(&json!({})));
        assert!(is_set(&json!(0)));
        assert!(is_set(&json!(false)));
        assert!(is_set(&json!(" ")));
    }
}

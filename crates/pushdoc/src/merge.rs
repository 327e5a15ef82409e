//! Attaching fragments to document sections.
//!
//! A document has up to three sections (`message`, `target`, `settings`).
//! [`attach`] folds a fragment into one of them:
//!
//! - an empty fragment changes nothing;
//! - a missing section takes the fragment as its value;
//! - an existing section is merged with the fragment under the configured
//!   [`MergeStrategy`].
//!
//! Platform fragments arrive wrapped as `{platformKey: fields}`, so under
//! the default shallow strategy different platforms compose while a second
//! fragment for the same platform replaces the first one wholesale.

use pushdoc_core::{Fragment, MergeStrategy};
use serde_json::Value;
use tracing::debug;

/// Merge `fragment` into `document[section]`.
///
/// Returns whether the document changed.
pub fn attach(
    document: &mut Fragment,
    section: &str,
    fragment: Fragment,
    strategy: MergeStrategy,
) -> bool {
    if fragment.is_empty() {
        debug!(section, "empty fragment, nothing to merge");
        return false;
    }

    let keys = fragment.len();
    let merged = match document.remove(section) {
        Some(Value::Object(existing)) => strategy.merge(existing, fragment),
        _ => fragment,
    };
    let _ = document.insert(section.to_owned(), Value::Object(merged));
    debug!(section, keys, %strategy, "fragment merged");
    true
}

/// Wrap a platform fragment under its platform key.
///
/// An empty platform fragment stays empty so that [`attach`] treats it as a
/// no-op instead of inserting `{platformKey: {}}`.
pub fn keyed(key: &str, fragment: Fragment) -> Fragment {
    if fragment.is_empty() {
        return Fragment::new();
    }
    Fragment::from_iter([(key.to_owned(), Value::Object(fragment))])
}

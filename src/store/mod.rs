//! Translation store
//!
//! An in-memory tree of locale → namespace → message templates with
//! path-based read/write. Lookup misses are `None`, never errors, and
//! writes through adversarial key names degrade to silent no-ops.

pub mod path;
pub mod tree;

pub use path::{is_reserved, RESERVED_SEGMENTS};
pub use tree::TranslationNode;

use std::collections::HashMap;
use serde_json::Value;
use crate::utils::errors::Result;

/// In-memory translation tree keyed by locale at the top level
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TranslationStore {
    root: HashMap<String, TranslationNode>,
}

impl TranslationStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve a dot path to a node
    pub fn get(&self, path: &str) -> Option<&TranslationNode> {
        path::get(&self.root, path)
    }

    /// Resolve a dot path to a message template
    pub fn get_message(&self, path: &str) -> Option<&str> {
        self.get(path).and_then(TranslationNode::as_message)
    }

    /// Assign a node at a dot path, overwriting whatever was there
    pub fn set(&mut self, path: &str, node: TranslationNode) {
        path::set(&mut self.root, path, node);
    }

    /// Assign a message template at a dot path
    pub fn set_message(&mut self, path: &str, message: impl Into<String>) {
        self.set(path, TranslationNode::Leaf(message.into()));
    }

    /// Merge a JSON subtree under a dot path, leaf by leaf
    ///
    /// Each scalar in the subtree is written through the set operation, so
    /// existing sibling translations survive and reserved key names inside
    /// the subtree drop only their own leaf.
    pub fn merge(&mut self, path: &str, value: &Value) -> Result<()> {
        match value {
            Value::Object(map) => {
                for (key, child) in map {
                    let child_path = format!("{path}.{key}");
                    self.merge(&child_path, child)?;
                }
                Ok(())
            }
            scalar => {
                let node = TranslationNode::from_scalar(scalar)?;
                self.set(path, node);
                Ok(())
            }
        }
    }

    /// Top-level locale identifiers present in the store, sorted
    pub fn locales(&self) -> Vec<String> {
        let mut locales: Vec<String> = self.root.keys().cloned().collect();
        locales.sort();
        locales
    }

    /// Whether the store holds no locales
    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_merge_preserves_siblings() {
        let mut store = TranslationStore::new();
        store.set_message("en.common.yes", "Yes");
        store
            .merge("en", &json!({"common": {"no": "No"}}))
            .expect("merge succeeds");

        assert_eq!(store.get_message("en.common.yes"), Some("Yes"));
        assert_eq!(store.get_message("en.common.no"), Some("No"));
    }

    #[test]
    fn test_merge_rejects_null_leaf() {
        let mut store = TranslationStore::new();
        let result = store.merge("en", &json!({"common": {"bad": null}}));
        assert!(result.is_err());
    }

    #[test]
    fn test_merge_skips_reserved_keys() {
        let mut store = TranslationStore::new();
        store
            .merge("en", &json!({"__proto__": {"polluted": "evil"}, "ok": "Fine"}))
            .expect("merge succeeds");

        assert_eq!(store.get_message("en.ok"), Some("Fine"));
        assert!(store.get("en.__proto__").is_none());
    }

    #[test]
    fn test_locales_sorted() {
        let mut store = TranslationStore::new();
        store.set_message("ru.a", "x");
        store.set_message("en.a", "x");
        store.set_message("fr-FR.a", "x");
        assert_eq!(store.locales(), vec!["en", "fr-FR", "ru"]);
    }

    #[test]
    fn test_empty_string_translation_is_present() {
        let mut store = TranslationStore::new();
        store.set_message("en.common.blank", "");
        assert_eq!(store.get_message("en.common.blank"), Some(""));
    }
}

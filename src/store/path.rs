//! Dot-path traversal over the translation tree
//!
//! Paths like `en-US.common.hello` address nodes in the tree. Writes guard
//! against the prototype-mutation key names of the JavaScript translation
//! bundles this store ingests: a path containing one of those segments is
//! dropped as a no-op rather than corrupting the tree.

use std::collections::HashMap;
use super::tree::TranslationNode;
use crate::utils::logging;

/// Key names rejected on write. These are object-prototype-mutation
/// vectors when translation bundles come from untrusted JSON.
pub const RESERVED_SEGMENTS: &[&str] = &["__proto__", "constructor", "prototype"];

/// Whether a path segment is a reserved name
pub fn is_reserved(segment: &str) -> bool {
    RESERVED_SEGMENTS.contains(&segment)
}

/// Resolve a dot path to a node
///
/// Walks all but the last segment; any intermediate that is absent or a
/// leaf ends resolution with `None`. No error is ever raised.
pub fn get<'a>(
    root: &'a HashMap<String, TranslationNode>,
    path: &str,
) -> Option<&'a TranslationNode> {
    let mut segments = path.split('.').peekable();
    let mut current = root;

    while let Some(segment) = segments.next() {
        if segments.peek().is_none() {
            return current.get(segment);
        }
        current = current.get(segment)?.as_namespace()?;
    }

    None
}

/// Assign a node at a dot path
///
/// Missing intermediate namespaces are created; a leaf in the way of an
/// intermediate segment is overwritten with an empty namespace. A reserved
/// segment anywhere in the path aborts the call (intermediates already
/// created earlier in the same call remain, which is harmless since they
/// are empty namespaces).
pub fn set(root: &mut HashMap<String, TranslationNode>, path: &str, node: TranslationNode) {
    let segments: Vec<&str> = path.split('.').collect();
    let (last, intermediates) = match segments.split_last() {
        Some(parts) => parts,
        None => return,
    };

    let mut current = root;
    for segment in intermediates {
        if is_reserved(segment) {
            logging::log_reserved_segment(path, segment);
            return;
        }
        let entry = current
            .entry((*segment).to_string())
            .or_insert_with(TranslationNode::empty_namespace);
        if !entry.is_namespace() {
            *entry = TranslationNode::empty_namespace();
        }
        let TranslationNode::Namespace(child) = entry else {
            return;
        };
        current = child;
    }

    if is_reserved(last) {
        logging::log_reserved_segment(path, last);
        return;
    }
    current.insert((*last).to_string(), node);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(message: &str) -> TranslationNode {
        TranslationNode::Leaf(message.to_string())
    }

    #[test]
    fn test_set_then_get_roundtrip() {
        let mut root = HashMap::new();
        set(&mut root, "en.common.hello", leaf("Hello"));
        assert_eq!(
            get(&root, "en.common.hello").and_then(|n| n.as_message()),
            Some("Hello")
        );
    }

    #[test]
    fn test_get_through_leaf_intermediate() {
        let mut root = HashMap::new();
        set(&mut root, "en.common", leaf("not a namespace"));
        assert!(get(&root, "en.common.hello").is_none());
    }

    #[test]
    fn test_get_missing_path() {
        let root: HashMap<String, TranslationNode> = HashMap::new();
        assert!(get(&root, "en.common.hello").is_none());
        assert!(get(&root, "en").is_none());
    }

    #[test]
    fn test_set_overwrites_leaf_with_namespace() {
        let mut root = HashMap::new();
        set(&mut root, "en.common", leaf("plain"));
        set(&mut root, "en.common.hello", leaf("Hello"));
        assert_eq!(
            get(&root, "en.common.hello").and_then(|n| n.as_message()),
            Some("Hello")
        );
    }

    #[test]
    fn test_set_overwrites_namespace_with_leaf() {
        let mut root = HashMap::new();
        set(&mut root, "en.common.hello", leaf("Hello"));
        set(&mut root, "en.common", leaf("flattened"));
        assert_eq!(
            get(&root, "en.common").and_then(|n| n.as_message()),
            Some("flattened")
        );
        assert!(get(&root, "en.common.hello").is_none());
    }

    #[test]
    fn test_reserved_final_segment_is_noop() {
        let mut root = HashMap::new();
        set(&mut root, "en.__proto__", leaf("evil"));
        set(&mut root, "en.constructor", leaf("evil"));
        set(&mut root, "en.prototype", leaf("evil"));
        assert!(get(&root, "en.__proto__").is_none());
        assert!(get(&root, "en.constructor").is_none());
        assert!(get(&root, "en.prototype").is_none());
    }

    #[test]
    fn test_reserved_intermediate_segment_is_noop() {
        let mut root = HashMap::new();
        set(&mut root, "en.__proto__.polluted", leaf("evil"));
        assert!(get(&root, "en.__proto__.polluted").is_none());
        assert!(get(&root, "en.__proto__").is_none());
    }

    #[test]
    fn test_reserved_abort_keeps_earlier_intermediates_empty() {
        let mut root = HashMap::new();
        set(&mut root, "en.ns.constructor.x", leaf("evil"));
        // "en.ns" was created on the way, but nothing was written below it
        let ns = get(&root, "en.ns").and_then(|n| n.as_namespace());
        assert_eq!(ns.map(|m| m.len()), Some(0));
    }

    #[test]
    fn test_single_segment_path() {
        let mut root = HashMap::new();
        set(&mut root, "en", leaf("just a language"));
        assert_eq!(get(&root, "en").and_then(|n| n.as_message()), Some("just a language"));
    }
}

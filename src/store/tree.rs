//! Translation tree nodes
//!
//! The store is an explicit tree of tagged nodes rather than untyped JSON:
//! a node is either a leaf message template or a namespace mapping. This
//! keeps the "intermediate path segments are always namespaces" invariant
//! visible in the type system.

use std::collections::{BTreeSet, HashMap};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use crate::utils::errors::{LinguistError, Result};

/// A node in the translation tree
///
/// Top-level keys of a store are locale identifiers; below that, namespaces
/// group message templates by dotted key path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TranslationNode {
    /// A message template
    Leaf(String),
    /// A namespace holding further nodes
    Namespace(HashMap<String, TranslationNode>),
}

impl TranslationNode {
    /// Create an empty namespace node
    pub fn empty_namespace() -> Self {
        TranslationNode::Namespace(HashMap::new())
    }

    /// Whether this node is a namespace
    pub fn is_namespace(&self) -> bool {
        matches!(self, TranslationNode::Namespace(_))
    }

    /// View this node as a message template
    pub fn as_message(&self) -> Option<&str> {
        match self {
            TranslationNode::Leaf(message) => Some(message),
            TranslationNode::Namespace(_) => None,
        }
    }

    /// View this node as a namespace mapping
    pub fn as_namespace(&self) -> Option<&HashMap<String, TranslationNode>> {
        match self {
            TranslationNode::Namespace(map) => Some(map),
            TranslationNode::Leaf(_) => None,
        }
    }

    /// Convert a scalar JSON value into a leaf node
    ///
    /// Strings are taken verbatim; numbers and booleans coerce to their
    /// display form. Nulls, arrays and objects are not valid leaves.
    pub fn from_scalar(value: &Value) -> Result<Self> {
        match value {
            Value::String(s) => Ok(TranslationNode::Leaf(s.clone())),
            Value::Number(n) => Ok(TranslationNode::Leaf(n.to_string())),
            Value::Bool(b) => Ok(TranslationNode::Leaf(b.to_string())),
            other => Err(LinguistError::InvalidInput(format!(
                "unsupported translation leaf: {other}"
            ))),
        }
    }

    /// Collect the dotted key paths of every leaf under this node
    pub fn collect_keys(&self, prefix: &str, keys: &mut BTreeSet<String>) {
        match self {
            TranslationNode::Leaf(_) => {
                if !prefix.is_empty() {
                    keys.insert(prefix.to_string());
                }
            }
            TranslationNode::Namespace(map) => {
                for (key, child) in map {
                    let child_prefix = if prefix.is_empty() {
                        key.clone()
                    } else {
                        format!("{prefix}.{key}")
                    };
                    child.collect_keys(&child_prefix, keys);
                }
            }
        }
    }
}

impl From<&str> for TranslationNode {
    fn from(message: &str) -> Self {
        TranslationNode::Leaf(message.to_string())
    }
}

impl From<String> for TranslationNode {
    fn from(message: String) -> Self {
        TranslationNode::Leaf(message)
    }
}

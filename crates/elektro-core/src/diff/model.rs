//! Diff output types.
//!
//! All types implement `Debug, Clone, Serialize, Deserialize, PartialEq`
//! so query surfaces can return them directly.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The kind of a single reported difference.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ChangeKind {
    /// Present only in the previous tree
    Removed,
    /// Present only in the next tree
    Added,
    /// Present in both trees with different values
    Changed,
}

/// A single difference between two compared configuration trees.
///
/// `path` locates the divergence from the comparison root: mapping keys
/// and sequence indices (rendered as decimal strings), outermost first.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChangeRecord {
    /// What happened at this path
    pub kind: ChangeKind,
    /// Key/index path from the comparison root
    pub path: Vec<String>,
    /// Value in the previous tree (None for Added)
    pub old_value: Option<Value>,
    /// Value in the next tree (None for Removed)
    pub new_value: Option<Value>,
}

impl ChangeRecord {
    /// A key/index present only in the previous tree
    pub fn removed(path: Vec<String>, old_value: Value) -> Self {
        Self {
            kind: ChangeKind::Removed,
            path,
            old_value: Some(old_value),
            new_value: None,
        }
    }

    /// A key/index present only in the next tree
    pub fn added(path: Vec<String>, new_value: Value) -> Self {
        Self {
            kind: ChangeKind::Added,
            path,
            old_value: None,
            new_value: Some(new_value),
        }
    }

    /// A value that differs between the two trees
    pub fn changed(path: Vec<String>, old_value: Value, new_value: Value) -> Self {
        Self {
            kind: ChangeKind::Changed,
            path,
            old_value: Some(old_value),
            new_value: Some(new_value),
        }
    }

    /// The path rendered with `.` separators, for display
    pub fn dotted_path(&self) -> String {
        self.path.join(".")
    }
}

//! Configuration diff computation engine.
//!
//! The core entry point is [`compare_configs`], which accepts the previous
//! and next configuration mappings and produces an ordered list of
//! [`ChangeRecord`]s.

use crate::diff::model::ChangeRecord;
use serde_json::{Map, Value};

/// Compute the differences between two configuration trees.
///
/// `a` is the previous version, `b` the next. The comparison is two-way:
/// swapping the arguments swaps Added and Removed kinds.
///
/// Scalar equality is exact `Value` equality. The canonical hasher rounds
/// floats before digesting; diffing deliberately does not, so two configs
/// can deduplicate to one digest while still showing a float change here.
///
/// Record order is deterministic: at each mapping level, removals come
/// first, then additions, then changes in common keys, each group in
/// sorted key order.
pub fn compare_configs(a: &Map<String, Value>, b: &Map<String, Value>) -> Vec<ChangeRecord> {
    let mut changes = Vec::new();
    compare_maps(a, b, &[], &mut changes);
    changes
}

/// Recursive mapping comparison. `path` is the location of `a`/`b` in the
/// comparison root.
fn compare_maps(
    a: &Map<String, Value>,
    b: &Map<String, Value>,
    path: &[String],
    out: &mut Vec<ChangeRecord>,
) {
    // serde_json::Map iterates in sorted key order, which makes the emitted
    // record order deterministic without an explicit sort.
    for (key, val_a) in a {
        if !b.contains_key(key) {
            out.push(ChangeRecord::removed(child_path(path, key), val_a.clone()));
        }
    }

    for (key, val_b) in b {
        if !a.contains_key(key) {
            out.push(ChangeRecord::added(child_path(path, key), val_b.clone()));
        }
    }

    for (key, val_a) in a {
        if let Some(val_b) = b.get(key) {
            compare_values(val_a, val_b, child_path(path, key), out);
        }
    }
}

/// Compare two values present at the same path in both trees.
fn compare_values(val_a: &Value, val_b: &Value, path: Vec<String>, out: &mut Vec<ChangeRecord>) {
    match (val_a, val_b) {
        (Value::Object(map_a), Value::Object(map_b)) => {
            // Exhaustive recursion: an empty result means the maps are equal
            compare_maps(map_a, map_b, &path, out);
        }
        (Value::Array(seq_a), Value::Array(seq_b)) => {
            compare_sequences(seq_a, seq_b, &path, out);
        }
        _ => {
            // Scalars or mixed types: no coercion, no recursion
            if val_a != val_b {
                out.push(ChangeRecord::changed(path, val_a.clone(), val_b.clone()));
            }
        }
    }
}

/// Pairwise sequence comparison by index, up to the shorter length.
/// Surplus indices in the longer sequence are removals (a longer) or
/// additions (b longer), scoped at that index.
fn compare_sequences(
    seq_a: &[Value],
    seq_b: &[Value],
    path: &[String],
    out: &mut Vec<ChangeRecord>,
) {
    let min_len = seq_a.len().min(seq_b.len());

    for i in 0..min_len {
        let item_a = &seq_a[i];
        let item_b = &seq_b[i];
        match (item_a, item_b) {
            (Value::Object(map_a), Value::Object(map_b)) => {
                compare_maps(map_a, map_b, &child_path(path, &i.to_string()), out);
            }
            _ => {
                if item_a != item_b {
                    out.push(ChangeRecord::changed(
                        child_path(path, &i.to_string()),
                        item_a.clone(),
                        item_b.clone(),
                    ));
                }
            }
        }
    }

    for (i, item) in seq_a.iter().enumerate().skip(min_len) {
        out.push(ChangeRecord::removed(
            child_path(path, &i.to_string()),
            item.clone(),
        ));
    }
    for (i, item) in seq_b.iter().enumerate().skip(min_len) {
        out.push(ChangeRecord::added(
            child_path(path, &i.to_string()),
            item.clone(),
        ));
    }
}

/// Extend a path with one more segment.
fn child_path(path: &[String], segment: &str) -> Vec<String> {
    let mut next = path.to_vec();
    next.push(segment.to_string());
    next
}

//! Bottom-up normalization of configuration trees.

use serde_json::{Map, Value};

/// Mapping keys starting with this prefix are implementation-reserved and
/// never participate in the canonical form.
pub const RESERVED_PREFIX: char = '_';

/// Default number of decimal places floating-point leaves are rounded to.
pub const DEFAULT_FLOAT_PRECISION: usize = 5;

/// Options controlling canonicalization.
///
/// Digests are only comparable between callers using the same options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanonicalOptions {
    /// Decimal places floating-point leaves are rendered to
    pub float_precision: usize,
}

impl Default for CanonicalOptions {
    fn default() -> Self {
        Self {
            float_precision: DEFAULT_FLOAT_PRECISION,
        }
    }
}

impl CanonicalOptions {
    /// Options with a non-default float precision
    pub fn with_precision(float_precision: usize) -> Self {
        Self { float_precision }
    }
}

/// Normalize a configuration tree into its canonical form.
///
/// Applied bottom-up:
/// - floating-point numbers become fixed-precision strings
/// - sequences are sorted (by `id` when every element carries one,
///   otherwise by each element's canonical serialization)
/// - mappings drop `_`-prefixed keys
/// - all other scalars pass through unchanged
pub fn normalize_value(value: &Value, opts: &CanonicalOptions) -> Value {
    match value {
        Value::Number(n) => {
            // Integer leaves stay integers; only true floats are re-rendered
            if n.is_i64() || n.is_u64() {
                value.clone()
            } else {
                match n.as_f64() {
                    Some(f) => Value::String(format!("{:.*}", opts.float_precision, f)),
                    None => value.clone(),
                }
            }
        }
        Value::Array(items) => {
            let mut normalized: Vec<Value> =
                items.iter().map(|item| normalize_value(item, opts)).collect();

            let all_have_ids = normalized
                .iter()
                .all(|item| item.as_object().is_some_and(|o| o.contains_key("id")));

            if all_have_ids {
                normalized.sort_by_cached_key(id_sort_key);
            } else {
                normalized.sort_by_cached_key(serialized_sort_key);
            }
            Value::Array(normalized)
        }
        Value::Object(map) => {
            let mut out = Map::new();
            for (key, val) in map {
                if key.starts_with(RESERVED_PREFIX) {
                    continue;
                }
                out.insert(key.clone(), normalize_value(val, opts));
            }
            Value::Object(out)
        }
        _ => value.clone(),
    }
}

/// Sort key for elements that all carry an `id`: the id's string form.
fn id_sort_key(item: &Value) -> String {
    match item.get("id") {
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
        None => String::new(),
    }
}

/// Fallback sort key: the element's canonical JSON serialization.
///
/// Map keys are already sorted here because `serde_json::Map` is a BTreeMap.
fn serialized_sort_key(item: &Value) -> String {
    serde_json::to_string(item).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_integers_pass_through() {
        let opts = CanonicalOptions::default();
        assert_eq!(normalize_value(&json!(42), &opts), json!(42));
        assert_eq!(normalize_value(&json!(-3), &opts), json!(-3));
    }

    #[test]
    fn test_floats_become_fixed_precision_strings() {
        let opts = CanonicalOptions::default();
        assert_eq!(normalize_value(&json!(1.5), &opts), json!("1.50000"));
        assert_eq!(normalize_value(&json!(1.000001), &opts), json!("1.00000"));
        assert_eq!(normalize_value(&json!(1.0000014), &opts), json!("1.00000"));
    }

    #[test]
    fn test_float_precision_is_configurable() {
        let opts = CanonicalOptions::with_precision(2);
        assert_eq!(normalize_value(&json!(0.125), &opts), json!("0.12"));
    }

    #[test]
    fn test_scalars_pass_through() {
        let opts = CanonicalOptions::default();
        assert_eq!(normalize_value(&json!("spike"), &opts), json!("spike"));
        assert_eq!(normalize_value(&json!(true), &opts), json!(true));
        assert_eq!(normalize_value(&Value::Null, &opts), Value::Null);
    }

    #[test]
    fn test_lists_sorted_by_id_when_all_elements_have_one() {
        let opts = CanonicalOptions::default();
        let normalized = normalize_value(
            &json!([{"id": "c2", "v": 1}, {"id": "c1", "v": 2}]),
            &opts,
        );
        assert_eq!(
            normalized,
            json!([{"id": "c1", "v": 2}, {"id": "c2", "v": 1}])
        );
    }

    #[test]
    fn test_lists_without_ids_sorted_by_serialization() {
        let opts = CanonicalOptions::default();
        let a = normalize_value(&json!([3, 1, 2]), &opts);
        let b = normalize_value(&json!([2, 3, 1]), &opts);
        assert_eq!(a, b);
    }

    #[test]
    fn test_mixed_list_falls_back_to_serialization_sort() {
        // One element without an id disables the id sort for the whole list
        let opts = CanonicalOptions::default();
        let a = normalize_value(&json!([{"id": "x"}, {"name": "y"}]), &opts);
        let b = normalize_value(&json!([{"name": "y"}, {"id": "x"}]), &opts);
        assert_eq!(a, b);
    }

    #[test]
    fn test_reserved_keys_are_dropped() {
        let opts = CanonicalOptions::default();
        let normalized = normalize_value(&json!({"a": 1, "_internal": 2}), &opts);
        assert_eq!(normalized, json!({"a": 1}));
    }

    #[test]
    fn test_nested_normalization() {
        let opts = CanonicalOptions::default();
        let normalized = normalize_value(
            &json!({"cells": [{"id": "c1", "v_init": -65.0, "_cache": 9}]}),
            &opts,
        );
        assert_eq!(
            normalized,
            json!({"cells": [{"id": "c1", "v_init": "-65.00000"}]})
        );
    }
}

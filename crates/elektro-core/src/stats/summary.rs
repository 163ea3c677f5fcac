//! Scalar aggregate computation.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// All scalar aggregates for one field over one selection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FieldSummary {
    /// Total number of rows in the selection, nulls included
    pub count: usize,
    /// Number of distinct non-null values
    pub distinct_count: usize,
    /// Maximum non-null value
    pub max: Option<f64>,
    /// Minimum non-null value
    pub min: Option<f64>,
    /// Mean of non-null values
    pub avg: Option<f64>,
    /// Sum of non-null values
    pub sum: Option<f64>,
}

/// Compute all scalar aggregates for a field in one pass.
///
/// `values` carries one entry per row; `None` marks a null field value.
pub fn summarize(values: &[Option<f64>]) -> FieldSummary {
    let count = values.len();

    let mut distinct: BTreeSet<u64> = BTreeSet::new();
    let mut non_null = 0usize;
    let mut max: Option<f64> = None;
    let mut min: Option<f64> = None;
    let mut sum = 0.0f64;

    for value in values.iter().flatten() {
        non_null += 1;
        // 0.0 and -0.0 compare equal
        let v = if *value == 0.0 { 0.0 } else { *value };
        distinct.insert(v.to_bits());
        max = Some(max.map_or(v, |m: f64| m.max(v)));
        min = Some(min.map_or(v, |m: f64| m.min(v)));
        sum += v;
    }

    let (avg, sum) = if non_null > 0 {
        (Some(sum / non_null as f64), Some(sum))
    } else {
        (None, None)
    };

    FieldSummary {
        count,
        distinct_count: distinct.len(),
        max,
        min,
        avg,
        sum,
    }
}

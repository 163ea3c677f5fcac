//! Result types for the engine's read-only query surface.

use elektro_core::diff::model::ChangeRecord;
use elektro_core::stats::{FieldSummary, TimeBucket};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Full view of one model.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ModelGetResult {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub parent_id: Option<String>,
    pub config_digest: String,
    pub config: Value,
}

/// Summary row for model listings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ModelSummary {
    pub id: String,
    pub name: String,
    pub config_digest: String,
}

/// The structured + rendered result of a changes query.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ModelChangesResult {
    /// Machine-readable change records
    pub changes: Vec<ChangeRecord>,
    /// Human-readable Markdown summary
    pub human_summary: String,
}

/// One collection's comparison for a comparisons query.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ComparisonResult {
    pub collection_id: String,
    pub changes: Vec<ChangeRecord>,
    pub human_summary: String,
}

/// Aggregates over one numeric config field across a collection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CollectionStatsResult {
    pub collection_id: String,
    /// Dotted path of the aggregated config field
    pub field: String,
    pub summary: FieldSummary,
    /// Time-bucketed series over member creation times, when requested
    pub series: Option<Vec<TimeBucket>>,
}

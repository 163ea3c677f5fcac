//! Engine-level read-only query surface.
//!
//! `apply_engine_query` is the single entry point for all read-only
//! queries. Unlike `apply_engine_command`, it accepts a shared
//! (non-mutable) store and never writes.

use std::time::Instant;

use elektro_core::diff::engine::compare_configs;
use elektro_core::diff::human_summary::render_human_summary;
use elektro_core::errors::{ElektroError, Result};
use elektro_core::ops::model_ops::{model_changes, model_comparisons};
use elektro_core::ops::Store;
use elektro_core::stats::{bucketed_series, summarize, Granularity};
use elektro_core::{log_op_end, log_op_error, log_op_start};
use elektro_core_types::RequestContext;
use serde_json::Value;

use crate::commands::read_tools::{
    CollectionStatsResult, ComparisonResult, ModelChangesResult, ModelGetResult, ModelSummary,
};

/// Read-only queries supported by the engine.
#[derive(Debug, Clone)]
pub enum EngineQuery {
    /// Get a model by ID.
    ModelGet { model_id: String },
    /// List all live models.
    ModelList,
    /// Compute the changes between a model and a comparison target.
    ModelChanges {
        model_id: String,
        /// Explicit target; None resolves the collection baseline
        to: Option<String>,
    },
    /// Compare a model against every collection containing it.
    ModelComparisons { model_id: String },
    /// Diff two raw configuration trees (no store access).
    ConfigDiff { a: Value, b: Value },
    /// Aggregate a numeric config field across a collection.
    CollectionStats {
        collection_id: String,
        /// Dotted path into the member configs (e.g. "soma.tau")
        field: String,
        /// When set, also bucket by member creation time
        series_by: Option<Granularity>,
    },
}

/// Result of applying an engine query.
#[derive(Debug, Clone)]
pub enum EngineQueryResult {
    ModelGet(ModelGetResult),
    ModelList(Vec<ModelSummary>),
    ModelChanges(Box<ModelChangesResult>),
    ModelComparisons(Vec<ComparisonResult>),
    ConfigDiff(Box<ModelChangesResult>),
    CollectionStats(CollectionStatsResult),
}

/// Apply a read-only engine query against a store.
///
/// # Errors
///
/// Propagates the underlying operation's error unchanged; see the
/// individual ops for their taxonomies.
pub fn apply_engine_query(
    query: EngineQuery,
    store: &Store,
    ctx: &RequestContext,
) -> Result<EngineQueryResult> {
    match query {
        EngineQuery::ModelGet { model_id } => {
            let model = store.get_model(&model_id)?;
            Ok(EngineQueryResult::ModelGet(ModelGetResult {
                id: model.id.clone(),
                name: model.name.clone(),
                description: model.description.clone(),
                parent_id: model.parent_id.clone(),
                config_digest: model.config_digest.clone(),
                config: model.config.clone(),
            }))
        }

        EngineQuery::ModelList => {
            let mut summaries: Vec<ModelSummary> = store
                .list_models()
                .into_iter()
                .map(|m| ModelSummary {
                    id: m.id.clone(),
                    name: m.name.clone(),
                    config_digest: m.config_digest.clone(),
                })
                .collect();
            summaries.sort_by(|a, b| a.id.cmp(&b.id));
            Ok(EngineQueryResult::ModelList(summaries))
        }

        EngineQuery::ModelChanges { model_id, to } => {
            let start = Instant::now();
            log_op_start!(
                "model_changes",
                request_id = ctx.request_id.as_str(),
                model_id = model_id.as_str()
            );

            match model_changes(store, &model_id, to.as_deref()) {
                Ok(changes) => {
                    let duration_ms = start.elapsed().as_millis() as u64;
                    log_op_end!(
                        "model_changes",
                        duration_ms = duration_ms,
                        change_count = changes.len()
                    );
                    let human_summary = render_human_summary(&changes);
                    Ok(EngineQueryResult::ModelChanges(Box::new(
                        ModelChangesResult {
                            changes,
                            human_summary,
                        },
                    )))
                }
                Err(e) => {
                    let duration_ms = start.elapsed().as_millis() as u64;
                    log_op_error!("model_changes", e, duration_ms = duration_ms);
                    Err(e)
                }
            }
        }

        EngineQuery::ModelComparisons { model_id } => {
            let comparisons = model_comparisons(store, &model_id)?;
            Ok(EngineQueryResult::ModelComparisons(
                comparisons
                    .into_iter()
                    .map(|c| {
                        let human_summary = render_human_summary(&c.changes);
                        ComparisonResult {
                            collection_id: c.collection_id,
                            changes: c.changes,
                            human_summary,
                        }
                    })
                    .collect(),
            ))
        }

        EngineQuery::ConfigDiff { a, b } => {
            let map_a = a.as_object().ok_or_else(|| ElektroError::InvalidConfig {
                reason: "left config root must be a mapping".to_string(),
            })?;
            let map_b = b.as_object().ok_or_else(|| ElektroError::InvalidConfig {
                reason: "right config root must be a mapping".to_string(),
            })?;
            let changes = compare_configs(map_a, map_b);
            let human_summary = render_human_summary(&changes);
            Ok(EngineQueryResult::ConfigDiff(Box::new(ModelChangesResult {
                changes,
                human_summary,
            })))
        }

        EngineQuery::CollectionStats {
            collection_id,
            field,
            series_by,
        } => {
            let start = Instant::now();
            log_op_start!(
                "collection_stats",
                request_id = ctx.request_id.as_str(),
                collection_id = collection_id.as_str()
            );

            match collection_stats(store, &collection_id, &field, series_by) {
                Ok(result) => {
                    let duration_ms = start.elapsed().as_millis() as u64;
                    log_op_end!(
                        "collection_stats",
                        duration_ms = duration_ms,
                        sample_count = result.summary.count
                    );
                    Ok(EngineQueryResult::CollectionStats(result))
                }
                Err(e) => {
                    let duration_ms = start.elapsed().as_millis() as u64;
                    log_op_error!("collection_stats", e, duration_ms = duration_ms);
                    Err(e)
                }
            }
        }
    }
}

/// Aggregate one numeric config field across a collection's live members.
///
/// Members missing the field contribute null rows (counted, excluded from
/// the aggregates); a present but non-numeric value is an error.
fn collection_stats(
    store: &Store,
    collection_id: &str,
    field: &str,
    series_by: Option<Granularity>,
) -> Result<CollectionStatsResult> {
    let collection = store.get_collection(collection_id)?;
    if !collection.has_models() {
        return Err(ElektroError::CollectionEmpty {
            collection_id: collection_id.to_string(),
        });
    }

    let mut samples = Vec::new();
    for model_id in &collection.model_ids {
        let Ok(model) = store.get_model(model_id) else {
            continue; // tombstoned members drop out of the selection
        };
        let value = match extract_field(&model.config, field) {
            None | Some(Value::Null) => None,
            Some(Value::Number(n)) => n.as_f64(),
            Some(_) => {
                return Err(ElektroError::NonNumericField {
                    field: field.to_string(),
                    model_id: model.id.clone(),
                })
            }
        };
        samples.push((model.created_at, value));
    }

    let values: Vec<Option<f64>> = samples.iter().map(|(_, v)| *v).collect();
    let summary = summarize(&values);
    let series = series_by.map(|by| bucketed_series(&samples, by));

    Ok(CollectionStatsResult {
        collection_id: collection_id.to_string(),
        field: field.to_string(),
        summary,
        series,
    })
}

/// Resolve a dotted path inside a config tree. Numeric segments index
/// into sequences.
fn extract_field<'v>(config: &'v Value, path: &str) -> Option<&'v Value> {
    path.split('.').try_fold(config, |current, segment| {
        match current {
            Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
            _ => current.get(segment),
        }
    })
}

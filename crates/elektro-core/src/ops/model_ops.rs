//! Model operations: create-or-update by digest, change queries, and
//! collection comparisons.

use serde_json::Value;
use uuid::Uuid;

use crate::canonical::{config_digest, CanonicalOptions};
use crate::diff::engine::compare_configs;
use crate::diff::model::ChangeRecord;
use crate::errors::{ElektroError, Result};
use crate::model::{ModelCollection, NeuronModel};
use crate::ops::store::Store;

/// Input for creating (or deduplicating into) a model.
#[derive(Debug, Clone)]
pub struct CreateModelInput {
    pub name: String,
    pub description: Option<String>,
    /// Optional parent model for version lineage
    pub parent_id: Option<String>,
    /// The configuration tree (root must be a mapping)
    pub config: Value,
}

/// Result of a create-or-update operation.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelUpsert {
    /// ID of the created or updated model
    pub model_id: String,
    /// Canonical digest the model is keyed by
    pub config_digest: String,
    /// Whether an existing model with this digest was updated in place
    pub was_duplicate: bool,
}

/// One collection's comparison result for a model.
#[derive(Debug, Clone, PartialEq)]
pub struct Comparison {
    /// The collection the model was compared within
    pub collection_id: String,
    /// Differences against the collection's baseline
    pub changes: Vec<ChangeRecord>,
}

/// Create a model, or update the existing model carrying the same
/// canonical config digest.
///
/// The digest is the natural key: a semantically equivalent configuration
/// (any key order, any unordered-list order, floats equal after rounding)
/// lands on the existing record, which gets its name, description and
/// parent refreshed. A tombstoned match is revived as a fresh creation.
///
/// # Errors
///
/// - `InvalidName` — name is empty or whitespace-only
/// - `InvalidConfig` — config root is not a mapping
/// - `ModelNotFound` — `parent_id` does not resolve to a live model
pub fn create_or_update_model(
    store: &mut Store,
    input: CreateModelInput,
    opts: &CanonicalOptions,
) -> Result<ModelUpsert> {
    if input.name.trim().is_empty() {
        return Err(ElektroError::InvalidName {
            reason: "name cannot be empty".to_string(),
        });
    }
    if !input.config.is_object() {
        return Err(ElektroError::InvalidConfig {
            reason: "config root must be a mapping".to_string(),
        });
    }
    if let Some(parent_id) = &input.parent_id {
        store.get_model(parent_id)?;
    }

    let digest = config_digest(&input.config, opts)?;

    if let Some(existing_id) = store.find_model_id_by_digest(&digest) {
        let existing_id = existing_id.to_string();
        // Index entries can point at tombstoned models; those revive
        let was_live = store.get_model(&existing_id).is_ok();
        if let Some(model) = store.models.get_mut(&existing_id) {
            model.name = input.name;
            model.description = input.description;
            model.parent_id = input.parent_id;
            model.config = input.config;
            model.deleted = false;
            model.touch();
            return Ok(ModelUpsert {
                model_id: existing_id,
                config_digest: digest,
                was_duplicate: was_live,
            });
        }
    }

    let mut model = NeuronModel::new(
        Uuid::now_v7().to_string(),
        input.name,
        digest.clone(),
        input.config,
    );
    model.description = input.description;
    model.parent_id = input.parent_id;
    let model_id = model.id.clone();
    store.insert_model(model);

    Ok(ModelUpsert {
        model_id,
        config_digest: digest,
        was_duplicate: false,
    })
}

/// Resolve the baseline model of a collection: the explicit comparison
/// target when it is live, otherwise the first live member.
fn resolve_baseline(store: &Store, collection: &ModelCollection) -> Option<String> {
    if let Some(id) = &collection.comparison_model_id {
        if store.get_model(id).is_ok() {
            return Some(id.clone());
        }
    }
    collection
        .model_ids
        .iter()
        .find(|id| store.get_model(id).is_ok())
        .cloned()
}

/// Compute the changes between a model's config and a comparison target.
///
/// With an explicit `to`, the target is that model. Otherwise the target
/// is the baseline of the first collection containing the model.
///
/// # Errors
///
/// - `ModelNotFound` / `ModelDeleted` — either side does not resolve
/// - `NoComparisonTarget` — no `to` given and no collection baseline exists
/// - `InvalidConfig` — either config root is not a mapping
pub fn model_changes(
    store: &Store,
    model_id: &str,
    to: Option<&str>,
) -> Result<Vec<ChangeRecord>> {
    let model = store.get_model(model_id)?;

    let target_id = match to {
        Some(id) => id.to_string(),
        None => {
            let collections = store.collections_containing(model_id);
            let collection =
                collections
                    .first()
                    .ok_or_else(|| ElektroError::NoComparisonTarget {
                        model_id: model_id.to_string(),
                        reason: "model is not in any collection".to_string(),
                    })?;
            resolve_baseline(store, collection).ok_or_else(|| ElektroError::NoComparisonTarget {
                model_id: model_id.to_string(),
                reason: format!("collection {} has no live baseline", collection.id),
            })?
        }
    };

    let target = store.get_model(&target_id)?;
    diff_configs(model, target)
}

/// Compare a model against the baseline of every collection containing it.
///
/// Collections whose baseline cannot be resolved are skipped.
///
/// # Errors
///
/// - `ModelNotFound` / `ModelDeleted` — the model does not resolve
/// - `InvalidConfig` — a compared config root is not a mapping
pub fn model_comparisons(store: &Store, model_id: &str) -> Result<Vec<Comparison>> {
    let model = store.get_model(model_id)?;

    let mut comparisons = Vec::new();
    for collection in store.collections_containing(model_id) {
        let Some(baseline_id) = resolve_baseline(store, collection) else {
            continue;
        };
        let baseline = store.get_model(&baseline_id)?;
        comparisons.push(Comparison {
            collection_id: collection.id.clone(),
            changes: diff_configs(model, baseline)?,
        });
    }

    Ok(comparisons)
}

/// Diff two models' configs, requiring mapping roots.
fn diff_configs(a: &NeuronModel, b: &NeuronModel) -> Result<Vec<ChangeRecord>> {
    let map_a = a.config.as_object().ok_or_else(|| ElektroError::InvalidConfig {
        reason: format!("config of model {} is not a mapping", a.id),
    })?;
    let map_b = b.config.as_object().ok_or_else(|| ElektroError::InvalidConfig {
        reason: format!("config of model {} is not a mapping", b.id),
    })?;
    Ok(compare_configs(map_a, map_b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff::model::ChangeKind;
    use serde_json::json;

    fn create(store: &mut Store, name: &str, config: Value) -> ModelUpsert {
        create_or_update_model(
            store,
            CreateModelInput {
                name: name.to_string(),
                description: None,
                parent_id: None,
                config,
            },
            &CanonicalOptions::default(),
        )
        .unwrap()
    }

    #[test]
    fn test_create_inserts_new_model() {
        let mut store = Store::new();
        let upsert = create(&mut store, "m", json!({"a": 1}));

        assert!(!upsert.was_duplicate);
        assert_eq!(upsert.config_digest.len(), 64);
        let model = store.get_model(&upsert.model_id).unwrap();
        assert_eq!(model.config_digest, upsert.config_digest);
    }

    #[test]
    fn test_equivalent_config_deduplicates() {
        let mut store = Store::new();
        let first = create(&mut store, "original", json!({"a": 1, "b": [1, 2]}));
        // Same content, different key and list order
        let second = create(&mut store, "renamed", json!({"b": [2, 1], "a": 1}));

        assert!(second.was_duplicate);
        assert_eq!(first.model_id, second.model_id);
        assert_eq!(first.config_digest, second.config_digest);
        // Duplicate creation refreshed the mutable fields
        assert_eq!(store.get_model(&first.model_id).unwrap().name, "renamed");
        assert_eq!(store.list_models().len(), 1);
    }

    #[test]
    fn test_different_config_creates_new_model() {
        let mut store = Store::new();
        let first = create(&mut store, "m", json!({"a": 1}));
        let second = create(&mut store, "m", json!({"a": 2}));

        assert!(!second.was_duplicate);
        assert_ne!(first.model_id, second.model_id);
        assert_eq!(store.list_models().len(), 2);
    }

    #[test]
    fn test_tombstoned_match_revives() {
        let mut store = Store::new();
        let first = create(&mut store, "m", json!({"a": 1}));
        store.models.get_mut(&first.model_id).unwrap().deleted = true;

        let second = create(&mut store, "m again", json!({"a": 1}));
        assert!(!second.was_duplicate);
        assert_eq!(second.model_id, first.model_id);
        assert!(store.get_model(&first.model_id).is_ok());
    }

    #[test]
    fn test_empty_name_rejected() {
        let mut store = Store::new();
        let result = create_or_update_model(
            &mut store,
            CreateModelInput {
                name: "  ".to_string(),
                description: None,
                parent_id: None,
                config: json!({}),
            },
            &CanonicalOptions::default(),
        );
        assert!(matches!(result, Err(ElektroError::InvalidName { .. })));
    }

    #[test]
    fn test_non_mapping_config_rejected() {
        let mut store = Store::new();
        let result = create_or_update_model(
            &mut store,
            CreateModelInput {
                name: "m".to_string(),
                description: None,
                parent_id: None,
                config: json!([1, 2, 3]),
            },
            &CanonicalOptions::default(),
        );
        assert!(matches!(result, Err(ElektroError::InvalidConfig { .. })));
    }

    #[test]
    fn test_unknown_parent_rejected() {
        let mut store = Store::new();
        let result = create_or_update_model(
            &mut store,
            CreateModelInput {
                name: "m".to_string(),
                description: None,
                parent_id: Some("ghost".to_string()),
                config: json!({}),
            },
            &CanonicalOptions::default(),
        );
        assert!(matches!(result, Err(ElektroError::ModelNotFound { .. })));
    }

    #[test]
    fn test_model_changes_with_explicit_target() {
        let mut store = Store::new();
        let a = create(&mut store, "a", json!({"a": 1, "b": 2}));
        let b = create(&mut store, "b", json!({"b": 3, "c": 4}));

        let changes = model_changes(&store, &a.model_id, Some(&b.model_id)).unwrap();
        assert_eq!(changes.len(), 3);
        assert!(changes
            .iter()
            .any(|c| c.kind == ChangeKind::Removed && c.path == vec!["a"]));
        assert!(changes
            .iter()
            .any(|c| c.kind == ChangeKind::Added && c.path == vec!["c"]));
        assert!(changes
            .iter()
            .any(|c| c.kind == ChangeKind::Changed && c.path == vec!["b"]));
    }

    #[test]
    fn test_model_changes_defaults_to_collection_baseline() {
        let mut store = Store::new();
        let baseline = create(&mut store, "baseline", json!({"tau": 20}));
        let variant = create(&mut store, "variant", json!({"tau": 25}));

        let mut col = ModelCollection::new("col-1".to_string(), "L5".to_string());
        col.add_model_id(baseline.model_id.clone());
        col.add_model_id(variant.model_id.clone());
        store.insert_collection(col);

        let changes = model_changes(&store, &variant.model_id, None).unwrap();
        assert_eq!(changes.len(), 1);
        assert_eq!(changes[0].path, vec!["tau"]);
        assert_eq!(changes[0].old_value, Some(json!(25)));
        assert_eq!(changes[0].new_value, Some(json!(20)));
    }

    #[test]
    fn test_model_changes_without_target_errors() {
        let mut store = Store::new();
        let orphan = create(&mut store, "orphan", json!({"a": 1}));
        let result = model_changes(&store, &orphan.model_id, None);
        assert!(matches!(
            result,
            Err(ElektroError::NoComparisonTarget { .. })
        ));
    }

    #[test]
    fn test_model_comparisons_cover_all_collections() {
        let mut store = Store::new();
        let baseline = create(&mut store, "baseline", json!({"tau": 20}));
        let variant = create(&mut store, "variant", json!({"tau": 25}));

        let mut col1 = ModelCollection::new("col-1".to_string(), "One".to_string());
        col1.add_model_id(baseline.model_id.clone());
        col1.add_model_id(variant.model_id.clone());
        let mut col2 = ModelCollection::new("col-2".to_string(), "Two".to_string());
        col2.add_model_id(variant.model_id.clone());
        col2.created_at = col1.created_at;
        store.insert_collection(col1);
        store.insert_collection(col2);

        let comparisons = model_comparisons(&store, &variant.model_id).unwrap();
        assert_eq!(comparisons.len(), 2);
        assert_eq!(comparisons[0].collection_id, "col-1");
        assert_eq!(comparisons[0].changes.len(), 1);
        // col-2's baseline is the variant itself: empty diff
        assert_eq!(comparisons[1].collection_id, "col-2");
        assert!(comparisons[1].changes.is_empty());
    }

    #[test]
    fn test_explicit_comparison_model_is_preferred() {
        let mut store = Store::new();
        let first = create(&mut store, "first", json!({"x": 1}));
        let pinned = create(&mut store, "pinned", json!({"x": 2}));
        let variant = create(&mut store, "variant", json!({"x": 3}));

        let mut col = ModelCollection::new("col-1".to_string(), "Pinned".to_string());
        col.add_model_id(first.model_id.clone());
        col.add_model_id(pinned.model_id.clone());
        col.add_model_id(variant.model_id.clone());
        col.comparison_model_id = Some(pinned.model_id.clone());
        store.insert_collection(col);

        let changes = model_changes(&store, &variant.model_id, None).unwrap();
        assert_eq!(changes[0].old_value, Some(json!(3)));
        assert_eq!(changes[0].new_value, Some(json!(2)));
    }
}

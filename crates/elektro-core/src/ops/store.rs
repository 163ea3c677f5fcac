use std::collections::HashMap;

use crate::errors::{ElektroError, Result};
use crate::model::{ModelCollection, NeuronModel};

/// In-memory store for models and collections
///
/// A simple HashMap-based storage layer hydrated per request surface.
/// Not thread-safe (no Arc/RwLock) - designed for single-threaded use.
/// All storage access is encapsulated here, including the digest index
/// that backs create-or-update deduplication.
#[derive(Debug, Clone, Default)]
pub struct Store {
    /// Map of model ID to NeuronModel
    pub(crate) models: HashMap<String, NeuronModel>,
    /// Map of collection ID to ModelCollection
    pub(crate) collections: HashMap<String, ModelCollection>,
    /// Map of config digest to model ID (the dedup index)
    pub(crate) digest_index: HashMap<String, String>,
}

impl Store {
    /// Create a new empty Store
    pub fn new() -> Self {
        Self {
            models: HashMap::new(),
            collections: HashMap::new(),
            digest_index: HashMap::new(),
        }
    }

    /// Get a model by ID
    ///
    /// Returns the model if found and not deleted, otherwise returns an error.
    ///
    /// # Errors
    ///
    /// Returns `ModelNotFound` if the model doesn't exist, or `ModelDeleted`
    /// if it was tombstoned.
    pub fn get_model(&self, id: &str) -> Result<&NeuronModel> {
        let model = self
            .models
            .get(id)
            .ok_or_else(|| ElektroError::ModelNotFound {
                model_id: id.to_string(),
            })?;

        if model.deleted {
            return Err(ElektroError::ModelDeleted {
                model_id: id.to_string(),
            });
        }

        Ok(model)
    }

    /// Get a mutable reference to a model by ID
    ///
    /// # Errors
    ///
    /// Returns `ModelNotFound` if the model doesn't exist, or `ModelDeleted`
    /// if it was tombstoned.
    pub fn get_model_mut(&mut self, id: &str) -> Result<&mut NeuronModel> {
        let model = self
            .models
            .get_mut(id)
            .ok_or_else(|| ElektroError::ModelNotFound {
                model_id: id.to_string(),
            })?;

        if model.deleted {
            return Err(ElektroError::ModelDeleted {
                model_id: id.to_string(),
            });
        }

        Ok(model)
    }

    /// Get a collection by ID
    ///
    /// # Errors
    ///
    /// Returns `CollectionNotFound` if the collection doesn't exist, or
    /// `CollectionDeleted` if it was tombstoned.
    pub fn get_collection(&self, id: &str) -> Result<&ModelCollection> {
        let collection =
            self.collections
                .get(id)
                .ok_or_else(|| ElektroError::CollectionNotFound {
                    collection_id: id.to_string(),
                })?;

        if collection.deleted {
            return Err(ElektroError::CollectionDeleted {
                collection_id: id.to_string(),
            });
        }

        Ok(collection)
    }

    /// Get a mutable reference to a collection by ID
    ///
    /// # Errors
    ///
    /// Returns `CollectionNotFound` if the collection doesn't exist, or
    /// `CollectionDeleted` if it was tombstoned.
    pub fn get_collection_mut(&mut self, id: &str) -> Result<&mut ModelCollection> {
        let collection =
            self.collections
                .get_mut(id)
                .ok_or_else(|| ElektroError::CollectionNotFound {
                    collection_id: id.to_string(),
                })?;

        if collection.deleted {
            return Err(ElektroError::CollectionDeleted {
                collection_id: id.to_string(),
            });
        }

        Ok(collection)
    }

    /// List all non-deleted models
    pub fn list_models(&self) -> Vec<&NeuronModel> {
        self.models.values().filter(|m| !m.deleted).collect()
    }

    /// List all non-deleted collections
    pub fn list_collections(&self) -> Vec<&ModelCollection> {
        self.collections.values().filter(|c| !c.deleted).collect()
    }

    /// Insert a model into the store, indexing its config digest
    pub fn insert_model(&mut self, model: NeuronModel) {
        self.digest_index
            .insert(model.config_digest.clone(), model.id.clone());
        self.models.insert(model.id.clone(), model);
    }

    /// Insert a collection into the store
    pub fn insert_collection(&mut self, collection: ModelCollection) {
        self.collections.insert(collection.id.clone(), collection);
    }

    /// Look up the model carrying a config digest (including tombstoned models)
    pub fn find_model_id_by_digest(&self, digest: &str) -> Option<&str> {
        self.digest_index.get(digest).map(|id| id.as_str())
    }

    /// Non-deleted collections containing a model, in stable
    /// creation order (created_at, then ID)
    pub fn collections_containing(&self, model_id: &str) -> Vec<&ModelCollection> {
        let mut collections: Vec<&ModelCollection> = self
            .collections
            .values()
            .filter(|c| !c.deleted && c.contains_model(model_id))
            .collect();
        collections.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
        collections
    }

    /// Get a model from storage, bypassing the deleted check
    ///
    /// This is useful for testing tombstone behavior.
    pub fn get_model_raw(&self, id: &str) -> Option<&NeuronModel> {
        self.models.get(id)
    }
}

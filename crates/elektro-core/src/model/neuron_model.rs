use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// NeuronModel - a versioned neuron model configuration
///
/// A NeuronModel records one configuration of a simulatable neuron. The
/// configuration tree is content-addressed: `config_digest` is the
/// canonical digest of `config` and acts as the natural dedup key, so
/// semantically equivalent submissions resolve to the same record.
/// Models form version lineages through `parent_id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NeuronModel {
    /// Unique identifier for this model (UUID v7)
    pub id: String,

    /// Human-readable name
    pub name: String,

    /// Optional free-form description
    pub description: Option<String>,

    /// Optional parent model ID (None for lineage roots)
    pub parent_id: Option<String>,

    /// Canonical content digest of `config` (the dedup key)
    pub config_digest: String,

    /// The configuration tree this model was created from
    pub config: Value,

    /// Timestamp when this model was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when this model was last updated
    pub updated_at: DateTime<Utc>,

    /// Tombstone flag - if true, this model is considered deleted
    pub deleted: bool,
}

impl NeuronModel {
    /// Create a new NeuronModel
    ///
    /// # Arguments
    /// * `id` - Unique identifier (typically UUID v7)
    /// * `name` - Human-readable name
    /// * `config_digest` - Canonical digest of `config`
    /// * `config` - The configuration tree
    pub fn new(id: String, name: String, config_digest: String, config: Value) -> Self {
        let now = Utc::now();
        Self {
            id,
            name,
            description: None,
            parent_id: None,
            config_digest,
            config,
            created_at: now,
            updated_at: now,
            deleted: false,
        }
    }

    /// Check if this model is a lineage root (has no parent)
    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }

    /// Check if this model is deleted
    pub fn is_deleted(&self) -> bool {
        self.deleted
    }

    /// Bump the updated_at timestamp
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

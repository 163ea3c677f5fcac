use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// ModelCollection - a set of mutually comparable models
///
/// Collections group model versions that describe the same underlying
/// neuron. Comparison queries resolve their baseline against the
/// collection: the explicit `comparison_model_id` when set, otherwise the
/// collection's first member.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelCollection {
    /// Unique identifier for this collection (UUID v7)
    pub id: String,

    /// Human-readable name
    pub name: String,

    /// Optional free-form description
    pub description: Option<String>,

    /// Member model IDs (in insertion order)
    pub model_ids: Vec<String>,

    /// Optional explicit comparison baseline
    pub comparison_model_id: Option<String>,

    /// Timestamp when this collection was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when this collection was last updated
    pub updated_at: DateTime<Utc>,

    /// Tombstone flag - if true, this collection is considered deleted
    pub deleted: bool,
}

impl ModelCollection {
    /// Create a new empty ModelCollection
    pub fn new(id: String, name: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            name,
            description: None,
            model_ids: Vec::new(),
            comparison_model_id: None,
            created_at: now,
            updated_at: now,
            deleted: false,
        }
    }

    /// Check if this collection has any members
    pub fn has_models(&self) -> bool {
        !self.model_ids.is_empty()
    }

    /// Check if a model is a member of this collection
    pub fn contains_model(&self, model_id: &str) -> bool {
        self.model_ids.iter().any(|id| id == model_id)
    }

    /// The baseline model for comparisons: the explicit comparison target
    /// when set, otherwise the first member.
    pub fn baseline_model_id(&self) -> Option<&str> {
        self.comparison_model_id
            .as_deref()
            .or_else(|| self.model_ids.first().map(|s| s.as_str()))
    }

    /// Add a model ID to this collection's member list
    pub fn add_model_id(&mut self, model_id: String) {
        if !self.model_ids.contains(&model_id) {
            self.model_ids.push(model_id);
        }
    }
}

use thiserror::Error;

/// Result type alias using ElektroError
pub type Result<T> = std::result::Result<T, ElektroError>;

/// Comprehensive error taxonomy for Elektro operations
///
/// Each variant maps to a stable error code (see [`ElektroError::code`])
/// that can be used for programmatic error handling, testing, and external
/// API responses.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ElektroError {
    // ===== Registry Errors =====
    /// Model not found in store
    #[error("Model not found: {model_id}")]
    ModelNotFound { model_id: String },

    /// Model was previously deleted (tombstoned)
    #[error("Model was deleted: {model_id}")]
    ModelDeleted { model_id: String },

    /// Collection not found in store
    #[error("Collection not found: {collection_id}")]
    CollectionNotFound { collection_id: String },

    /// Collection was previously deleted (tombstoned)
    #[error("Collection was deleted: {collection_id}")]
    CollectionDeleted { collection_id: String },

    /// Collection has no members to compare against
    #[error("Collection has no members: {collection_id}")]
    CollectionEmpty { collection_id: String },

    /// Model is already a member of the collection
    #[error("Model {model_id} is already in collection {collection_id}")]
    AlreadyInCollection {
        model_id: String,
        collection_id: String,
    },

    /// No comparison target could be resolved for a changes query
    #[error("No comparison target for model {model_id}: {reason}")]
    NoComparisonTarget { model_id: String, reason: String },

    // ===== Validation Errors =====
    /// Invalid model name (empty or whitespace-only)
    #[error("Invalid name: {reason}")]
    InvalidName { reason: String },

    /// Configuration root is not a mapping, or a leaf is not serializable
    #[error("Invalid config: {reason}")]
    InvalidConfig { reason: String },

    /// Field path did not resolve to a numeric value where one was required
    #[error("Field {field} is not numeric in model {model_id}")]
    NonNumericField { field: String, model_id: String },

    // ===== Generic Errors =====
    /// Serialization error (JSON encoding/decoding)
    #[error("Serialization error: {message}")]
    Serialization { message: String },

    /// Generic internal error
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl ElektroError {
    /// Get the stable error code for this error
    pub fn code(&self) -> &'static str {
        match self {
            ElektroError::ModelNotFound { .. } => "ERR_MODEL_NOT_FOUND",
            ElektroError::ModelDeleted { .. } => "ERR_MODEL_DELETED",
            ElektroError::CollectionNotFound { .. } => "ERR_COLLECTION_NOT_FOUND",
            ElektroError::CollectionDeleted { .. } => "ERR_COLLECTION_DELETED",
            ElektroError::CollectionEmpty { .. } => "ERR_COLLECTION_EMPTY",
            ElektroError::AlreadyInCollection { .. } => "ERR_ALREADY_IN_COLLECTION",
            ElektroError::NoComparisonTarget { .. } => "ERR_NO_COMPARISON_TARGET",
            ElektroError::InvalidName { .. } => "ERR_INVALID_NAME",
            ElektroError::InvalidConfig { .. } => "ERR_INVALID_CONFIG",
            ElektroError::NonNumericField { .. } => "ERR_NON_NUMERIC_FIELD",
            ElektroError::Serialization { .. } => "ERR_SERIALIZATION",
            ElektroError::Internal { .. } => "ERR_INTERNAL",
        }
    }
}

/// Conversion from serde_json::Error to ElektroError
impl From<serde_json::Error> for ElektroError {
    fn from(err: serde_json::Error) -> Self {
        ElektroError::Serialization {
            message: err.to_string(),
        }
    }
}

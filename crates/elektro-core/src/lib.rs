//! Elektro Core - In-memory kernel of the model registry
//!
//! This crate provides the foundational data structures and algorithms for
//! Elektro, including:
//! - Canonical normalization and content digests for model configurations
//! - Structural diffing of configuration trees with path-scoped records
//! - Scalar and time-bucketed statistics over numeric samples
//! - NeuronModel and ModelCollection domain models with tombstone semantics
//! - In-memory Store with create-or-update-by-digest deduplication

pub mod canonical;
pub mod diff;
pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod ops;
pub mod stats;

// Re-export commonly used types
pub use canonical::{config_digest, CanonicalOptions};
pub use diff::{compare_configs, ChangeKind, ChangeRecord};
pub use errors::{ElektroError, Result};
pub use model::{ModelCollection, NeuronModel};
pub use ops::Store;

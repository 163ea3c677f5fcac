//! Model creation orchestration.
//!
//! Create is an upsert keyed by the canonical config digest: an equivalent
//! configuration lands on the existing record and returns
//! `was_duplicate = true` instead of inserting a second copy.

use std::time::Instant;

use elektro_core::canonical::CanonicalOptions;
use elektro_core::errors::Result;
use elektro_core::ops::model_ops::{create_or_update_model, CreateModelInput};
use elektro_core::ops::Store;
use elektro_core::{log_op_end, log_op_error, log_op_start};
use elektro_core_types::RequestContext;

/// Options for model creation.
#[derive(Debug, Clone, Copy, Default)]
pub struct CreateModelOptions {
    /// Canonicalization options used to compute the dedup digest
    pub canonical: CanonicalOptions,
}

/// Result of a successful model creation.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateModelResult {
    /// ID of the created or updated model
    pub model_id: String,
    /// Canonical config digest (the natural dedup key)
    pub config_digest: String,
    /// Whether this was a duplicate (idempotent return)
    pub was_duplicate: bool,
}

/// Create a neuron model - CANONICAL entry point.
///
/// Computes the canonical digest of `input.config` and creates a new model
/// or refreshes the existing model carrying the same digest.
///
/// # Errors
///
/// - `InvalidName` — name is empty or whitespace-only
/// - `InvalidConfig` — config root is not a mapping
/// - `ModelNotFound` — `parent_id` does not resolve to a live model
pub fn create_neuron_model(
    store: &mut Store,
    input: CreateModelInput,
    options: CreateModelOptions,
    ctx: &RequestContext,
) -> Result<CreateModelResult> {
    let start = Instant::now();
    log_op_start!(
        "create_neuron_model",
        request_id = ctx.request_id.as_str(),
        model_name = input.name.as_str()
    );

    match create_or_update_model(store, input, &options.canonical) {
        Ok(upsert) => {
            let duration_ms = start.elapsed().as_millis() as u64;
            log_op_end!(
                "create_neuron_model",
                duration_ms = duration_ms,
                model_id = upsert.model_id.as_str(),
                config_digest = upsert.config_digest.as_str(),
                was_duplicate = upsert.was_duplicate
            );
            Ok(CreateModelResult {
                model_id: upsert.model_id,
                config_digest: upsert.config_digest,
                was_duplicate: upsert.was_duplicate,
            })
        }
        Err(e) => {
            let duration_ms = start.elapsed().as_millis() as u64;
            log_op_error!("create_neuron_model", e, duration_ms = duration_ms);
            Err(e)
        }
    }
}

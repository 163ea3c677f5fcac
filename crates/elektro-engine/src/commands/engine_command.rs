//! Engine-level action commands (mutations).

use crate::commands::model::{create_neuron_model, CreateModelOptions, CreateModelResult};
use elektro_core::errors::Result;
use elektro_core::ops::collection_ops::{
    add_model_to_collection, create_collection, set_comparison_model,
};
use elektro_core::ops::model_ops::CreateModelInput;
use elektro_core::ops::Store;
use elektro_core_types::RequestContext;

/// Mutating commands supported by the engine.
#[derive(Debug, Clone)]
pub enum EngineCommand {
    /// Create a model, deduplicating by canonical config digest.
    CreateModel {
        input: CreateModelInput,
        options: CreateModelOptions,
    },
    /// Create an empty collection.
    CollectionCreate {
        name: String,
        description: Option<String>,
    },
    /// Add a model to a collection.
    CollectionAddModel {
        collection_id: String,
        model_id: String,
    },
    /// Pin a collection's comparison baseline.
    CollectionSetComparison {
        collection_id: String,
        model_id: String,
    },
}

/// Result of applying an engine command.
#[derive(Debug, Clone)]
pub enum EngineCommandResult {
    /// Model was created (or deduplicated onto an existing record).
    ModelCreated(CreateModelResult),
    /// Collection was created.
    CollectionCreated { collection_id: String },
    /// Collection membership or baseline was updated.
    CollectionUpdated,
}

/// Apply an engine command against a store.
///
/// # Errors
///
/// Propagates the underlying operation's error unchanged; see the
/// individual ops for their taxonomies.
pub fn apply_engine_command(
    cmd: EngineCommand,
    store: &mut Store,
    ctx: &RequestContext,
) -> Result<EngineCommandResult> {
    match cmd {
        EngineCommand::CreateModel { input, options } => {
            let result = create_neuron_model(store, input, options, ctx)?;
            Ok(EngineCommandResult::ModelCreated(result))
        }
        EngineCommand::CollectionCreate { name, description } => {
            let collection_id = create_collection(store, &name, description)?;
            Ok(EngineCommandResult::CollectionCreated { collection_id })
        }
        EngineCommand::CollectionAddModel {
            collection_id,
            model_id,
        } => {
            add_model_to_collection(store, &collection_id, &model_id)?;
            Ok(EngineCommandResult::CollectionUpdated)
        }
        EngineCommand::CollectionSetComparison {
            collection_id,
            model_id,
        } => {
            set_comparison_model(store, &collection_id, &model_id)?;
            Ok(EngineCommandResult::CollectionUpdated)
        }
    }
}

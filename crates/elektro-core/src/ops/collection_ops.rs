//! Collection operations.

use uuid::Uuid;

use crate::errors::{ElektroError, Result};
use crate::model::ModelCollection;
use crate::ops::store::Store;

/// Create a new collection and return its ID.
///
/// # Errors
///
/// Returns `InvalidName` if the name is empty or whitespace-only.
pub fn create_collection(
    store: &mut Store,
    name: &str,
    description: Option<String>,
) -> Result<String> {
    if name.trim().is_empty() {
        return Err(ElektroError::InvalidName {
            reason: "name cannot be empty".to_string(),
        });
    }

    let mut collection = ModelCollection::new(Uuid::now_v7().to_string(), name.to_string());
    collection.description = description;
    let collection_id = collection.id.clone();
    store.insert_collection(collection);
    Ok(collection_id)
}

/// Add a model to a collection.
///
/// # Errors
///
/// - `CollectionNotFound` / `CollectionDeleted` — collection does not resolve
/// - `ModelNotFound` / `ModelDeleted` — model does not resolve
/// - `AlreadyInCollection` — model is already a member
pub fn add_model_to_collection(
    store: &mut Store,
    collection_id: &str,
    model_id: &str,
) -> Result<()> {
    store.get_model(model_id)?;
    let collection = store.get_collection_mut(collection_id)?;

    if collection.contains_model(model_id) {
        return Err(ElektroError::AlreadyInCollection {
            model_id: model_id.to_string(),
            collection_id: collection_id.to_string(),
        });
    }

    collection.add_model_id(model_id.to_string());
    collection.updated_at = chrono::Utc::now();
    Ok(())
}

/// Pin a collection's comparison baseline to a specific member.
///
/// # Errors
///
/// - `CollectionNotFound` / `CollectionDeleted` — collection does not resolve
/// - `ModelNotFound` / `ModelDeleted` — model does not resolve
pub fn set_comparison_model(
    store: &mut Store,
    collection_id: &str,
    model_id: &str,
) -> Result<()> {
    store.get_model(model_id)?;
    let collection = store.get_collection_mut(collection_id)?;
    collection.comparison_model_id = Some(model_id.to_string());
    collection.updated_at = chrono::Utc::now();
    Ok(())
}

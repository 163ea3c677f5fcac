//! Digest computation for canonical configuration forms.
//!
//! Follows the same pattern as the diff engine's determinism guarantees:
//! canonical JSON serialization with sorted keys, digested with SHA256.

use crate::canonical::normalize::{normalize_value, CanonicalOptions};
use crate::errors::Result;
use serde_json::Value;
use sha2::{Digest, Sha256};

/// Serialize a configuration's canonical form to its canonical string.
///
/// The string is compact (no whitespace) with mapping keys sorted, so equal
/// canonical forms always serialize identically.
///
/// ## Errors
///
/// Returns `ElektroError::Serialization` if JSON serialization fails.
pub fn canonical_string(config: &Value, opts: &CanonicalOptions) -> Result<String> {
    let normalized = normalize_value(config, opts);
    Ok(serde_json::to_string(&normalized)?)
}

/// Compute the content digest of a configuration.
///
/// Creates a deterministic SHA256 hash of the canonical serialization.
/// Equal configurations (same data under the normalization rules, any key
/// or list order) always produce equal digests; this is the natural key
/// used for model deduplication.
///
/// ## Arguments
///
/// - `config`: The configuration tree
/// - `opts`: Canonicalization options (float precision)
///
/// ## Returns
///
/// Hex-encoded SHA256 digest (64 characters)
///
/// ## Errors
///
/// Returns `ElektroError::Serialization` if JSON serialization fails.
///
/// ## Example
///
/// ```
/// use elektro_core::canonical::{config_digest, CanonicalOptions};
/// use serde_json::json;
///
/// let digest = config_digest(&json!({"a": 1}), &CanonicalOptions::default()).unwrap();
/// assert_eq!(digest.len(), 64); // SHA256 hex length
/// ```
pub fn config_digest(config: &Value, opts: &CanonicalOptions) -> Result<String> {
    let canonical = canonical_string(config, opts)?;
    Ok(hash_string(&canonical))
}

/// Hash a string using SHA256.
///
/// Internal helper for deterministic digest computation.
fn hash_string(input: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(input.as_bytes());
    hex::encode(hasher.finalize())
}

//! Canonical normalization and content digests for model configurations.
//!
//! A model configuration is an arbitrary JSON tree. Two configurations that
//! differ only in key order, in the order of unordered sub-component lists,
//! or in negligible floating-point representation detail describe the same
//! model and must deduplicate to the same record. This module projects a
//! configuration onto a canonical form and digests it.
//!
//! ## Entry point
//!
//! ```
//! use elektro_core::canonical::{config_digest, CanonicalOptions};
//! use serde_json::json;
//!
//! let config = json!({"id": "m1", "cells": [{"id": "c2"}, {"id": "c1"}]});
//! let digest = config_digest(&config, &CanonicalOptions::default()).unwrap();
//! assert_eq!(digest.len(), 64);
//! ```
//!
//! ## Guarantees
//!
//! - **Key-order independence**: mapping key order never affects the digest.
//! - **List-order independence**: sequences are sorted by a content-derived
//!   key before serialization; model sub-components are unordered sets.
//! - **Float stability**: floating-point leaves are rendered at fixed
//!   decimal precision, so values equal after rounding digest identically.
//! - **Reserved keys**: mapping keys starting with `_` are dropped.

pub mod digest;
pub mod normalize;

pub use digest::{canonical_string, config_digest};
pub use normalize::{normalize_value, CanonicalOptions};

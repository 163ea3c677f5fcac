//! Structural diff engine for model configurations.
//!
//! Compares two configuration trees and produces an ordered list of
//! path-scoped change records suitable for version-comparison displays
//! and audit surfaces.
//!
//! ## Entry point
//!
//! ```ignore
//! use elektro_core::diff::engine::compare_configs;
//!
//! let changes = compare_configs(prev_config, next_config);
//! let summary = elektro_core::diff::human_summary::render_human_summary(&changes);
//! ```
//!
//! ## Guarantees
//!
//! - **Determinism**: identical inputs produce identical record lists.
//! - **Exhaustive recursion**: nested mappings recurse key by key; a
//!   recursion that yields no records means the values are equal.
//! - **Exact scalar equality**: no floating-point tolerance here — the
//!   canonical hasher's rounding applies to dedup only, not to diffing.

pub mod engine;
pub mod human_summary;
pub mod model;

pub use engine::compare_configs;
pub use human_summary::render_human_summary;
pub use model::{ChangeKind, ChangeRecord};

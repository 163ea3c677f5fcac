//! Elektro Engine
//!
//! Command and query surface over the core model registry.

pub mod commands;

//! Modules layer - Infrastructure components for external integrations
//!
//! Contains the adapters that read the static dataset from disk.

pub mod dataset;

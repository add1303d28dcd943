//! Storage components attached to the pipeline.
//!
//! The memory stage is the only component that may mutate these; everything
//! else gets read-only views for tracing and verification.

/// Data memory owned by the memory stage.
pub mod memory;

pub use memory::DataStore;

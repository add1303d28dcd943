//! Common types shared across the memory-stage model.
//!
//! This module provides the error types raised at the boundaries of the model.
//! The pipeline itself is total and never returns an error.

/// Error types for store access and configuration.
pub mod error;

pub use error::{ConfigError, StoreError};

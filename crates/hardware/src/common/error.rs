//! Error Types.
//!
//! The clock edge itself never fails: address arithmetic wraps and every address
//! reduces into the store. Errors exist only at the edges of the model:
//! 1. **Store Access:** Raw-index access by a harness or observer past the end of the store.
//! 2. **Configuration:** Unreadable, malformed, or inconsistent configuration.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by direct, index-based access to the data store.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    /// A store was requested with no words.
    #[error("data store capacity must be non-zero")]
    ZeroCapacity,

    /// A raw index lies past the end of the store.
    #[error("word index {index} is outside a {capacity}-word data store")]
    OutOfRange {
        /// The rejected index.
        index: usize,
        /// Number of words in the store.
        capacity: usize,
    },
}

/// Errors raised while loading or validating a [`Config`](crate::config::Config).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read config {}", .path.display())]
    Io {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },

    /// The configuration text is not valid JSON for [`Config`](crate::config::Config).
    #[error("malformed config: {0}")]
    Parse(#[from] serde_json::Error),

    /// The memory section describes a store that cannot be built.
    #[error("invalid memory configuration: {0}")]
    Store(#[from] StoreError),
}

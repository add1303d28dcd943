//! Memory owned by the memory stage.

/// Word-addressable data store.
pub mod store;

pub use store::DataStore;

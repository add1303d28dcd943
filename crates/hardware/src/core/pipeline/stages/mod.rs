//! Pipeline stage implementations.

/// Memory access stage.
pub mod memory;

pub use memory::MemoryStage;

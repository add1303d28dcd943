//! Core processor implementation.
//!
//! This module contains the memory access stage of the pipeline and the
//! functional units it drives.

/// Instruction pipeline implementation (stages, latches, signals).
pub mod pipeline;

/// Execution units (LSU).
pub mod units;

pub use self::pipeline::stages::MemoryStage;

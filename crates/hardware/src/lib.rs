//! RISC-V memory-access stage model.
//!
//! This crate implements a cycle-level model of the MEM stage of a simple 32-bit
//! RISC-V pipeline:
//! 1. **ISA:** Category codes, opcode tables, and the instruction classifier.
//! 2. **Core:** The memory stage, its EX/MEM and MEM/WB latches, and LSU helpers.
//! 3. **Memory:** The word-addressable data store the stage owns.
//! 4. **Observability:** Per-edge trace snapshots and operation statistics.
//! 5. **Configuration:** Store size and load/store policies.
//!
//! Fetch, decode, execute, and writeback are out of scope; a test bench drives
//! the EX/MEM bundle and clocks the stage.

/// Common types (error definitions).
pub mod common;
/// Stage configuration (defaults, policies, JSON loading).
pub mod config;
/// Pipeline core (memory stage, latches, signals, LSU).
pub mod core;
/// Instruction classification (categories, opcode tables, classifier).
pub mod isa;
/// Data memory owned by the memory stage.
pub mod soc;
/// Stage statistics collection and reporting.
pub mod stats;
/// Clock-edge trace hook for external recorders.
pub mod trace;

/// Root configuration type; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// The memory stage; construct with `MemoryStage::new`.
pub use crate::core::MemoryStage;
/// Stage trait providing `drive`, `edge`, `tick`, and `output`.
pub use crate::core::pipeline::traits::PipelineStage;

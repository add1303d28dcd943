//! Instruction pipeline implementation.
//!
//! This module contains the memory access stage, the latches on either side of
//! it, the control signals the classifier produces, and the stage/latch traits.

/// Inter-stage pipeline latches (EX/MEM, MEM/WB).
pub mod latches;

/// Control signals produced by the instruction classifier.
pub mod signals;

/// Pipeline stage implementations.
pub mod stages;

/// Traits for pipeline stage components.
pub mod traits;

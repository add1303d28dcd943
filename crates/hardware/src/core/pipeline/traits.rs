//! Pipeline Stage and Latch Interfaces.
//!
//! This module defines the common traits for pipeline components. It provides:
//! 1. **Pipeline Stage Interface:** Splits a cycle into a combinational settle and a clock edge.
//! 2. **Pipeline Latch Interface:** Provides synchronous reset.

/// Represents a synchronous stage in the instruction pipeline.
///
/// A cycle has two phases. `drive` presents new inputs and lets the stage's
/// combinational logic settle; nothing a downstream stage can observe changes.
/// `edge` is the rising clock edge: every latched output and every piece of
/// owned state commits at once, computed from the inputs last driven and the
/// state committed at the previous edge.
pub trait PipelineStage {
    /// Input bundle sampled each cycle.
    type Input;

    /// Latched output bundle.
    type Output;

    /// Presents `input` for the current cycle.
    fn drive(&mut self, input: &Self::Input);

    /// Commits the current cycle.
    fn edge(&mut self);

    /// Returns the outputs committed at the most recent edge.
    fn output(&self) -> &Self::Output;

    /// Drives `input` and then clocks the stage once.
    fn tick(&mut self, input: &Self::Input) {
        self.drive(input);
        self.edge();
    }
}

/// Represents a pipeline latch (inter-stage register).
pub trait PipelineLatch {
    /// Returns every register in the latch to zero.
    fn flush(&mut self);
}

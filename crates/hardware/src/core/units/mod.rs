//! Functional units used by the pipeline stages.

/// Load/Store Unit helpers (load extension, store narrowing).
pub mod lsu;

pub use lsu::Lsu;

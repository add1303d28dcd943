//! Upper-Immediate and Jump Opcodes (7 bits).
//!
//! Carried on `opcode_ext3`. The memory stage reserves the field and never
//! dispatches on it.

/// Load upper immediate.
pub const LUI: u8 = 0b0110111;

/// Add upper immediate to PC.
pub const AUIPC: u8 = 0b0010111;

/// Jump and link.
pub const JAL: u8 = 0b1101111;

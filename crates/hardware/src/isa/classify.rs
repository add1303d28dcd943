//! Instruction Classifier.
//!
//! Pure mapping from `(category, opcode_ext1, opcode_ext2)` to the operation the
//! memory/forward unit performs this cycle. Lookup rules:
//! 1. **Register-immediate/memory:** `opcode_ext2` against the 10-bit table. A
//!    code missing from the table still names some arithmetic instruction, so it
//!    forwards its result.
//! 2. **Register-register:** `opcode_ext1` against the 11-bit table. Every entry
//!    forwards; a code missing from the table is not recognized.
//! 3. **Anything else:** not recognized. The stage holds its latches.

use super::category::{Category, EXT1_MASK, EXT2_MASK};
use super::table::{IMM_MEM_TABLE, Mnemonic, REG_REG_TABLE};
use crate::core::pipeline::signals::MemOp;

/// Classifies one instruction bundle.
///
/// # Arguments
///
/// * `category` - 3-bit category code; upper bits are ignored.
/// * `opcode_ext1` - 11-bit register-register code; upper bits are ignored.
/// * `opcode_ext2` - 10-bit register-immediate/memory code; upper bits are ignored.
///
/// # Returns
///
/// The operation to perform, or `None` when the stage must do nothing.
pub fn classify(category: u8, opcode_ext1: u16, opcode_ext2: u16) -> Option<MemOp> {
    match Category::from_bits(category) {
        Category::RegisterImmediateOrMemory => Some(
            IMM_MEM_TABLE
                .lookup(opcode_ext2 & EXT2_MASK)
                .map_or(MemOp::Passthrough, |e| e.op),
        ),
        Category::RegisterRegister => REG_REG_TABLE
            .lookup(opcode_ext1 & EXT1_MASK)
            .map(|e| e.op),
        _ => None,
    }
}

/// Names the instruction a bundle encodes, for diagnostics.
///
/// Returns the first table entry for the selected field, so an ambiguous code
/// (SRLI/SRAI) resolves to whichever mnemonic the table lists first.
pub fn decode_mnemonic(category: u8, opcode_ext1: u16, opcode_ext2: u16) -> Option<Mnemonic> {
    match Category::from_bits(category) {
        Category::RegisterImmediateOrMemory => IMM_MEM_TABLE.lookup(opcode_ext2 & EXT2_MASK),
        Category::RegisterRegister => REG_REG_TABLE.lookup(opcode_ext1 & EXT1_MASK),
        _ => None,
    }
    .map(|e| e.mnemonic)
}

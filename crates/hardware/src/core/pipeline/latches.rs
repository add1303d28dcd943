//! Pipeline latch structures around the memory stage.
//!
//! This module defines the two latches the memory stage sits between:
//! 1. **EX/MEM:** The input bundle decode and execute refresh every cycle.
//! 2. **MEM/WB:** The output registers the memory stage updates on each clock edge.

use serde::Serialize;

use crate::core::pipeline::signals::MemOp;
use crate::core::pipeline::traits::PipelineLatch;
use crate::isa::category::{CATEGORY_MASK, EXT1_MASK, EXT2_MASK, EXT3_MASK, REGISTER_MASK};
use crate::isa::classify::classify;

/// Entry in the EX/MEM pipeline latch (Execute to Memory stage).
///
/// Fields are stored in host integers wider than their buses; bits above each
/// field's width are ignored when the stage consumes them.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq, Serialize)]
pub struct ExMemEntry {
    /// 3-bit instruction category.
    pub category: u8,
    /// 11-bit register-register opcode code.
    pub opcode_ext1: u16,
    /// 10-bit register-immediate/memory opcode code.
    pub opcode_ext2: u16,
    /// 7-bit upper-immediate/jump opcode. Reserved; never dispatched on.
    pub opcode_ext3: u8,
    /// ALU result from execute. Base address for loads and stores.
    pub arith_result: u32,
    /// Value to write for stores.
    pub store_value: u32,
    /// Sign-extended memory offset.
    pub mem_immediate: u32,
    /// 5-bit destination register index.
    pub dest_register: u8,
}

impl ExMemEntry {
    /// Classifies this bundle.
    pub fn op(&self) -> Option<MemOp> {
        classify(self.category, self.opcode_ext1, self.opcode_ext2)
    }

    /// `mem_immediate + arith_result`, wrapping at 32 bits.
    pub const fn effective_address(&self) -> u32 {
        self.mem_immediate.wrapping_add(self.arith_result)
    }

    /// Destination register index, truncated to 5 bits.
    pub const fn rd(&self) -> u8 {
        self.dest_register & REGISTER_MASK
    }

    /// Returns a copy with every field truncated to its bus width.
    pub const fn masked(&self) -> Self {
        Self {
            category: self.category & CATEGORY_MASK,
            opcode_ext1: self.opcode_ext1 & EXT1_MASK,
            opcode_ext2: self.opcode_ext2 & EXT2_MASK,
            opcode_ext3: self.opcode_ext3 & EXT3_MASK,
            arith_result: self.arith_result,
            store_value: self.store_value,
            mem_immediate: self.mem_immediate,
            dest_register: self.dest_register & REGISTER_MASK,
        }
    }
}

/// Entry in the MEM/WB pipeline latch (Memory to Writeback stage).
///
/// Each field is only meaningful for the instruction kinds that write it; the
/// others keep whatever an earlier instruction left behind.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq, Serialize)]
pub struct MemWbEntry {
    /// Destination register of the last load.
    pub forwarded_dest_register: u8,
    /// Arithmetic result of the last non-memory instruction.
    pub forwarded_result: u32,
    /// Data returned by the last load.
    pub loaded_data: u32,
}

/// MEM/WB pipeline latch (Memory to Writeback stage).
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct MemWb {
    /// Latched outputs.
    pub entry: MemWbEntry,
}

impl PipelineLatch for MemWb {
    fn flush(&mut self) {
        self.entry = MemWbEntry::default();
    }
}

//! Instruction Categories.
//!
//! The category field is the coarse instruction class computed by decode. It
//! selects which opcode extension field carries meaning for the rest of the
//! bundle. Codes are not the RISC-V format bits; they are this pipeline's own
//! encoding, carried on a 3-bit bus.

use serde::Serialize;

/// Width mask of the category field (3 bits).
pub const CATEGORY_MASK: u8 = 0b111;

/// Width mask of the register-register opcode field (11 bits).
pub const EXT1_MASK: u16 = 0x7FF;

/// Width mask of the register-immediate/memory opcode field (10 bits).
pub const EXT2_MASK: u16 = 0x3FF;

/// Width mask of the upper-immediate/jump opcode field (7 bits).
pub const EXT3_MASK: u8 = 0x7F;

/// Width mask of a register index (5 bits).
pub const REGISTER_MASK: u8 = 0x1F;

/// Register-register arithmetic (ADD, SUB, ...).
pub const CAT_REG_REG: u8 = 0b111;

/// Register-immediate arithmetic, loads, and stores.
pub const CAT_IMM_MEM: u8 = 0b001;

/// Store format. Decode routes stores through `CAT_IMM_MEM`, so this is unused here.
pub const CAT_STORE: u8 = 0b011;

/// Conditional branches.
pub const CAT_BRANCH: u8 = 0b100;

/// Upper-immediate instructions (LUI, AUIPC).
pub const CAT_UPPER: u8 = 0b101;

/// Unconditional jumps (JAL).
pub const CAT_JUMP: u8 = 0b110;

/// Decoded instruction category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Category {
    /// Register-register arithmetic; `opcode_ext1` is meaningful.
    RegisterRegister,
    /// Register-immediate arithmetic, loads, and stores; `opcode_ext2` is meaningful.
    RegisterImmediateOrMemory,
    /// Store format code.
    Store,
    /// Conditional branch.
    Branch,
    /// Upper-immediate; `opcode_ext3` is meaningful.
    Upper,
    /// Unconditional jump; `opcode_ext3` is meaningful.
    Jump,
    /// Any code with no assigned meaning (0b000, 0b010).
    Unknown(u8),
}

impl Category {
    /// Decodes a category from the low 3 bits of `bits`.
    pub const fn from_bits(bits: u8) -> Self {
        match bits & CATEGORY_MASK {
            CAT_REG_REG => Self::RegisterRegister,
            CAT_IMM_MEM => Self::RegisterImmediateOrMemory,
            CAT_STORE => Self::Store,
            CAT_BRANCH => Self::Branch,
            CAT_UPPER => Self::Upper,
            CAT_JUMP => Self::Jump,
            other => Self::Unknown(other),
        }
    }

    /// Returns the 3-bit code for this category.
    pub const fn bits(self) -> u8 {
        match self {
            Self::RegisterRegister => CAT_REG_REG,
            Self::RegisterImmediateOrMemory => CAT_IMM_MEM,
            Self::Store => CAT_STORE,
            Self::Branch => CAT_BRANCH,
            Self::Upper => CAT_UPPER,
            Self::Jump => CAT_JUMP,
            Self::Unknown(bits) => bits & CATEGORY_MASK,
        }
    }
}

impl From<u8> for Category {
    fn from(bits: u8) -> Self {
        Self::from_bits(bits)
    }
}

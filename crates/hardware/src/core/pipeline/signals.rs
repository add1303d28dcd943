//! Memory Stage Control Signals.
//!
//! This module defines the operation tags the classifier produces. It provides:
//! 1. **Access Width:** Byte, halfword, and word masks.
//! 2. **Operation Tags:** The nine operations the memory/forward unit can perform.

use serde::{Deserialize, Serialize};

/// Width of a data store access.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MemWidth {
    /// 8-bit access.
    Byte,
    /// 16-bit access.
    Half,
    /// 32-bit access.
    Word,
}

impl MemWidth {
    /// Mask selecting the low bits this width covers.
    pub const fn mask(self) -> u32 {
        match self {
            Self::Byte => 0xFF,
            Self::Half => 0xFFFF,
            Self::Word => 0xFFFF_FFFF,
        }
    }

    /// Number of bits this width covers.
    pub const fn bits(self) -> u32 {
        match self {
            Self::Byte => 8,
            Self::Half => 16,
            Self::Word => 32,
        }
    }
}

/// Operation performed by the memory/forward unit for one instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MemOp {
    /// LB: load the low byte of the addressed word.
    LoadByte,
    /// LH: load the low halfword of the addressed word.
    LoadHalf,
    /// LW: load the addressed word.
    LoadWord,
    /// LBU: load the low byte, upper bits filled per the unsigned-load policy.
    LoadByteUnsigned,
    /// LHU: load the low halfword, upper bits filled per the unsigned-load policy.
    LoadHalfUnsigned,
    /// SB: store the low byte of the store value.
    StoreByte,
    /// SH: store the low halfword of the store value.
    StoreHalf,
    /// SW: store the full store value.
    StoreWord,
    /// Non-memory instruction: forward the arithmetic result.
    Passthrough,
}

impl MemOp {
    /// Access width, or `None` for `Passthrough`.
    pub const fn width(self) -> Option<MemWidth> {
        match self {
            Self::LoadByte | Self::LoadByteUnsigned | Self::StoreByte => Some(MemWidth::Byte),
            Self::LoadHalf | Self::LoadHalfUnsigned | Self::StoreHalf => Some(MemWidth::Half),
            Self::LoadWord | Self::StoreWord => Some(MemWidth::Word),
            Self::Passthrough => None,
        }
    }

    /// `true` for the five load operations.
    pub const fn is_load(self) -> bool {
        matches!(
            self,
            Self::LoadByte
                | Self::LoadHalf
                | Self::LoadWord
                | Self::LoadByteUnsigned
                | Self::LoadHalfUnsigned
        )
    }

    /// `true` for the three store operations.
    pub const fn is_store(self) -> bool {
        matches!(self, Self::StoreByte | Self::StoreHalf | Self::StoreWord)
    }

    /// `true` for LBU and LHU.
    pub const fn is_unsigned_load(self) -> bool {
        matches!(self, Self::LoadByteUnsigned | Self::LoadHalfUnsigned)
    }

    /// `true` when the operation computes an address and touches the data store.
    pub const fn accesses_memory(self) -> bool {
        !matches!(self, Self::Passthrough)
    }
}

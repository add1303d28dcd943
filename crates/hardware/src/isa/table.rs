//! Opcode Lookup Tables.
//!
//! Two fixed tables replace a long per-opcode conditional chain. Each entry ties
//! an opcode code to its mnemonic and to the operation the memory stage performs
//! for it. Tables are plain entry lists rather than maps so that a code listed
//! twice stays visible: `collisions` reports it instead of one entry silently
//! shadowing the other.

use std::fmt;

use serde::Serialize;

use super::{ext1, ext2};
use crate::core::pipeline::signals::MemOp;

/// Instruction mnemonics known to the memory stage.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
#[allow(missing_docs)]
pub enum Mnemonic {
    Lb,
    Lh,
    Lw,
    Lbu,
    Lhu,
    Sb,
    Sh,
    Sw,
    Addi,
    Slti,
    Sltiu,
    Xori,
    Ori,
    Andi,
    Slli,
    Srli,
    Srai,
    Add,
    Sub,
    Sll,
    Slt,
    Sltu,
    Xor,
    Srl,
    Sra,
    Or,
    And,
}

impl Mnemonic {
    /// Returns the assembler spelling of the mnemonic.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Lb => "LB",
            Self::Lh => "LH",
            Self::Lw => "LW",
            Self::Lbu => "LBU",
            Self::Lhu => "LHU",
            Self::Sb => "SB",
            Self::Sh => "SH",
            Self::Sw => "SW",
            Self::Addi => "ADDI",
            Self::Slti => "SLTI",
            Self::Sltiu => "SLTIU",
            Self::Xori => "XORI",
            Self::Ori => "ORI",
            Self::Andi => "ANDI",
            Self::Slli => "SLLI",
            Self::Srli => "SRLI",
            Self::Srai => "SRAI",
            Self::Add => "ADD",
            Self::Sub => "SUB",
            Self::Sll => "SLL",
            Self::Slt => "SLT",
            Self::Sltu => "SLTU",
            Self::Xor => "XOR",
            Self::Srl => "SRL",
            Self::Sra => "SRA",
            Self::Or => "OR",
            Self::And => "AND",
        }
    }
}

impl fmt::Display for Mnemonic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of an opcode table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OpcodeEntry {
    /// Opcode extension code, right-aligned.
    pub code: u16,
    /// Mnemonic of the instruction.
    pub mnemonic: Mnemonic,
    /// Operation performed by the memory stage.
    pub op: MemOp,
}

const fn entry(code: u16, mnemonic: Mnemonic, op: MemOp) -> OpcodeEntry {
    OpcodeEntry { code, mnemonic, op }
}

/// A fixed table of opcode codes of a single field width.
#[derive(Debug)]
pub struct OpcodeTable {
    name: &'static str,
    width: u32,
    entries: &'static [OpcodeEntry],
}

impl OpcodeTable {
    /// Creates a table over `entries`, whose codes are `width` bits wide.
    pub const fn new(name: &'static str, width: u32, entries: &'static [OpcodeEntry]) -> Self {
        Self {
            name,
            width,
            entries,
        }
    }

    /// Human-readable table name.
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Width of the codes in bits.
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// All entries in declaration order.
    pub const fn entries(&self) -> &'static [OpcodeEntry] {
        self.entries
    }

    /// Returns the first entry declared for `code`.
    pub fn lookup(&self, code: u16) -> Option<&'static OpcodeEntry> {
        self.aliases(code).next()
    }

    /// Returns every entry declared for `code`, in declaration order.
    pub fn aliases(&self, code: u16) -> impl Iterator<Item = &'static OpcodeEntry> {
        self.entries.iter().filter(move |e| e.code == code)
    }

    /// Returns each code that more than one entry claims, in first-seen order.
    pub fn collisions(&self) -> Vec<u16> {
        let mut seen = Vec::with_capacity(self.entries.len());
        let mut dup = Vec::new();
        for e in self.entries {
            if !seen.contains(&e.code) {
                seen.push(e.code);
            } else if !dup.contains(&e.code) {
                dup.push(e.code);
            }
        }
        dup
    }
}

static IMM_MEM_ENTRIES: [OpcodeEntry; 17] = [
    entry(ext2::LB, Mnemonic::Lb, MemOp::LoadByte),
    entry(ext2::LH, Mnemonic::Lh, MemOp::LoadHalf),
    entry(ext2::LW, Mnemonic::Lw, MemOp::LoadWord),
    entry(ext2::LBU, Mnemonic::Lbu, MemOp::LoadByteUnsigned),
    entry(ext2::LHU, Mnemonic::Lhu, MemOp::LoadHalfUnsigned),
    entry(ext2::SB, Mnemonic::Sb, MemOp::StoreByte),
    entry(ext2::SH, Mnemonic::Sh, MemOp::StoreHalf),
    entry(ext2::SW, Mnemonic::Sw, MemOp::StoreWord),
    entry(ext2::ADDI, Mnemonic::Addi, MemOp::Passthrough),
    entry(ext2::SLTI, Mnemonic::Slti, MemOp::Passthrough),
    entry(ext2::SLTIU, Mnemonic::Sltiu, MemOp::Passthrough),
    entry(ext2::XORI, Mnemonic::Xori, MemOp::Passthrough),
    entry(ext2::ORI, Mnemonic::Ori, MemOp::Passthrough),
    entry(ext2::ANDI, Mnemonic::Andi, MemOp::Passthrough),
    entry(ext2::SLLI, Mnemonic::Slli, MemOp::Passthrough),
    // SRLI and SRAI share a code. Both forward, so the stage is unaffected,
    // but `lookup` can only ever name SRLI.
    entry(ext2::SRLI, Mnemonic::Srli, MemOp::Passthrough),
    entry(ext2::SRAI, Mnemonic::Srai, MemOp::Passthrough),
];

static REG_REG_ENTRIES: [OpcodeEntry; 10] = [
    entry(ext1::ADD, Mnemonic::Add, MemOp::Passthrough),
    entry(ext1::SUB, Mnemonic::Sub, MemOp::Passthrough),
    entry(ext1::SLL, Mnemonic::Sll, MemOp::Passthrough),
    entry(ext1::SLT, Mnemonic::Slt, MemOp::Passthrough),
    entry(ext1::SLTU, Mnemonic::Sltu, MemOp::Passthrough),
    entry(ext1::XOR, Mnemonic::Xor, MemOp::Passthrough),
    entry(ext1::SRL, Mnemonic::Srl, MemOp::Passthrough),
    entry(ext1::SRA, Mnemonic::Sra, MemOp::Passthrough),
    entry(ext1::OR, Mnemonic::Or, MemOp::Passthrough),
    entry(ext1::AND, Mnemonic::And, MemOp::Passthrough),
];

/// 10-bit table for the register-immediate/memory category.
pub static IMM_MEM_TABLE: OpcodeTable =
    OpcodeTable::new("register-immediate/memory", 10, &IMM_MEM_ENTRIES);

/// 11-bit table for the register-register category.
pub static REG_REG_TABLE: OpcodeTable =
    OpcodeTable::new("register-register", 11, &REG_REG_ENTRIES);

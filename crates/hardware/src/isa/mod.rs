//! Instruction Set Definitions for the Memory Stage.
//!
//! The memory stage never sees raw instruction words. Decode hands it a
//! pre-split bundle of fields, and this module knows how to read them:
//!
//! * `category`: the 3-bit instruction class and its field masks.
//! * `ext1`: 11-bit register-register codes (`funct7[5] ++ funct3 ++ opcode`).
//! * `ext2`: 10-bit register-immediate, load, store, and branch codes (`funct3 ++ opcode`).
//! * `ext3`: 7-bit codes for the upper-immediate and jump categories.
//! * `table`: lookup tables mapping codes to mnemonics and memory operations.
//! * `classify`: the instruction classifier feeding the memory/forward unit.

/// Instruction category codes and field widths.
pub mod category;

/// Instruction classifier.
pub mod classify;

/// 11-bit register-register opcode codes.
pub mod ext1;

/// 10-bit register-immediate, load, store, and branch opcode codes.
pub mod ext2;

/// 7-bit opcode codes for upper-immediate and jump instructions.
pub mod ext3;

/// Opcode lookup tables.
pub mod table;

pub use category::Category;
pub use classify::{classify, decode_mnemonic};
pub use table::{IMM_MEM_TABLE, Mnemonic, OpcodeEntry, OpcodeTable, REG_REG_TABLE};

//! Register-Immediate, Load, Store, and Branch Opcode Codes (10 bits).
//!
//! Each code is `funct3 ++ opcode`. The shift-immediate codes drop the funct7
//! bit that real RV32I uses to tell SRLI from SRAI, so those two share a code.

/// Load byte.
pub const LB: u16 = 0b000_0000011;
/// Load halfword.
pub const LH: u16 = 0b001_0000011;
/// Load word.
pub const LW: u16 = 0b010_0000011;
/// Load byte unsigned.
pub const LBU: u16 = 0b100_0000011;
/// Load halfword unsigned.
pub const LHU: u16 = 0b101_0000011;

/// Store byte.
pub const SB: u16 = 0b000_0100011;
/// Store halfword.
pub const SH: u16 = 0b001_0100011;
/// Store word.
pub const SW: u16 = 0b010_0100011;

/// Add immediate.
pub const ADDI: u16 = 0b000_0010011;
/// Set less than immediate.
pub const SLTI: u16 = 0b010_0010011;
/// Set less than immediate unsigned.
pub const SLTIU: u16 = 0b011_0010011;
/// XOR immediate.
pub const XORI: u16 = 0b100_0010011;
/// OR immediate.
pub const ORI: u16 = 0b110_0010011;
/// AND immediate.
pub const ANDI: u16 = 0b111_0010011;
/// Shift left logical immediate.
pub const SLLI: u16 = 0b001_0010011;
/// Shift right logical immediate. Same code as [`SRAI`].
pub const SRLI: u16 = 0b101_0010011;
/// Shift right arithmetic immediate. Same code as [`SRLI`].
pub const SRAI: u16 = 0b101_0010011;

/// Jump and link register. Not a memory-stage operation.
pub const JALR: u16 = 0b000_1100111;
/// Branch if equal. Not a memory-stage operation.
pub const BEQ: u16 = 0b000_1100011;
/// Branch if not equal. Not a memory-stage operation.
pub const BNE: u16 = 0b001_1100011;
/// Branch if less than. Not a memory-stage operation.
pub const BLT: u16 = 0b100_1100011;
/// Branch if greater or equal. Not a memory-stage operation.
pub const BGE: u16 = 0b101_1100011;
/// Branch if less than unsigned. Not a memory-stage operation.
pub const BLTU: u16 = 0b110_1100011;
/// Branch if greater or equal unsigned. Not a memory-stage operation.
pub const BGEU: u16 = 0b111_1100011;

//! Register-Register Opcode Codes (11 bits).
//!
//! Each code is `funct7[5] ++ funct3 ++ opcode`, i.e. the OP major opcode with
//! the one funct7 bit that separates ADD/SUB and SRL/SRA.

/// Add.
pub const ADD: u16 = 0b0_000_0110011;
/// Subtract.
pub const SUB: u16 = 0b1_000_0110011;
/// Shift left logical.
pub const SLL: u16 = 0b0_001_0110011;
/// Set less than (signed).
pub const SLT: u16 = 0b0_010_0110011;
/// Set less than unsigned.
pub const SLTU: u16 = 0b0_011_0110011;
/// Bitwise XOR.
pub const XOR: u16 = 0b0_100_0110011;
/// Shift right logical.
pub const SRL: u16 = 0b0_101_0110011;
/// Shift right arithmetic.
pub const SRA: u16 = 0b1_101_0110011;
/// Bitwise OR.
pub const OR: u16 = 0b0_110_0110011;
/// Bitwise AND.
pub const AND: u16 = 0b0_111_0110011;

//! Load/Store Unit (LSU) Helpers.
//!
//! This module provides the width and extension arithmetic the memory stage
//! applies around each data store access. It covers:
//! 1. **Load Extension:** Narrowing a word to a byte or halfword and filling the upper bits.
//! 2. **Store Narrowing:** Masking a store value to its width and placing it in the target word.

use crate::config::{NarrowStorePolicy, UnsignedLoadExtension};
use crate::core::pipeline::signals::{MemOp, MemWidth};

/// Bit of the effective address that LBU/LHU replicate under
/// [`UnsignedLoadExtension::AddressBit`].
pub const ADDRESS_FILL_BIT: u32 = 1 << 31;

/// Load/Store Unit (LSU) helpers for the memory stage.
#[derive(Debug)]
pub struct Lsu;

impl Lsu {
    /// Computes the value a load returns from the addressed word.
    ///
    /// LB and LH keep the low byte or halfword and zero the rest. LW returns the
    /// word unchanged. LBU and LHU keep the same low bits and fill the upper bits
    /// according to `policy`; with [`UnsignedLoadExtension::AddressBit`] the fill
    /// is bit 31 of `address`, not any bit of the data.
    ///
    /// # Arguments
    ///
    /// * `word` - The addressed word as read from the store.
    /// * `op` - The load being performed. Non-load operations return `word`.
    /// * `address` - The effective (unreduced) address.
    /// * `policy` - Fill policy for LBU and LHU.
    pub const fn extend_load(
        word: u32,
        op: MemOp,
        address: u32,
        policy: UnsignedLoadExtension,
    ) -> u32 {
        let Some(width) = op.width() else {
            return word;
        };
        if !op.is_load() {
            return word;
        }

        let low = word & width.mask();
        if !op.is_unsigned_load() {
            return low;
        }

        match policy {
            UnsignedLoadExtension::Zero => low,
            UnsignedLoadExtension::AddressBit => {
                if address & ADDRESS_FILL_BIT != 0 {
                    low | !width.mask()
                } else {
                    low
                }
            }
        }
    }

    /// Computes the word a store leaves behind in the store.
    ///
    /// # Arguments
    ///
    /// * `old` - The word currently at the target index.
    /// * `value` - The store value from the EX/MEM latch.
    /// * `width` - Store width.
    /// * `policy` - Whether bits outside `width` are zeroed or kept from `old`.
    pub const fn narrow_store(
        old: u32,
        value: u32,
        width: MemWidth,
        policy: NarrowStorePolicy,
    ) -> u32 {
        let mask = width.mask();
        match policy {
            NarrowStorePolicy::Overwrite => value & mask,
            NarrowStorePolicy::Merge => (old & !mask) | (value & mask),
        }
    }
}

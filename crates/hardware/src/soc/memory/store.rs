//! Word-Addressable Data Store.
//!
//! The memory stage owns a small array of 32-bit words standing in for data
//! memory. Word addresses are reduced into the array with `address % capacity`;
//! for the default 16-word store this keeps the low 4 address bits, the same
//! slice a 4-bit index bus would take. Reduction makes every address valid, so
//! the stage-facing accessors cannot fail. Raw-index accessors used by
//! harnesses and observers are bounds-checked instead.

use crate::common::error::StoreError;

/// Capacity of a default-constructed store, in words.
pub const DEFAULT_CAPACITY: usize = 16;

/// A fixed-capacity array of 32-bit words, initialized to zero.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DataStore {
    words: Vec<u32>,
}

impl DataStore {
    /// Creates a zeroed store of `capacity` words.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::ZeroCapacity`] if `capacity` is zero.
    pub fn new(capacity: usize) -> Result<Self, StoreError> {
        if capacity == 0 {
            return Err(StoreError::ZeroCapacity);
        }
        Ok(Self {
            words: vec![0; capacity],
        })
    }

    /// Number of words in the store.
    pub fn capacity(&self) -> usize {
        self.words.len()
    }

    /// Reduces a word address to an index into the store.
    pub fn index_of(&self, address: u32) -> usize {
        address as usize % self.words.len()
    }

    /// Reads the word that `address` reduces to.
    pub fn load(&self, address: u32) -> u32 {
        self.words[self.index_of(address)]
    }

    /// Writes the word that `address` reduces to.
    pub fn store(&mut self, address: u32, value: u32) {
        let index = self.index_of(address);
        self.words[index] = value;
    }

    /// Reads the word at a raw index.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::OutOfRange`] if `index >= capacity`.
    pub fn get(&self, index: usize) -> Result<u32, StoreError> {
        self.words
            .get(index)
            .copied()
            .ok_or(StoreError::OutOfRange {
                index,
                capacity: self.words.len(),
            })
    }

    /// Writes the word at a raw index, bypassing the pipeline.
    ///
    /// Intended for test benches that seed memory before the first clock edge.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::OutOfRange`] if `index >= capacity`.
    pub fn preload(&mut self, index: usize, value: u32) -> Result<(), StoreError> {
        let capacity = self.words.len();
        let slot = self
            .words
            .get_mut(index)
            .ok_or(StoreError::OutOfRange { index, capacity })?;
        *slot = value;
        Ok(())
    }

    /// The whole store, for trace recorders and assertions.
    pub fn words(&self) -> &[u32] {
        &self.words
    }

    /// Zeroes every word.
    pub fn reset(&mut self) {
        self.words.fill(0);
    }
}

impl Default for DataStore {
    fn default() -> Self {
        Self {
            words: vec![0; DEFAULT_CAPACITY],
        }
    }
}

//! Configuration system for the memory-stage model.
//!
//! This module defines the configuration structures used to parameterize the
//! stage. It provides:
//! 1. **Defaults:** The baseline store size and load/store policies.
//! 2. **Structures:** Hierarchical config for general, memory, and stage settings.
//! 3. **Enums:** Unsigned-load extension and narrow-store policies.
//!
//! Configuration is supplied as JSON (`Config::from_json` / `Config::from_path`),
//! or use `Config::default()`. Every field is optional; missing fields take the
//! defaults below, which keep the stage's legacy load/store behaviour.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::common::error::{ConfigError, StoreError};

/// Default configuration constants for the stage.
mod defaults {
    /// Number of 32-bit words in the data store.
    ///
    /// A 16-word store reduces an address to its low 4 bits.
    pub const STORE_WORDS: usize = crate::soc::memory::store::DEFAULT_CAPACITY;
}

/// How LBU and LHU fill the bits above the loaded byte or halfword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub enum UnsignedLoadExtension {
    /// Replicate bit 31 of the effective address into the upper bits.
    ///
    /// Legacy behaviour. It matches neither a zero nor a sign extension of the
    /// loaded data.
    #[default]
    AddressBit,
    /// Zero-fill the upper bits, as RV32I defines LBU and LHU.
    Zero,
}

/// How SB and SH treat the bits of the target word they do not cover.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub enum NarrowStorePolicy {
    /// Write the zero-padded value over the whole word (legacy behaviour).
    #[default]
    Overwrite,
    /// Keep the untouched upper bits of the existing word.
    Merge,
}

/// Root configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Config {
    /// General simulation settings.
    #[serde(default)]
    pub general: GeneralConfig,
    /// Data store settings.
    #[serde(default)]
    pub memory: MemoryConfig,
    /// Load/store policy settings.
    #[serde(default)]
    pub stage: StageConfig,
}

impl Config {
    /// Parses and validates a JSON configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON and
    /// [`ConfigError::Store`] when the result fails [`Config::validate`].
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses, and validates a JSON configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, otherwise as
    /// [`Config::from_json`].
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text)
    }

    /// Checks cross-field constraints that deserialization cannot express.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Store`] if `memory.store_words` is zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.memory.store_words == 0 {
            return Err(ConfigError::Store(StoreError::ZeroCapacity));
        }
        Ok(())
    }
}

/// General simulation settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Emit one `tracing` debug event per clock edge.
    #[serde(default)]
    pub trace_edges: bool,
}

/// Data store settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct MemoryConfig {
    /// Number of 32-bit words in the store. Addresses reduce modulo this value.
    #[serde(default = "MemoryConfig::default_store_words")]
    pub store_words: usize,
}

impl MemoryConfig {
    /// Returns the default store size in words.
    const fn default_store_words() -> usize {
        defaults::STORE_WORDS
    }
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            store_words: defaults::STORE_WORDS,
        }
    }
}

/// Load/store policy settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct StageConfig {
    /// Fill policy for LBU and LHU.
    #[serde(default)]
    pub unsigned_load_extension: UnsignedLoadExtension,
    /// Merge policy for SB and SH.
    #[serde(default)]
    pub narrow_store: NarrowStorePolicy,
}

//! Memory Access (MEM) Stage.
//!
//! This module implements the memory stage of the pipeline. Each cycle it
//! classifies the EX/MEM bundle and then either accesses its private data store
//! or forwards the arithmetic result:
//! 1. **Combinational:** Classification and `address = mem_immediate + arith_result`
//!    settle as soon as inputs are driven.
//! 2. **Sequential:** Load data, the forwarded result, the destination register,
//!    and store writes all commit together on the clock edge.
//!
//! Commits are double-buffered: an edge first computes everything it will write
//! from the state committed at the previous edge, then applies it in one step.
//! A store committed at edge `n` is therefore visible to loads at edge `n + 1`
//! and later, never to a load sampled at the same edge.

use std::fmt;

use tracing::{debug, trace};

use crate::common::error::ConfigError;
use crate::config::{Config, StageConfig};
use crate::core::pipeline::latches::{ExMemEntry, MemWb, MemWbEntry};
use crate::core::pipeline::signals::MemOp;
use crate::core::pipeline::traits::{PipelineLatch, PipelineStage};
use crate::core::units::lsu::Lsu;
use crate::isa::classify::decode_mnemonic;
use crate::soc::memory::DataStore;
use crate::stats::StageStats;
use crate::trace::{EdgeSnapshot, StoreWrite, TraceSink};

/// Everything one clock edge commits, computed before any of it is applied.
#[derive(Clone, Copy, Debug)]
struct PendingCommit {
    outputs: MemWbEntry,
    store_index: Option<usize>,
    store_write: Option<StoreWrite>,
}

/// The memory access stage: instruction classifier plus memory/forward unit.
pub struct MemoryStage {
    policy: StageConfig,
    trace_edges: bool,
    store: DataStore,
    inputs: ExMemEntry,
    op: Option<MemOp>,
    address: u32,
    mem_wb: MemWb,
    cycle: u64,
    stats: StageStats,
    sinks: Vec<Box<dyn TraceSink>>,
}

impl MemoryStage {
    /// Builds a stage with a zeroed data store.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Store`] if the configured store has no words.
    pub fn new(config: &Config) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            policy: config.stage,
            trace_edges: config.general.trace_edges,
            store: DataStore::new(config.memory.store_words)?,
            inputs: ExMemEntry::default(),
            op: None,
            address: 0,
            mem_wb: MemWb::default(),
            cycle: 0,
            stats: StageStats::default(),
            sinks: Vec::new(),
        })
    }

    /// Registers a sink to be called after every clock edge.
    pub fn attach(&mut self, sink: Box<dyn TraceSink>) {
        self.sinks.push(sink);
    }

    /// Read-only view of the data store.
    pub const fn store(&self) -> &DataStore {
        &self.store
    }

    /// Mutable access to the data store, outside of pipeline timing.
    ///
    /// For test benches seeding memory between edges. Writes made here are
    /// visible to the very next edge.
    pub const fn store_mut(&mut self) -> &mut DataStore {
        &mut self.store
    }

    /// The inputs last driven, truncated to their bus widths.
    pub const fn inputs(&self) -> &ExMemEntry {
        &self.inputs
    }

    /// Classifier output for the inputs last driven.
    pub const fn op(&self) -> Option<MemOp> {
        self.op
    }

    /// Value on the address bus.
    ///
    /// Updated whenever a load or store is driven; any other bundle leaves the
    /// previous address in place.
    pub const fn address(&self) -> u32 {
        self.address
    }

    /// Store index the current load or store will access.
    pub fn store_index(&self) -> Option<usize> {
        self.op
            .filter(|op| op.accesses_memory())
            .map(|_| self.store.index_of(self.address))
    }

    /// Number of clock edges since construction or the last reset.
    pub const fn cycle(&self) -> u64 {
        self.cycle
    }

    /// Operation counters.
    pub const fn stats(&self) -> &StageStats {
        &self.stats
    }

    /// Load/store policies in effect.
    pub const fn policy(&self) -> &StageConfig {
        &self.policy
    }

    /// Synchronous reset: zeroes the store, the latches, and the counters.
    ///
    /// Attached trace sinks stay attached.
    pub fn reset(&mut self) {
        self.store.reset();
        self.mem_wb.flush();
        self.inputs = ExMemEntry::default();
        self.op = None;
        self.address = 0;
        self.cycle = 0;
        self.stats = StageStats::default();
    }

    /// Computes what the next edge commits, without committing it.
    fn evaluate(&self) -> PendingCommit {
        let mut pending = PendingCommit {
            outputs: self.mem_wb.entry,
            store_index: None,
            store_write: None,
        };

        match self.op {
            None => {}
            Some(MemOp::Passthrough) => {
                pending.outputs.forwarded_result = self.inputs.arith_result;
            }
            Some(op) => {
                let index = self.store.index_of(self.address);
                let word = self.store.load(self.address);
                pending.store_index = Some(index);

                if op.is_load() {
                    pending.outputs.loaded_data = Lsu::extend_load(
                        word,
                        op,
                        self.address,
                        self.policy.unsigned_load_extension,
                    );
                    pending.outputs.forwarded_dest_register = self.inputs.rd();
                } else if let Some(width) = op.width() {
                    let value = Lsu::narrow_store(
                        word,
                        self.inputs.store_value,
                        width,
                        self.policy.narrow_store,
                    );
                    pending.store_write = Some(StoreWrite { index, value });
                }
            }
        }

        pending
    }

    fn snapshot(&self, pending: &PendingCommit) -> EdgeSnapshot {
        EdgeSnapshot {
            cycle: self.cycle,
            inputs: self.inputs,
            op: self.op,
            mnemonic: decode_mnemonic(
                self.inputs.category,
                self.inputs.opcode_ext1,
                self.inputs.opcode_ext2,
            ),
            address: self.address,
            store_index: pending.store_index,
            store_write: pending.store_write,
            outputs: self.mem_wb.entry,
        }
    }

    fn log_edge(&self, pending: &PendingCommit) {
        let name = decode_mnemonic(
            self.inputs.category,
            self.inputs.opcode_ext1,
            self.inputs.opcode_ext2,
        )
        .map_or("?", |m| m.as_str());

        match (self.op, pending.store_write, pending.store_index) {
            (Some(_), Some(write), _) => debug!(
                "MEM cycle={} {} STORE addr={:#x} idx={} data={:#x}",
                self.cycle, name, self.address, write.index, write.value
            ),
            (Some(_), None, Some(index)) => debug!(
                "MEM cycle={} {} LOAD addr={:#x} idx={} rd=x{} data={:#x}",
                self.cycle,
                name,
                self.address,
                index,
                pending.outputs.forwarded_dest_register,
                pending.outputs.loaded_data
            ),
            (Some(_), None, None) => debug!(
                "MEM cycle={} {} FORWARD result={:#x}",
                self.cycle, name, pending.outputs.forwarded_result
            ),
            (None, _, _) => debug!(
                "MEM cycle={} # no operation (category={:#05b} ext1={:#013b} ext2={:#012b})",
                self.cycle, self.inputs.category, self.inputs.opcode_ext1, self.inputs.opcode_ext2
            ),
        }
    }
}

impl PipelineStage for MemoryStage {
    type Input = ExMemEntry;
    type Output = MemWbEntry;

    fn drive(&mut self, input: &ExMemEntry) {
        self.inputs = input.masked();
        self.op = self.inputs.op();
        if self.op.is_some_and(MemOp::accesses_memory) {
            self.address = self.inputs.effective_address();
        }
        trace!(
            "MEM drive category={:#05b} op={:?} addr={:#x}",
            self.inputs.category, self.op, self.address
        );
    }

    fn edge(&mut self) {
        let pending = self.evaluate();

        if let Some(write) = pending.store_write {
            self.store.store(self.address, write.value);
        }
        self.mem_wb.entry = pending.outputs;
        self.cycle += 1;
        self.stats.record(self.op);

        if self.trace_edges {
            self.log_edge(&pending);
        }

        if !self.sinks.is_empty() {
            let snapshot = self.snapshot(&pending);
            for sink in &mut self.sinks {
                sink.on_edge(&snapshot);
            }
        }
    }

    fn output(&self) -> &MemWbEntry {
        &self.mem_wb.entry
    }
}

impl fmt::Debug for MemoryStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemoryStage")
            .field("policy", &self.policy)
            .field("cycle", &self.cycle)
            .field("op", &self.op)
            .field("address", &self.address)
            .field("mem_wb", &self.mem_wb)
            .field("store", &self.store)
            .field("sinks", &self.sinks.len())
            .finish_non_exhaustive()
    }
}

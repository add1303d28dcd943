//! Clock-edge observability hook.
//!
//! Waveform dumpers, loggers, and test benches observe the stage through
//! [`TraceSink`]. After every clock edge the stage hands each attached sink an
//! [`EdgeSnapshot`] describing the inputs it sampled, what it decided, and the
//! state it committed. [`TraceRecorder`] is an in-memory sink that can dump its
//! snapshots as JSON lines.

use std::cell::RefCell;
use std::fmt::Write as _;
use std::rc::Rc;

use serde::Serialize;

use crate::core::pipeline::latches::{ExMemEntry, MemWbEntry};
use crate::core::pipeline::signals::MemOp;
use crate::isa::table::Mnemonic;

/// A data store write committed at an edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct StoreWrite {
    /// Reduced word index.
    pub index: usize,
    /// Word written.
    pub value: u32,
}

/// Everything observable about one clock edge.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct EdgeSnapshot {
    /// Edge number, starting at 1 for the first edge after reset.
    pub cycle: u64,
    /// Inputs sampled at this edge, truncated to their bus widths.
    pub inputs: ExMemEntry,
    /// Operation performed, or `None` for an unrecognized bundle.
    pub op: Option<MemOp>,
    /// Mnemonic of the sampled instruction, if the tables name one.
    pub mnemonic: Option<Mnemonic>,
    /// Value on the address bus during the cycle.
    pub address: u32,
    /// Store index accessed, for loads and stores.
    pub store_index: Option<usize>,
    /// Store write committed, for stores.
    pub store_write: Option<StoreWrite>,
    /// MEM/WB latch contents after the edge.
    pub outputs: MemWbEntry,
}

/// Receives a snapshot after every clock edge.
pub trait TraceSink {
    /// Called once per edge, after all state has committed.
    fn on_edge(&mut self, snapshot: &EdgeSnapshot);
}

impl<S: TraceSink + ?Sized> TraceSink for Rc<RefCell<S>> {
    fn on_edge(&mut self, snapshot: &EdgeSnapshot) {
        self.borrow_mut().on_edge(snapshot);
    }
}

/// In-memory trace sink.
#[derive(Debug, Default)]
pub struct TraceRecorder {
    snapshots: Vec<EdgeSnapshot>,
}

impl TraceRecorder {
    /// Creates an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty recorder behind a shared handle.
    ///
    /// Attach a clone of the handle to the stage and keep the other to read
    /// the recording back.
    pub fn shared() -> Rc<RefCell<Self>> {
        Rc::new(RefCell::new(Self::new()))
    }

    /// Snapshots recorded so far, oldest first.
    pub fn snapshots(&self) -> &[EdgeSnapshot] {
        &self.snapshots
    }

    /// The most recent snapshot.
    pub fn last(&self) -> Option<&EdgeSnapshot> {
        self.snapshots.last()
    }

    /// Discards all recorded snapshots.
    pub fn clear(&mut self) {
        self.snapshots.clear();
    }

    /// Serializes the recording, one JSON object per line.
    ///
    /// # Errors
    ///
    /// Returns the serializer error if a snapshot fails to serialize.
    pub fn to_json_lines(&self) -> Result<String, serde_json::Error> {
        let mut out = String::new();
        for snapshot in &self.snapshots {
            let line = serde_json::to_string(snapshot)?;
            // Writing to a String cannot fail.
            let _ = writeln!(out, "{line}");
        }
        Ok(out)
    }
}

impl TraceSink for TraceRecorder {
    fn on_edge(&mut self, snapshot: &EdgeSnapshot) {
        self.snapshots.push(snapshot.clone());
    }
}

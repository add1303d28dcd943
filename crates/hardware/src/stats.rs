//! Stage statistics collection and reporting.
//!
//! This module tracks what the memory stage did on each clock edge. It provides:
//! 1. **Edge count:** Total clock edges since reset.
//! 2. **Operation mix:** Loads, stores, forwarded results, and no-op edges.

use serde::Serialize;

use crate::core::pipeline::signals::MemOp;

/// Per-stage operation counters.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct StageStats {
    /// Clock edges since reset.
    pub edges: u64,
    /// Edges that performed a load.
    pub loads: u64,
    /// Edges that performed a store.
    pub stores: u64,
    /// Edges that forwarded an arithmetic result.
    pub passthroughs: u64,
    /// Edges with an unrecognized bundle; latches held.
    pub idle: u64,
}

impl StageStats {
    /// Accounts for one edge that performed `op`.
    pub const fn record(&mut self, op: Option<MemOp>) {
        self.edges += 1;
        match op {
            Some(op) if op.is_load() => self.loads += 1,
            Some(op) if op.is_store() => self.stores += 1,
            Some(_) => self.passthroughs += 1,
            None => self.idle += 1,
        }
    }

    /// Edges that accessed the data store.
    pub const fn memory_accesses(&self) -> u64 {
        self.loads + self.stores
    }

    /// Prints a formatted summary of the counters.
    pub fn print(&self) {
        let edges = if self.edges == 0 { 1 } else { self.edges };
        let pct = |n: u64| (n as f64 / edges as f64) * 100.0;

        println!("\n==========================================================");
        println!("MEMORY STAGE STATISTICS");
        println!("==========================================================");
        println!("sim_edges                {}", self.edges);
        println!("----------------------------------------------------------");
        println!("OPERATION MIX");
        println!("  op.load                {} ({:.2}%)", self.loads, pct(self.loads));
        println!("  op.store               {} ({:.2}%)", self.stores, pct(self.stores));
        println!(
            "  op.forward             {} ({:.2}%)",
            self.passthroughs,
            pct(self.passthroughs)
        );
        println!("  op.idle                {} ({:.2}%)", self.idle, pct(self.idle));
        println!("==========================================================");
    }
}

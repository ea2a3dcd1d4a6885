//! Engine types
//!
//! Run outcomes and the simulation report.

use crate::partition::{PartitionResult, ResultRecord};
use serde::Serialize;

/// Outcome of a simulation run
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Outcome {
    /// No IDs supplied yet; nothing was computed
    Waiting,
    /// A completed run
    Completed(SimulationReport),
}

impl Outcome {
    /// Check if this is the waiting state
    pub fn is_waiting(&self) -> bool {
        matches!(self, Self::Waiting)
    }

    /// Get the report, if the run completed
    pub fn report(&self) -> Option<&SimulationReport> {
        match self {
            Self::Completed(report) => Some(report),
            Self::Waiting => None,
        }
    }
}

/// Everything one run produces
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SimulationReport {
    /// The input ID list, in order
    pub ids: Vec<i64>,
    /// Parity partition of `ids`
    pub partition: PartitionResult,
    /// Per-ID shard assignments, input order
    pub records: Vec<ResultRecord>,
    /// Whether the IDs were generated automatically
    pub generated: bool,
}

impl SimulationReport {
    /// The three scalar counts reported for a run
    pub fn counts(&self) -> Counts {
        Counts {
            total: self.ids.len(),
            even: self.partition.even_count(),
            odd: self.partition.odd_count(),
        }
    }
}

/// Scalar counts for a completed run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Counts {
    /// Total IDs partitioned
    pub total: usize,
    /// IDs in Shard A (even)
    pub even: usize,
    /// IDs in Shard B (odd)
    pub odd: usize,
}

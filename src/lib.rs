//! # Shard Partition Simulator
//!
//! Partitions a list of integer IDs into two "shards" by parity (even/odd),
//! reports counts, renders a bar chart, and exports the result as CSV.
//!
//! "Shard" here is purely a label for one of two output buckets produced by
//! a parity test. This is not a distributed sharding system, not a
//! consistent-hashing router, and not a data store.
//!
//! ## Quick Start
//!
//! ```rust
//! use shard_sim::config::SimulationConfig;
//! use shard_sim::engine::{run_simulation, Outcome};
//! use shard_sim::source::RandomSampler;
//!
//! let config = SimulationConfig::manual("10, 23, 45, 66");
//! let mut sampler = RandomSampler::new();
//!
//! match run_simulation(&config, &mut sampler).unwrap() {
//!     Outcome::Completed(report) => {
//!         assert_eq!(report.partition.evens, vec![10, 66]);
//!         assert_eq!(report.partition.odds, vec![23, 45]);
//!     }
//!     Outcome::Waiting => unreachable!("IDs were supplied"),
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                      CLI / HTTP server                   │
//! │        run · validate · serve (/simulate, /simulate/csv) │
//! └──────────────────────────┬───────────────────────────────┘
//!                            │
//! ┌──────────┬───────────────┴───────────┬───────────────────┐
//! │  Source  │          Engine           │      Report       │
//! ├──────────┼───────────────────────────┼───────────────────┤
//! │ Sampler  │ validate → resolve IDs →  │ counts · lists    │
//! │ Parser   │ partition (pure) → report │ chart · table     │
//! │          │                           │ CSV export        │
//! └──────────┴───────────────────────────┴───────────────────┘
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the simulator
pub mod error;

/// Simulation request configuration
pub mod config;

/// Parity partitioning (the pure core)
pub mod partition;

/// ID sources: random generation and manual input parsing
pub mod source;

/// Simulation engine (one synchronous run)
pub mod engine;

/// Reporting: counts, chart, table, CSV export
pub mod report;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use config::SimulationConfig;
pub use engine::{run_simulation, Counts, Outcome, SimulationReport};
pub use error::{Error, Result};
pub use partition::{partition, PartitionResult, ResultRecord, ShardLabel};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");

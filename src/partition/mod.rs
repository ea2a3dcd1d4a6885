//! Parity partitioning module
//!
//! The one pure computation in the crate: split an ID list into an even
//! bucket (Shard A) and an odd bucket (Shard B), preserving input order.
//!
//! # Invariants
//!
//! - Every input element lands in exactly one bucket:
//!   `evens.len() + odds.len() == ids.len()`.
//! - Relative order within each bucket matches the input.
//! - Deterministic: identical input yields identical output.

mod types;

pub use types::{PartitionResult, ResultRecord, ShardLabel};

/// Partition a list of IDs by parity.
///
/// Pure function: no side effects, no hidden state, total over `i64`.
/// Any integer is valid input; the empty list yields two empty buckets.
pub fn partition(ids: &[i64]) -> PartitionResult {
    let mut result = PartitionResult::default();
    for &id in ids {
        match ShardLabel::of(id) {
            ShardLabel::A => result.evens.push(id),
            ShardLabel::B => result.odds.push(id),
        }
    }
    result
}

/// Build per-ID result records, one per input ID in input order.
///
/// Uses the same classification as [`partition`], so the table and CSV views
/// can never drift from the bucket contents.
pub fn records(ids: &[i64]) -> Vec<ResultRecord> {
    ids.iter()
        .map(|&id| ResultRecord {
            id,
            shard: ShardLabel::of(id),
        })
        .collect()
}

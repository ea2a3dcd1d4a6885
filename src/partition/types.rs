//! Partition types
//!
//! Shard labels, the partition result, and the per-ID result record.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Shard label assigned to an ID by parity
///
/// Serialized with the exact rendered labels so JSON output matches the CSV
/// export byte for byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShardLabel {
    /// Shard A holds even IDs
    #[serde(rename = "A (Par)")]
    A,
    /// Shard B holds odd IDs
    #[serde(rename = "B (Ímpar)")]
    B,
}

impl ShardLabel {
    /// Classify an ID by parity.
    ///
    /// `%` on `i64` returns 0 for every even value regardless of sign
    /// (`-4 % 2 == 0`, `-3 % 2 == -1`), so no normalization is needed.
    pub fn of(id: i64) -> Self {
        if id % 2 == 0 {
            Self::A
        } else {
            Self::B
        }
    }

    /// The rendered label, as it appears in the CSV export
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::A => "A (Par)",
            Self::B => "B (Ímpar)",
        }
    }

    /// Whether this label marks the even bucket
    pub fn is_even(&self) -> bool {
        matches!(self, Self::A)
    }
}

impl fmt::Display for ShardLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of partitioning an ID list by parity
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartitionResult {
    /// Even IDs (Shard A), input order preserved
    pub evens: Vec<i64>,
    /// Odd IDs (Shard B), input order preserved
    pub odds: Vec<i64>,
}

impl PartitionResult {
    /// Total number of partitioned IDs
    pub fn total(&self) -> usize {
        self.evens.len() + self.odds.len()
    }

    /// Number of even IDs (Shard A)
    pub fn even_count(&self) -> usize {
        self.evens.len()
    }

    /// Number of odd IDs (Shard B)
    pub fn odd_count(&self) -> usize {
        self.odds.len()
    }

    /// Whether both buckets are empty
    pub fn is_empty(&self) -> bool {
        self.evens.is_empty() && self.odds.is_empty()
    }
}

/// One ID paired with its shard label
///
/// Field names match the CSV header (`ID,Shard`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultRecord {
    /// The input ID
    #[serde(rename = "ID")]
    pub id: i64,
    /// The shard the ID was assigned to
    #[serde(rename = "Shard")]
    pub shard: ShardLabel,
}

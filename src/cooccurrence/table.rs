//! The nested co-occurrence frequency table.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Neighbor-token frequency counts for one center token.
pub type NeighborCounts = FxHashMap<String, u64>;

/// A mapping from center token to neighbor-token frequency counts.
///
/// Keyed by token identity, not position: when the same token appears at
/// multiple center positions, its neighbor map is the sum across all of
/// them. Counts are `u64` so realistic corpora cannot overflow. Iteration
/// order of the underlying maps is not significant; ordered views are the
/// job of [`crate::topk`].
///
/// Serializes as a plain nested JSON object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CooccurrenceTable {
    counts: FxHashMap<String, NeighborCounts>,
}

impl CooccurrenceTable {
    /// Create a new empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a table with pre-allocated capacity for distinct centers
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            counts: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
        }
    }

    /// Get or create the neighbor map for a center token.
    ///
    /// Every center position gets a neighbor map even when the window
    /// yields no in-range neighbors (a single-token sequence).
    pub(crate) fn center_entry(&mut self, center: &str) -> &mut NeighborCounts {
        self.counts.entry(center.to_string()).or_default()
    }

    /// Add `count` to the `center -> neighbor` cell.
    pub fn record(&mut self, center: &str, neighbor: &str, count: u64) {
        let entry = self
            .center_entry(center)
            .entry(neighbor.to_string())
            .or_insert(0);
        *entry += count;
    }

    /// Merge another table into this one, summing counts cell-wise.
    pub fn merge_from(&mut self, other: CooccurrenceTable) {
        for (center, neighbors) in other.counts {
            let target = self.counts.entry(center).or_default();
            for (neighbor, count) in neighbors {
                *target.entry(neighbor).or_insert(0) += count;
            }
        }
    }

    /// Neighbor counts for a center token, if present.
    pub fn neighbors(&self, center: &str) -> Option<&NeighborCounts> {
        self.counts.get(center)
    }

    /// The count recorded for a `center -> neighbor` pair (0 if absent).
    pub fn count(&self, center: &str, neighbor: &str) -> u64 {
        self.counts
            .get(center)
            .and_then(|m| m.get(neighbor))
            .copied()
            .unwrap_or(0)
    }

    /// Number of distinct center tokens
    pub fn num_centers(&self) -> usize {
        self.counts.len()
    }

    /// Check whether the table has no centers
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Iterate over center tokens
    pub fn centers(&self) -> impl Iterator<Item = &str> {
        self.counts.keys().map(String::as_str)
    }
}

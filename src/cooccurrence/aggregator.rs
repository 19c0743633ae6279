//! Eager and parallel co-occurrence aggregation.

use crate::cooccurrence::table::CooccurrenceTable;
use rayon::prelude::*;
use std::ops::Range;

/// Center positions per parallel partition.
const PARTITION_SIZE: usize = 4096;

/// Compute the co-occurrence table for a symmetric window.
///
/// For each center position `i`, every position `j` with `|j - i| <= window`,
/// `j != i`, and `j` in range contributes 1 to `table[tokens[i]][tokens[j]]`.
/// Repeated center tokens accumulate into the same neighbor map.
///
/// `window == 0` or `window > tokens.len()` returns an empty table; invalid
/// sizes are a defined empty-result case, not an error.
pub fn cooccurrences(window: usize, tokens: &[String]) -> CooccurrenceTable {
    if window == 0 || window > tokens.len() {
        return CooccurrenceTable::new();
    }

    let mut table = CooccurrenceTable::with_capacity(tokens.len() / 2);
    accumulate_range(&mut table, window, tokens, 0..tokens.len());
    table
}

/// Compute the co-occurrence table in parallel over center-position ranges.
///
/// Each partition accumulates into its own local table; partials are merged
/// by sum. Neighbor lookups read the full immutable token slice, so windows
/// crossing a partition boundary are counted exactly once (by the partition
/// owning the center). Counts are identical to [`cooccurrences`].
pub fn par_cooccurrences(window: usize, tokens: &[String]) -> CooccurrenceTable {
    if window == 0 || window > tokens.len() {
        return CooccurrenceTable::new();
    }

    let table = tokens
        .par_chunks(PARTITION_SIZE)
        .enumerate()
        .map(|(chunk_idx, chunk)| {
            let start = chunk_idx * PARTITION_SIZE;
            let mut local = CooccurrenceTable::with_capacity(chunk.len() / 2);
            accumulate_range(&mut local, window, tokens, start..start + chunk.len());
            local
        })
        .reduce(CooccurrenceTable::new, |mut merged, partial| {
            merged.merge_from(partial);
            merged
        });

    tracing::debug!(
        centers = table.num_centers(),
        window,
        "parallel co-occurrence aggregation finished"
    );
    table
}

/// Accumulate window counts for the center positions in `centers`.
///
/// Neighbor offsets index the full token slice, not the range, so this is
/// the unit of work shared by the sequential, one-shot, and parallel entry
/// points. The caller guarantees `1 <= window <= tokens.len()`.
pub(crate) fn accumulate_range(
    table: &mut CooccurrenceTable,
    window: usize,
    tokens: &[String],
    centers: Range<usize>,
) {
    for i in centers {
        accumulate_center(table, window, tokens, i);
    }
}

/// Accumulate window counts for a single center position.
pub(crate) fn accumulate_center(
    table: &mut CooccurrenceTable,
    window: usize,
    tokens: &[String],
    i: usize,
) {
    // The neighbor map must exist even when no neighbor is in range.
    let neighbors = table.center_entry(&tokens[i]);

    let lo = i.saturating_sub(window);
    let hi = (i + window).min(tokens.len() - 1);
    for j in lo..=hi {
        if j == i {
            continue;
        }
        *neighbors.entry(tokens[j].clone()).or_insert(0) += 1;
    }
}

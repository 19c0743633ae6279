//! Top-K ranked neighbor extraction.

use crate::cooccurrence::table::CooccurrenceTable;
use indexmap::IndexMap;

/// Return the `k` most frequent neighbors of `center`, most frequent first.
///
/// The result is an order-preserving map: iteration yields entries in
/// descending count order. Equal counts are broken lexicographically by
/// neighbor token (ascending), so the ranking is fully deterministic. An
/// absent center or `k == 0` yields an empty map; fewer than `k` neighbors
/// yields all of them.
pub fn top_k(center: &str, k: usize, table: &CooccurrenceTable) -> IndexMap<String, u64> {
    let mut ranked = IndexMap::new();
    if k == 0 {
        return ranked;
    }

    let neighbors = match table.neighbors(center) {
        Some(neighbors) => neighbors,
        None => return ranked,
    };

    let mut entries: Vec<(&str, u64)> = neighbors
        .iter()
        .map(|(token, &count)| (token.as_str(), count))
        .collect();
    entries.sort_unstable_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));

    for (token, count) in entries.into_iter().take(k) {
        // First-seen wins should the source ever hand us duplicate keys.
        ranked.entry(token.to_string()).or_insert(count);
    }
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cooccurrence::aggregator::cooccurrences;

    fn tokens(words: &[&str]) -> Vec<String> {
        words.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_top_one() {
        let toks = tokens(&["a", "b", "a", "c"]);
        let table = cooccurrences(1, &toks);

        let top = top_k("a", 1, &table);
        assert_eq!(top.len(), 1);
        assert_eq!(top.get("b"), Some(&2));
    }

    #[test]
    fn test_descending_order_with_lexicographic_ties() {
        let mut table = CooccurrenceTable::new();
        table.record("x", "delta", 3);
        table.record("x", "alpha", 1);
        table.record("x", "beta", 3);
        table.record("x", "gamma", 2);

        let top = top_k("x", 4, &table);
        let order: Vec<&str> = top.keys().map(String::as_str).collect();
        assert_eq!(order, vec!["beta", "delta", "gamma", "alpha"]);
    }

    #[test]
    fn test_absent_center_is_empty() {
        let table = cooccurrences(1, &tokens(&["a", "b"]));
        assert!(top_k("missing", 3, &table).is_empty());
    }

    #[test]
    fn test_k_zero_is_empty() {
        let table = cooccurrences(1, &tokens(&["a", "b"]));
        assert!(top_k("a", 0, &table).is_empty());
    }

    #[test]
    fn test_k_larger_than_neighbor_map() {
        let toks = tokens(&["a", "b", "a", "c"]);
        let table = cooccurrences(1, &toks);

        let top = top_k("a", 100, &table);
        assert_eq!(top.len(), 2);
    }

    #[test]
    fn test_returned_counts_dominate_omitted() {
        let mut table = CooccurrenceTable::new();
        for (neighbor, count) in [("p", 5), ("q", 4), ("r", 3), ("s", 2), ("t", 1)] {
            table.record("x", neighbor, count);
        }

        let top = top_k("x", 2, &table);
        let min_returned = top.values().min().copied().unwrap_or(0);
        // Every returned count is >= every count left out (max left out is 3).
        assert!(min_returned >= 3);
        assert_eq!(top.len(), 2);
    }

    #[test]
    fn test_json_preserves_rank_order() {
        let mut table = CooccurrenceTable::new();
        table.record("x", "zz", 9);
        table.record("x", "aa", 1);

        let top = top_k("x", 2, &table);
        let json = serde_json::to_string(&top).unwrap();
        assert_eq!(json, r#"{"zz":9,"aa":1}"#);
    }
}

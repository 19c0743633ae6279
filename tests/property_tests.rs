//! Property-based tests using proptest

use cooccur::*;
use proptest::prelude::*;

/// Small alphabet so sequences repeat tokens and exercise merge-by-sum.
fn token_seq() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-e]{1,3}", 0..40)
}

/// Brute-force co-occurrence oracle straight from the definition:
/// count(t, u) = |{(i, j) : tokens[i] = t, tokens[j] = u, j != i, |i - j| <= window}|.
fn oracle_count(tokens: &[String], window: usize, center: &str, neighbor: &str) -> u64 {
    let mut count = 0;
    for i in 0..tokens.len() {
        if tokens[i] != center {
            continue;
        }
        for j in 0..tokens.len() {
            if j != i && i.abs_diff(j) <= window && tokens[j] == neighbor {
                count += 1;
            }
        }
    }
    count
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn test_ngram_strategies_identical(tokens in token_seq(), n in 0usize..8) {
        prop_assert_eq!(ngrams(n, &tokens), sliding_ngrams(n, &tokens));
    }

    #[test]
    fn test_ngram_shape(tokens in token_seq(), n in 1usize..8) {
        let grams = ngrams(n, &tokens);

        if n > tokens.len() {
            prop_assert!(grams.is_empty());
        } else {
            prop_assert_eq!(grams.len(), tokens.len() - n + 1);
            for (i, gram) in grams.iter().enumerate() {
                let parts: Vec<&str> = gram.split(' ').collect();
                prop_assert_eq!(parts.len(), n);
                prop_assert_eq!(parts[0], tokens[i].as_str());
            }
        }
    }

    #[test]
    fn test_ngram_fold_matches_direct(tokens in token_seq(), n in 1usize..6) {
        if n <= tokens.len() {
            let folded = run(&NgramWindows::new(n), &tokens);
            prop_assert_eq!(folded, ngrams(n, &tokens));
        }
    }

    #[test]
    fn test_ngram_fold_partition_invariant(
        tokens in token_seq(),
        n in 1usize..5,
        split in 0usize..40,
    ) {
        let fold = NgramWindows::new(n);
        let whole = run(&fold, &tokens);

        let split = split.min(tokens.len());
        let (lhs, rhs) = tokens.split_at(split);
        prop_assert_eq!(run_partitioned(&fold, &[lhs, rhs]), whole);
    }

    #[test]
    fn test_cooccurrence_matches_oracle(tokens in token_seq(), window in 1usize..6) {
        let table = cooccurrences(window, &tokens);

        if window > tokens.len() {
            prop_assert!(table.is_empty());
        } else {
            for center in &tokens {
                for neighbor in &tokens {
                    prop_assert_eq!(
                        table.count(center, neighbor),
                        oracle_count(&tokens, window, center, neighbor),
                        "center = {}, neighbor = {}", center, neighbor
                    );
                }
            }
        }
    }

    #[test]
    fn test_aggregation_realizations_agree(tokens in token_seq(), window in 0usize..6) {
        let eager = cooccurrences(window, &tokens);
        let parallel = par_cooccurrences(window, &tokens);

        let mut oneshot = OneShotAggregator::new(window);
        let folded = oneshot.run(&tokens).clone();

        prop_assert_eq!(&eager, &parallel);
        prop_assert_eq!(&eager, &folded);
    }

    #[test]
    fn test_oneshot_rerun_returns_cached(tokens in token_seq(), window in 1usize..4) {
        let mut aggregator = OneShotAggregator::new(window);
        let first = aggregator.run(&tokens).clone();
        let second = aggregator.run(&[]).clone();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn test_top_k_invariants(tokens in token_seq(), window in 1usize..4, k in 0usize..8) {
        let table = cooccurrences(window, &tokens);

        for center in &tokens {
            let top = top_k(center, k, &table);
            let neighbors = table.neighbors(center);

            let available = neighbors.map(|m| m.len()).unwrap_or(0);
            prop_assert_eq!(top.len(), k.min(available));

            // Descending counts in iteration order.
            let counts: Vec<u64> = top.values().copied().collect();
            prop_assert!(counts.windows(2).all(|pair| pair[0] >= pair[1]));

            // Every returned count dominates every omitted count.
            if let Some(neighbors) = neighbors {
                let floor = counts.last().copied().unwrap_or(0);
                for (token, &count) in neighbors {
                    if !top.contains_key(token) {
                        prop_assert!(count <= floor || counts.is_empty());
                    }
                }
            }
        }
    }

    #[test]
    fn test_running_mean_partition_invariant(
        items in prop::collection::vec(-100.0f64..100.0, 0..30),
        split in 0usize..30,
    ) {
        let fold = RunningMean::new();
        let whole = run(&fold, &items);

        let split = split.min(items.len());
        let (lhs, rhs) = items.split_at(split);
        let merged = run_partitioned(&fold, &[lhs, rhs]);

        prop_assert_eq!(whole.len(), merged.len());
        for (a, b) in whole.iter().zip(&merged) {
            prop_assert!((a - b).abs() < 1e-6, "{} vs {}", a, b);
        }
    }
}

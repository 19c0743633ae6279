//! N-gram extraction strategies.

/// Extract n-grams by direct index-based construction.
///
/// For each start index `i` in `0..=N-n`, emits the space-joined string of
/// `tokens[i..i + n]`, in increasing `i` order. The result has exactly
/// `N - n + 1` elements.
///
/// Out-of-range widths are not errors: `n == 0` or `n > tokens.len()`
/// returns an empty vec, and `n == 1` returns the token sequence itself.
pub fn ngrams(n: usize, tokens: &[String]) -> Vec<String> {
    if n == 0 || n > tokens.len() {
        return Vec::new();
    }

    if n == 1 {
        return tokens.to_vec();
    }

    let mut grams = Vec::with_capacity(tokens.len() - n + 1);
    for i in 0..=tokens.len() - n {
        let mut gram = String::with_capacity(joined_len(&tokens[i..i + n]));
        for (offset, token) in tokens[i..i + n].iter().enumerate() {
            if offset > 0 {
                gram.push(' ');
            }
            gram.push_str(token);
        }
        grams.push(gram);
    }
    grams
}

/// Extract n-grams with a sliding window advancing one token at a time.
///
/// Same contract and edge-case policy as [`ngrams`]; the two strategies
/// produce identical output for identical input.
pub fn sliding_ngrams(n: usize, tokens: &[String]) -> Vec<String> {
    if n == 0 || n > tokens.len() {
        return Vec::new();
    }

    if n == 1 {
        return tokens.to_vec();
    }

    tokens.windows(n).map(|window| window.join(" ")).collect()
}

fn joined_len(window: &[String]) -> usize {
    window.iter().map(String::len).sum::<usize>() + window.len().saturating_sub(1)
}

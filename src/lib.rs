//! # cooccur
//!
//! Windowed text analysis over an in-memory token sequence: contiguous
//! n-gram extraction, symmetric-window co-occurrence counting, and top-K
//! neighbor ranking.
//!
//! The crate is built around three independent components that consume the
//! same immutable token sequence:
//!
//! - [`ngram`]: sliding n-gram extraction with two observably equivalent
//!   strategies (direct indexing and window advancement).
//! - [`cooccurrence`]: a nested center/neighbor frequency table, built
//!   eagerly, as a one-shot fold, or in parallel.
//! - [`topk`]: ranked extraction of a token's most frequent neighbors.
//!
//! Tokenization is a collaborator, not part of the core: any flat ordered
//! `Vec<String>` works. A Unicode-aware lowercase word tokenizer is provided
//! in [`nlp`], and [`analysis`] wires everything into a single-invocation
//! pipeline with a serializable report.
//!
//! ## Example
//!
//! ```
//! use cooccur::{cooccurrences, ngrams, top_k};
//!
//! let tokens: Vec<String> = ["the", "cat", "sat", "on", "the", "mat"]
//!     .iter().map(|s| s.to_string()).collect();
//!
//! let grams = ngrams(2, &tokens);
//! assert_eq!(grams[0], "the cat");
//!
//! let table = cooccurrences(1, &tokens);
//! let top = top_k("the", 2, &table);
//! assert_eq!(top.get("cat"), Some(&1));
//! ```

pub mod analysis;
pub mod cooccurrence;
pub mod errors;
pub mod fold;
pub mod ngram;
pub mod nlp;
pub mod topk;
pub mod types;

// Re-export commonly used types
pub use errors::{AnalysisError, Result};
pub use types::AnalysisConfig;

// Re-export main functionality
pub use analysis::{AnalysisReport, Analyzer};
pub use cooccurrence::{
    aggregator::{cooccurrences, par_cooccurrences},
    oneshot::OneShotAggregator,
    table::CooccurrenceTable,
};
pub use fold::{run, run_partitioned, Fold, NgramWindows, RunningMean};
pub use ngram::{ngrams, sliding_ngrams};
pub use nlp::tokenizer::Tokenizer;
pub use topk::top_k;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

//! Contiguous n-gram extraction.
//!
//! Two observably equivalent strategies are exposed: [`ngrams`] builds each
//! gram directly from its start index, [`sliding_ngrams`] advances a window
//! one token at a time. Equivalence over every valid input is a tested
//! property, not an implementation detail.

pub mod extractor;

pub use extractor::{ngrams, sliding_ngrams};

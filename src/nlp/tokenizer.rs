//! Unicode-aware word tokenization
//!
//! Produces the lowercase token sequence the analysis core consumes.
//! Word boundaries follow UAX #29, so locale-specific letters (umlauts,
//! accented characters, CJK) are handled without a hand-maintained
//! character class.

use unicode_segmentation::UnicodeSegmentation;

/// A Unicode-aware tokenizer producing lowercase word tokens.
///
/// Tokens are UAX #29 word segments that contain at least one alphabetic
/// character, lowercased. Pure numbers and punctuation are dropped.
#[derive(Debug, Clone)]
pub struct Tokenizer {
    /// Minimum token length (in chars) to keep
    min_token_length: usize,
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Tokenizer {
    /// Create a new tokenizer with default settings
    pub fn new() -> Self {
        Self {
            min_token_length: 1,
        }
    }

    /// Set minimum token length
    pub fn with_min_length(mut self, min_length: usize) -> Self {
        self.min_token_length = min_length;
        self
    }

    /// Tokenize text into a flat ordered sequence of lowercase word tokens.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        text.unicode_words()
            .filter(|w| w.chars().count() >= self.min_token_length)
            .filter(|w| w.chars().any(char::is_alphabetic))
            .map(|w| w.to_lowercase())
            .collect()
    }
}

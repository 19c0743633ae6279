//! Configuration for the analysis pipeline.

use crate::errors::{AnalysisError, Result};
use serde::{Deserialize, Serialize};

/// Configuration for a single analysis invocation.
///
/// Validation is a facade-level strictness gate: the core extraction and
/// aggregation functions stay total over all parameter values and return
/// empty results for out-of-range sizes. [`AnalysisConfig::validate`] exists
/// so that a caller constructing a pipeline from external input (JSON, CLI)
/// fails fast on sizes that can never produce output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Width of extracted n-grams
    pub ngram_size: usize,
    /// Maximum positional distance at which a neighbor is counted
    pub window_size: usize,
    /// Number of top neighbors to return for the query term
    pub top_k: usize,
    /// Optional center token to rank neighbors for
    #[serde(default)]
    pub query: Option<String>,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            ngram_size: 3,
            window_size: 2,
            top_k: 5,
            query: None,
        }
    }
}

impl AnalysisConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.ngram_size == 0 {
            return Err(AnalysisError::invalid_config("ngram_size must be >= 1"));
        }

        if self.window_size == 0 {
            return Err(AnalysisError::invalid_config("window_size must be >= 1"));
        }

        Ok(())
    }

    /// Builder method: set n-gram width
    pub fn with_ngram_size(mut self, ngram_size: usize) -> Self {
        self.ngram_size = ngram_size;
        self
    }

    /// Builder method: set co-occurrence window size
    pub fn with_window_size(mut self, window_size: usize) -> Self {
        self.window_size = window_size;
        self
    }

    /// Builder method: set number of top neighbors to return
    pub fn with_top_k(mut self, top_k: usize) -> Self {
        self.top_k = top_k;
        self
    }

    /// Builder method: set the query term for top-K extraction
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }
}

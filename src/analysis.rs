//! Single-invocation analysis pipeline.
//!
//! [`Analyzer`] composes the collaborating tokenizer with the three core
//! components: n-gram extraction, co-occurrence aggregation, and top-K
//! neighbor ranking. Every call to [`Analyzer::analyze`] creates fresh
//! aggregation state, so repeated invocations with the same input (a
//! benchmark loop, a batch job) never trip the one-shot guard.

use crate::cooccurrence::oneshot::OneShotAggregator;
use crate::cooccurrence::table::CooccurrenceTable;
use crate::errors::Result;
use crate::ngram::ngrams;
use crate::nlp::tokenizer::Tokenizer;
use crate::topk::top_k;
use crate::types::AnalysisConfig;
use indexmap::IndexMap;
use serde::Serialize;

/// The serializable output of one analysis invocation.
///
/// Plain nested data with no behavior, suitable for direct JSON
/// serialization: a gram sequence, a nested count table, and (when a query
/// term was configured) an ordered top-K map.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    /// N-grams in start-index order
    pub ngrams: Vec<String>,
    /// Center -> neighbor -> count
    pub cooccurrences: CooccurrenceTable,
    /// Ranked neighbors of the query term, count descending
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_neighbors: Option<IndexMap<String, u64>>,
}

impl AnalysisReport {
    /// Serialize the report as compact JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Serialize the report as pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Tokenizer plus analysis parameters, reusable across invocations.
#[derive(Debug, Clone)]
pub struct Analyzer {
    config: AnalysisConfig,
    tokenizer: Tokenizer,
}

impl Analyzer {
    /// Create an analyzer after validating the configuration.
    pub fn new(config: AnalysisConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            tokenizer: Tokenizer::new(),
        })
    }

    /// Replace the default tokenizer.
    pub fn with_tokenizer(mut self, tokenizer: Tokenizer) -> Self {
        self.tokenizer = tokenizer;
        self
    }

    /// The validated configuration.
    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Run the full pipeline over raw text.
    pub fn analyze(&self, text: &str) -> Result<AnalysisReport> {
        let tokens = self.tokenizer.tokenize(text);
        tracing::debug!(tokens = tokens.len(), "tokenized input");
        self.analyze_tokens(&tokens)
    }

    /// Run the pipeline over a pre-tokenized sequence.
    pub fn analyze_tokens(&self, tokens: &[String]) -> Result<AnalysisReport> {
        let grams = ngrams(self.config.ngram_size, tokens);
        tracing::debug!(
            n = self.config.ngram_size,
            grams = grams.len(),
            "extracted n-grams"
        );

        // Fresh aggregator per invocation; the one-shot guard applies to a
        // single aggregation handle, never across pipeline runs.
        let mut aggregator = OneShotAggregator::new(self.config.window_size);
        aggregator.run(tokens);
        let table = aggregator.into_table()?;
        tracing::debug!(
            window = self.config.window_size,
            centers = table.num_centers(),
            "aggregated co-occurrences"
        );

        // The query is case-folded to match tokenizer normalization; the
        // core selector itself does exact lookup.
        let top_neighbors = self
            .config
            .query
            .as_ref()
            .map(|query| top_k(&query.to_lowercase(), self.config.top_k, &table));

        Ok(AnalysisReport {
            ngrams: grams,
            cooccurrences: table,
            top_neighbors,
        })
    }
}

//! Error types for cooccur
//!
//! Out-of-range analysis parameters are not errors: each operation defines
//! an explicit empty-result policy instead (see [`crate::ngram`] and
//! [`crate::cooccurrence`]). The variants here cover the remaining fault
//! surface: facade-level configuration strictness, broken aggregation
//! invariants, and serialization.

use thiserror::Error;

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, AnalysisError>;

/// Main error type for cooccur
#[derive(Error, Debug, Clone)]
pub enum AnalysisError {
    /// Configuration validation failed
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    /// An aggregation that must yield a result yielded none.
    /// Indicates a broken invariant, not a recoverable condition.
    #[error("Empty result: {message}")]
    EmptyResult { message: String },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

impl AnalysisError {
    /// Create an invalid config error
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Create an empty result error
    pub fn empty_result(message: impl Into<String>) -> Self {
        Self::EmptyResult {
            message: message.into(),
        }
    }

    /// Create a serialization error
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization {
            message: message.into(),
        }
    }
}

impl From<serde_json::Error> for AnalysisError {
    fn from(err: serde_json::Error) -> Self {
        Self::serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AnalysisError::invalid_config("window_size must be >= 1");
        assert!(err.to_string().contains("Invalid configuration"));
        assert!(err.to_string().contains("window_size"));

        let err = AnalysisError::empty_result("aggregation produced no table");
        assert!(err.to_string().contains("Empty result"));
    }

    #[test]
    fn test_from_serde_json() {
        let json_err = serde_json::from_str::<u32>("not a number").unwrap_err();
        let err: AnalysisError = json_err.into();
        assert!(matches!(err, AnalysisError::Serialization { .. }));
    }
}

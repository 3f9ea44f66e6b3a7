// Error kinds for the analytics engine.
//
// The engine is total on legitimate-but-sparse input: zero-norm vectors and
// empty token streams produce neutral values, never errors. The two kinds
// below are the only ways a computation can refuse to run.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalyticsError {
    /// Zero documents, or zero usable terms after stopword removal.
    /// List-producing operations turn this into an empty result.
    #[error("corpus has no usable documents or terms")]
    EmptyCorpus,

    /// A caller-supplied parameter is outside its valid bounds.
    #[error("invalid {what}: {detail}")]
    InvalidRange { what: &'static str, detail: String },
}

impl AnalyticsError {
    pub fn invalid(what: &'static str, detail: impl Into<String>) -> Self {
        AnalyticsError::InvalidRange {
            what,
            detail: detail.into(),
        }
    }

    /// Whether a caller can treat this as "no results" rather than a failure.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, AnalyticsError::EmptyCorpus)
    }
}

pub type Result<T> = std::result::Result<T, AnalyticsError>;

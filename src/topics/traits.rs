// Topic extractor trait: swap-ready abstraction.
//
// The default implementation ranks TF-IDF terms by how central the documents
// containing them are to the rest of the corpus. Anything that can turn a
// corpus into ranked terms can stand in for it.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// A ranked topic term and the score that ranked it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopicTerm {
    pub term: String,
    pub score: f64,
}

/// Trait for extracting the most representative terms of a corpus.
pub trait TopicExtractor: Send + Sync {
    /// Rank up to `limit` terms, best first.
    ///
    /// Returns `AnalyticsError::EmptyCorpus` when the corpus has no documents
    /// or no usable terms; callers that want a plain empty list should treat
    /// that error as recoverable.
    fn extract(&self, corpus: &[String], limit: usize) -> Result<Vec<TopicTerm>>;
}

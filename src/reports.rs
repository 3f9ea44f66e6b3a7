// Composite views built from the engine's primitives: the memory-trends
// report and per-user recommendations.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::engine::AnalyticsEngine;
use crate::error::Result;
use crate::topics::frequency::WordCount;

/// How many similar documents a recommendation lists.
pub const SIMILAR_DOCUMENTS: usize = 5;
/// How many corpus-wide trending topics a recommendation lists.
pub const TRENDING_TOPICS: usize = 3;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendReport {
    pub top_words: Vec<WordCount>,
    pub trending_topics: Vec<String>,
    pub document_count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    /// Central terms of the user's own documents
    pub recommended_themes: Vec<String>,
    /// Indices into the full corpus, most similar to the user's profile first
    pub similar_documents: Vec<usize>,
    /// Central terms of the whole corpus
    pub trending_topics: Vec<String>,
}

impl AnalyticsEngine {
    /// Top words plus central topic terms for one corpus.
    pub fn trend_report(&self, corpus: &[String], max_words: usize) -> Result<TrendReport> {
        Ok(TrendReport {
            top_words: self.document_topics(corpus, max_words),
            trending_topics: self.topic_terms(corpus, self.topic_limit())?,
            document_count: corpus.len(),
        })
    }

    /// Themes and similar documents for one user against the whole corpus.
    ///
    /// A user with no documents of their own gets the corpus-wide themes and
    /// no similar documents.
    pub fn recommend(&self, user_docs: &[String], all_docs: &[String]) -> Result<Recommendation> {
        let corpus_topics = self.topic_terms(all_docs, self.topic_limit())?;

        if user_docs.is_empty() {
            info!(
                documents = all_docs.len(),
                "No user documents, falling back to corpus-wide themes"
            );
            let trending_topics = corpus_topics.iter().take(TRENDING_TOPICS).cloned().collect();
            return Ok(Recommendation {
                recommended_themes: corpus_topics,
                similar_documents: Vec::new(),
                trending_topics,
            });
        }

        let profile = user_docs.join(" ");
        let mut similar_documents = self.similarity_rank(&profile, all_docs);
        similar_documents.truncate(SIMILAR_DOCUMENTS);

        Ok(Recommendation {
            recommended_themes: self.topic_terms(user_docs, self.topic_limit())?,
            similar_documents,
            trending_topics: corpus_topics.into_iter().take(TRENDING_TOPICS).collect(),
        })
    }
}

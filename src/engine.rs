// The analytics engine: the entry point callers use.
//
// Holds only immutable configuration (TF-IDF parameters, stopwords, the
// sentiment lexicon, flagged terms) behind shared pointers. Every method is a
// pure function of its arguments, so one engine can serve concurrent callers
// without locking.

use std::sync::Arc;

use tracing::debug;

use crate::error::Result;
use crate::moderation::lexicon::FlaggedTerms;
use crate::moderation::scorer::{LexiconModerator, ModerationResult};
use crate::moderation::traits::ToxicityScorer;
use crate::sentiment::distribution::{histogram, SentimentHistogram};
use crate::sentiment::lexicon::SentimentLexicon;
use crate::sentiment::scorer::{LexiconAnalyzer, SentimentAnalyzer, SentimentResult};
use crate::text::stopwords::{StopWords, StopwordSource};
use crate::topics::centrality::{CentralityExtractor, DEFAULT_TOPIC_LIMIT};
use crate::topics::frequency::{word_counts, WordCount, DEFAULT_MAX_WORDS};
use crate::topics::similarity::{self, RankedDocument, SimilarityMatrix};
use crate::topics::tfidf::{TfIdfParams, TfIdfVectorizer};
use crate::topics::traits::{TopicExtractor, TopicTerm};

/// Construction-time settings for the engine.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    pub tfidf: TfIdfParams,
    pub stopwords: StopwordSource,
    /// Replaces the builtin flagged-term lexicon when set
    pub flagged_terms: Option<Vec<String>>,
    /// Default `limit` for topic terms
    pub topic_limit: usize,
    /// Default `max_words` for word counts
    pub max_words: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            tfidf: TfIdfParams::default(),
            stopwords: StopwordSource::Builtin,
            flagged_terms: None,
            topic_limit: DEFAULT_TOPIC_LIMIT,
            max_words: DEFAULT_MAX_WORDS,
        }
    }
}

pub struct AnalyticsEngine {
    vectorizer: TfIdfVectorizer,
    stop_words: StopWords,
    extractor: Box<dyn TopicExtractor>,
    sentiment: Arc<dyn SentimentAnalyzer>,
    moderator: Box<dyn ToxicityScorer>,
    topic_limit: usize,
    max_words: usize,
}

impl AnalyticsEngine {
    /// Build an engine, loading every lexicon once. Invalid TF-IDF parameters
    /// are rejected here rather than on first use.
    pub fn new(config: EngineConfig) -> Result<Self> {
        let stop_words = StopWords::load(config.stopwords);
        let vectorizer = TfIdfVectorizer::new(config.tfidf, stop_words.clone())?;
        let sentiment: Arc<dyn SentimentAnalyzer> =
            Arc::new(LexiconAnalyzer::new(SentimentLexicon::builtin()));
        let flagged = match &config.flagged_terms {
            Some(terms) => FlaggedTerms::from_terms(terms),
            None => FlaggedTerms::builtin(),
        };

        debug!(
            stopwords = stop_words.len(),
            flagged_terms = flagged.len(),
            ngram_min = config.tfidf.ngram_range.0,
            ngram_max = config.tfidf.ngram_range.1,
            max_features = config.tfidf.max_features,
            "Analytics engine ready"
        );

        Ok(Self {
            extractor: Box::new(CentralityExtractor::new(vectorizer.clone())),
            moderator: Box::new(LexiconModerator::new(flagged, Arc::clone(&sentiment))),
            vectorizer,
            stop_words,
            sentiment,
            topic_limit: config.topic_limit,
            max_words: config.max_words,
        })
    }

    pub fn topic_limit(&self) -> usize {
        self.topic_limit
    }

    pub fn max_words(&self) -> usize {
        self.max_words
    }

    pub fn sentiment(&self, text: &str) -> SentimentResult {
        self.sentiment.analyze(text)
    }

    pub fn sentiment_batch(&self, texts: &[String]) -> Vec<SentimentResult> {
        texts.iter().map(|t| self.sentiment.analyze(t)).collect()
    }

    /// Polarity histogram over [-1, 1] for a set of texts.
    pub fn sentiment_distribution(
        &self,
        texts: &[String],
        bins: usize,
    ) -> Result<SentimentHistogram> {
        let polarities: Vec<f64> = self
            .sentiment_batch(texts)
            .iter()
            .map(|r| r.polarity)
            .collect();
        histogram(&polarities, bins)
    }

    pub fn moderation(&self, text: &str) -> ModerationResult {
        self.moderator.score_text(text)
    }

    /// Target indices, most similar to `source` first.
    pub fn similarity_rank(&self, source: &str, targets: &[String]) -> Vec<usize> {
        self.similarity_scores(source, targets)
            .into_iter()
            .map(|r| r.index)
            .collect()
    }

    pub fn similarity_scores(&self, source: &str, targets: &[String]) -> Vec<RankedDocument> {
        similarity::rank_against(&self.vectorizer, source, targets)
    }

    pub fn similarity_matrix(&self, corpus: &[String]) -> SimilarityMatrix {
        similarity::all_pairs(&self.vectorizer, corpus).1
    }

    /// The `limit` most central terms of `corpus`. An empty corpus, or one
    /// with no usable terms, yields an empty list rather than an error.
    pub fn topic_terms(&self, corpus: &[String], limit: usize) -> Result<Vec<String>> {
        Ok(self
            .topic_scores(corpus, limit)?
            .into_iter()
            .map(|t| t.term)
            .collect())
    }

    pub fn topic_scores(&self, corpus: &[String], limit: usize) -> Result<Vec<TopicTerm>> {
        match self.extractor.extract(corpus, limit) {
            Err(e) if e.is_recoverable() => {
                debug!(documents = corpus.len(), "No usable terms; returning no topics");
                Ok(Vec::new())
            }
            other => other,
        }
    }

    /// Most frequent 3+ letter words across `corpus`.
    pub fn document_topics(&self, corpus: &[String], max_words: usize) -> Vec<WordCount> {
        word_counts(corpus, max_words, &self.stop_words)
    }
}

// Heuristic toxicity score.
//
// Two signals, each capped so neither can dominate alone:
//
//   keyword_score       = min(distinct_flagged * 25, 60)
//   sentiment_component = max(0, -polarity) * 40
//   toxicity            = round(keyword_score + sentiment_component), clamped 0..=100
//
// Positive or neutral sentiment never lowers the score; only negativity adds.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::lexicon::FlaggedTerms;
use super::status::ModerationStatus;
use super::traits::ToxicityScorer;
use crate::sentiment::scorer::SentimentAnalyzer;
use crate::text::tokenizer::tokenize;

/// Configurable weights for the toxicity formula.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModerationWeights {
    /// Points per distinct flagged term (default 25.0)
    pub per_term: f64,
    /// Ceiling on the keyword part (default 60.0)
    pub keyword_cap: f64,
    /// Points at polarity -1.0 (default 40.0)
    pub sentiment_weight: f64,
}

impl Default for ModerationWeights {
    fn default() -> Self {
        Self {
            per_term: 25.0,
            keyword_cap: 60.0,
            sentiment_weight: 40.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModerationResult {
    /// 0 (benign) to 100 (very likely harmful)
    pub toxicity_score: u32,
    /// Distinct flagged terms, in order of first appearance
    pub flagged_words: Vec<String>,
    pub status: ModerationStatus,
    pub warning: Option<String>,
}

/// Combine the flagged-term count and polarity into a score and status.
pub fn compute_toxicity_score(
    flagged_count: usize,
    polarity: f64,
    weights: &ModerationWeights,
) -> (u32, ModerationStatus) {
    let keyword_score = (flagged_count as f64 * weights.per_term).min(weights.keyword_cap);
    let sentiment_component = (-polarity).max(0.0) * weights.sentiment_weight;
    let score = (keyword_score + sentiment_component).round().clamp(0.0, 100.0) as u32;
    (score, ModerationStatus::from_score(score))
}

/// Flagged-term + sentiment moderation scorer.
pub struct LexiconModerator {
    flagged: FlaggedTerms,
    sentiment: Arc<dyn SentimentAnalyzer>,
    weights: ModerationWeights,
}

impl LexiconModerator {
    pub fn new(flagged: FlaggedTerms, sentiment: Arc<dyn SentimentAnalyzer>) -> Self {
        Self {
            flagged,
            sentiment,
            weights: ModerationWeights::default(),
        }
    }

    pub fn with_weights(mut self, weights: ModerationWeights) -> Self {
        self.weights = weights;
        self
    }

    /// Distinct flagged tokens of `text`, first appearance first.
    pub fn flagged_words(&self, text: &str) -> Vec<String> {
        let tokens = tokenize(text);
        let mut found: Vec<String> = Vec::new();
        for token in tokens.iter() {
            if self.flagged.contains(token) && !found.iter().any(|f| f == token) {
                found.push(token.to_string());
            }
        }
        found
    }
}

impl ToxicityScorer for LexiconModerator {
    fn score_text(&self, text: &str) -> ModerationResult {
        let flagged_words = self.flagged_words(text);
        let polarity = self.sentiment.analyze(text).polarity;
        let (toxicity_score, status) =
            compute_toxicity_score(flagged_words.len(), polarity, &self.weights);

        debug!(
            flagged = flagged_words.len(),
            polarity,
            toxicity_score,
            status = status.as_str(),
            "Scored text for moderation"
        );

        ModerationResult {
            toxicity_score,
            flagged_words,
            status,
            warning: status.warning().map(str::to_string),
        }
    }
}

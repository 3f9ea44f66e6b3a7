// Toxicity scorer trait: the swap-ready abstraction.
//
// The default implementation blends a flagged-term lookup with negative
// sentiment. A model-backed scorer could replace it without touching callers.

use super::scorer::ModerationResult;

pub trait ToxicityScorer: Send + Sync {
    /// Score a single text.
    fn score_text(&self, text: &str) -> ModerationResult;

    /// Score multiple texts, returning results in the same order.
    fn score_batch(&self, texts: &[String]) -> Vec<ModerationResult> {
        texts.iter().map(|t| self.score_text(t)).collect()
    }
}

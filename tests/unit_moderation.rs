// Unit tests for toxicity scoring and status thresholds.
//
// Uses a fixed-polarity analyzer where the formula needs to be checked
// without the lexicon's influence, and the real engine for the
// end-to-end literal cases.

use std::sync::Arc;

use capsule_analytics::engine::{AnalyticsEngine, EngineConfig};
use capsule_analytics::moderation::lexicon::FlaggedTerms;
use capsule_analytics::moderation::scorer::{
    compute_toxicity_score, LexiconModerator, ModerationWeights,
};
use capsule_analytics::moderation::status::ModerationStatus;
use capsule_analytics::moderation::traits::ToxicityScorer;
use capsule_analytics::sentiment::scorer::{SentimentAnalyzer, SentimentResult};

struct FixedPolarity(f64);

impl SentimentAnalyzer for FixedPolarity {
    fn analyze(&self, _text: &str) -> SentimentResult {
        SentimentResult::from_raw(self.0, 0.0)
    }
}

fn neutral_moderator() -> LexiconModerator {
    LexiconModerator::new(FlaggedTerms::builtin(), Arc::new(FixedPolarity(0.0)))
}

// ============================================================
// Status thresholds: boundary values
// ============================================================

#[test]
fn status_boundaries() {
    assert_eq!(ModerationStatus::from_score(0), ModerationStatus::Safe);
    assert_eq!(ModerationStatus::from_score(30), ModerationStatus::Safe);
    assert_eq!(ModerationStatus::from_score(31), ModerationStatus::NeedsReview);
    assert_eq!(ModerationStatus::from_score(70), ModerationStatus::NeedsReview);
    assert_eq!(ModerationStatus::from_score(71), ModerationStatus::HighRisk);
    assert_eq!(ModerationStatus::from_score(100), ModerationStatus::HighRisk);
}

#[test]
fn warning_present_iff_not_safe() {
    for score in 0..=100 {
        let status = ModerationStatus::from_score(score);
        assert_eq!(
            status.warning().is_some(),
            status != ModerationStatus::Safe,
            "score {score}"
        );
    }
}

#[test]
fn status_serializes_with_display_labels() {
    assert_eq!(
        serde_json::to_string(&ModerationStatus::NeedsReview).unwrap(),
        "\"needs review\""
    );
    assert_eq!(
        serde_json::to_string(&ModerationStatus::HighRisk).unwrap(),
        "\"high-risk\""
    );
    assert_eq!(ModerationStatus::Safe.to_string(), "safe");
}

// ============================================================
// compute_toxicity_score: formula
// ============================================================

#[test]
fn positive_polarity_adds_nothing() {
    let (score, _) = compute_toxicity_score(1, 0.9, &ModerationWeights::default());
    assert_eq!(score, 25);
}

#[test]
fn score_never_exceeds_one_hundred() {
    let weights = ModerationWeights::default();
    for count in 0..10 {
        for tenths in -10..=10 {
            let (score, _) = compute_toxicity_score(count, tenths as f64 / 10.0, &weights);
            assert!(score <= 100);
        }
    }
}

// ============================================================
// LexiconModerator: flagged words
// ============================================================

#[test]
fn literal_hate_violence_with_neutral_sentiment() {
    let r = neutral_moderator().score_text("I hate violence");
    assert_eq!(r.flagged_words, vec!["hate", "violence"]);
    assert_eq!(r.toxicity_score, 50);
    assert_eq!(r.status, ModerationStatus::NeedsReview);
    assert!(r.warning.is_some());
}

#[test]
fn flagged_words_are_distinct_in_first_appearance_order() {
    let r = neutral_moderator().score_text("Violence! hate... VIOLENCE, idiot hate");
    assert_eq!(r.flagged_words, vec!["violence", "hate", "idiot"]);
    assert_eq!(r.toxicity_score, 60);
}

#[test]
fn substrings_do_not_match() {
    let r = neutral_moderator().score_text("whatever skills die-hard");
    // "die-hard" normalizes to "diehard"
    assert!(r.flagged_words.is_empty());
}

#[test]
fn custom_weights_change_the_score() {
    let weights = ModerationWeights {
        per_term: 10.0,
        keyword_cap: 15.0,
        sentiment_weight: 0.0,
    };
    let moderator = LexiconModerator::new(FlaggedTerms::builtin(), Arc::new(FixedPolarity(-1.0)))
        .with_weights(weights);
    let r = moderator.score_text("I hate violence");
    assert_eq!(r.flagged_words, vec!["hate", "violence"]);
    assert_eq!(r.toxicity_score, 15);
    assert_eq!(r.status, ModerationStatus::Safe);
    assert!(r.warning.is_none());
}

#[test]
fn score_batch_matches_individual_calls() {
    let moderator = neutral_moderator();
    let texts = vec!["kill".to_string(), "".to_string(), "lovely day".to_string()];
    let batch = moderator.score_batch(&texts);
    let single: Vec<_> = texts.iter().map(|t| moderator.score_text(t)).collect();
    assert_eq!(batch, single);
}

// ============================================================
// Through the engine
// ============================================================

#[test]
fn engine_empty_text_is_safe() {
    let engine = AnalyticsEngine::new(EngineConfig::default()).unwrap();
    let r = engine.moderation("");
    assert_eq!(r.toxicity_score, 0);
    assert_eq!(r.status, ModerationStatus::Safe);
    assert!(r.flagged_words.is_empty());
    assert!(r.warning.is_none());

    let json = serde_json::to_value(&r).unwrap();
    assert!(json["warning"].is_null());
}

#[test]
fn engine_friendly_text_is_safe() {
    let engine = AnalyticsEngine::new(EngineConfig::default()).unwrap();
    let r = engine.moderation("What a wonderful afternoon with friends");
    assert_eq!(r.toxicity_score, 0);
    assert_eq!(r.status, ModerationStatus::Safe);
}

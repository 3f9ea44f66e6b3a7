// Unit tests for lexicon sentiment scoring and the polarity histogram.
//
// Checks the range and classification invariants over a spread of inputs,
// plus modifier/negation behavior through the public analyzer.

use capsule_analytics::sentiment::distribution::histogram;
use capsule_analytics::sentiment::lexicon::SentimentLexicon;
use capsule_analytics::sentiment::scorer::{
    Assessment, LexiconAnalyzer, SentimentAnalyzer, SentimentResult,
};

const SAMPLES: &[&str] = &[
    "",
    "   ",
    "!!! ???",
    "The train leaves at nine.",
    "What a wonderful, beautiful day!",
    "This is the worst, most terrible service ever.",
    "not bad at all",
    "very very extremely excellent",
    "I don't hate it, but I don't love it either",
    "Café crème brûlée was délicieux 🍮",
    "good bad good bad good",
    "NOT GOOD. NOT GOOD.",
];

// ============================================================
// Range and classification invariants
// ============================================================

#[test]
fn results_stay_in_range() {
    let analyzer = LexiconAnalyzer::default();
    for text in SAMPLES {
        let r = analyzer.analyze(text);
        assert!((-1.0..=1.0).contains(&r.polarity), "{text:?}: {r:?}");
        assert!((0.0..=1.0).contains(&r.subjectivity), "{text:?}: {r:?}");
    }
}

#[test]
fn assessment_positive_iff_polarity_above_zero() {
    let analyzer = LexiconAnalyzer::default();
    for text in SAMPLES {
        let r = analyzer.analyze(text);
        assert_eq!(r.assessment == Assessment::Positive, r.polarity > 0.0, "{text:?}");
    }
}

#[test]
fn results_are_rounded_to_three_decimals() {
    let analyzer = LexiconAnalyzer::default();
    for text in SAMPLES {
        let r = analyzer.analyze(text);
        assert_eq!((r.polarity * 1000.0).round() / 1000.0, r.polarity);
        assert_eq!((r.subjectivity * 1000.0).round() / 1000.0, r.subjectivity);
    }
}

#[test]
fn zero_polarity_is_negative() {
    let r = SentimentResult::from_raw(0.0, 0.4);
    assert_eq!(r.assessment, Assessment::Negative);
    assert_eq!(r.assessment.to_string(), "negative");
}

#[test]
fn tiny_negative_rounds_to_plain_zero() {
    let r = SentimentResult::from_raw(-0.0001, 0.0);
    assert_eq!(r.polarity, 0.0);
    assert!(r.polarity.is_sign_positive());
}

// ============================================================
// Lexicon behavior through the analyzer
// ============================================================

#[test]
fn positive_and_negative_words() {
    let analyzer = LexiconAnalyzer::default();
    assert_eq!(
        analyzer.analyze("What a wonderful day").assessment,
        Assessment::Positive
    );
    assert_eq!(
        analyzer.analyze("This is terrible").assessment,
        Assessment::Negative
    );
    assert!(analyzer.analyze("This is terrible").polarity < 0.0);
}

#[test]
fn negation_reverses_sign() {
    let analyzer = LexiconAnalyzer::default();
    let plain = analyzer.analyze("good").polarity;
    let negated = analyzer.analyze("not good").polarity;
    assert!(plain > 0.0);
    assert!(negated < 0.0);
    assert!(negated.abs() < plain.abs());
}

#[test]
fn negation_does_not_cross_sentences() {
    let analyzer = LexiconAnalyzer::default();
    let r = analyzer.analyze("That is not it. Great job!");
    assert_eq!(r.polarity, 0.8);
    assert_eq!(r.assessment, Assessment::Positive);
    // Within one sentence the negator still applies
    assert!(analyzer.analyze("That is not great").polarity < 0.0);
}

#[test]
fn case_and_punctuation_ignored() {
    let analyzer = LexiconAnalyzer::default();
    assert_eq!(analyzer.analyze("GOOD!!!"), analyzer.analyze("good"));
}

#[test]
fn builtin_lexicon_lookups() {
    let lexicon = SentimentLexicon::builtin();
    assert!(lexicon.word("good").is_some());
    assert!(lexicon.word("tuesday").is_none());
    assert!(lexicon.modifier("very").is_some());
    assert!(lexicon.is_negator("not"));
}

// ============================================================
// Histogram
// ============================================================

#[test]
fn histogram_covers_full_range() {
    let h = histogram(&[-1.0, -0.25, 0.0, 0.25, 1.0], 2).unwrap();
    assert_eq!(h.counts, vec![2, 3]);
    assert_eq!(h.edges, vec![-1.0, 0.0, 1.0]);
}

#[test]
fn histogram_of_nothing_is_all_zero() {
    let h = histogram(&[], 5).unwrap();
    assert_eq!(h.counts, vec![0; 5]);
    assert_eq!(h.edges.len(), 6);
}

// Lexicon-based polarity and subjectivity.
//
// Each sentiment word found in the text becomes one assessment. A preceding
// modifier ("very", "slightly") scales both its polarity and subjectivity; a
// negator within the previous three tokens of the same sentence flips and
// halves its polarity.
// The result is the mean over all assessments, or 0.0/0.0 when the text has
// no sentiment words at all. Rounding to 3 decimals happens only when the
// result is built.

use serde::{Deserialize, Serialize};

use super::lexicon::SentimentLexicon;
use crate::text::tokenizer::tokenize;

/// How many tokens a negator reaches forward.
const NEGATION_WINDOW: usize = 3;
/// Polarity factor applied to a negated word.
const NEGATION_FACTOR: f64 = -0.5;
/// Negation and modifiers never reach past these.
const SENTENCE_BREAKS: &[char] = &['.', '!', '?', ';'];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Assessment {
    Positive,
    Negative,
}

impl Assessment {
    /// Positive iff polarity is strictly above zero. Zero is negative.
    pub fn from_polarity(polarity: f64) -> Self {
        if polarity > 0.0 {
            Assessment::Positive
        } else {
            Assessment::Negative
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Assessment::Positive => "positive",
            Assessment::Negative => "negative",
        }
    }
}

impl std::fmt::Display for Assessment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SentimentResult {
    /// -1.0 (negative) to 1.0 (positive), 3 decimals
    pub polarity: f64,
    /// 0.0 (objective) to 1.0 (subjective), 3 decimals
    pub subjectivity: f64,
    pub assessment: Assessment,
}

impl SentimentResult {
    /// Clamp, round and classify raw scores.
    pub fn from_raw(polarity: f64, subjectivity: f64) -> Self {
        let polarity = round3(polarity.clamp(-1.0, 1.0));
        let subjectivity = round3(subjectivity.clamp(0.0, 1.0));
        Self {
            polarity,
            subjectivity,
            assessment: Assessment::from_polarity(polarity),
        }
    }

    pub fn neutral() -> Self {
        Self::from_raw(0.0, 0.0)
    }
}

fn round3(x: f64) -> f64 {
    let r = (x * 1000.0).round() / 1000.0;
    // Avoid "-0.0" in output
    if r == 0.0 {
        0.0
    } else {
        r
    }
}

/// Anything that can score a text's sentiment.
pub trait SentimentAnalyzer: Send + Sync {
    fn analyze(&self, text: &str) -> SentimentResult;
}

/// The default, lexicon-backed analyzer.
#[derive(Debug, Clone, Default)]
pub struct LexiconAnalyzer {
    lexicon: SentimentLexicon,
}

impl LexiconAnalyzer {
    pub fn new(lexicon: SentimentLexicon) -> Self {
        Self { lexicon }
    }

    /// Unrounded (polarity, subjectivity) means.
    pub fn raw_scores(&self, text: &str) -> (f64, f64) {
        let mut assessments: Vec<(f64, f64)> = Vec::new();
        for sentence in text.split(SENTENCE_BREAKS) {
            self.assess_sentence(sentence, &mut assessments);
        }

        if assessments.is_empty() {
            return (0.0, 0.0);
        }
        let n = assessments.len() as f64;
        let polarity = assessments.iter().map(|a| a.0).sum::<f64>() / n;
        let subjectivity = assessments.iter().map(|a| a.1).sum::<f64>() / n;
        (polarity, subjectivity)
    }

    /// Push one assessment per sentiment word. Modifier and negation state
    /// starts fresh for every sentence.
    fn assess_sentence(&self, sentence: &str, assessments: &mut Vec<(f64, f64)>) {
        let mut modifier: Option<f64> = None;
        let mut negation_left = 0usize;

        for token in tokenize(sentence).iter() {
            if self.lexicon.is_negator(token) {
                negation_left = NEGATION_WINDOW;
                modifier = None;
                continue;
            }
            if let Some(factor) = self.lexicon.modifier(token) {
                modifier = Some(modifier.unwrap_or(1.0) * factor);
                continue;
            }
            match self.lexicon.word(token) {
                Some(word) => {
                    let mut polarity = word.polarity;
                    let mut subjectivity = word.subjectivity;
                    if let Some(factor) = modifier.take() {
                        polarity *= factor;
                        subjectivity *= factor;
                    }
                    if negation_left > 0 {
                        polarity *= NEGATION_FACTOR;
                        negation_left = 0;
                    }
                    assessments.push((polarity.clamp(-1.0, 1.0), subjectivity.clamp(0.0, 1.0)));
                }
                None => {
                    modifier = None;
                    negation_left = negation_left.saturating_sub(1);
                }
            }
        }
    }
}

impl SentimentAnalyzer for LexiconAnalyzer {
    fn analyze(&self, text: &str) -> SentimentResult {
        let (polarity, subjectivity) = self.raw_scores(text);
        SentimentResult::from_raw(polarity, subjectivity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analyze(text: &str) -> SentimentResult {
        LexiconAnalyzer::default().analyze(text)
    }

    #[test]
    fn empty_text_is_neutral_negative() {
        let r = analyze("");
        assert_eq!(r.polarity, 0.0);
        assert_eq!(r.subjectivity, 0.0);
        assert_eq!(r.assessment, Assessment::Negative);
    }

    #[test]
    fn no_sentiment_words_is_neutral() {
        let r = analyze("The train leaves at nine.");
        assert_eq!(r, SentimentResult::neutral());
    }

    #[test]
    fn single_word_scores() {
        let r = analyze("This is good");
        assert_eq!(r.polarity, 0.7);
        assert_eq!(r.subjectivity, 0.6);
        assert_eq!(r.assessment, Assessment::Positive);

        let r = analyze("I hate violence");
        assert_eq!(r.polarity, -0.8);
        assert_eq!(r.assessment, Assessment::Negative);
    }

    #[test]
    fn modifier_intensifies() {
        let r = analyze("very good");
        assert_eq!(r.polarity, 0.91);
        assert_eq!(r.subjectivity, 0.78);
    }

    #[test]
    fn intensified_values_are_clamped() {
        let r = analyze("extremely excellent");
        assert_eq!(r.polarity, 1.0);
        assert_eq!(r.subjectivity, 1.0);
    }

    #[test]
    fn negation_flips_and_halves() {
        assert_eq!(analyze("not good").polarity, -0.35);
        assert_eq!(analyze("I don't think that's good").polarity, -0.35);
    }

    #[test]
    fn negation_window_expires() {
        // four plain tokens between negator and sentiment word
        assert_eq!(analyze("not at all in any way good").polarity, 0.7);
    }

    #[test]
    fn negation_stops_at_sentence_end() {
        let r = analyze("That is not it. Great job!");
        assert!(r.polarity > 0.0);
        assert_eq!(r.assessment, Assessment::Positive);
        assert_eq!(analyze("Not now; good luck").polarity, 0.7);
    }

    #[test]
    fn modifier_stops_at_sentence_end() {
        assert_eq!(analyze("Very. Good").polarity, 0.7);
    }

    #[test]
    fn averages_over_assessments() {
        // (0.7 + -0.7) / 2 = 0, which classifies as negative
        let r = analyze("good food, bad service");
        assert_eq!(r.polarity, 0.0);
        assert_eq!(r.assessment, Assessment::Negative);
        // (0.6 + 0.667) / 2 sits on a rounding boundary
        assert!((r.subjectivity - 0.6335).abs() <= 0.0005 + 1e-9);
    }

    #[test]
    fn means_of_mixed_words() {
        let r = analyze("good and nice");
        assert_eq!(r.polarity, 0.65);
        assert_eq!(r.subjectivity, 0.8);
    }

    #[test]
    fn assessment_serializes_lowercase() {
        let json = serde_json::to_string(&analyze("great")).unwrap();
        assert!(json.contains("\"assessment\":\"positive\""));
    }
}

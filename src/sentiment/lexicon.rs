// Sentiment lexicon: polarity/subjectivity scores for sentiment-bearing
// words, plus the modifiers and negators that adjust them.
//
// Scores follow the conventions of pattern-style English lexicons: polarity
// in [-1, 1], subjectivity in [0, 1]. The word list is a curated subset, not
// a verbatim copy of any third-party lexicon.

use std::collections::HashMap;
use std::sync::Arc;

/// Scores attached to one lexicon word.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WordSentiment {
    pub polarity: f64,
    pub subjectivity: f64,
}

const WORDS: &[(&str, f64, f64)] = &[
    // positive
    ("good", 0.7, 0.6),
    ("great", 0.8, 0.75),
    ("excellent", 1.0, 1.0),
    ("amazing", 0.6, 0.9),
    ("awesome", 1.0, 1.0),
    ("wonderful", 1.0, 1.0),
    ("fantastic", 0.4, 0.9),
    ("love", 0.5, 0.6),
    ("loved", 0.7, 0.8),
    ("lovely", 0.5, 0.75),
    ("happy", 0.8, 1.0),
    ("glad", 0.5, 1.0),
    ("best", 1.0, 0.3),
    ("better", 0.5, 0.5),
    ("nice", 0.6, 1.0),
    ("beautiful", 0.85, 1.0),
    ("perfect", 1.0, 1.0),
    ("fun", 0.3, 0.2),
    ("enjoy", 0.4, 0.5),
    ("enjoyed", 0.4, 0.5),
    ("brilliant", 0.9, 1.0),
    ("pleasant", 0.733, 0.967),
    ("delightful", 1.0, 1.0),
    ("joyful", 0.8, 0.8),
    ("grateful", 0.8, 0.9),
    ("thankful", 0.6, 0.8),
    ("hopeful", 0.5, 0.6),
    ("proud", 0.8, 1.0),
    ("excited", 0.375, 0.75),
    ("exciting", 0.3, 0.8),
    ("cool", 0.35, 0.65),
    ("kind", 0.6, 0.9),
    ("sweet", 0.35, 0.65),
    ("warm", 0.6, 0.6),
    ("friendly", 0.375, 0.5),
    ("calm", 0.3, 0.75),
    ("peaceful", 0.25, 0.5),
    ("positive", 0.227, 0.545),
    ("successful", 0.75, 0.95),
    ("fine", 0.417, 0.5),
    ("favorite", 0.5, 1.0),
    ("interesting", 0.5, 0.5),
    ("funny", 0.25, 1.0),
    ("smart", 0.214, 0.643),
    ("impressive", 1.0, 1.0),
    ("incredible", 0.9, 0.9),
    ("superb", 1.0, 1.0),
    ("memorable", 0.5, 0.5),
    ("cherished", 0.6, 0.7),
    // negative
    ("bad", -0.7, 0.667),
    ("terrible", -1.0, 1.0),
    ("awful", -1.0, 1.0),
    ("horrible", -1.0, 1.0),
    ("worst", -1.0, 1.0),
    ("worse", -0.4, 0.6),
    ("hate", -0.8, 0.9),
    ("hated", -0.9, 0.7),
    ("sad", -0.5, 1.0),
    ("angry", -0.5, 1.0),
    ("upset", -0.3, 0.5),
    ("disappointed", -0.75, 0.75),
    ("disappointing", -0.6, 0.7),
    ("poor", -0.4, 0.6),
    ("ugly", -0.7, 1.0),
    ("boring", -1.0, 1.0),
    ("stupid", -0.8, 1.0),
    ("dumb", -0.375, 0.5),
    ("annoying", -0.8, 0.9),
    ("annoyed", -0.4, 0.7),
    ("nasty", -1.0, 1.0),
    ("evil", -1.0, 1.0),
    ("cruel", -1.0, 1.0),
    ("painful", -0.7, 0.9),
    ("sick", -0.714, 0.857),
    ("lonely", -0.1, 0.45),
    ("afraid", -0.6, 0.9),
    ("scared", -0.5, 0.8),
    ("wrong", -0.5, 0.9),
    ("broken", -0.4, 0.4),
    ("dead", -0.2, 0.4),
    ("violent", -0.8, 0.9),
    ("dangerous", -0.6, 0.9),
    ("useless", -0.5, 0.0),
    ("miserable", -1.0, 1.0),
    ("tragic", -0.75, 0.75),
    ("unfortunate", -0.5, 0.5),
    ("negative", -0.3, 0.4),
    ("difficult", -0.5, 1.0),
    ("sorry", -0.5, 1.0),
    ("mad", -0.625, 1.0),
    ("depressed", -0.6, 0.8),
    ("depressing", -0.6, 0.7),
];

/// Adverbs that scale the next sentiment word. Above 1 intensifies, below 1
/// softens.
const MODIFIERS: &[(&str, f64)] = &[
    ("very", 1.3),
    ("really", 1.3),
    ("so", 1.3),
    ("too", 1.3),
    ("extremely", 1.5),
    ("incredibly", 1.5),
    ("absolutely", 1.5),
    ("super", 1.4),
    ("quite", 1.1),
    ("pretty", 1.1),
    ("fairly", 0.8),
    ("somewhat", 0.7),
    ("slightly", 0.5),
    ("barely", 0.4),
];

/// Negators, in apostrophe-stripped form ("don't" tokenizes to "dont").
const NEGATORS: &[&str] = &[
    "not", "no", "never", "nor", "cannot", "cant", "dont", "doesnt", "didnt", "isnt", "wasnt",
    "arent", "werent", "wont", "wouldnt", "shouldnt", "couldnt", "hardly", "without",
];

#[derive(Debug)]
struct LexiconData {
    words: HashMap<&'static str, WordSentiment>,
    modifiers: HashMap<&'static str, f64>,
    negators: Vec<&'static str>,
}

/// Immutable, shareable sentiment lexicon.
#[derive(Debug, Clone)]
pub struct SentimentLexicon {
    data: Arc<LexiconData>,
}

impl SentimentLexicon {
    pub fn builtin() -> Self {
        let words = WORDS
            .iter()
            .map(|&(w, polarity, subjectivity)| {
                (
                    w,
                    WordSentiment {
                        polarity,
                        subjectivity,
                    },
                )
            })
            .collect();
        Self {
            data: Arc::new(LexiconData {
                words,
                modifiers: MODIFIERS.iter().copied().collect(),
                negators: NEGATORS.to_vec(),
            }),
        }
    }

    pub fn word(&self, token: &str) -> Option<WordSentiment> {
        self.data.words.get(token).copied()
    }

    pub fn modifier(&self, token: &str) -> Option<f64> {
        self.data.modifiers.get(token).copied()
    }

    pub fn is_negator(&self, token: &str) -> bool {
        self.data.negators.contains(&token)
    }
}

impl Default for SentimentLexicon {
    fn default() -> Self {
        Self::builtin()
    }
}

// Tokenizers.
//
// Three flavors, each matching the consumer it feeds:
// - `tokenize`: moderation tokens. Lower-case, strip everything that is not
//   alphanumeric or whitespace, split on whitespace. No stopword removal.
// - `term_tokens` + `ngrams`: TF-IDF candidate terms. Split on anything that
//   is not a word character (alphanumeric or `_`), keep tokens of 2+
//   characters, drop stopwords, then join runs of 1..=3 tokens into n-gram
//   terms.
// - `frequency_words`: "top words" counting. Only words made entirely of
//   3+ ASCII letters survive, minus stopwords. A run of ASCII letters inside
//   a longer Unicode word ("caf" in "café") is not a word.

use std::sync::LazyLock;

use regex_lite::Regex;

use super::stopwords::StopWords;

static FREQUENCY_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[a-z]{3,}\b").expect("static pattern compiles"));

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Lower-case `text` and drop every character that is neither alphanumeric
/// nor whitespace. "Don't!" becomes "dont".
pub fn normalize(text: &str) -> String {
    text.chars()
        .filter(|c| c.is_alphanumeric() || c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Normalized text that hands out whitespace-separated tokens lazily.
#[derive(Debug, Clone)]
pub struct Tokens {
    buffer: String,
}

impl Tokens {
    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.buffer.split_whitespace()
    }

    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }
}

pub fn tokenize(text: &str) -> Tokens {
    Tokens {
        buffer: normalize(text),
    }
}

/// Candidate unigrams for term weighting, in document order.
pub fn term_tokens(text: &str, stop_words: &StopWords) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !is_word_char(c))
        .filter(|t| t.chars().count() >= 2)
        .filter(|t| !stop_words.contains(t))
        .map(str::to_string)
        .collect()
}

/// Build every n-gram with `min <= n <= max` from `tokens`.
///
/// Output is position-major: all grams starting at token 0 (shortest first),
/// then those starting at token 1, and so on. This is the left-to-right order
/// used for first-appearance tie-breaks.
pub fn ngrams(tokens: &[String], min: usize, max: usize) -> Vec<String> {
    let mut grams = Vec::new();
    if min == 0 || min > max {
        return grams;
    }
    for start in 0..tokens.len() {
        for n in min..=max {
            let end = start + n;
            if end > tokens.len() {
                break;
            }
            grams.push(tokens[start..end].join(" "));
        }
    }
    grams
}

/// Words of at least three ASCII letters, stopwords removed, in text order.
pub fn frequency_words(text: &str, stop_words: &StopWords) -> Vec<String> {
    let lower = text.to_lowercase();
    FREQUENCY_WORD
        .find_iter(&lower)
        .filter(|m| {
            // regex-lite's \b only knows ASCII word characters
            let before = lower[..m.start()].chars().next_back();
            let after = lower[m.end()..].chars().next();
            !before.is_some_and(is_word_char) && !after.is_some_and(is_word_char)
        })
        .map(|m| m.as_str())
        .filter(|w| !stop_words.contains(w))
        .map(str::to_string)
        .collect()
}

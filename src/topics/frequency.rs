// Raw word counts for "top words" views.
//
// Independent of TF-IDF: counts every 3+ letter word across the corpus after
// stopword removal. Most frequent first; equal counts keep the order in which
// the words first appeared.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::text::stopwords::StopWords;
use crate::text::tokenizer::frequency_words;

pub const DEFAULT_MAX_WORDS: usize = 50;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordCount {
    pub term: String,
    pub count: usize,
}

pub fn word_counts<S: AsRef<str>>(
    corpus: &[S],
    max_words: usize,
    stop_words: &StopWords,
) -> Vec<WordCount> {
    let mut counts: IndexMap<String, usize> = IndexMap::new();
    for doc in corpus {
        for word in frequency_words(doc.as_ref(), stop_words) {
            *counts.entry(word).or_insert(0) += 1;
        }
    }

    let mut ranked: Vec<WordCount> = counts
        .into_iter()
        .map(|(term, count)| WordCount { term, count })
        .collect();
    ranked.sort_by(|a, b| b.count.cmp(&a.count));
    ranked.truncate(max_words);
    ranked
}

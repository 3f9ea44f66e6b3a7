// TF-IDF term weighting.
//
// Each document is tokenized, stopwords are removed, and runs of tokens are
// joined into n-gram terms. Weights use the smoothed-IDF convention:
//
//   idf(t)     = ln((N + 1) / (df(t) + 1)) + 1
//   weight(t,d) = tf(t,d) * idf(t)
//
// where tf is the raw count of t in d, df the number of documents containing
// t and N the corpus size. Every document vector is then L2-normalized so the
// cosine similarity of two rows is just their dot product.
//
// Vocabulary is kept in first-appearance order (a left-to-right scan of the
// corpus). When there are more candidate terms than `max_features`, the terms
// with the highest total count across the corpus survive, ties going to the
// earlier term.

use indexmap::IndexMap;
use tracing::debug;

use crate::error::{AnalyticsError, Result};
use crate::text::stopwords::StopWords;
use crate::text::tokenizer::{ngrams, term_tokens};

pub const DEFAULT_NGRAM_RANGE: (usize, usize) = (1, 3);
pub const DEFAULT_MAX_FEATURES: usize = 5000;

/// Tunables for the term-weighting pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TfIdfParams {
    /// Inclusive (min, max) n-gram span in words
    pub ngram_range: (usize, usize),
    /// Vocabulary cap
    pub max_features: usize,
}

impl Default for TfIdfParams {
    fn default() -> Self {
        Self {
            ngram_range: DEFAULT_NGRAM_RANGE,
            max_features: DEFAULT_MAX_FEATURES,
        }
    }
}

impl TfIdfParams {
    pub fn validate(&self) -> Result<()> {
        let (min, max) = self.ngram_range;
        if min == 0 {
            return Err(AnalyticsError::invalid(
                "n-gram range",
                format!("minimum span must be at least 1, got ({min}, {max})"),
            ));
        }
        if min > max {
            return Err(AnalyticsError::invalid(
                "n-gram range",
                format!("minimum span exceeds maximum: ({min}, {max})"),
            ));
        }
        if self.max_features == 0 {
            return Err(AnalyticsError::invalid(
                "vocabulary cap",
                "max_features must be at least 1",
            ));
        }
        Ok(())
    }
}

/// Sparse, L2-normalized weights for one document, sorted by term column.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TermVector {
    entries: Vec<(usize, f64)>,
}

impl TermVector {
    pub fn entries(&self) -> &[(usize, f64)] {
        &self.entries
    }

    pub fn is_zero(&self) -> bool {
        self.entries.iter().all(|&(_, w)| w == 0.0)
    }

    pub fn weight(&self, column: usize) -> f64 {
        self.entries
            .binary_search_by_key(&column, |&(c, _)| c)
            .map(|i| self.entries[i].1)
            .unwrap_or(0.0)
    }

    pub fn norm(&self) -> f64 {
        self.entries.iter().map(|&(_, w)| w * w).sum::<f64>().sqrt()
    }

    /// Dot product over shared columns (merge join on sorted entries).
    pub fn dot(&self, other: &TermVector) -> f64 {
        let (a, b) = (&self.entries, &other.entries);
        let (mut i, mut j) = (0, 0);
        let mut sum = 0.0;
        while i < a.len() && j < b.len() {
            match a[i].0.cmp(&b[j].0) {
                std::cmp::Ordering::Less => i += 1,
                std::cmp::Ordering::Greater => j += 1,
                std::cmp::Ordering::Equal => {
                    sum += a[i].1 * b[j].1;
                    i += 1;
                    j += 1;
                }
            }
        }
        sum
    }
}

/// The weighted document-term matrix for one corpus.
#[derive(Debug, Clone, Default)]
pub struct TermMatrix {
    vocabulary: Vec<String>,
    rows: Vec<TermVector>,
}

impl TermMatrix {
    /// Terms in column order (first appearance in the corpus).
    pub fn vocabulary(&self) -> &[String] {
        &self.vocabulary
    }

    pub fn rows(&self) -> &[TermVector] {
        &self.rows
    }

    pub fn row(&self, doc: usize) -> Option<&TermVector> {
        self.rows.get(doc)
    }

    pub fn document_count(&self) -> usize {
        self.rows.len()
    }

    pub fn has_terms(&self) -> bool {
        !self.vocabulary.is_empty()
    }
}

#[derive(Debug, Clone, Copy, Default)]
struct TermStats {
    total_count: usize,
    doc_freq: usize,
}

/// Builds a `TermMatrix` from a corpus. Holds only immutable configuration,
/// so one vectorizer can serve any number of concurrent calls.
#[derive(Debug, Clone)]
pub struct TfIdfVectorizer {
    params: TfIdfParams,
    stop_words: StopWords,
}

impl TfIdfVectorizer {
    pub fn new(params: TfIdfParams, stop_words: StopWords) -> Result<Self> {
        params.validate()?;
        Ok(Self { params, stop_words })
    }

    pub fn params(&self) -> &TfIdfParams {
        &self.params
    }

    /// Weight every document of `corpus`. An empty corpus, or one made only of
    /// stopwords, yields an empty vocabulary with one zero row per document.
    pub fn fit_transform<S: AsRef<str>>(&self, corpus: &[S]) -> TermMatrix {
        let (min_n, max_n) = self.params.ngram_range;

        // Per-document raw counts, in first-appearance order within the document
        let doc_counts: Vec<IndexMap<String, usize>> = corpus
            .iter()
            .map(|doc| {
                let tokens = term_tokens(doc.as_ref(), &self.stop_words);
                let mut counts = IndexMap::new();
                for gram in ngrams(&tokens, min_n, max_n) {
                    *counts.entry(gram).or_insert(0) += 1;
                }
                counts
            })
            .collect();

        // Corpus-wide stats, in first-appearance order across the corpus
        let mut stats: IndexMap<String, TermStats> = IndexMap::new();
        for counts in &doc_counts {
            for (term, &count) in counts {
                let entry = stats.entry(term.clone()).or_default();
                entry.total_count += count;
                entry.doc_freq += 1;
            }
        }

        let candidates = stats.len();
        if candidates > self.params.max_features {
            let mut ranked: Vec<(usize, usize)> = stats
                .values()
                .enumerate()
                .map(|(i, s)| (i, s.total_count))
                .collect();
            // Stable sort keeps earlier terms ahead on equal counts
            ranked.sort_by(|a, b| b.1.cmp(&a.1));
            let mut keep = vec![false; candidates];
            for &(i, _) in ranked.iter().take(self.params.max_features) {
                keep[i] = true;
            }
            let mut position = 0;
            stats.retain(|_, _| {
                let kept = keep[position];
                position += 1;
                kept
            });
        }

        debug!(
            documents = corpus.len(),
            candidates,
            vocabulary = stats.len(),
            "Built TF-IDF vocabulary"
        );

        let n = corpus.len() as f64;
        let idf: Vec<f64> = stats
            .values()
            .map(|s| ((n + 1.0) / (s.doc_freq as f64 + 1.0)).ln() + 1.0)
            .collect();

        let rows = doc_counts
            .iter()
            .map(|counts| {
                let mut entries: Vec<(usize, f64)> = counts
                    .iter()
                    .filter_map(|(term, &count)| {
                        let column = stats.get_index_of(term)?;
                        Some((column, count as f64 * idf[column]))
                    })
                    .collect();
                entries.sort_by_key(|&(column, _)| column);

                let norm = entries.iter().map(|&(_, w)| w * w).sum::<f64>().sqrt();
                if norm > 0.0 {
                    for entry in &mut entries {
                        entry.1 /= norm;
                    }
                }
                TermVector { entries }
            })
            .collect();

        TermMatrix {
            vocabulary: stats.into_keys().collect(),
            rows,
        }
    }
}

// Cosine similarity ranking over TF-IDF vectors.
//
// Two shapes: one source document against many targets, and the full
// all-pairs matrix for a corpus. Both build a fresh vocabulary from exactly
// the documents involved in the call.

use serde::{Deserialize, Serialize};

use super::tfidf::{TermMatrix, TermVector, TfIdfVectorizer};

/// Cosine similarity of two term vectors. Zero whenever either vector has a
/// zero norm, so sparse or stopword-only documents never divide by zero.
pub fn cosine(a: &TermVector, b: &TermVector) -> f64 {
    let denom = a.norm() * b.norm();
    if denom < f64::EPSILON {
        return 0.0;
    }
    (a.dot(b) / denom).clamp(-1.0, 1.0)
}

/// One target's similarity to the source document.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RankedDocument {
    /// Position in the caller's target list
    pub index: usize,
    pub score: f64,
}

/// Score every target against `source` and sort by descending similarity.
/// Equal scores keep ascending target order.
pub fn rank_against<S: AsRef<str>>(
    vectorizer: &TfIdfVectorizer,
    source: &str,
    targets: &[S],
) -> Vec<RankedDocument> {
    if targets.is_empty() {
        return Vec::new();
    }

    let mut corpus: Vec<&str> = Vec::with_capacity(targets.len() + 1);
    corpus.push(source);
    corpus.extend(targets.iter().map(|t| t.as_ref()));
    let matrix = vectorizer.fit_transform(&corpus);

    let source_vec = &matrix.rows()[0];
    let mut ranked: Vec<RankedDocument> = matrix.rows()[1..]
        .iter()
        .enumerate()
        .map(|(index, row)| RankedDocument {
            index,
            score: cosine(source_vec, row),
        })
        .collect();
    ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
    ranked
}

/// Pairwise similarities for a whole corpus, self-similarity zeroed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SimilarityMatrix {
    scores: Vec<Vec<f64>>,
}

impl SimilarityMatrix {
    /// Compute the matrix from already-weighted rows. Only the upper triangle
    /// is computed; the lower one is mirrored, so the result is exactly
    /// symmetric.
    pub fn from_terms(matrix: &TermMatrix) -> Self {
        let rows = matrix.rows();
        let n = rows.len();
        let mut scores = vec![vec![0.0; n]; n];
        for i in 0..n {
            for j in (i + 1)..n {
                let s = cosine(&rows[i], &rows[j]);
                scores[i][j] = s;
                scores[j][i] = s;
            }
        }
        Self { scores }
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.scores
            .get(i)
            .and_then(|row| row.get(j))
            .copied()
            .unwrap_or(0.0)
    }

    pub fn rows(&self) -> &[Vec<f64>] {
        &self.scores
    }

    /// Mean similarity of each document to all the others. A single-document
    /// corpus has nothing to compare against and scores 0.
    pub fn mean_similarities(&self) -> Vec<f64> {
        let n = self.scores.len();
        if n < 2 {
            return vec![0.0; n];
        }
        let others = (n - 1) as f64;
        self.scores
            .iter()
            .map(|row| row.iter().sum::<f64>() / others)
            .collect()
    }
}

/// Build the vocabulary for `corpus` and compute its all-pairs matrix.
pub fn all_pairs<S: AsRef<str>>(
    vectorizer: &TfIdfVectorizer,
    corpus: &[S],
) -> (TermMatrix, SimilarityMatrix) {
    let terms = vectorizer.fit_transform(corpus);
    let sims = SimilarityMatrix::from_terms(&terms);
    (terms, sims)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::stopwords::StopWords;
    use crate::topics::tfidf::TfIdfParams;

    fn vectorizer() -> TfIdfVectorizer {
        TfIdfVectorizer::new(TfIdfParams::default(), StopWords::builtin()).unwrap()
    }

    #[test]
    fn rank_orders_by_shared_vocabulary() {
        let ranked = rank_against(
            &vectorizer(),
            "tomatoes growing in the garden",
            &[
                "stock market report",
                "garden tomatoes need sunshine",
                "tomatoes are red",
            ],
        );
        let order: Vec<usize> = ranked.iter().map(|r| r.index).collect();
        assert_eq!(order[0], 1);
        assert_eq!(*order.last().unwrap(), 0);
        assert_eq!(ranked[2].score, 0.0);
    }

    #[test]
    fn rank_ties_keep_target_order() {
        let ranked = rank_against(&vectorizer(), "apples", &["plums", "pears", "kiwis"]);
        let order: Vec<usize> = ranked.iter().map(|r| r.index).collect();
        assert_eq!(order, vec![0, 1, 2]);
    }

    #[test]
    fn rank_no_targets() {
        let empty: [&str; 0] = [];
        assert!(rank_against(&vectorizer(), "apples", &empty).is_empty());
    }

    #[test]
    fn all_pairs_diagonal_is_zero_and_symmetric() {
        let (_, sims) = all_pairs(
            &vectorizer(),
            &["apples pears", "apples plums", "pears plums", "the of"],
        );
        assert_eq!(sims.len(), 4);
        for i in 0..4 {
            assert_eq!(sims.get(i, i), 0.0);
            for j in 0..4 {
                assert_eq!(sims.get(i, j), sims.get(j, i));
            }
        }
        // Stopword-only document matches nothing
        for j in 0..4 {
            assert_eq!(sims.get(3, j), 0.0);
        }
    }

    #[test]
    fn mean_divides_by_other_documents() {
        let (_, sims) = all_pairs(&vectorizer(), &["apples", "apples", "plums"]);
        let means = sims.mean_similarities();
        // docs 0 and 1 are identical: each has sim 1 to the other, 0 to doc 2
        assert!((means[0] - 0.5).abs() < 1e-9);
        assert!((means[1] - 0.5).abs() < 1e-9);
        assert_eq!(means[2], 0.0);
    }

    #[test]
    fn single_document_mean_is_zero() {
        let (_, sims) = all_pairs(&vectorizer(), &["apples"]);
        assert_eq!(sims.mean_similarities(), vec![0.0]);
    }
}

// Centrality-ranked topic terms.
//
// Runs TF-IDF and the all-pairs similarity pass over the corpus, then scores
// each term by the similarity of the documents it appears in:
//
//   centrality(t) = (1/N) * sum over d of weight(t, d) * mean_sim(d)
//
// A term scores high when it carries weight in documents that resemble the
// rest of the corpus. Equal scores keep first-appearance order, so a
// single-document corpus (every mean_sim is 0) yields its terms in text order.

use tracing::debug;

use super::similarity::all_pairs;
use super::tfidf::TfIdfVectorizer;
use super::traits::{TopicExtractor, TopicTerm};
use crate::error::{AnalyticsError, Result};

pub const DEFAULT_TOPIC_LIMIT: usize = 5;

pub struct CentralityExtractor {
    vectorizer: TfIdfVectorizer,
}

impl CentralityExtractor {
    pub fn new(vectorizer: TfIdfVectorizer) -> Self {
        Self { vectorizer }
    }
}

impl TopicExtractor for CentralityExtractor {
    fn extract(&self, corpus: &[String], limit: usize) -> Result<Vec<TopicTerm>> {
        if corpus.is_empty() {
            return Err(AnalyticsError::EmptyCorpus);
        }

        let (terms, sims) = all_pairs(&self.vectorizer, corpus);
        if !terms.has_terms() {
            return Err(AnalyticsError::EmptyCorpus);
        }

        let means = sims.mean_similarities();
        let mut scores = vec![0.0; terms.vocabulary().len()];
        for (doc, row) in terms.rows().iter().enumerate() {
            for &(column, weight) in row.entries() {
                scores[column] += weight * means[doc];
            }
        }
        let n = corpus.len() as f64;

        let mut ranked: Vec<usize> = (0..scores.len()).collect();
        // Stable: column order is first-appearance order
        ranked.sort_by(|&a, &b| scores[b].total_cmp(&scores[a]));
        ranked.truncate(limit);

        debug!(
            documents = corpus.len(),
            vocabulary = scores.len(),
            returned = ranked.len(),
            "Ranked topic terms by centrality"
        );

        Ok(ranked
            .into_iter()
            .map(|column| TopicTerm {
                term: terms.vocabulary()[column].clone(),
                score: scores[column] / n,
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::stopwords::StopWords;
    use crate::topics::tfidf::TfIdfParams;

    fn extractor(ngram_range: (usize, usize)) -> CentralityExtractor {
        let params = TfIdfParams {
            ngram_range,
            ..TfIdfParams::default()
        };
        CentralityExtractor::new(TfIdfVectorizer::new(params, StopWords::builtin()).unwrap())
    }

    fn docs(texts: &[&str]) -> Vec<String> {
        texts.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn empty_corpus_is_empty_corpus_error() {
        let err = extractor((1, 3)).extract(&[], 5).unwrap_err();
        assert_eq!(err, AnalyticsError::EmptyCorpus);
    }

    #[test]
    fn stopword_corpus_is_empty_corpus_error() {
        let err = extractor((1, 3))
            .extract(&docs(&["the and", "of it"]), 5)
            .unwrap_err();
        assert!(err.is_recoverable());
    }

    #[test]
    fn shared_terms_outrank_isolated_ones() {
        let corpus = docs(&[
            "garden tomatoes",
            "garden peppers",
            "garden herbs",
            "stock market",
        ]);
        let top = extractor((1, 1)).extract(&corpus, 2).unwrap();
        assert_eq!(top[0].term, "garden");
        assert!(top[0].score > 0.0);
        assert!(top.iter().all(|t| t.term != "stock" && t.term != "market"));
    }

    #[test]
    fn single_document_keeps_text_order() {
        let top = extractor((1, 2))
            .extract(&docs(&["ripe tomatoes glisten"]), 10)
            .unwrap();
        let terms: Vec<&str> = top.iter().map(|t| t.term.as_str()).collect();
        assert_eq!(
            terms,
            vec![
                "ripe",
                "ripe tomatoes",
                "tomatoes",
                "tomatoes glisten",
                "glisten"
            ]
        );
        assert!(top.iter().all(|t| t.score == 0.0));
    }

    #[test]
    fn fewer_terms_than_limit_returns_all() {
        let top = extractor((1, 1)).extract(&docs(&["kiwi", "kiwi"]), 5).unwrap();
        assert_eq!(top.len(), 1);
        assert_eq!(top[0].term, "kiwi");
    }

    #[test]
    fn zero_limit_returns_nothing() {
        let top = extractor((1, 1)).extract(&docs(&["kiwi", "kiwi"]), 0).unwrap();
        assert!(top.is_empty());
    }
}

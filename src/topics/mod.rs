// Topic extraction: TF-IDF weighting, similarity ranking, centrality-ranked
// terms and raw word counts.

pub mod centrality;
pub mod frequency;
pub mod similarity;
pub mod tfidf;
pub mod traits;

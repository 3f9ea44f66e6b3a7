// Sentiment scoring: lexicon-based polarity/subjectivity and polarity
// histograms.

pub mod distribution;
pub mod lexicon;
pub mod scorer;

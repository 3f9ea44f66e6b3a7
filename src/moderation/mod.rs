// Content moderation: flagged-term lookup blended with negative sentiment
// into a 0-100 toxicity score and a three-level status.

pub mod lexicon;
pub mod scorer;
pub mod status;
pub mod traits;

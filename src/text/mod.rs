// Text normalization: tokenizers and stopword sets shared by every scorer.

pub mod stopwords;
pub mod tokenizer;

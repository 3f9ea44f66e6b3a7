// Flagged-term lexicon.
//
// Fixed at startup (builtin list or a configured override) and never extended
// while the engine runs. Terms are matched verbatim against normalized tokens,
// so entries are stored normalized too.

use std::collections::HashSet;
use std::sync::Arc;

use crate::text::tokenizer::normalize;

const DEFAULT_FLAGGED_TERMS: &[&str] = &[
    "hate",
    "violence",
    "violent",
    "kill",
    "murder",
    "attack",
    "abuse",
    "threat",
    "harass",
    "harassment",
    "racist",
    "stupid",
    "idiot",
    "moron",
    "loser",
    "weapon",
    "bomb",
    "terrorist",
    "suicide",
    "die",
];

#[derive(Debug, Clone)]
pub struct FlaggedTerms {
    terms: Arc<HashSet<String>>,
}

impl FlaggedTerms {
    pub fn builtin() -> Self {
        Self::from_terms(DEFAULT_FLAGGED_TERMS)
    }

    /// Build from a caller-supplied list. Entries that normalize to nothing or
    /// to more than one token are dropped, since matching is per token.
    pub fn from_terms<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let terms = terms
            .into_iter()
            .map(|t| normalize(t.as_ref()).trim().to_string())
            .filter(|t| !t.is_empty() && !t.contains(char::is_whitespace))
            .collect();
        Self {
            terms: Arc::new(terms),
        }
    }

    pub fn contains(&self, token: &str) -> bool {
        self.terms.contains(token)
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

impl Default for FlaggedTerms {
    fn default() -> Self {
        Self::builtin()
    }
}

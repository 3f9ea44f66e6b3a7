// Stopword sets used by term weighting and word counting.
//
// The builtin list matches the classic scikit-learn English stopword list so
// term rankings line up with the TF-IDF defaults most callers expect. The
// extended list adds the much larger stopwords-iso English set from the
// `stop-words` crate on top of it.

use std::collections::HashSet;
use std::sync::Arc;

use stop_words::{get, LANGUAGE};

const BUILTIN_ENGLISH: &[&str] = &[
    "a", "about", "above", "across", "after", "afterwards", "again", "against", "all", "almost",
    "alone", "along", "already", "also", "although", "always", "am", "among", "amongst",
    "amoungst", "amount", "an", "and", "another", "any", "anyhow", "anyone", "anything", "anyway",
    "anywhere", "are", "around", "as", "at", "back", "be", "became", "because", "become",
    "becomes", "becoming", "been", "before", "beforehand", "behind", "being", "below", "beside",
    "besides", "between", "beyond", "bill", "both", "bottom", "but", "by", "call", "can",
    "cannot", "cant", "co", "con", "could", "couldnt", "cry", "de", "describe", "detail", "do",
    "done", "down", "due", "during", "each", "eg", "eight", "either", "eleven", "else",
    "elsewhere", "empty", "enough", "etc", "even", "ever", "every", "everyone", "everything",
    "everywhere", "except", "few", "fifteen", "fifty", "fill", "find", "fire", "first", "five",
    "for", "former", "formerly", "forty", "found", "four", "from", "front", "full", "further",
    "get", "give", "go", "had", "has", "hasnt", "have", "he", "hence", "her", "here",
    "hereafter", "hereby", "herein", "hereupon", "hers", "herself", "him", "himself", "his",
    "how", "however", "hundred", "i", "ie", "if", "in", "inc", "indeed", "interest", "into",
    "is", "it", "its", "itself", "keep", "last", "latter", "latterly", "least", "less", "ltd",
    "made", "many", "may", "me", "meanwhile", "might", "mill", "mine", "more", "moreover",
    "most", "mostly", "move", "much", "must", "my", "myself", "name", "namely", "neither",
    "never", "nevertheless", "next", "nine", "no", "nobody", "none", "noone", "nor", "not",
    "nothing", "now", "nowhere", "of", "off", "often", "on", "once", "one", "only", "onto", "or",
    "other", "others", "otherwise", "our", "ours", "ourselves", "out", "over", "own", "part",
    "per", "perhaps", "please", "put", "rather", "re", "same", "see", "seem", "seemed",
    "seeming", "seems", "serious", "several", "she", "should", "show", "side", "since",
    "sincere", "six", "sixty", "so", "some", "somehow", "someone", "something", "sometime",
    "sometimes", "somewhere", "still", "such", "system", "take", "ten", "than", "that", "the",
    "their", "them", "themselves", "then", "thence", "there", "thereafter", "thereby",
    "therefore", "therein", "thereupon", "these", "they", "thick", "thin", "third", "this",
    "those", "though", "three", "through", "throughout", "thru", "thus", "to", "together", "too",
    "top", "toward", "towards", "twelve", "twenty", "two", "un", "under", "until", "up", "upon",
    "us", "very", "via", "was", "we", "well", "were", "what", "whatever", "when", "whence",
    "whenever", "where", "whereafter", "whereas", "whereby", "wherein", "whereupon", "wherever",
    "whether", "which", "while", "whither", "who", "whoever", "whole", "whom", "whose", "why",
    "will", "with", "within", "without", "would", "yet", "you", "your", "yours", "yourself",
    "yourselves",
];

/// Which stopword list to load at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StopwordSource {
    /// The compact scikit-learn-equivalent list shipped with the crate.
    #[default]
    Builtin,
    /// Builtin plus the stopwords-iso English list.
    Extended,
}

/// An immutable stopword set, cheap to clone and share across threads.
#[derive(Debug, Clone)]
pub struct StopWords {
    words: Arc<HashSet<String>>,
}

impl StopWords {
    pub fn builtin() -> Self {
        Self::from_words(BUILTIN_ENGLISH.iter().map(|w| w.to_string()))
    }

    pub fn extended() -> Self {
        let iso: Vec<String> = get(LANGUAGE::English);
        let words = BUILTIN_ENGLISH
            .iter()
            .map(|w| w.to_string())
            .chain(iso.into_iter().map(|w| w.to_lowercase()));
        Self::from_words(words)
    }

    pub fn load(source: StopwordSource) -> Self {
        match source {
            StopwordSource::Builtin => Self::builtin(),
            StopwordSource::Extended => Self::extended(),
        }
    }

    /// Build a caller-supplied set. Words are lower-cased.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();
        Self {
            words: Arc::new(words),
        }
    }

    /// A set that removes nothing.
    pub fn none() -> Self {
        Self {
            words: Arc::new(HashSet::new()),
        }
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Default for StopWords {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_covers_common_function_words() {
        let sw = StopWords::builtin();
        for w in ["the", "and", "is", "of", "yourselves"] {
            assert!(sw.contains(w), "{w} should be a stopword");
        }
        assert!(!sw.contains("garden"));
        assert!(!sw.contains("hate"));
    }

    #[test]
    fn extended_is_superset_of_builtin() {
        let builtin = StopWords::builtin();
        let extended = StopWords::extended();
        assert!(extended.len() >= builtin.len());
        for w in BUILTIN_ENGLISH {
            assert!(extended.contains(w));
        }
    }

    #[test]
    fn from_words_lowercases_and_skips_blanks() {
        let sw = StopWords::from_words(["Foo", "  ", "BAR "]);
        assert_eq!(sw.len(), 2);
        assert!(sw.contains("foo"));
        assert!(sw.contains("bar"));
    }
}

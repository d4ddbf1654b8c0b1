//! Stop-word lists for the vector-space scorer

use std::collections::HashSet;

/// Built-in English stop words
///
/// Function words that carry no topical content: articles, pronouns,
/// auxiliaries, prepositions and conjunctions.
pub const ENGLISH_STOP_WORDS: &[&str] = &[
    "about", "above", "after", "again", "against", "all", "am", "an", "and", "any", "are",
    "as", "at", "be", "because", "been", "before", "being", "below", "between", "both", "but",
    "by", "can", "could", "did", "do", "does", "doing", "down", "during", "each", "few", "for",
    "from", "further", "had", "has", "have", "having", "he", "her", "here", "hers", "herself",
    "him", "himself", "his", "how", "if", "in", "into", "is", "it", "its", "itself", "just",
    "me", "might", "more", "most", "must", "my", "myself", "no", "nor", "not", "now", "of",
    "off", "on", "once", "only", "or", "other", "ought", "our", "ours", "ourselves", "out",
    "over", "own", "same", "shall", "she", "should", "so", "some", "such", "than", "that",
    "the", "their", "theirs", "them", "themselves", "then", "there", "these", "they", "this",
    "those", "through", "to", "too", "under", "until", "up", "upon", "very", "was", "we",
    "were", "what", "when", "where", "which", "while", "who", "whom", "why", "will", "with",
    "within", "without", "would", "you", "your", "yours", "yourself", "yourselves",
];

/// Terms dropped before weighting
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum StopWords {
    /// [`ENGLISH_STOP_WORDS`]
    #[default]
    English,
    /// Keep every term
    None,
    /// Caller-supplied list, matched case-insensitively
    Custom(HashSet<String>),
}

impl StopWords {
    /// Custom list; entries are lowercased
    pub fn custom<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::Custom(
            words
                .into_iter()
                .map(|w| w.as_ref().trim().to_lowercase())
                .filter(|w| !w.is_empty())
                .collect(),
        )
    }

    /// Whether a lowercased term is a stop word
    pub fn contains(&self, term: &str) -> bool {
        match self {
            Self::English => ENGLISH_STOP_WORDS.binary_search(&term).is_ok(),
            Self::None => false,
            Self::Custom(words) => words.contains(term),
        }
    }
}

//! Vector-space similarity
//!
//! TF-IDF weighting over the two-document corpus formed by the pair, compared
//! with cosine similarity.

use std::collections::{BTreeMap, BTreeSet};

use async_trait::async_trait;
use glossa_domain::constants::VECTOR_SPACE_CORPUS_SIZE;
use glossa_domain::error::{Error, Result};
use glossa_domain::ports::providers::SimilarityScorer;
use glossa_domain::value_objects::{ScoreOutcome, SimilarityMethod, SimilarityScore, TextPair};

use super::stop_words::StopWords;
use crate::constants::VECTOR_SPACE_TOKEN_MIN_LENGTH;

/// Term counts of one document, in term order
type TermCounts = BTreeMap<String, usize>;

/// TF-IDF cosine scorer
///
/// The vocabulary and document frequencies are rebuilt from the pair on
/// every call, so nothing is fitted ahead of time and nothing is shared
/// between calls.
///
/// - term frequency: raw count
/// - inverse document frequency: `ln((1 + n) / (1 + df)) + 1`, `n = 2`
///
/// A text without any term fails with `EmptyVocabulary`; two texts that
/// share no term score `0.0`.
#[derive(Debug, Clone, Default)]
pub struct VectorSpaceScorer {
    stop_words: StopWords,
}

impl VectorSpaceScorer {
    /// Scorer using the built-in English stop words
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the stop-word list
    pub fn with_stop_words(mut self, stop_words: StopWords) -> Self {
        self.stop_words = stop_words;
        self
    }

    /// Lowercased terms of `text`
    ///
    /// Terms are maximal runs of alphanumeric characters and `_` that are at
    /// least two characters long and not stop words.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        text.to_lowercase()
            .split(|c: char| !c.is_alphanumeric() && c != '_')
            .filter(|token| token.chars().count() >= VECTOR_SPACE_TOKEN_MIN_LENGTH)
            .filter(|token| !self.stop_words.contains(token))
            .map(ToString::to_string)
            .collect()
    }

    fn term_counts(&self, text: &str, side: &str) -> Result<TermCounts> {
        let mut counts = TermCounts::new();
        for term in self.tokenize(text) {
            *counts.entry(term).or_insert(0) += 1;
        }
        if counts.is_empty() {
            return Err(Error::empty_vocabulary(format!(
                "{side} text contains no terms after tokenization"
            )));
        }
        Ok(counts)
    }

    /// Cosine similarity of the TF-IDF vectors of two texts
    pub fn similarity(&self, first: &str, second: &str) -> Result<f64> {
        let first = self.term_counts(first, "source")?;
        let second = self.term_counts(second, "target")?;

        let vocabulary: BTreeSet<&String> = first.keys().chain(second.keys()).collect();

        let (mut dot, mut norm_first, mut norm_second) = (0.0_f64, 0.0_f64, 0.0_f64);
        for term in vocabulary {
            let tf_first = first.get(term).copied().unwrap_or(0);
            let tf_second = second.get(term).copied().unwrap_or(0);
            let df = usize::from(tf_first > 0) + usize::from(tf_second > 0);

            let idf = inverse_document_frequency(df);
            #[allow(clippy::cast_precision_loss)]
            let (w_first, w_second) = (tf_first as f64 * idf, tf_second as f64 * idf);

            dot += w_first * w_second;
            norm_first += w_first * w_first;
            norm_second += w_second * w_second;
        }

        Ok(dot / (norm_first * norm_second).sqrt())
    }
}

/// Smoothed IDF over the two-document corpus
fn inverse_document_frequency(df: usize) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    let (n, df) = (VECTOR_SPACE_CORPUS_SIZE as f64, df as f64);
    ((1.0 + n) / (1.0 + df)).ln() + 1.0
}

#[async_trait]
impl SimilarityScorer for VectorSpaceScorer {
    fn method(&self) -> SimilarityMethod {
        SimilarityMethod::VectorSpace
    }

    async fn compute(&self, pair: &TextPair) -> Result<ScoreOutcome> {
        let similarity = self.similarity(pair.source(), pair.target())?;
        Ok(ScoreOutcome::new(
            SimilarityMethod::VectorSpace,
            SimilarityScore::clamped(similarity),
        ))
    }
}

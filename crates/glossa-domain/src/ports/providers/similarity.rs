use async_trait::async_trait;

use crate::error::Result;
use crate::value_objects::{ScoreOutcome, SimilarityMethod, TextPair};

/// Similarity Scoring Interface
///
/// One implementation per [`SimilarityMethod`]. Implementations are pure with
/// respect to their input: calling `compute` twice on the same pair yields the
/// same outcome, and swapping the pair does not change the score.
///
/// Failures are always typed (`EmptyVocabulary`, `ModelLoad`,
/// `InputTooLarge`, `Embedding`); a score of `0.0` always means "no
/// similarity", never "could not compute".
#[async_trait]
pub trait SimilarityScorer: Send + Sync {
    /// Method implemented by this scorer
    fn method(&self) -> SimilarityMethod;

    /// Score the pair
    async fn compute(&self, pair: &TextPair) -> Result<ScoreOutcome>;
}

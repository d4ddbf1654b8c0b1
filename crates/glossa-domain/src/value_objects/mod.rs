//! Domain Value Objects
//!
//! Immutable value objects that represent concepts in the domain
//! without identity.
//!
//! ## Value Objects
//!
//! | Value Object | Description |
//! |--------------|-------------|
//! | [`TextPair`] | The two texts being compared |
//! | [`SimilarityMethod`] | Selector for the scoring strategy |
//! | [`SimilarityScore`] | Normalized score in `[0, 1]` |
//! | [`ScoreOutcome`] | Score plus truncation flag for one call |
//! | [`ScoreReport`] | Results of every method for one pair |
//! | [`Embedding`] | Dense vector representation of a text |
//! | [`TranslationRequest`] | Input of a translation provider |
//! | [`EvaluationReport`] | Ranked round-trip evaluation |

/// Semantic embedding value objects
pub mod embedding;
/// Round-trip evaluation value objects
pub mod evaluation;
/// Similarity value objects
pub mod similarity;
/// Text pair value object
pub mod text;
/// Translation value objects
pub mod translation;

// Re-export commonly used value objects
pub use embedding::Embedding;
pub use evaluation::{EvaluationFailure, EvaluationReport, EvaluationRequest, ModelEvaluation};
pub use similarity::{
    MethodResult, ScoreOutcome, ScoreReport, SimilarityMethod, SimilarityScore, TruncationPolicy,
};
pub use text::TextPair;
pub use translation::{Translation, TranslationDirection, TranslationRequest};

//! External Provider Ports
//!
//! Ports for the external services the domain depends on.
//!
//! ## Provider Ports
//!
//! | Port | Description |
//! |------|-------------|
//! | EmbeddingProvider | Text embedding generation services |
//! | EmbeddingModelLoader | Resolves a model identifier to a loaded provider |
//! | SimilarityScorer | One similarity strategy |
//! | TranslationProvider | LLM translation services |

/// Embedding provider port
pub mod embedding;
/// Similarity scorer port
pub mod similarity;
/// Translation provider port
pub mod translation;

// Re-export provider ports for convenience
pub use embedding::{EmbeddingModelLoader, EmbeddingProvider};
pub use similarity::SimilarityScorer;
pub use translation::TranslationProvider;

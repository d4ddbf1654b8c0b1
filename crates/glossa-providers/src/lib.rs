//! # Glossa - Provider Implementations
//!
//! Concrete implementations of the ports defined in `glossa-domain`.
//!
//! ## Provider Categories
//!
//! | Category | Port | Implementations |
//! |----------|------|-----------------|
//! | Similarity | `SimilarityScorer` | Lexical, VectorSpace, Semantic |
//! | Embedding | `EmbeddingProvider` | FastEmbed, OpenAI, Null |
//! | Translation | `TranslationProvider` | OpenAI-compatible chat, Null |
//!
//! Embedding and translation providers register themselves in the
//! `glossa-application` registries at link time. The semantic scorer reaches
//! them through [`embedding::EmbeddingModelCache`], which loads each model
//! identifier once.
//!
//! ## Feature Flags
//!
//! ```toml
//! [dependencies]
//! glossa-providers = { version = "0.1", features = ["embedding-fastembed"] }
//! ```

// Re-export glossa-domain types commonly used with providers
pub use glossa_domain::error::{Error, Result};
pub use glossa_domain::ports::providers::{
    EmbeddingModelLoader, EmbeddingProvider, SimilarityScorer, TranslationProvider,
};

/// Provider-specific constants
pub mod constants;

/// Shared utilities for provider implementations
pub mod utils;

/// Similarity scorer implementations
///
/// One `SimilarityScorer` per `SimilarityMethod`.
pub mod similarity;

/// Embedding provider implementations and the model cache
pub mod embedding;

/// Translation provider implementations
pub mod translation;

pub use similarity::{LexicalScorer, SemanticScorer, StopWords, VectorSpaceScorer};

// Internal tests module (can access crate internals)
#[cfg(test)]
mod tests;

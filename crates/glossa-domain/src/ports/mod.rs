//! Domain Port Interfaces
//!
//! Defines the boundary contracts between the domain and external layers.
//! High-level modules (domain, application) define the interfaces; the
//! providers crate implements them.

/// External service provider ports
pub mod providers;

pub use providers::{
    EmbeddingModelLoader, EmbeddingProvider, SimilarityScorer, TranslationProvider,
};

//! Application Port Interfaces
//!
//! ## Organization
//!
//! - **providers** - Provider ports re-exported from the domain
//! - **registry/** - Auto-registration system for plugin providers

/// Provider registry for dynamic provider discovery
pub mod registry;

/// External service provider ports
pub mod providers {
    pub use glossa_domain::ports::providers::*;
}

// Re-export commonly used port traits for convenience
pub use providers::{
    EmbeddingModelLoader, EmbeddingProvider, SimilarityScorer, TranslationProvider,
};
pub use registry::{
    EmbeddingProviderConfig, EmbeddingProviderEntry, TranslationProviderConfig,
    TranslationProviderEntry, list_embedding_providers, list_translation_providers,
    resolve_embedding_provider, resolve_translation_provider,
};

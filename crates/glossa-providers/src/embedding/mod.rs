//! Embedding Provider Implementations
//!
//! Converts text into dense vector embeddings for the semantic scorer.
//!
//! ## Available Providers
//!
//! | Provider | Type | Status |
//! |----------|------|--------|
//! | NullEmbeddingProvider | Testing | Complete |
//! | OpenAIEmbeddingProvider | Cloud | Complete |
//! | FastEmbedProvider | Local ML | Complete (optional) |
//!
//! Providers are not used directly by scorers. [`EmbeddingModelCache`] asks
//! an [`EmbeddingModelLoader`](glossa_domain::ports::providers::EmbeddingModelLoader)
//! for a model the first time it is requested; [`RegistryModelLoader`]
//! resolves the configured provider from the registry.

pub mod cache;
#[cfg(feature = "embedding-fastembed")]
pub mod fastembed;
pub mod loader;
pub mod null;
pub mod openai;

pub use cache::EmbeddingModelCache;
#[cfg(feature = "embedding-fastembed")]
pub use fastembed::FastEmbedProvider;
pub use loader::RegistryModelLoader;
pub use null::NullEmbeddingProvider;
pub use openai::OpenAIEmbeddingProvider;

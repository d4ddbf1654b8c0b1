use std::ops::Range;
use std::sync::Arc;

use async_trait::async_trait;

use crate::error::{Error, Result};
use crate::value_objects::Embedding;

/// Text Embedding Interface
///
/// Defines the contract for providers that transform text into dense
/// embeddings, from local ONNX models to remote OpenAI-compatible APIs.
///
/// # Default Implementations
///
/// The `embed()` method has a default implementation that delegates to
/// `embed_batch()` with a single item. Providers only need to implement
/// `embed_batch()` unless custom single-item optimization is needed.
///
/// # Example
///
/// ```ignore
/// use glossa_domain::ports::providers::EmbeddingProvider;
///
/// let embedding = provider.embed("The cat sat on the mat.").await?;
/// println!("Embedding dimensions: {}", provider.dimensions());
/// ```
#[async_trait]
pub trait EmbeddingProvider: Send + Sync {
    /// Get embedding for a single text (default implementation provided)
    async fn embed(&self, text: &str) -> Result<Embedding> {
        let embeddings = self.embed_batch(&[text.to_string()]).await?;
        embeddings
            .into_iter()
            .next()
            .ok_or_else(|| Error::embedding("No embedding returned"))
    }

    /// Get embeddings for multiple texts (must be implemented by provider)
    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Embedding>>;

    /// Get the dimensionality of embeddings produced by this provider
    fn dimensions(&self) -> usize;

    /// Get the name/identifier of this provider implementation
    fn provider_name(&self) -> &str;

    /// Model identifier this handle was loaded for
    fn model(&self) -> &str;

    /// Longest input, in tokens, the model encodes before cutting it off
    fn max_input_tokens(&self) -> usize;

    /// Byte ranges of the tokens the model sees in `text`, special tokens excluded
    ///
    /// Counted in the same unit as [`max_input_tokens`](Self::max_input_tokens),
    /// so a caller can cut `text` at a token boundary before the model would.
    fn token_spans(&self, text: &str) -> Result<Vec<Range<usize>>>;
}

/// Loads an embedding provider for a model identifier
///
/// Loading may be slow (model download, ONNX session creation); callers go
/// through a cache so that each identifier is loaded at most once at a time.
#[async_trait]
pub trait EmbeddingModelLoader: Send + Sync {
    /// Load the model. Failures are reported as `Error::ModelLoad`.
    async fn load(&self, model: &str) -> Result<Arc<dyn EmbeddingProvider>>;
}

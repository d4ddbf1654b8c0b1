//! Null embedding provider for testing and development
//!
//! Provides deterministic, hash-based embeddings for testing purposes.
//! No external dependencies - always works offline.

use std::ops::Range;
use std::sync::Arc;

use async_trait::async_trait;

use glossa_application::ports::registry::{
    EMBEDDING_PROVIDERS, EmbeddingProviderConfig, EmbeddingProviderEntry,
};
use glossa_domain::error::Result;
use glossa_domain::ports::providers::EmbeddingProvider;
use glossa_domain::value_objects::Embedding;

use crate::constants::{EMBEDDING_DIMENSION_NULL, NULL_MAX_INPUT_TOKENS};
use crate::utils::estimate_token_spans;

const FNV_OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0100_0000_01b3;

/// Null embedding provider for testing
///
/// Hashes the lowercased character trigrams of a text into a fixed-size
/// bag-of-features vector. Texts sharing many trigrams get close vectors,
/// identical texts get identical vectors, and the result never depends on
/// other texts in the batch.
///
/// # Example
///
/// ```rust
/// use glossa_providers::embedding::NullEmbeddingProvider;
/// use glossa_domain::ports::providers::EmbeddingProvider;
///
/// let provider = NullEmbeddingProvider::new();
/// assert_eq!(provider.dimensions(), 384);
/// assert_eq!(provider.provider_name(), "null");
/// ```
#[derive(Debug, Clone)]
pub struct NullEmbeddingProvider {
    model: String,
}

impl NullEmbeddingProvider {
    /// Create a new null embedding provider
    pub fn new() -> Self {
        Self::with_model("null")
    }

    /// Null provider reporting `model` as its identifier
    pub fn with_model(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
        }
    }

    fn vectorize(text: &str) -> Vec<f32> {
        let mut vector = vec![0.0_f32; EMBEDDING_DIMENSION_NULL];

        // Two boundary markers per side so even empty text has trigrams
        let chars: Vec<char> = "\u{2}\u{2}"
            .chars()
            .chain(text.to_lowercase().chars())
            .chain("\u{3}\u{3}".chars())
            .collect();

        for trigram in chars.windows(3) {
            let mut hash = FNV_OFFSET_BASIS;
            for c in trigram {
                for byte in u32::from(*c).to_le_bytes() {
                    hash ^= u64::from(byte);
                    hash = hash.wrapping_mul(FNV_PRIME);
                }
            }
            #[allow(clippy::cast_possible_truncation)]
            let slot = (hash % EMBEDDING_DIMENSION_NULL as u64) as usize;
            vector[slot] += 1.0;
        }

        vector
    }
}

impl Default for NullEmbeddingProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EmbeddingProvider for NullEmbeddingProvider {
    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Embedding>> {
        Ok(texts
            .iter()
            .map(|text| Embedding {
                vector: Self::vectorize(text),
                model: self.model.clone(),
                dimensions: EMBEDDING_DIMENSION_NULL,
            })
            .collect())
    }

    fn dimensions(&self) -> usize {
        EMBEDDING_DIMENSION_NULL
    }

    fn provider_name(&self) -> &str {
        "null"
    }

    fn model(&self) -> &str {
        &self.model
    }

    fn max_input_tokens(&self) -> usize {
        NULL_MAX_INPUT_TOKENS
    }

    fn token_spans(&self, text: &str) -> Result<Vec<Range<usize>>> {
        Ok(estimate_token_spans(text))
    }
}

// ============================================================================
// Auto-registration via linkme distributed slice
// ============================================================================

fn null_factory(
    config: &EmbeddingProviderConfig,
) -> std::result::Result<Arc<dyn EmbeddingProvider>, String> {
    let provider = match &config.model {
        Some(model) => NullEmbeddingProvider::with_model(model),
        None => NullEmbeddingProvider::new(),
    };
    Ok(Arc::new(provider))
}

#[linkme::distributed_slice(EMBEDDING_PROVIDERS)]
static NULL_PROVIDER: EmbeddingProviderEntry = EmbeddingProviderEntry {
    name: "null",
    description: "Null provider for testing (deterministic trigram-hash embeddings)",
    factory: null_factory,
};

//! Semantic similarity
//!
//! Cosine similarity of sentence embeddings. The embedding model is resolved
//! through the shared [`EmbeddingModelCache`], so each model identifier is
//! loaded at most once no matter how many scorers or concurrent calls ask
//! for it.

use std::sync::Arc;

use async_trait::async_trait;
use glossa_domain::constants::{SEMANTIC_DEFAULT_MODEL, SEMANTIC_MAX_INPUT_TOKENS};
use glossa_domain::error::{Error, Result};
use glossa_domain::ports::providers::{EmbeddingProvider, SimilarityScorer};
use glossa_domain::value_objects::{
    ScoreOutcome, SimilarityMethod, SimilarityScore, TextPair, TruncationPolicy,
};
use crate::embedding::EmbeddingModelCache;
use crate::utils::cosine_similarity;

/// Embedding cosine scorer
///
/// Cheap to clone; clones share the model cache.
#[derive(Clone)]
pub struct SemanticScorer {
    models: Arc<EmbeddingModelCache>,
    model: String,
    max_input_tokens: usize,
    truncation: TruncationPolicy,
}

impl SemanticScorer {
    /// Scorer for the default model
    pub fn new(models: Arc<EmbeddingModelCache>) -> Self {
        Self {
            models,
            model: SEMANTIC_DEFAULT_MODEL.to_string(),
            max_input_tokens: SEMANTIC_MAX_INPUT_TOKENS,
            truncation: TruncationPolicy::default(),
        }
    }

    /// Use another model identifier
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Token budget per text, counted with the model's tokenizer
    pub fn with_max_input_tokens(mut self, max_input_tokens: usize) -> Self {
        self.max_input_tokens = max_input_tokens;
        self
    }

    /// What to do with input over the budget
    pub fn with_truncation(mut self, truncation: TruncationPolicy) -> Self {
        self.truncation = truncation;
        self
    }

    /// A scorer for `model` sharing this scorer's cache and limits
    pub fn for_model(&self, model: impl Into<String>) -> Self {
        self.clone().with_model(model)
    }

    /// Model identifier this scorer embeds with
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Apply the truncation policy to one text
    ///
    /// Returns the text to embed and whether it was shortened.
    fn fit<'t>(
        &self,
        provider: &dyn EmbeddingProvider,
        text: &'t str,
        limit: usize,
    ) -> Result<(&'t str, bool)> {
        let spans = provider.token_spans(text)?;
        if spans.len() <= limit {
            return Ok((text, false));
        }

        match self.truncation {
            TruncationPolicy::Reject => Err(Error::input_too_large(spans.len(), limit)),
            TruncationPolicy::Truncate => {
                let end = limit.checked_sub(1).map_or(0, |last| spans[last].end);
                let kept = text.get(..end).ok_or_else(|| {
                    Error::embedding(format!(
                        "Model '{}' reported a token ending inside a character at byte {end}",
                        self.model
                    ))
                })?;
                Ok((kept, true))
            }
        }
    }

    async fn embed(provider: &dyn EmbeddingProvider, text: &str) -> Result<Vec<f32>> {
        let embedding = provider.embed(text).await?;
        if embedding.vector.is_empty() {
            return Err(Error::embedding(format!(
                "Model '{}' returned an empty vector",
                embedding.model
            )));
        }
        Ok(embedding.vector)
    }
}

#[async_trait]
impl SimilarityScorer for SemanticScorer {
    fn method(&self) -> SimilarityMethod {
        SimilarityMethod::Semantic
    }

    async fn compute(&self, pair: &TextPair) -> Result<ScoreOutcome> {
        let provider = self.models.get_or_load(&self.model).await?;

        let limit = self.max_input_tokens.min(provider.max_input_tokens());
        let (source, source_truncated) = self.fit(provider.as_ref(), pair.source(), limit)?;
        let (target, target_truncated) = self.fit(provider.as_ref(), pair.target(), limit)?;
        let truncated = source_truncated || target_truncated;
        if truncated {
            tracing::debug!(
                model = %self.model,
                limit,
                "Semantic input truncated to the token budget"
            );
        }

        // Each text is embedded on its own so neither influences the other
        let (source_vector, target_vector) = tokio::try_join!(
            Self::embed(provider.as_ref(), source),
            Self::embed(provider.as_ref(), target)
        )?;

        let similarity = cosine_similarity(&source_vector, &target_vector).ok_or_else(|| {
            Error::embedding(format!(
                "Model '{}' produced vectors that cannot be compared (dimensions {} and {}, or zero norm)",
                self.model,
                source_vector.len(),
                target_vector.len()
            ))
        })?;

        Ok(
            ScoreOutcome::new(SimilarityMethod::Semantic, SimilarityScore::clamped(similarity))
                .with_truncation(truncated),
        )
    }
}

impl std::fmt::Debug for SemanticScorer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SemanticScorer")
            .field("model", &self.model)
            .field("max_input_tokens", &self.max_input_tokens)
            .field("truncation", &self.truncation)
            .finish_non_exhaustive()
    }
}

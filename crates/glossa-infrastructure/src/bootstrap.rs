//! Service wiring
//!
//! Builds the scorers, the model cache and the translation client from an
//! [`AppConfig`]. This is the only place that knows which concrete provider
//! backs each port.

use std::sync::Arc;
use std::time::Duration;

use glossa_application::ports::providers::{SimilarityScorer, TranslationProvider};
use glossa_application::ports::registry::{
    EmbeddingProviderConfig, TranslationProviderConfig, resolve_translation_provider,
};
use glossa_application::{EvaluationService, SimilarityService};
use glossa_domain::error::{Error, Result};
use glossa_providers::embedding::{EmbeddingModelCache, RegistryModelLoader};
use glossa_providers::{LexicalScorer, SemanticScorer, VectorSpaceScorer};
use tracing::debug;

use crate::config::{AppConfig, SemanticConfig, TranslationConfig};

/// Wired services for one configuration
///
/// Holds one model cache; every semantic scorer derived from this context
/// shares it.
pub struct GlossaContext {
    config: AppConfig,
    models: Arc<EmbeddingModelCache>,
    semantic: SemanticScorer,
    similarity: Arc<SimilarityService>,
}

impl GlossaContext {
    /// Build every scorer from configuration
    ///
    /// Nothing is loaded yet; the embedding model is loaded on first use.
    pub fn from_config(config: AppConfig) -> Result<Self> {
        let models = Arc::new(EmbeddingModelCache::with_capacity(
            Arc::new(RegistryModelLoader::from_config(embedding_provider_config(
                &config.similarity.semantic,
            ))),
            config.cache.max_models,
        ));

        let semantic = SemanticScorer::new(Arc::clone(&models))
            .with_model(config.similarity.semantic.model.clone())
            .with_max_input_tokens(config.similarity.semantic.max_input_tokens)
            .with_truncation(config.similarity.semantic.truncation);

        let lexical = LexicalScorer::new().with_autojunk(config.similarity.lexical.autojunk);
        let vector_space = VectorSpaceScorer::new()
            .with_stop_words(config.similarity.vector_space.stop_words.to_stop_words()?);

        let similarity = Arc::new(SimilarityService::new([
            Arc::new(lexical) as Arc<dyn SimilarityScorer>,
            Arc::new(vector_space),
            Arc::new(semantic.clone()),
        ]));

        debug!(
            embedding_provider = %config.similarity.semantic.provider,
            model = %config.similarity.semantic.model,
            "Similarity services ready"
        );

        Ok(Self {
            config,
            models,
            semantic,
            similarity,
        })
    }

    /// Configuration the context was built from
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Shared embedding model cache
    pub fn models(&self) -> &Arc<EmbeddingModelCache> {
        &self.models
    }

    /// Similarity service using the configured model
    pub fn similarity(&self) -> Arc<SimilarityService> {
        Arc::clone(&self.similarity)
    }

    /// Similarity service whose semantic scorer uses `model`
    ///
    /// Shares the model cache, so switching back and forth does not reload.
    pub fn similarity_for_model(&self, model: &str) -> Arc<SimilarityService> {
        if model == self.semantic.model() {
            return self.similarity();
        }
        Arc::new(
            self.similarity
                .as_ref()
                .clone()
                .with_scorer(Arc::new(self.semantic.for_model(model))),
        )
    }

    /// Translation client for the configured provider
    pub fn translator(&self) -> Result<Arc<dyn TranslationProvider>> {
        resolve_translation_provider(&translation_provider_config(&self.config.translation))
            .map_err(Error::config)
    }

    /// Round-trip evaluation service
    pub fn evaluation_service(&self) -> Result<EvaluationService> {
        Ok(EvaluationService::new(self.translator()?, self.similarity()))
    }
}

/// Registry config for the semantic scorer's embedding provider
pub fn embedding_provider_config(semantic: &SemanticConfig) -> EmbeddingProviderConfig {
    let mut config = EmbeddingProviderConfig::new(&semantic.provider);
    if let Some(api_key) = &semantic.api_key {
        config = config.with_api_key(api_key);
    }
    if let Some(base_url) = &semantic.base_url {
        config = config.with_base_url(base_url);
    }
    config
}

/// Registry config for the translation provider
pub fn translation_provider_config(translation: &TranslationConfig) -> TranslationProviderConfig {
    let mut config = TranslationProviderConfig::new(&translation.provider)
        .with_endpoint(&translation.endpoint)
        .with_default_model(&translation.default_model)
        .with_timeout(Duration::from_secs(translation.timeout_secs));
    if let Some(api_key) = &translation.api_key {
        config = config.with_api_key(api_key);
    }
    if let Some(title) = &translation.app_title {
        config = config.with_app_title(title);
    }
    config
}

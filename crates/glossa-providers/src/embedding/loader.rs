//! Registry-backed model loader

use std::sync::Arc;

use async_trait::async_trait;
use glossa_application::ports::registry::{EmbeddingProviderConfig, resolve_embedding_provider};
use glossa_domain::error::{Error, Result};
use glossa_domain::ports::providers::{EmbeddingModelLoader, EmbeddingProvider};

/// Loads models by resolving the configured provider from the registry
///
/// Provider factories may block (model download, ONNX session creation), so
/// resolution runs on the blocking thread pool.
#[derive(Debug, Clone)]
pub struct RegistryModelLoader {
    base: EmbeddingProviderConfig,
}

impl RegistryModelLoader {
    /// Loader for the named provider with otherwise default settings
    pub fn new(provider: impl Into<String>) -> Self {
        Self::from_config(EmbeddingProviderConfig::new(provider))
    }

    /// Loader that starts from `base`; the model field is set per load
    pub fn from_config(base: EmbeddingProviderConfig) -> Self {
        Self { base }
    }

    /// Provider name this loader resolves
    pub fn provider(&self) -> &str {
        &self.base.provider
    }
}

#[async_trait]
impl EmbeddingModelLoader for RegistryModelLoader {
    async fn load(&self, model: &str) -> Result<Arc<dyn EmbeddingProvider>> {
        let config = self.base.clone().with_model(model);

        tokio::task::spawn_blocking(move || resolve_embedding_provider(&config))
            .await
            .map_err(|e| Error::model_load(model, format!("loader task failed: {e}")))?
            .map_err(|message| Error::model_load(model, message))
    }
}

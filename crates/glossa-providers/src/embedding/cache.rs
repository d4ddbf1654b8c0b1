//! Embedding model cache
//!
//! Keeps loaded embedding providers keyed by model identifier. Built on the
//! Moka future cache so that concurrent first requests for one identifier
//! coalesce into a single load.

use std::sync::Arc;

use glossa_domain::error::{Error, Result};
use glossa_domain::ports::providers::{EmbeddingModelLoader, EmbeddingProvider};
use moka::future::Cache;

use crate::constants::EMBEDDING_MODEL_CACHE_CAPACITY;

/// Loaded-model cache with single-flight loading
///
/// - concurrent `get_or_load` calls for an identifier that is not loaded yet
///   run exactly one loader future; every caller receives the same handle
/// - a failed load is not cached: all waiters of that attempt get the
///   `ModelLoad` error and the next call tries again
/// - least-recently-used models are evicted past `max_models`
///
/// ## Example
///
/// ```ignore
/// let cache = EmbeddingModelCache::new(Arc::new(RegistryModelLoader::new("fastembed")));
/// let provider = cache.get_or_load("all-MiniLM-L6-v2").await?;
/// ```
pub struct EmbeddingModelCache {
    models: Cache<String, Arc<dyn EmbeddingProvider>>,
    loader: Arc<dyn EmbeddingModelLoader>,
    max_models: u64,
}

impl EmbeddingModelCache {
    /// Create a cache with the default capacity
    pub fn new(loader: Arc<dyn EmbeddingModelLoader>) -> Self {
        Self::with_capacity(loader, EMBEDDING_MODEL_CACHE_CAPACITY)
    }

    /// Create a cache holding at most `max_models` loaded models
    pub fn with_capacity(loader: Arc<dyn EmbeddingModelLoader>, max_models: u64) -> Self {
        let models = Cache::builder().max_capacity(max_models).build();
        Self {
            models,
            loader,
            max_models,
        }
    }

    /// Return the loaded provider for `model`, loading it if needed
    pub async fn get_or_load(&self, model: &str) -> Result<Arc<dyn EmbeddingProvider>> {
        let loader = Arc::clone(&self.loader);
        let key = model.to_string();

        self.models
            .try_get_with(key.clone(), async move {
                tracing::info!(model = %key, "Loading embedding model");
                let provider = loader.load(&key).await?;
                tracing::info!(
                    model = %key,
                    provider = provider.provider_name(),
                    dimensions = provider.dimensions(),
                    "Embedding model loaded"
                );
                Ok::<_, Error>(provider)
            })
            .await
            .map_err(|e| match e.as_ref() {
                Error::ModelLoad { model, message } => Error::model_load(model, message),
                other => Error::model_load(model, other.to_string()),
            })
    }

    /// Whether `model` is currently loaded
    pub fn contains(&self, model: &str) -> bool {
        self.models.contains_key(model)
    }

    /// Drop a loaded model; the next request loads it again
    pub async fn invalidate(&self, model: &str) {
        self.models.invalidate(model).await;
    }

    /// Maximum number of loaded models kept
    pub fn max_models(&self) -> u64 {
        self.max_models
    }
}

impl std::fmt::Debug for EmbeddingModelCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EmbeddingModelCache")
            .field("max_models", &self.max_models)
            .field("entries", &self.models.entry_count())
            .finish_non_exhaustive()
    }
}

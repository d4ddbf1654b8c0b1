//! Null translation provider
//!
//! Returns the input text unchanged. Lets the evaluation pipeline run
//! offline: a round trip through it reproduces the original exactly.

use std::sync::Arc;

use async_trait::async_trait;

use glossa_application::ports::registry::{
    TRANSLATION_PROVIDERS, TranslationProviderConfig, TranslationProviderEntry,
};
use glossa_domain::error::Result;
use glossa_domain::ports::providers::TranslationProvider;
use glossa_domain::value_objects::{Translation, TranslationRequest};

/// Echo translator for tests and dry runs
#[derive(Debug, Clone)]
pub struct NullTranslationProvider {
    default_model: String,
}

impl NullTranslationProvider {
    /// Create a new null translation provider
    pub fn new() -> Self {
        Self {
            default_model: "null".to_string(),
        }
    }
}

impl Default for NullTranslationProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TranslationProvider for NullTranslationProvider {
    async fn translate(&self, request: &TranslationRequest) -> Result<Translation> {
        Ok(Translation {
            text: request.text.clone(),
            model: request
                .model
                .clone()
                .unwrap_or_else(|| self.default_model.clone()),
            language: request.target_language.clone(),
        })
    }

    fn default_model(&self) -> &str {
        &self.default_model
    }

    fn provider_name(&self) -> &str {
        "null"
    }
}

fn null_factory(
    _config: &TranslationProviderConfig,
) -> std::result::Result<Arc<dyn TranslationProvider>, String> {
    Ok(Arc::new(NullTranslationProvider::new()))
}

#[linkme::distributed_slice(TRANSLATION_PROVIDERS)]
static NULL_TRANSLATION_PROVIDER: TranslationProviderEntry = TranslationProviderEntry {
    name: "null",
    description: "Null provider for testing (returns the input text)",
    factory: null_factory,
};

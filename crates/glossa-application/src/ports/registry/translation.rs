//! Translation Provider Registry
//!
//! Same linkme-based registration as the embedding registry, for the
//! language-model translation collaborators.

use std::sync::Arc;
use std::time::Duration;

use crate::ports::providers::TranslationProvider;

/// Explicit configuration for a translation provider
///
/// Built once at construction time. The credential comes from configuration
/// or the environment, never from a literal in code.
#[derive(Debug, Clone, Default)]
pub struct TranslationProviderConfig {
    /// Provider name (e.g., "openai", "null")
    pub provider: String,
    /// Base URL of the chat-completion API
    pub endpoint: Option<String>,
    /// API key for authentication
    pub api_key: Option<String>,
    /// Model used when a request does not name one
    pub default_model: Option<String>,
    /// Per-request timeout
    pub timeout: Option<Duration>,
    /// Application title sent to routers that attribute traffic
    pub app_title: Option<String>,
}

impl TranslationProviderConfig {
    /// Create a new config with the given provider name
    pub fn new(provider: impl Into<String>) -> Self {
        Self {
            provider: provider.into(),
            ..Default::default()
        }
    }

    /// Set the endpoint
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Set the API key
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Set the default model
    pub fn with_default_model(mut self, model: impl Into<String>) -> Self {
        self.default_model = Some(model.into());
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the application title
    pub fn with_app_title(mut self, title: impl Into<String>) -> Self {
        self.app_title = Some(title.into());
        self
    }
}

/// Registry entry for translation providers
pub struct TranslationProviderEntry {
    /// Unique provider name
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Factory function to create provider instance
    pub factory: fn(&TranslationProviderConfig) -> Result<Arc<dyn TranslationProvider>, String>,
}

#[linkme::distributed_slice]
pub static TRANSLATION_PROVIDERS: [TranslationProviderEntry] = [..];

/// Resolve translation provider by name from registry
pub fn resolve_translation_provider(
    config: &TranslationProviderConfig,
) -> Result<Arc<dyn TranslationProvider>, String> {
    let provider_name = &config.provider;

    if let Some(entry) = TRANSLATION_PROVIDERS
        .iter()
        .find(|entry| entry.name == provider_name)
    {
        return (entry.factory)(config);
    }

    let available: Vec<&str> = TRANSLATION_PROVIDERS.iter().map(|e| e.name).collect();

    Err(format!(
        "Unknown translation provider '{provider_name}'. Available providers: {available:?}"
    ))
}

/// List all registered translation providers as (name, description) tuples
pub fn list_translation_providers() -> Vec<(&'static str, &'static str)> {
    TRANSLATION_PROVIDERS
        .iter()
        .map(|e| (e.name, e.description))
        .collect()
}

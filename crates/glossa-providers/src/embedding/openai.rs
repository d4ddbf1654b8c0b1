//! OpenAI Embedding Provider
//!
//! Implements the EmbeddingProvider port using an OpenAI-compatible
//! `/embeddings` endpoint. Supports text-embedding-3-small,
//! text-embedding-3-large and ada-002.

use std::ops::Range;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use glossa_application::ports::registry::{
    EMBEDDING_PROVIDERS, EmbeddingProviderConfig, EmbeddingProviderEntry,
};
use glossa_domain::error::{Error, Result};
use glossa_domain::ports::providers::EmbeddingProvider;
use glossa_domain::value_objects::Embedding;

use crate::constants::{
    CONTENT_TYPE_JSON, EMBEDDING_DIMENSION_OPENAI_ADA, EMBEDDING_DIMENSION_OPENAI_LARGE,
    EMBEDDING_DIMENSION_OPENAI_SMALL, HTTP_REQUEST_TIMEOUT_SECS, OPENAI_DEFAULT_BASE_URL,
    OPENAI_MAX_INPUT_TOKENS,
};
use crate::utils::{HttpResponseUtils, estimate_token_spans};

/// OpenAI embedding provider
///
/// Receives its HTTP client via constructor injection.
///
/// ## Example
///
/// ```rust,no_run
/// use glossa_providers::embedding::OpenAIEmbeddingProvider;
/// use reqwest::Client;
/// use std::time::Duration;
///
/// let provider = OpenAIEmbeddingProvider::new(
///     "sk-your-api-key".to_string(),
///     None,
///     "text-embedding-3-small".to_string(),
///     Duration::from_secs(30),
///     Client::new(),
/// );
/// ```
pub struct OpenAIEmbeddingProvider {
    api_key: String,
    base_url: Option<String>,
    model: String,
    timeout: Duration,
    http_client: Client,
}

impl OpenAIEmbeddingProvider {
    /// Create a new OpenAI embedding provider
    ///
    /// # Arguments
    /// * `api_key` - OpenAI API key
    /// * `base_url` - Optional custom base URL (defaults to OpenAI API)
    /// * `model` - Model name (e.g., "text-embedding-3-small")
    /// * `timeout` - Request timeout duration
    /// * `http_client` - Reqwest HTTP client for making API requests
    pub fn new(
        api_key: String,
        base_url: Option<String>,
        model: String,
        timeout: Duration,
        http_client: Client,
    ) -> Self {
        Self {
            api_key: api_key.trim().to_string(),
            base_url: base_url.map(|u| u.trim().trim_end_matches('/').to_string()),
            model,
            timeout,
            http_client,
        }
    }

    /// Get the base URL for this provider
    pub fn base_url(&self) -> &str {
        self.base_url.as_deref().unwrap_or(OPENAI_DEFAULT_BASE_URL)
    }

    /// Send embedding request and get response data
    async fn fetch_embeddings(&self, texts: &[String]) -> Result<serde_json::Value> {
        let payload = serde_json::json!({
            "input": texts,
            "model": self.model,
            "encoding_format": "float"
        });

        let response = self
            .http_client
            .post(format!("{}/embeddings", self.base_url()))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", CONTENT_TYPE_JSON)
            .timeout(self.timeout)
            .json(&payload)
            .send()
            .await
            .map_err(|e| HttpResponseUtils::transport_error(&e, self.timeout, Error::embedding))?;

        HttpResponseUtils::check_and_parse(response, "OpenAI", Error::embedding).await
    }

    /// Parse embedding vector from response data
    pub(crate) fn parse_embedding(&self, index: usize, item: &serde_json::Value) -> Result<Embedding> {
        #[allow(clippy::cast_possible_truncation)]
        let vector = item["embedding"]
            .as_array()
            .ok_or_else(|| Error::embedding(format!("Invalid embedding format for text {index}")))?
            .iter()
            .enumerate()
            .map(|(position, v)| {
                v.as_f64().map(|x| x as f32).ok_or_else(|| {
                    Error::embedding(format!(
                        "Non-numeric value {v} at position {position} of embedding {index}"
                    ))
                })
            })
            .collect::<Result<Vec<f32>>>()?;

        Ok(Embedding {
            dimensions: vector.len(),
            vector,
            model: self.model.clone(),
        })
    }
}

#[async_trait]
impl EmbeddingProvider for OpenAIEmbeddingProvider {
    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Embedding>> {
        if texts.is_empty() {
            return Ok(Vec::new());
        }

        let response_data = self.fetch_embeddings(texts).await?;

        let data = response_data["data"]
            .as_array()
            .ok_or_else(|| Error::embedding("Invalid response format: missing data array"))?;

        if data.len() != texts.len() {
            return Err(Error::embedding(format!(
                "Response data count mismatch: expected {}, got {}",
                texts.len(),
                data.len()
            )));
        }

        data.iter()
            .enumerate()
            .map(|(i, item)| self.parse_embedding(i, item))
            .collect()
    }

    fn dimensions(&self) -> usize {
        match self.model.as_str() {
            "text-embedding-3-large" => EMBEDDING_DIMENSION_OPENAI_LARGE,
            "text-embedding-ada-002" => EMBEDDING_DIMENSION_OPENAI_ADA,
            _ => EMBEDDING_DIMENSION_OPENAI_SMALL,
        }
    }

    fn provider_name(&self) -> &str {
        "openai"
    }

    fn model(&self) -> &str {
        &self.model
    }

    fn max_input_tokens(&self) -> usize {
        OPENAI_MAX_INPUT_TOKENS
    }

    /// Estimated; the remote tokenizer is not available locally
    fn token_spans(&self, text: &str) -> Result<Vec<Range<usize>>> {
        Ok(estimate_token_spans(text))
    }
}

// ============================================================================
// Auto-registration via linkme distributed slice
// ============================================================================

fn openai_factory(
    config: &EmbeddingProviderConfig,
) -> std::result::Result<Arc<dyn EmbeddingProvider>, String> {
    let api_key = config
        .api_key
        .clone()
        .filter(|key| !key.trim().is_empty())
        .ok_or_else(|| "OpenAI embeddings require api_key".to_string())?;
    let model = config
        .model
        .clone()
        .unwrap_or_else(|| "text-embedding-3-small".to_string());
    let timeout = Duration::from_secs(HTTP_REQUEST_TIMEOUT_SECS);
    let http_client = Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| format!("Failed to create HTTP client: {e}"))?;

    Ok(Arc::new(OpenAIEmbeddingProvider::new(
        api_key,
        config.base_url.clone(),
        model,
        timeout,
        http_client,
    )))
}

#[linkme::distributed_slice(EMBEDDING_PROVIDERS)]
static OPENAI_PROVIDER: EmbeddingProviderEntry = EmbeddingProviderEntry {
    name: "openai",
    description: "OpenAI-compatible embeddings API (text-embedding-3-small/large, ada-002)",
    factory: openai_factory,
};

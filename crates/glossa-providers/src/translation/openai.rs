//! OpenAI-compatible Translation Provider
//!
//! Sends the translation instruction as a single user message to a
//! `/chat/completions` endpoint. Works with OpenAI itself and with routers
//! that speak the same protocol (OpenRouter is the default endpoint).

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use glossa_application::ports::registry::{
    TRANSLATION_PROVIDERS, TranslationProviderConfig, TranslationProviderEntry,
};
use glossa_domain::error::{Error, Result};
use glossa_domain::ports::providers::TranslationProvider;
use glossa_domain::value_objects::{Translation, TranslationRequest};

use super::prompt::build_prompt;
use crate::constants::{
    CONTENT_TYPE_JSON, HTTP_REQUEST_TIMEOUT_SECS, TRANSLATION_DEFAULT_ENDPOINT,
    TRANSLATION_DEFAULT_MODEL,
};
use crate::utils::HttpResponseUtils;

/// Chat-completion translation client
pub struct OpenAITranslationProvider {
    api_key: String,
    endpoint: String,
    default_model: String,
    timeout: Duration,
    app_title: Option<String>,
    http_client: Client,
}

impl OpenAITranslationProvider {
    /// Create a new translation client
    ///
    /// # Arguments
    /// * `api_key` - Bearer token for the endpoint
    /// * `endpoint` - API base URL, without the `/chat/completions` suffix
    /// * `default_model` - Model used when a request does not name one
    /// * `timeout` - Request timeout duration
    /// * `http_client` - Reqwest HTTP client for making API requests
    pub fn new(
        api_key: String,
        endpoint: String,
        default_model: String,
        timeout: Duration,
        http_client: Client,
    ) -> Self {
        Self {
            api_key: api_key.trim().to_string(),
            endpoint: endpoint.trim().trim_end_matches('/').to_string(),
            default_model,
            timeout,
            app_title: None,
            http_client,
        }
    }

    /// Send an `X-Title` header naming the calling application
    pub fn with_app_title(mut self, app_title: impl Into<String>) -> Self {
        self.app_title = Some(app_title.into());
        self
    }

    /// API base URL
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Extract the completion text from a chat-completion response
    pub(crate) fn parse_completion(body: &serde_json::Value) -> Result<String> {
        if let Some(error) = body.get("error") {
            let message = error["message"]
                .as_str()
                .map_or_else(|| error.to_string(), ToString::to_string);
            return Err(Error::translation(format!("API returned an error: {message}")));
        }

        body["choices"][0]["message"]["content"]
            .as_str()
            .map(|content| content.trim().to_string())
            .ok_or_else(|| {
                Error::translation("Invalid response format: missing choices[0].message.content")
            })
    }
}

#[async_trait]
impl TranslationProvider for OpenAITranslationProvider {
    async fn translate(&self, request: &TranslationRequest) -> Result<Translation> {
        let model = request
            .model
            .clone()
            .unwrap_or_else(|| self.default_model.clone());

        let payload = serde_json::json!({
            "model": model,
            "messages": [
                { "role": "user", "content": build_prompt(request) }
            ]
        });

        let mut builder = self
            .http_client
            .post(format!("{}/chat/completions", self.endpoint))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", CONTENT_TYPE_JSON)
            .timeout(self.timeout)
            .json(&payload);
        if let Some(title) = &self.app_title {
            builder = builder.header("X-Title", title);
        }

        tracing::debug!(
            model = %model,
            target = %request.target_language,
            direction = ?request.direction,
            "Sending translation request"
        );

        let response = builder
            .send()
            .await
            .map_err(|e| HttpResponseUtils::transport_error(&e, self.timeout, Error::translation))?;
        let body =
            HttpResponseUtils::check_and_parse(response, "Translation API", Error::translation)
                .await?;

        Ok(Translation {
            text: Self::parse_completion(&body)?,
            model,
            language: request.target_language.clone(),
        })
    }

    fn default_model(&self) -> &str {
        &self.default_model
    }

    fn provider_name(&self) -> &str {
        "openai"
    }
}

// ============================================================================
// Auto-registration via linkme distributed slice
// ============================================================================

fn openai_factory(
    config: &TranslationProviderConfig,
) -> std::result::Result<Arc<dyn TranslationProvider>, String> {
    let api_key = config
        .api_key
        .clone()
        .filter(|key| !key.trim().is_empty())
        .ok_or_else(|| "Translation provider 'openai' requires api_key".to_string())?;
    let endpoint = config
        .endpoint
        .clone()
        .unwrap_or_else(|| TRANSLATION_DEFAULT_ENDPOINT.to_string());
    let default_model = config
        .default_model
        .clone()
        .unwrap_or_else(|| TRANSLATION_DEFAULT_MODEL.to_string());
    let timeout = config
        .timeout
        .unwrap_or(Duration::from_secs(HTTP_REQUEST_TIMEOUT_SECS));
    let http_client = Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| format!("Failed to create HTTP client: {e}"))?;

    let mut provider =
        OpenAITranslationProvider::new(api_key, endpoint, default_model, timeout, http_client);
    if let Some(title) = &config.app_title {
        provider = provider.with_app_title(title.clone());
    }
    Ok(Arc::new(provider))
}

#[linkme::distributed_slice(TRANSLATION_PROVIDERS)]
static OPENAI_TRANSLATION_PROVIDER: TranslationProviderEntry = TranslationProviderEntry {
    name: "openai",
    description: "OpenAI-compatible chat completions (OpenRouter by default)",
    factory: openai_factory,
};

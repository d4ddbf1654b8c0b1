//! HTTP Response Utilities
//!
//! Helper functions for processing HTTP responses from API providers.
//! These are shared utilities, not ports.

use glossa_domain::error::{Error, Result};
use reqwest::Response;

/// Utilities for processing HTTP responses
///
/// Provides the response handling shared by the embedding and translation
/// clients. `make_error` builds the provider-kind specific error.
pub struct HttpResponseUtils;

impl HttpResponseUtils {
    /// Check response status and parse JSON
    ///
    /// # Arguments
    /// * `response` - The HTTP response to check
    /// * `provider_name` - Name of the provider for error messages
    /// * `make_error` - Error constructor for this provider kind
    pub async fn check_and_parse(
        response: Response,
        provider_name: &str,
        make_error: impl Fn(String) -> Error,
    ) -> Result<serde_json::Value> {
        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            let code = status.as_u16();

            let context = match code {
                401 => "authentication failed".to_string(),
                429 => "rate limit exceeded".to_string(),
                500..=599 => format!("server error ({code})"),
                _ => format!("request failed ({code})"),
            };
            return Err(make_error(format!("{provider_name} {context}: {error_text}")));
        }

        response.json().await.map_err(|e| {
            make_error(format!("{provider_name} response parse failed: {e}"))
        })
    }

    /// Map a transport failure, distinguishing timeouts
    pub fn transport_error(
        e: &reqwest::Error,
        timeout: std::time::Duration,
        make_error: impl Fn(String) -> Error,
    ) -> Error {
        if e.is_timeout() {
            make_error(format!(
                "{} {:?}",
                crate::constants::ERROR_MSG_REQUEST_TIMEOUT,
                timeout
            ))
        } else {
            make_error(format!("HTTP request failed: {e}"))
        }
    }
}

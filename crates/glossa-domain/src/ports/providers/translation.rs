use async_trait::async_trait;

use crate::error::Result;
use crate::value_objects::{Translation, TranslationRequest};

/// Translation Interface
///
/// Boundary to a remote language model. Stateless request/response; transport
/// and API failures surface as `Error::Translation`.
#[async_trait]
pub trait TranslationProvider: Send + Sync {
    /// Translate the request text
    async fn translate(&self, request: &TranslationRequest) -> Result<Translation>;

    /// Model used when a request does not name one
    fn default_model(&self) -> &str;

    /// Get the name/identifier of this provider implementation
    fn provider_name(&self) -> &str;
}

//! Provider Utilities
//!
//! Shared utilities used by provider implementations.

mod http_response;
mod tokens;
mod vector;

pub use http_response::HttpResponseUtils;
pub use tokens::estimate_token_spans;
pub use vector::cosine_similarity;

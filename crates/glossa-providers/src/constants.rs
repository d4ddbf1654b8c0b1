//! Provider Constants
//!
//! Constants specific to provider implementations. Domain rules live in
//! `glossa_domain::constants`.

// ============================================================================
// EMBEDDING PROVIDER CONSTANTS
// ============================================================================

/// Null embedding provider dimension (for testing)
pub const EMBEDDING_DIMENSION_NULL: usize = 384;

/// FastEmbed MiniLM / BGE-small dimension
pub const EMBEDDING_DIMENSION_FASTEMBED_SMALL: usize = 384;

/// FastEmbed base-size model dimension
pub const EMBEDDING_DIMENSION_FASTEMBED_BASE: usize = 768;

/// FastEmbed large model dimension
pub const EMBEDDING_DIMENSION_FASTEMBED_LARGE: usize = 1024;

/// OpenAI text-embedding-3-small dimension
pub const EMBEDDING_DIMENSION_OPENAI_SMALL: usize = 1536;

/// OpenAI text-embedding-3-large dimension
pub const EMBEDDING_DIMENSION_OPENAI_LARGE: usize = 3072;

/// OpenAI text-embedding-ada-002 dimension
pub const EMBEDDING_DIMENSION_OPENAI_ADA: usize = 1536;

/// Token window of the local sentence-transformer models
pub const FASTEMBED_MAX_INPUT_TOKENS: usize = 512;

/// OpenAI max tokens per input
pub const OPENAI_MAX_INPUT_TOKENS: usize = 8191;

/// Null provider token window
pub const NULL_MAX_INPUT_TOKENS: usize = 512;

/// `[CLS]` and `[SEP]`, added by the FastEmbed tokenizer to every input
pub const FASTEMBED_SPECIAL_TOKENS: usize = 2;

/// Longest run of word characters counted as one estimated token
pub const ESTIMATED_TOKEN_MAX_CHARS: usize = 6;

/// Capacity of the FastEmbed actor request queue
pub const FASTEMBED_CHANNEL_CAPACITY: usize = 100;

/// Default number of loaded embedding models kept in memory
pub const EMBEDDING_MODEL_CACHE_CAPACITY: u64 = 4;

// ============================================================================
// VECTOR SPACE CONSTANTS
// ============================================================================

/// Minimum length, in characters, of a vector-space term
pub const VECTOR_SPACE_TOKEN_MIN_LENGTH: usize = 2;

// ============================================================================
// TRANSLATION PROVIDER CONSTANTS
// ============================================================================

/// Default OpenAI-compatible chat endpoint (OpenRouter)
pub const TRANSLATION_DEFAULT_ENDPOINT: &str = "https://openrouter.ai/api/v1";

/// Default translation model
pub const TRANSLATION_DEFAULT_MODEL: &str = "openai/gpt-4o-mini";

/// Default OpenAI embeddings endpoint
pub const OPENAI_DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

// ============================================================================
// HTTP CONSTANTS
// ============================================================================

/// JSON content type
pub const CONTENT_TYPE_JSON: &str = "application/json";

/// HTTP request timeout in seconds
pub const HTTP_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Request timeout error message prefix
pub const ERROR_MSG_REQUEST_TIMEOUT: &str = "Request timed out after";

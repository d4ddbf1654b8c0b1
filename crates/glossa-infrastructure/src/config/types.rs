//! Configuration data types
//!
//! Every section deserializes with defaults, so a configuration file only
//! needs the keys it changes.

use std::path::PathBuf;

use glossa_domain::constants::{SEMANTIC_DEFAULT_MODEL, SEMANTIC_MAX_INPUT_TOKENS};
use glossa_domain::error::{Error, Result};
use glossa_domain::value_objects::TruncationPolicy;
use glossa_providers::StopWords;
use glossa_providers::constants::{
    EMBEDDING_MODEL_CACHE_CAPACITY, HTTP_REQUEST_TIMEOUT_SECS, TRANSLATION_DEFAULT_ENDPOINT,
    TRANSLATION_DEFAULT_MODEL,
};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::constants::{
    DEFAULT_APP_TITLE, DEFAULT_EMBEDDING_PROVIDER, DEFAULT_LOG_LEVEL, DEFAULT_TRANSLATION_PROVIDER,
};

/// Root configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct AppConfig {
    /// Logging configuration
    #[validate(nested)]
    pub logging: LoggingConfig,
    /// Similarity scorers
    #[validate(nested)]
    pub similarity: SimilarityConfig,
    /// Translation collaborator
    #[validate(nested)]
    pub translation: TranslationConfig,
    /// Embedding model cache
    #[validate(nested)]
    pub cache: CacheConfig,
}

// ============================================================================
// Logging Configuration
// ============================================================================

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[validate(length(min = 1))]
    pub level: String,
    /// Enable JSON output format
    pub json_format: bool,
    /// Also write a daily-rolling log file in this directory
    pub file_output: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
            json_format: false,
            file_output: None,
        }
    }
}

// ============================================================================
// Similarity Configuration
// ============================================================================

/// Similarity scorer settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct SimilarityConfig {
    /// Lexical scorer
    pub lexical: LexicalConfig,
    /// Vector-space scorer
    pub vector_space: VectorSpaceConfig,
    /// Semantic scorer
    #[validate(nested)]
    pub semantic: SemanticConfig,
}

/// Lexical scorer settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LexicalConfig {
    /// Ignore popular characters when seeding matches in long texts
    pub autojunk: bool,
}

/// Vector-space scorer settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VectorSpaceConfig {
    /// `"english"`, `"none"`, or an explicit list of words
    pub stop_words: StopWordsSetting,
}

/// Stop-word selection as written in configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StopWordsSetting {
    /// A built-in list by name
    Named(String),
    /// Explicit words
    List(Vec<String>),
}

impl Default for StopWordsSetting {
    fn default() -> Self {
        Self::Named("english".to_string())
    }
}

impl StopWordsSetting {
    /// Resolve to the scorer's stop-word list
    pub fn to_stop_words(&self) -> Result<StopWords> {
        match self {
            Self::Named(name) => match name.trim().to_lowercase().as_str() {
                "english" | "en" => Ok(StopWords::English),
                "none" | "" => Ok(StopWords::None),
                other => Err(Error::config(format!(
                    "Unknown stop-word list '{other}'. Use \"english\", \"none\" or a list of words"
                ))),
            },
            Self::List(words) => Ok(StopWords::custom(words)),
        }
    }
}

/// Semantic scorer settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct SemanticConfig {
    /// Embedding provider name from the registry
    #[validate(length(min = 1))]
    pub provider: String,
    /// Model identifier
    #[validate(length(min = 1))]
    pub model: String,
    /// Token budget per text, counted with the model tokenizer
    #[validate(range(min = 1))]
    pub max_input_tokens: usize,
    /// What to do with over-long input
    pub truncation: TruncationPolicy,
    /// Base URL for API-backed providers
    pub base_url: Option<String>,
    /// API key for API-backed providers
    pub api_key: Option<String>,
}

impl Default for SemanticConfig {
    fn default() -> Self {
        Self {
            provider: DEFAULT_EMBEDDING_PROVIDER.to_string(),
            model: SEMANTIC_DEFAULT_MODEL.to_string(),
            max_input_tokens: SEMANTIC_MAX_INPUT_TOKENS,
            truncation: TruncationPolicy::default(),
            base_url: None,
            api_key: None,
        }
    }
}

// ============================================================================
// Translation Configuration
// ============================================================================

/// Translation collaborator settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct TranslationConfig {
    /// Translation provider name from the registry
    #[validate(length(min = 1))]
    pub provider: String,
    /// OpenAI-compatible API base URL
    #[validate(length(min = 1))]
    pub endpoint: String,
    /// Bearer token; falls back to `OPENROUTER_API_KEY`
    pub api_key: Option<String>,
    /// Model used when a request does not name one
    #[validate(length(min = 1))]
    pub default_model: String,
    /// Per-request timeout in seconds
    #[validate(range(min = 1))]
    pub timeout_secs: u64,
    /// Application title sent as `X-Title`
    pub app_title: Option<String>,
}

impl Default for TranslationConfig {
    fn default() -> Self {
        Self {
            provider: DEFAULT_TRANSLATION_PROVIDER.to_string(),
            endpoint: TRANSLATION_DEFAULT_ENDPOINT.to_string(),
            api_key: None,
            default_model: TRANSLATION_DEFAULT_MODEL.to_string(),
            timeout_secs: HTTP_REQUEST_TIMEOUT_SECS,
            app_title: Some(DEFAULT_APP_TITLE.to_string()),
        }
    }
}

// ============================================================================
// Cache Configuration
// ============================================================================

/// Embedding model cache settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct CacheConfig {
    /// Loaded models kept in memory
    #[validate(range(min = 1))]
    pub max_models: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            max_models: EMBEDDING_MODEL_CACHE_CAPACITY,
        }
    }
}

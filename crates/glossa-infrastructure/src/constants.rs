//! Infrastructure layer constants
//!
//! Domain rules live in `glossa_domain::constants`; provider defaults in
//! `glossa_providers::constants`.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "glossa.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "glossa";

/// Environment variable prefix for configuration
pub const CONFIG_ENV_PREFIX: &str = "GLOSSA";

/// Separator between nested keys in environment variable names
pub const CONFIG_ENV_SEPARATOR: &str = "__";

/// Fallback environment variable for the translation API key
pub const TRANSLATION_API_KEY_ENV: &str = "OPENROUTER_API_KEY";

/// Fallback environment variable for the OpenAI embeddings API key
pub const EMBEDDING_API_KEY_ENV: &str = "OPENAI_API_KEY";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable holding a tracing filter directive
pub const LOG_FILTER_ENV: &str = "GLOSSA_LOG";

/// File name prefix of rolling log files
pub const LOG_FILE_PREFIX: &str = "glossa";

// ============================================================================
// PROVIDER SELECTION DEFAULTS
// ============================================================================

/// Embedding provider used by the semantic scorer when none is configured
#[cfg(feature = "embedding-fastembed")]
pub const DEFAULT_EMBEDDING_PROVIDER: &str = "fastembed";

/// Embedding provider used by the semantic scorer when none is configured
#[cfg(not(feature = "embedding-fastembed"))]
pub const DEFAULT_EMBEDDING_PROVIDER: &str = "null";

/// Translation provider used when none is configured
pub const DEFAULT_TRANSLATION_PROVIDER: &str = "openai";

/// Title sent with translation requests
pub const DEFAULT_APP_TITLE: &str = "Glossa";

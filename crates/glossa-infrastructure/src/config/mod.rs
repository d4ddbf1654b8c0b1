//! Configuration
//!
//! Layered configuration built with Figment: defaults, then a TOML file,
//! then `GLOSSA_` environment variables.

pub mod loader;
pub mod types;

pub use loader::ConfigLoader;
pub use types::{
    AppConfig, CacheConfig, LexicalConfig, LoggingConfig, SemanticConfig, SimilarityConfig,
    StopWordsSetting, TranslationConfig, VectorSpaceConfig,
};

//! # Infrastructure Layer
//!
//! Cross-cutting technical concerns for the Glossa crates.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Figment-layered TOML and environment configuration |
//! | [`logging`] | Structured logging with tracing |
//! | [`bootstrap`] | Builds services from configuration |
//! | [`error_ext`] | Context helpers for foreign errors |
//! | [`constants`] | Infrastructure constants |

pub mod bootstrap;
pub mod config;
pub mod constants;
pub mod error_ext;
pub mod logging;

// Re-export commonly used types
pub use bootstrap::GlossaContext;
pub use config::{AppConfig, ConfigLoader};
pub use error_ext::ErrorContext;
pub use logging::init_logging;

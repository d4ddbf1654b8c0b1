//! # Glossa
//!
//! Text-similarity scoring and round-trip translation evaluation.
//!
//! Three independent notions of similarity are offered behind one interface:
//!
//! - **Lexical**: character-sequence alignment ratio
//! - **VectorSpace**: TF-IDF cosine over the pair
//! - **Semantic**: cosine of sentence embeddings
//!
//! ## Example
//!
//! ```ignore
//! use glossa::domain::{SimilarityMethod, TextPair};
//! use glossa::infrastructure::{ConfigLoader, GlossaContext};
//!
//! let context = GlossaContext::from_config(ConfigLoader::new().load()?)?;
//! let outcome = context
//!     .similarity()
//!     .score(&TextPair::new("I love sunny days.", "Sunny days are lovely."), SimilarityMethod::VectorSpace)
//!     .await?;
//! println!("{}", outcome.score);
//! ```
//!
//! ## Architecture
//!
//! - `domain` - value objects, errors and ports
//! - `application` - provider registries and use cases
//! - `providers` - scorers, embedding and translation providers
//! - `infrastructure` - configuration, logging and wiring

/// Domain layer - value objects, errors and ports
pub mod domain {
    pub use glossa_domain::*;
}

/// Application layer - registries and use cases
pub mod application {
    pub use glossa_application::*;
}

/// Provider implementations
pub mod providers {
    pub use glossa_providers::*;
}

/// Infrastructure layer - configuration, logging and wiring
pub mod infrastructure {
    pub use glossa_infrastructure::*;
}

/// Command line interface
pub mod cli;

pub use glossa_domain::{Error, Result};

//! # Glossa Domain
//!
//! Core types of the Glossa toolkit: the similarity value objects, the
//! translation request types, the error taxonomy and the provider ports.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`value_objects`] | `TextPair`, `SimilarityScore`, `SimilarityMethod`, translation and evaluation types |
//! | [`ports`] | Traits implemented by the providers crate |
//! | [`error`] | `Error` and `Result` |
//! | [`constants`] | Domain constants |

pub mod constants;
pub mod error;
pub mod ports;
pub mod value_objects;

pub use error::{Error, Result};
pub use value_objects::*;

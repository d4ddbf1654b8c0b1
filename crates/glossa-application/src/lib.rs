//! Application Layer - Glossa
//!
//! Use cases and provider discovery on top of the domain crate.
//!
//! ## Use Cases
//!
//! - [`SimilarityService`]: dispatch a pair to the scorer of a method, or to all of them
//! - [`EvaluationService`]: round-trip translation quality check across models
//!
//! ## Ports
//!
//! - `ports::providers::*`: provider interfaces re-exported from the domain
//! - `ports::registry::*`: linkme registries that providers submit to
//!
//! ## Dependencies
//!
//! This crate depends only on `glossa-domain` and pure Rust libraries; the
//! concrete providers live in `glossa-providers`.

pub mod ports;
pub mod use_cases;

pub use ports::*;
pub use use_cases::*;

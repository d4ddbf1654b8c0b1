//! Use case implementations

pub mod evaluation_service;
pub mod similarity_service;

pub use evaluation_service::EvaluationService;
pub use similarity_service::SimilarityService;

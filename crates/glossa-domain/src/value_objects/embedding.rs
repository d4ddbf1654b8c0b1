//! Semantic Embedding Value Objects
//!
//! Value objects representing dense text embeddings used by the semantic
//! similarity scorer.

use serde::{Deserialize, Serialize};

/// Value Object: Semantic Text Embedding
///
/// Represents a vector embedding of text content that captures semantic meaning.
///
/// ## Business Rules
///
/// - Vector must contain at least one element
/// - Dimensions must be positive
/// - Model name identifies the embedding generation method
///
/// ## Example
///
/// ```rust
/// use glossa_domain::value_objects::Embedding;
///
/// let embedding = Embedding {
///     vector: vec![0.1, 0.2, 0.3, 0.4, 0.5],
///     model: "all-minilm-l6-v2".to_string(),
///     dimensions: 5,
/// };
/// assert_eq!(embedding.vector.len(), embedding.dimensions);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Embedding {
    /// The embedding vector values
    pub vector: Vec<f32>,
    /// Name of the model that generated this embedding
    pub model: String,
    /// Dimensionality of the embedding vector
    pub dimensions: usize,
}

//! Similarity Scorer Implementations
//!
//! | Scorer | Method | State |
//! |--------|--------|-------|
//! | [`LexicalScorer`] | Character alignment ratio | None |
//! | [`VectorSpaceScorer`] | TF-IDF cosine over the pair | Stop-word list |
//! | [`SemanticScorer`] | Embedding cosine | Shared model cache |

pub mod lexical;
pub mod semantic;
pub mod stop_words;
pub mod vector_space;

pub use lexical::LexicalScorer;
pub use semantic::SemanticScorer;
pub use stop_words::{ENGLISH_STOP_WORDS, StopWords};
pub use vector_space::VectorSpaceScorer;

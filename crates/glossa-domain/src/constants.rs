//! Domain layer constants
//!
//! Constants that are part of the domain rules and shared by the provider and
//! infrastructure crates.

// ============================================================================
// SIMILARITY DOMAIN CONSTANTS
// ============================================================================

/// Sequence length from which the lexical matcher ignores popular characters
/// when seeding matches
pub const LEXICAL_AUTOJUNK_MIN_LENGTH: usize = 200;

/// Number of texts in the vector-space corpus (the pair itself)
pub const VECTOR_SPACE_CORPUS_SIZE: usize = 2;

/// Default token budget for semantic input before the truncation policy applies
pub const SEMANTIC_MAX_INPUT_TOKENS: usize = 256;

/// Default sentence-embedding model identifier
pub const SEMANTIC_DEFAULT_MODEL: &str = "all-MiniLM-L6-v2";

// ============================================================================
// TRANSLATION DOMAIN CONSTANTS
// ============================================================================

/// Role value meaning "no particular phrasing register"
pub const TRANSLATION_ROLE_OTHER: &str = "Other";

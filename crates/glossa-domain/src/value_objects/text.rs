//! Text pair value object

use serde::{Deserialize, Serialize};

/// Value Object: pair of texts to compare
///
/// Both sides are immutable and may be empty. No language or script is
/// assumed; every scorer decides how it treats empty input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextPair {
    source: String,
    target: String,
}

impl TextPair {
    /// Create a new pair
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
        }
    }

    /// First text of the pair
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Second text of the pair
    pub fn target(&self) -> &str {
        &self.target
    }

    /// The same pair with both sides exchanged
    pub fn swapped(&self) -> Self {
        Self {
            source: self.target.clone(),
            target: self.source.clone(),
        }
    }

    /// Whether both sides are empty strings
    pub fn is_empty(&self) -> bool {
        self.source.is_empty() && self.target.is_empty()
    }
}

impl<S: Into<String>, T: Into<String>> From<(S, T)> for TextPair {
    fn from((source, target): (S, T)) -> Self {
        Self::new(source, target)
    }
}

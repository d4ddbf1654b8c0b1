//! Translation Value Objects
//!
//! Request and response types exchanged with translation providers.

use serde::{Deserialize, Serialize};

use crate::constants::TRANSLATION_ROLE_OTHER;

/// Whether a request translates away from, or back into, the original language
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TranslationDirection {
    /// Original text into the target language
    #[default]
    Forward,
    /// Translated text back into the original language
    Back,
}

/// A single translation request
///
/// `role` is an open string describing the phrasing register. It is passed
/// to the provider verbatim; only the literal `Other` is interpreted, and
/// means "no particular register".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationRequest {
    /// Text to translate
    pub text: String,
    /// Language to translate into
    pub target_language: String,
    /// Language of `text`, when known
    #[serde(default)]
    pub source_language: Option<String>,
    /// Model identifier; `None` selects the provider default
    #[serde(default)]
    pub model: Option<String>,
    /// Phrasing register
    #[serde(default = "default_role")]
    pub role: String,
    /// Forward or back translation
    #[serde(default)]
    pub direction: TranslationDirection,
}

fn default_role() -> String {
    TRANSLATION_ROLE_OTHER.to_string()
}

impl TranslationRequest {
    /// Forward translation of `text` into `target_language`
    pub fn new(text: impl Into<String>, target_language: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            target_language: target_language.into(),
            source_language: None,
            model: None,
            role: default_role(),
            direction: TranslationDirection::Forward,
        }
    }

    /// Set the source language
    pub fn with_source_language(mut self, language: impl Into<String>) -> Self {
        self.source_language = Some(language.into());
        self
    }

    /// Set the model identifier
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Set the phrasing register
    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = role.into();
        self
    }

    /// Set the direction
    pub fn with_direction(mut self, direction: TranslationDirection) -> Self {
        self.direction = direction;
        self
    }

    /// Whether the role asks for a specific register
    pub fn has_register(&self) -> bool {
        !self.role.trim().is_empty() && self.role != TRANSLATION_ROLE_OTHER
    }
}

/// Translated text returned by a provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Translation {
    /// Translated text
    pub text: String,
    /// Model that produced it
    pub model: String,
    /// Language of `text`
    pub language: String,
}

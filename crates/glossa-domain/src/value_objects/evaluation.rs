//! Round-trip Evaluation Value Objects
//!
//! A round-trip evaluation translates a text with several models, translates
//! every result back, and scores the back-translation against the original.

use serde::{Deserialize, Serialize};

use super::similarity::{ScoreReport, SimilarityScore};

/// Input of a round-trip evaluation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationRequest {
    /// Original text
    pub text: String,
    /// Language of the original text
    pub source_language: String,
    /// Language to translate into
    pub target_language: String,
    /// Phrasing register passed to every model
    pub role: String,
    /// Model identifiers to compare
    pub models: Vec<String>,
}

/// Result for one model that completed the round trip
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelEvaluation {
    /// Model identifier
    pub model: String,
    /// Forward translation
    pub translation: String,
    /// Translation of `translation` back into the source language
    pub back_translation: String,
    /// Original vs back-translation, per method
    pub scores: ScoreReport,
    /// Mean of the successful method scores
    pub overall: Option<SimilarityScore>,
}

/// A model that could not complete the round trip
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationFailure {
    /// Model identifier
    pub model: String,
    /// Rendered error
    pub error: String,
}

/// Ranked outcome of a round-trip evaluation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EvaluationReport {
    /// Evaluations, best overall score first
    pub ranking: Vec<ModelEvaluation>,
    /// Models whose translation failed
    pub failures: Vec<EvaluationFailure>,
}

impl EvaluationReport {
    /// Sort `ranking` by overall score, descending; models without an overall score go last
    pub fn sort(&mut self) {
        self.ranking.sort_by(|a, b| {
            let a = a.overall.map_or(-1.0, SimilarityScore::value);
            let b = b.overall.map_or(-1.0, SimilarityScore::value);
            b.partial_cmp(&a).unwrap_or(std::cmp::Ordering::Equal)
        });
    }

    /// Best-ranked model, if any completed
    pub fn best(&self) -> Option<&ModelEvaluation> {
        self.ranking.first()
    }
}

//! Similarity Value Objects
//!
//! Method selector, normalized score and per-call outcomes shared by every
//! similarity scorer.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Which notion of similarity to compute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SimilarityMethod {
    /// Character-sequence alignment ratio
    Lexical,
    /// TF-IDF cosine over the two-document corpus
    VectorSpace,
    /// Cosine similarity of sentence embeddings
    Semantic,
}

impl SimilarityMethod {
    /// Every method, in dispatch order
    pub const ALL: [SimilarityMethod; 3] = [Self::Lexical, Self::VectorSpace, Self::Semantic];

    /// Stable lowercase name
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Lexical => "lexical",
            Self::VectorSpace => "vector-space",
            Self::Semantic => "semantic",
        }
    }
}

impl fmt::Display for SimilarityMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SimilarityMethod {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "lexical" => Ok(Self::Lexical),
            "vector-space" | "vectorspace" | "tfidf" | "tf-idf" => Ok(Self::VectorSpace),
            "semantic" => Ok(Self::Semantic),
            other => Err(Error::invalid_argument(format!(
                "Unknown similarity method '{other}'. Use lexical, vector-space or semantic"
            ))),
        }
    }
}

/// Value Object: normalized similarity score
///
/// Always within `[0.0, 1.0]`. Values produced by floating-point cosine
/// computations are clamped on construction; `NaN` maps to `0.0`.
/// Deserialization goes through the same clamp.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(from = "f64", into = "f64")]
pub struct SimilarityScore(f64);

impl SimilarityScore {
    /// Score for two maximally similar texts
    pub const MAX: SimilarityScore = SimilarityScore(1.0);
    /// Score for two texts with nothing in common
    pub const MIN: SimilarityScore = SimilarityScore(0.0);

    /// Build a score, clamping into `[0.0, 1.0]`
    pub fn clamped(value: f64) -> Self {
        if value.is_nan() {
            return Self::MIN;
        }
        Self(value.clamp(0.0, 1.0))
    }

    /// The raw value
    pub fn value(self) -> f64 {
        self.0
    }
}

impl fmt::Display for SimilarityScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4}", self.0)
    }
}

impl From<f64> for SimilarityScore {
    fn from(value: f64) -> Self {
        Self::clamped(value)
    }
}

impl From<SimilarityScore> for f64 {
    fn from(score: SimilarityScore) -> Self {
        score.0
    }
}

/// Result of one successful scoring call
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreOutcome {
    /// Method that produced the score
    pub method: SimilarityMethod,
    /// Normalized score
    pub score: SimilarityScore,
    /// Set when input was shortened before scoring
    #[serde(default)]
    pub truncated: bool,
}

impl ScoreOutcome {
    /// Outcome for an untruncated computation
    pub fn new(method: SimilarityMethod, score: SimilarityScore) -> Self {
        Self {
            method,
            score,
            truncated: false,
        }
    }

    /// Mark the outcome as computed over truncated input
    pub fn with_truncation(mut self, truncated: bool) -> Self {
        self.truncated = truncated;
        self
    }
}

/// What to do with semantic input longer than the model budget
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TruncationPolicy {
    /// Keep the leading tokens and flag the outcome
    #[default]
    Truncate,
    /// Fail with `InputTooLarge`
    Reject,
}

/// Per-method entry of a [`ScoreReport`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum MethodResult {
    /// The method produced a score
    Scored {
        /// Normalized score
        score: SimilarityScore,
        /// Whether input was truncated
        truncated: bool,
    },
    /// The method could not produce a score
    Failed {
        /// Rendered error
        error: String,
    },
}

/// Scores of one pair under several methods
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreReport {
    /// Result per method
    pub results: BTreeMap<SimilarityMethod, MethodResult>,
}

impl ScoreReport {
    /// Record a successful outcome
    pub fn record(&mut self, outcome: ScoreOutcome) {
        self.results.insert(
            outcome.method,
            MethodResult::Scored {
                score: outcome.score,
                truncated: outcome.truncated,
            },
        );
    }

    /// Record a failed method
    pub fn record_failure(&mut self, method: SimilarityMethod, error: &Error) {
        self.results.insert(
            method,
            MethodResult::Failed {
                error: error.to_string(),
            },
        );
    }

    /// Score for a method, if it succeeded
    pub fn score(&self, method: SimilarityMethod) -> Option<SimilarityScore> {
        match self.results.get(&method) {
            Some(MethodResult::Scored { score, .. }) => Some(*score),
            _ => None,
        }
    }

    /// Mean over every method run
    ///
    /// `None` when nothing was run or any method failed, so reports are only
    /// ever compared on the same set of methods.
    pub fn overall(&self) -> Option<SimilarityScore> {
        let scores = self
            .results
            .values()
            .map(|r| match r {
                MethodResult::Scored { score, .. } => Some(score.value()),
                MethodResult::Failed { .. } => None,
            })
            .collect::<Option<Vec<f64>>>()?;

        if scores.is_empty() {
            return None;
        }
        #[allow(clippy::cast_precision_loss)]
        let mean = scores.iter().sum::<f64>() / scores.len() as f64;
        Some(SimilarityScore::clamped(mean))
    }

    /// Whether any method failed
    pub fn has_failures(&self) -> bool {
        self.results
            .values()
            .any(|r| matches!(r, MethodResult::Failed { .. }))
    }
}

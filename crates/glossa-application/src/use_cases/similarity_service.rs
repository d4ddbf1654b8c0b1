//! Similarity Service Use Case
//!
//! Dispatches a [`TextPair`] to the scorer registered for the requested
//! [`SimilarityMethod`]. Scorers are independent; the service only selects
//! between them, times the call and logs the outcome.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use futures::future::join_all;
use glossa_domain::error::{Error, Result};
use glossa_domain::value_objects::{ScoreOutcome, ScoreReport, SimilarityMethod, TextPair};
use tracing::{debug, warn};

use crate::ports::providers::SimilarityScorer;

/// Similarity service - one scorer per method
#[derive(Clone, Default)]
pub struct SimilarityService {
    scorers: HashMap<SimilarityMethod, Arc<dyn SimilarityScorer>>,
}

impl SimilarityService {
    /// Create a service from a set of scorers; a later scorer for the same
    /// method replaces an earlier one
    pub fn new(scorers: impl IntoIterator<Item = Arc<dyn SimilarityScorer>>) -> Self {
        scorers
            .into_iter()
            .fold(Self::default(), |service, scorer| service.with_scorer(scorer))
    }

    /// Register (or replace) the scorer for its method
    pub fn with_scorer(mut self, scorer: Arc<dyn SimilarityScorer>) -> Self {
        self.scorers.insert(scorer.method(), scorer);
        self
    }

    /// Methods this service can score, in dispatch order
    pub fn methods(&self) -> Vec<SimilarityMethod> {
        SimilarityMethod::ALL
            .into_iter()
            .filter(|method| self.scorers.contains_key(method))
            .collect()
    }

    /// Score a pair with one method
    pub async fn score(&self, pair: &TextPair, method: SimilarityMethod) -> Result<ScoreOutcome> {
        let scorer = self.scorers.get(&method).ok_or_else(|| {
            Error::invalid_argument(format!("No scorer registered for method '{method}'"))
        })?;

        let started = Instant::now();
        match scorer.compute(pair).await {
            Ok(outcome) => {
                debug!(
                    method = %method,
                    score = %outcome.score,
                    truncated = outcome.truncated,
                    elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX),
                    "Similarity computed"
                );
                Ok(outcome)
            }
            Err(e) => {
                warn!(method = %method, error = %e, "Similarity could not be computed");
                Err(e)
            }
        }
    }

    /// Score a pair with one method, failing with `Error::Timeout` after `timeout`
    pub async fn score_with_timeout(
        &self,
        pair: &TextPair,
        method: SimilarityMethod,
        timeout: Duration,
    ) -> Result<ScoreOutcome> {
        tokio::time::timeout(timeout, self.score(pair, method))
            .await
            .map_err(|_| Error::timeout(format!("{method} similarity"), timeout))?
    }

    /// Score a pair with every registered method
    ///
    /// Methods run concurrently. A failing method is recorded in the report
    /// and does not prevent the others from completing.
    pub async fn score_all(&self, pair: &TextPair) -> ScoreReport {
        let methods = self.methods();
        let results = join_all(methods.iter().map(|method| self.score(pair, *method))).await;

        let mut report = ScoreReport::default();
        for (method, result) in methods.into_iter().zip(results) {
            match result {
                Ok(outcome) => report.record(outcome),
                Err(e) => report.record_failure(method, &e),
            }
        }
        report
    }
}

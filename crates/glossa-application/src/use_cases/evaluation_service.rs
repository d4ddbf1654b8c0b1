//! Evaluation Service Use Case
//!
//! Round-trip translation quality check: translate the original text with each
//! model, translate the result back into the source language, then score the
//! back-translation against the original with every similarity method.

use std::sync::Arc;

use futures::future::join_all;
use glossa_domain::error::{Error, Result};
use glossa_domain::value_objects::{
    EvaluationFailure, EvaluationReport, EvaluationRequest, ModelEvaluation, TextPair,
    TranslationDirection, TranslationRequest,
};
use tracing::{info, warn};

use crate::ports::providers::TranslationProvider;
use crate::use_cases::similarity_service::SimilarityService;

/// Evaluation service - composes a translator with the similarity scorers
pub struct EvaluationService {
    translator: Arc<dyn TranslationProvider>,
    similarity: Arc<SimilarityService>,
}

impl EvaluationService {
    /// Create new evaluation service with injected dependencies
    pub fn new(translator: Arc<dyn TranslationProvider>, similarity: Arc<SimilarityService>) -> Self {
        Self {
            translator,
            similarity,
        }
    }

    /// Evaluate every requested model and rank them by overall score
    pub async fn evaluate(&self, request: &EvaluationRequest) -> Result<EvaluationReport> {
        if request.text.trim().is_empty() {
            return Err(Error::invalid_argument("Evaluation text cannot be empty"));
        }
        if request.models.is_empty() {
            return Err(Error::invalid_argument(
                "Evaluation needs at least one model",
            ));
        }

        info!(
            models = request.models.len(),
            from = %request.source_language,
            to = %request.target_language,
            "Starting round-trip evaluation"
        );

        let results = join_all(
            request
                .models
                .iter()
                .map(|model| self.round_trip(request, model)),
        )
        .await;

        let mut report = EvaluationReport::default();
        for (model, result) in request.models.iter().zip(results) {
            match result {
                Ok(evaluation) => report.ranking.push(evaluation),
                Err(e) => {
                    warn!(model = %model, error = %e, "Round trip failed");
                    report.failures.push(EvaluationFailure {
                        model: model.clone(),
                        error: e.to_string(),
                    });
                }
            }
        }
        report.sort();
        Ok(report)
    }

    async fn round_trip(&self, request: &EvaluationRequest, model: &str) -> Result<ModelEvaluation> {
        let forward = TranslationRequest::new(&request.text, &request.target_language)
            .with_source_language(&request.source_language)
            .with_model(model)
            .with_role(&request.role);
        let translation = self.translator.translate(&forward).await?;

        let back = TranslationRequest::new(&translation.text, &request.source_language)
            .with_source_language(&request.target_language)
            .with_model(model)
            .with_role(&request.role)
            .with_direction(TranslationDirection::Back);
        let back_translation = self.translator.translate(&back).await?;

        let pair = TextPair::new(&request.text, &back_translation.text);
        let scores = self.similarity.score_all(&pair).await;

        Ok(ModelEvaluation {
            model: model.to_string(),
            translation: translation.text,
            back_translation: back_translation.text,
            overall: scores.overall(),
            scores,
        })
    }
}

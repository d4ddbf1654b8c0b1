//! Tests for the round-trip evaluation service

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use glossa_application::ports::providers::{SimilarityScorer, TranslationProvider};
use glossa_application::{EvaluationService, SimilarityService};
use glossa_domain::error::{Error, Result};
use glossa_domain::value_objects::{
    EvaluationRequest, ScoreOutcome, SimilarityMethod, TextPair, Translation,
    TranslationDirection, TranslationRequest,
};
use glossa_providers::translation::NullTranslationProvider;
use glossa_providers::{LexicalScorer, VectorSpaceScorer};

/// Translator whose behaviour depends on the model name:
/// `broken` fails, `lossy` garbles the back translation, `marked` appends `#`
/// to it, `reworded` rephrases it, anything else echoes.
/// Every request is recorded.
#[derive(Default)]
struct ScriptedTranslator {
    requests: Mutex<Vec<TranslationRequest>>,
}

#[async_trait]
impl TranslationProvider for ScriptedTranslator {
    async fn translate(&self, request: &TranslationRequest) -> Result<Translation> {
        self.requests.lock().unwrap().push(request.clone());
        let model = request.model.clone().unwrap_or_default();

        let text = match (model.as_str(), request.direction) {
            ("broken", _) => return Err(Error::translation("upstream returned 503")),
            ("lossy", TranslationDirection::Back) => "Something else entirely.".to_string(),
            ("marked", TranslationDirection::Back) => format!("{}#", request.text),
            ("reworded", TranslationDirection::Back) => {
                "The patient should take two tablets each day.".to_string()
            }
            _ => request.text.clone(),
        };

        Ok(Translation {
            text,
            model,
            language: request.target_language.clone(),
        })
    }

    fn default_model(&self) -> &str {
        "scripted"
    }

    fn provider_name(&self) -> &str {
        "scripted"
    }
}

/// Vector-space scorer that fails whenever the target carries a `#`
struct MarkerSensitiveVectorSpace(VectorSpaceScorer);

#[async_trait]
impl SimilarityScorer for MarkerSensitiveVectorSpace {
    fn method(&self) -> SimilarityMethod {
        SimilarityMethod::VectorSpace
    }

    async fn compute(&self, pair: &TextPair) -> Result<ScoreOutcome> {
        if pair.target().contains('#') {
            return Err(Error::empty_vocabulary("marked target"));
        }
        self.0.compute(pair).await
    }
}

fn similarity() -> Arc<SimilarityService> {
    Arc::new(SimilarityService::new([
        Arc::new(LexicalScorer::new()) as Arc<dyn SimilarityScorer>,
        Arc::new(VectorSpaceScorer::new()),
    ]))
}

fn request(models: &[&str]) -> EvaluationRequest {
    EvaluationRequest {
        text: "The patient should take two tablets daily.".to_string(),
        source_language: "English".to_string(),
        target_language: "German".to_string(),
        role: "Doctor".to_string(),
        models: models.iter().map(ToString::to_string).collect(),
    }
}

#[tokio::test]
async fn test_identity_round_trip_scores_one() {
    let service = EvaluationService::new(Arc::new(NullTranslationProvider::new()), similarity());

    let report = service.evaluate(&request(&["null"])).await.unwrap();

    assert!(report.failures.is_empty());
    let best = report.best().unwrap();
    assert_eq!(best.model, "null");
    assert_eq!(best.back_translation, "The patient should take two tablets daily.");
    assert_eq!(best.scores.score(SimilarityMethod::Lexical).unwrap().value(), 1.0);
    assert!((best.overall.unwrap().value() - 1.0).abs() < 1e-9);
}

#[tokio::test]
async fn test_ranks_models_and_reports_failures() {
    let service = EvaluationService::new(Arc::new(ScriptedTranslator::default()), similarity());

    let report = service
        .evaluate(&request(&["lossy", "broken", "faithful"]))
        .await
        .unwrap();

    let ranked: Vec<&str> = report.ranking.iter().map(|e| e.model.as_str()).collect();
    assert_eq!(ranked, vec!["faithful", "lossy"]);
    assert!(report.ranking[0].overall > report.ranking[1].overall);

    assert_eq!(report.failures.len(), 1);
    assert_eq!(report.failures[0].model, "broken");
    assert!(report.failures[0].error.contains("503"));
}

#[tokio::test]
async fn test_model_with_failed_method_ranks_last() {
    let similarity = Arc::new(SimilarityService::new([
        Arc::new(LexicalScorer::new()) as Arc<dyn SimilarityScorer>,
        Arc::new(MarkerSensitiveVectorSpace(VectorSpaceScorer::new())),
    ]));
    let service = EvaluationService::new(Arc::new(ScriptedTranslator::default()), similarity);

    let report = service
        .evaluate(&request(&["marked", "reworded"]))
        .await
        .unwrap();

    // "marked" has the better lexical score but only one method succeeded
    let ranked: Vec<&str> = report.ranking.iter().map(|e| e.model.as_str()).collect();
    assert_eq!(ranked, vec!["reworded", "marked"]);

    let marked = &report.ranking[1];
    assert!(marked.scores.has_failures());
    assert!(marked.overall.is_none());
    assert!(
        marked.scores.score(SimilarityMethod::Lexical)
            > report.ranking[0].scores.score(SimilarityMethod::Lexical)
    );
    assert!(report.ranking[0].overall.is_some());
    assert!(report.failures.is_empty());
}

#[tokio::test]
async fn test_back_translation_targets_source_language() {
    let translator = Arc::new(ScriptedTranslator::default());
    let service = EvaluationService::new(translator.clone(), similarity());

    service.evaluate(&request(&["faithful"])).await.unwrap();

    let requests = translator.requests.lock().unwrap();
    assert_eq!(requests.len(), 2);

    let forward = &requests[0];
    assert_eq!(forward.direction, TranslationDirection::Forward);
    assert_eq!(forward.target_language, "German");
    assert_eq!(forward.source_language.as_deref(), Some("English"));
    assert_eq!(forward.role, "Doctor");

    let back = &requests[1];
    assert_eq!(back.direction, TranslationDirection::Back);
    assert_eq!(back.target_language, "English");
    assert_eq!(back.model.as_deref(), Some("faithful"));
}

#[tokio::test]
async fn test_rejects_empty_text_and_missing_models() {
    let service = EvaluationService::new(Arc::new(NullTranslationProvider::new()), similarity());

    let mut empty_text = request(&["null"]);
    empty_text.text = "   ".to_string();
    assert!(matches!(
        service.evaluate(&empty_text).await,
        Err(Error::InvalidArgument { .. })
    ));

    assert!(matches!(
        service.evaluate(&request(&[])).await,
        Err(Error::InvalidArgument { .. })
    ));
}

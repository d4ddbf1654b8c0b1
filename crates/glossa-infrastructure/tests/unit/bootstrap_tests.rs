//! Service wiring tests

use glossa_domain::error::Error;
use glossa_domain::value_objects::{SimilarityMethod, TextPair};
use glossa_infrastructure::GlossaContext;
use glossa_infrastructure::bootstrap::translation_provider_config;
use glossa_infrastructure::config::AppConfig;

fn offline_config() -> AppConfig {
    let mut config = AppConfig::default();
    config.similarity.semantic.provider = "null".to_string();
    config.similarity.semantic.model = "null-mini".to_string();
    config.translation.provider = "null".to_string();
    config
}

#[tokio::test]
async fn test_context_scores_every_method() {
    let context = GlossaContext::from_config(offline_config()).expect("context builds");
    let similarity = context.similarity();

    assert_eq!(similarity.methods(), SimilarityMethod::ALL.to_vec());

    let pair = TextPair::new("I love sunny days.", "I love sunny days.");
    let report = similarity.score_all(&pair).await;
    assert!(!report.has_failures());
    assert!(context.models().contains("null-mini"));
}

#[tokio::test]
async fn test_similarity_for_model_shares_cache() {
    let context = GlossaContext::from_config(offline_config()).expect("context builds");

    let other = context.similarity_for_model("null-other");
    other
        .score(&TextPair::new("a b", "a c"), SimilarityMethod::Semantic)
        .await
        .unwrap();

    assert!(context.models().contains("null-other"));
    assert!(!context.models().contains("null-mini"));
}

#[tokio::test]
async fn test_evaluation_with_null_translator() {
    let context = GlossaContext::from_config(offline_config()).expect("context builds");
    let service = context.evaluation_service().expect("null translator resolves");

    let report = service
        .evaluate(&glossa_domain::value_objects::EvaluationRequest {
            text: "Good morning, everyone.".to_string(),
            source_language: "English".to_string(),
            target_language: "Spanish".to_string(),
            role: "Other".to_string(),
            models: vec!["null".to_string()],
        })
        .await
        .unwrap();

    assert_eq!(report.ranking.len(), 1);
    assert!((report.ranking[0].overall.unwrap().value() - 1.0).abs() < 1e-9);
}

#[test]
fn test_openai_translator_requires_key() {
    let mut config = offline_config();
    config.translation.provider = "openai".to_string();
    config.translation.api_key = None;

    let context = GlossaContext::from_config(config).expect("context builds");
    let err = context.translator().err().expect("missing key");
    assert!(matches!(err, Error::Config { .. }));
}

#[test]
fn test_translation_provider_config_mapping() {
    let mut config = AppConfig::default();
    config.translation.api_key = Some("key".to_string());
    config.translation.timeout_secs = 12;

    let provider_config = translation_provider_config(&config.translation);
    assert_eq!(provider_config.provider, "openai");
    assert_eq!(provider_config.api_key.as_deref(), Some("key"));
    assert_eq!(provider_config.timeout, Some(std::time::Duration::from_secs(12)));
    assert_eq!(provider_config.app_title.as_deref(), Some("Glossa"));
}

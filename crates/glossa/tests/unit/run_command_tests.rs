//! Command execution tests against offline providers

use glossa::cli::{Command, MethodSelection, run_command};
use glossa_domain::value_objects::SimilarityMethod;
use glossa_infrastructure::GlossaContext;
use glossa_infrastructure::config::AppConfig;

fn offline_context() -> GlossaContext {
    let mut config = AppConfig::default();
    config.similarity.semantic.provider = "null".to_string();
    config.similarity.semantic.model = "null-mini".to_string();
    config.translation.provider = "null".to_string();
    GlossaContext::from_config(config).expect("offline context builds")
}

#[tokio::test]
async fn test_score_single_method_outputs_outcome() {
    let context = offline_context();
    let output = run_command(
        &context,
        Command::Score {
            method: MethodSelection::One(SimilarityMethod::Lexical),
            model: None,
            timeout: None,
            source: "The cat sat on the mat.".to_string(),
            target: "The cat sat on the mat.".to_string(),
        },
    )
    .await
    .unwrap();

    assert_eq!(output["method"], "lexical");
    assert_eq!(output["score"], 1.0);
    assert_eq!(output["truncated"], false);
}

#[tokio::test]
async fn test_score_all_reports_failures_per_method() {
    let context = offline_context();
    let output = run_command(
        &context,
        Command::Score {
            method: MethodSelection::All,
            model: None,
            timeout: Some(30),
            source: "the of and".to_string(),
            target: "the of and".to_string(),
        },
    )
    .await
    .unwrap();

    assert_eq!(output["results"]["lexical"]["status"], "scored");
    assert_eq!(output["results"]["vector-space"]["status"], "failed");
    assert_eq!(output["results"]["semantic"]["status"], "scored");
    assert!(output["overall"].is_null());
}

#[tokio::test]
async fn test_score_vector_space_empty_vocabulary_is_an_error() {
    let context = offline_context();
    let result = run_command(
        &context,
        Command::Score {
            method: MethodSelection::One(SimilarityMethod::VectorSpace),
            model: None,
            timeout: None,
            source: String::new(),
            target: String::new(),
        },
    )
    .await;

    assert!(result.is_err());
}

#[tokio::test]
async fn test_translate_with_null_provider_echoes() {
    let context = offline_context();
    let output = run_command(
        &context,
        Command::Translate {
            to: "French".to_string(),
            from: None,
            role: "Other".to_string(),
            model: None,
            text: "Hello".to_string(),
        },
    )
    .await
    .unwrap();

    assert_eq!(output["text"], "Hello");
}

#[tokio::test]
async fn test_evaluate_ranks_requested_models() {
    let context = offline_context();
    let output = run_command(
        &context,
        Command::Evaluate {
            from: "English".to_string(),
            to: "Spanish".to_string(),
            role: "Other".to_string(),
            models: vec!["null-a".to_string(), "null-b".to_string()],
            text: "Good morning, everyone.".to_string(),
        },
    )
    .await
    .unwrap();

    assert_eq!(output["ranking"].as_array().map(Vec::len), Some(2));
}

#[tokio::test]
async fn test_providers_lists_null_entries() {
    let context = offline_context();
    let output = run_command(&context, Command::Providers).await.unwrap();

    let names = |kind: &str| -> Vec<String> {
        output[kind]
            .as_array()
            .into_iter()
            .flatten()
            .filter_map(|entry| entry["name"].as_str().map(str::to_string))
            .collect()
    };
    assert!(names("embedding").contains(&"null".to_string()));
    assert!(names("translation").contains(&"null".to_string()));
}

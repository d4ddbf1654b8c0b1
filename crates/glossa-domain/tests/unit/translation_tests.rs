//! Unit tests for translation value objects

use glossa_domain::constants::TRANSLATION_ROLE_OTHER;
use glossa_domain::{TranslationDirection, TranslationRequest};

#[test]
fn test_request_defaults() {
    let request = TranslationRequest::new("Hello", "French");
    assert_eq!(request.role, TRANSLATION_ROLE_OTHER);
    assert_eq!(request.direction, TranslationDirection::Forward);
    assert!(request.model.is_none());
    assert!(!request.has_register());
}

#[test]
fn test_request_builder() {
    let request = TranslationRequest::new("Hello", "French")
        .with_source_language("English")
        .with_model("openai/gpt-4o-mini")
        .with_role("Doctor")
        .with_direction(TranslationDirection::Back);

    assert_eq!(request.source_language.as_deref(), Some("English"));
    assert_eq!(request.model.as_deref(), Some("openai/gpt-4o-mini"));
    assert!(request.has_register());
    assert_eq!(request.direction, TranslationDirection::Back);
}

#[test]
fn test_role_is_not_validated() {
    let request = TranslationRequest::new("Hello", "French").with_role("pirate captain ☠");
    assert_eq!(request.role, "pirate captain ☠");
    assert!(request.has_register());
}

#[test]
fn test_request_deserializes_with_defaults() {
    let request: TranslationRequest =
        serde_json::from_str(r#"{"text":"Hi","target_language":"German"}"#).unwrap();
    assert_eq!(request.role, TRANSLATION_ROLE_OTHER);
    assert_eq!(request.direction, TranslationDirection::Forward);
}

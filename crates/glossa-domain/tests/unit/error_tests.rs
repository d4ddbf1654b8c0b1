//! Unit tests for domain error types

use glossa_domain::Error;
use std::time::Duration;

#[test]
fn test_empty_vocabulary_error() {
    let error = Error::empty_vocabulary("source text has no terms");
    match &error {
        Error::EmptyVocabulary { message } => assert_eq!(message, "source text has no terms"),
        _ => panic!("Expected EmptyVocabulary error"),
    }
}

#[test]
fn test_model_load_error_display() {
    let error = Error::model_load("no-such-model", "unknown model");
    let display = error.to_string();
    assert!(display.contains("no-such-model"));
    assert!(display.contains("unknown model"));
}

#[test]
fn test_input_too_large_error() {
    let error = Error::input_too_large(900, 256);
    match error {
        Error::InputTooLarge { tokens, limit } => {
            assert_eq!(tokens, 900);
            assert_eq!(limit, 256);
        }
        _ => panic!("Expected InputTooLarge error"),
    }
}

#[test]
fn test_timeout_error_reports_milliseconds() {
    let error = Error::timeout("semantic score", Duration::from_secs(2));
    assert_eq!(error.to_string(), "Timed out after 2000 ms: semantic score");
}

#[test]
fn test_io_error_keeps_source() {
    let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
    let error = Error::io_with_source("cannot write config", io);
    assert_eq!(error.to_string(), "I/O error: cannot write config");
    assert!(std::error::Error::source(&error).is_some());
}

#[test]
fn test_configuration_error_keeps_source() {
    let io = std::io::Error::other("disk");
    let error = Error::configuration_with_source("cannot read config", io);
    assert!(std::error::Error::source(&error).is_some());
}

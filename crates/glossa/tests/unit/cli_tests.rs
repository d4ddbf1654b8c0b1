//! Argument parsing tests

use std::path::PathBuf;

use clap::Parser;
use glossa::cli::{Cli, Command, MethodSelection};
use glossa_domain::value_objects::SimilarityMethod;

#[test]
fn test_score_defaults_to_all_methods() {
    let cli = Cli::try_parse_from(["glossa", "score", "a cat", "a dog"]).unwrap();

    match cli.command {
        Command::Score {
            method,
            model,
            timeout,
            source,
            target,
        } => {
            assert_eq!(method, MethodSelection::All);
            assert!(model.is_none());
            assert!(timeout.is_none());
            assert_eq!(source, "a cat");
            assert_eq!(target, "a dog");
        }
        other => panic!("unexpected command: {other:?}"),
    }
    assert!(cli.config.is_none());
}

#[test]
fn test_score_single_method_and_global_config() {
    let cli = Cli::try_parse_from([
        "glossa",
        "score",
        "-m",
        "vector-space",
        "--timeout",
        "5",
        "one",
        "two",
        "--config",
        "custom.toml",
    ])
    .unwrap();

    assert_eq!(cli.config, Some(PathBuf::from("custom.toml")));
    match cli.command {
        Command::Score {
            method, timeout, ..
        } => {
            assert_eq!(method, MethodSelection::One(SimilarityMethod::VectorSpace));
            assert_eq!(timeout, Some(5));
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn test_unknown_method_is_rejected() {
    let result = Cli::try_parse_from(["glossa", "score", "-m", "phonetic", "a", "b"]);
    assert!(result.is_err());
}

#[test]
fn test_method_selection_parsing() {
    assert_eq!("ALL".parse::<MethodSelection>().unwrap(), MethodSelection::All);
    assert_eq!(
        "semantic".parse::<MethodSelection>().unwrap(),
        MethodSelection::One(SimilarityMethod::Semantic)
    );
    assert_eq!(
        "tfidf".parse::<MethodSelection>().unwrap(),
        MethodSelection::One(SimilarityMethod::VectorSpace)
    );
}

#[test]
fn test_translate_role_defaults_to_other() {
    let cli = Cli::try_parse_from(["glossa", "translate", "--to", "French", "Hello"]).unwrap();

    match cli.command {
        Command::Translate {
            to,
            from,
            role,
            model,
            text,
        } => {
            assert_eq!(to, "French");
            assert!(from.is_none());
            assert_eq!(role, "Other");
            assert!(model.is_none());
            assert_eq!(text, "Hello");
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn test_evaluate_collects_repeated_models() {
    let cli = Cli::try_parse_from([
        "glossa",
        "evaluate",
        "--from",
        "English",
        "--to",
        "Spanish",
        "--role",
        "Doctor",
        "--model",
        "openai/gpt-4o-mini",
        "--model",
        "anthropic/claude-3-haiku",
        "Take two tablets daily.",
    ])
    .unwrap();

    match cli.command {
        Command::Evaluate { role, models, .. } => {
            assert_eq!(role, "Doctor");
            assert_eq!(models, vec!["openai/gpt-4o-mini", "anthropic/claude-3-haiku"]);
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn test_evaluate_requires_a_model() {
    let result = Cli::try_parse_from([
        "glossa", "evaluate", "--from", "English", "--to", "Spanish", "Hello",
    ]);
    assert!(result.is_err());
}

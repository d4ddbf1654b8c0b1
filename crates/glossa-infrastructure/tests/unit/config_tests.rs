//! Configuration loading and validation tests

use std::env;
use std::io::Write;

use glossa_domain::error::Error;
use glossa_domain::value_objects::TruncationPolicy;
use glossa_infrastructure::config::loader::validate_app_config;
use glossa_infrastructure::config::{AppConfig, ConfigLoader, StopWordsSetting};
use glossa_providers::StopWords;

/// Helper to set env var
///
/// Each test uses its own prefix, so parallel tests never read each
/// other's variables.
fn set_env(key: &str, value: &str) {
    // SAFETY: keys are unique per test
    unsafe {
        env::set_var(key, value);
    }
}

fn remove_env(key: &str) {
    // SAFETY: keys are unique per test
    unsafe {
        env::remove_var(key);
    }
}

fn write_config(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .expect("temp file");
    file.write_all(contents.as_bytes()).expect("write config");
    file
}

#[test]
fn test_defaults_are_valid() {
    let config = AppConfig::default();
    validate_app_config(&config).expect("defaults validate");

    assert_eq!(config.logging.level, "info");
    assert!(!config.similarity.lexical.autojunk);
    assert_eq!(
        config.similarity.vector_space.stop_words,
        StopWordsSetting::Named("english".to_string())
    );
    assert_eq!(config.similarity.semantic.model, "all-MiniLM-L6-v2");
    assert_eq!(config.similarity.semantic.max_input_tokens, 256);
    assert_eq!(config.similarity.semantic.truncation, TruncationPolicy::Truncate);
    assert_eq!(config.translation.endpoint, "https://openrouter.ai/api/v1");
    assert_eq!(config.translation.default_model, "openai/gpt-4o-mini");
    assert_eq!(config.translation.timeout_secs, 30);
}

#[test]
fn test_toml_file_overrides_defaults() {
    let file = write_config(
        r#"
[logging]
level = "debug"

[similarity.lexical]
autojunk = true

[similarity.vector_space]
stop_words = ["foo", "bar"]

[similarity.semantic]
provider = "null"
model = "null-mini"
truncation = "reject"

[translation]
default_model = "anthropic/claude-3-haiku"
timeout_secs = 90
"#,
    );

    let config = ConfigLoader::new()
        .with_env_prefix("GLOSSA_TEST_TOML")
        .with_config_path(file.path())
        .load()
        .expect("config loads");

    assert_eq!(config.logging.level, "debug");
    assert!(config.similarity.lexical.autojunk);
    assert_eq!(
        config.similarity.vector_space.stop_words,
        StopWordsSetting::List(vec!["foo".to_string(), "bar".to_string()])
    );
    assert_eq!(config.similarity.semantic.provider, "null");
    assert_eq!(config.similarity.semantic.truncation, TruncationPolicy::Reject);
    // Untouched keys keep their defaults
    assert_eq!(config.similarity.semantic.max_input_tokens, 256);
    assert_eq!(config.translation.default_model, "anthropic/claude-3-haiku");
    assert_eq!(config.translation.timeout_secs, 90);
    assert_eq!(config.translation.endpoint, "https://openrouter.ai/api/v1");
}

#[test]
fn test_env_overrides_file() {
    let file = write_config("[translation]\ndefault_model = \"from-file\"\n");
    set_env("GLOSSA_TEST_ENV_TRANSLATION__DEFAULT_MODEL", "from-env");
    set_env("GLOSSA_TEST_ENV_SIMILARITY__SEMANTIC__MAX_INPUT_TOKENS", "64");
    set_env("GLOSSA_TEST_ENV_SIMILARITY__VECTOR_SPACE__STOP_WORDS", "none");

    let config = ConfigLoader::new()
        .with_env_prefix("GLOSSA_TEST_ENV")
        .with_config_path(file.path())
        .load();

    remove_env("GLOSSA_TEST_ENV_TRANSLATION__DEFAULT_MODEL");
    remove_env("GLOSSA_TEST_ENV_SIMILARITY__SEMANTIC__MAX_INPUT_TOKENS");
    remove_env("GLOSSA_TEST_ENV_SIMILARITY__VECTOR_SPACE__STOP_WORDS");

    let config = config.expect("config loads");
    assert_eq!(config.translation.default_model, "from-env");
    assert_eq!(config.similarity.semantic.max_input_tokens, 64);
    assert_eq!(
        config.similarity.vector_space.stop_words.to_stop_words().unwrap(),
        StopWords::None
    );
}

#[test]
fn test_source_path_prefers_explicit_file() {
    let file = write_config("[cache]\nmax_models = 2\n");
    let loader = ConfigLoader::new().with_config_path(file.path());

    assert_eq!(loader.source_path().as_deref(), Some(file.path()));
    assert_eq!(loader.load().unwrap().cache.max_models, 2);
}

#[test]
fn test_missing_explicit_file_is_error() {
    let err = ConfigLoader::new()
        .with_config_path("/definitely/not/here/glossa.toml")
        .load()
        .unwrap_err();
    assert!(matches!(err, Error::Config { .. }), "got {err:?}");
}

#[test]
fn test_zero_values_rejected() {
    let mut config = AppConfig::default();
    config.similarity.semantic.max_input_tokens = 0;
    assert!(validate_app_config(&config).is_err());

    let mut config = AppConfig::default();
    config.translation.timeout_secs = 0;
    assert!(validate_app_config(&config).is_err());

    let mut config = AppConfig::default();
    config.cache.max_models = 0;
    assert!(validate_app_config(&config).is_err());

    let mut config = AppConfig::default();
    config.translation.default_model = String::new();
    assert!(validate_app_config(&config).is_err());
}

#[test]
fn test_invalid_log_level_rejected() {
    let mut config = AppConfig::default();
    config.logging.level = "loud".to_string();
    let err = validate_app_config(&config).unwrap_err();
    assert!(err.to_string().contains("Invalid log level"));
}

#[test]
fn test_unknown_stop_word_list_rejected() {
    let mut config = AppConfig::default();
    config.similarity.vector_space.stop_words = StopWordsSetting::Named("klingon".to_string());
    assert!(validate_app_config(&config).is_err());
}

#[test]
fn test_save_and_reload_round_trip() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("glossa.toml");

    let mut config = AppConfig::default();
    config.similarity.semantic.provider = "null".to_string();
    config.cache.max_models = 2;

    let loader = ConfigLoader::new().with_env_prefix("GLOSSA_TEST_SAVE");
    loader.save_to_file(&config, &path).expect("config saves");

    let reloaded = ConfigLoader::new()
        .with_env_prefix("GLOSSA_TEST_SAVE")
        .with_config_path(&path)
        .load()
        .expect("config reloads");
    assert_eq!(reloaded.similarity.semantic.provider, "null");
    assert_eq!(reloaded.cache.max_models, 2);
}

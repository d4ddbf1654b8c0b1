//! Startup tests

use std::io::Write;
use std::path::Path;

use glossa::cli::startup;

#[test]
fn test_startup_wires_configured_providers() {
    let mut file = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .expect("temp file");
    file.write_all(
        br#"
[logging]
level = "warn"

[similarity.semantic]
provider = "null"
model = "null-mini"

[translation]
provider = "null"
"#,
    )
    .expect("write config");

    let context = startup(Some(file.path())).unwrap();

    assert_eq!(context.config().logging.level, "warn");
    assert_eq!(context.config().similarity.semantic.model, "null-mini");
    assert_eq!(context.translator().unwrap().provider_name(), "null");
}

#[test]
fn test_startup_fails_on_missing_config() {
    let err = startup(Some(Path::new("/definitely/not/here/glossa.toml")))
        .err()
        .expect("missing file is an error");
    assert!(err.to_string().contains("Configuration file not found"));
}

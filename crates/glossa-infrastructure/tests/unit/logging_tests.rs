//! Logging Tests

use std::io;
use std::path::Path;
use std::sync::{Arc, Mutex};

use glossa_infrastructure::config::LoggingConfig;
use glossa_infrastructure::logging::{init_logging, log_config_loaded, parse_log_level};
use tracing::Level;

/// In-memory log sink
#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl Captured {
    fn text(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for Captured {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn capture(f: impl FnOnce()) -> String {
    let captured = Captured::default();
    let writer = captured.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .finish();
    tracing::subscriber::with_default(subscriber, f);
    captured.text()
}

#[test]
fn test_parse_log_level() {
    assert_eq!(parse_log_level("trace").unwrap(), Level::TRACE);
    assert_eq!(parse_log_level("DEBUG").unwrap(), Level::DEBUG);
    assert_eq!(parse_log_level("info").unwrap(), Level::INFO);
    assert_eq!(parse_log_level("warning").unwrap(), Level::WARN);
    assert_eq!(parse_log_level("error").unwrap(), Level::ERROR);
    assert!(parse_log_level("verbose").is_err());
}

#[test]
fn test_init_logging_rejects_bad_level() {
    let config = LoggingConfig {
        level: "chatty".to_string(),
        ..LoggingConfig::default()
    };
    assert!(init_logging(&config).is_err());
}

#[test]
fn test_init_logging_with_file_output() {
    let dir = tempfile::tempdir().expect("temp dir");
    let config = LoggingConfig {
        level: "debug".to_string(),
        json_format: true,
        file_output: Some(dir.path().to_path_buf()),
    };

    // The first successful call installs the global subscriber; a second
    // call reports that one is already set.
    init_logging(&config).expect("first init succeeds");
    assert!(init_logging(&config).is_err());
}

#[test]
fn test_config_source_is_reported() {
    let output = capture(|| log_config_loaded(Some(Path::new("/etc/glossa/glossa.toml"))));
    assert!(output.contains("Configuration loaded from /etc/glossa/glossa.toml"), "{output}");

    let output = capture(|| log_config_loaded(None));
    assert!(output.contains("No configuration file found"), "{output}");
}

//! Error context tests

use std::io;

use glossa_domain::error::{Error, Result};
use glossa_infrastructure::error_ext::ErrorContext;

#[test]
fn test_io_context() {
    let io_error = io::Error::new(io::ErrorKind::NotFound, "file not found");

    let result: Result<()> = Err(io_error).io_context("failed to read file");

    match result {
        Err(Error::Io { message, source }) => {
            assert_eq!(message, "failed to read file: file not found");
            assert!(source.is_some());
        }
        other => panic!("Expected Io error, got {other:?}"),
    }
}

#[test]
fn test_config_context() {
    let parse_error = "x".parse::<u32>().unwrap_err();

    let result: Result<u32> = Err(parse_error).config_context("bad timeout");

    match result {
        Err(err @ Error::Configuration { .. }) => {
            assert!(err.to_string().starts_with("Configuration error: bad timeout: "));
            assert!(std::error::Error::source(&err).is_some());
        }
        other => panic!("Expected Configuration error, got {other:?}"),
    }
}

#[test]
fn test_ok_passes_through() {
    let ok: std::result::Result<u8, io::Error> = Ok(7);
    assert_eq!(ok.config_context("unused").unwrap(), 7);
}

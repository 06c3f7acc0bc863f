//! Error Extension Tests

use dpm_domain::error::{Error, Result};
use dpm_infrastructure::error_ext::{ErrorContext, infra};
use std::io;

#[test]
fn test_io_context() {
    let io_error = io::Error::new(io::ErrorKind::NotFound, "file not found");

    let result: Result<()> = Err(io_error).io_context("failed to read request");

    match result {
        Err(Error::Io { source, message }) => {
            assert_eq!(message, "failed to read request: file not found");
            assert!(source.is_some());
        }
        _ => panic!("Expected Io error"),
    }
}

#[test]
fn test_config_context() {
    let io_error = io::Error::other("bad value");

    let result: Result<()> = Err(io_error).config_context("failed to extract");
    assert!(matches!(result, Err(Error::Configuration { source: Some(_), .. })));
}

#[test]
fn test_ok_passes_through() {
    let result: std::result::Result<u8, io::Error> = Ok(7);
    assert_eq!(result.io_context("unused").unwrap(), 7);
}

#[test]
fn test_provider_registry_error_names_provider() {
    let error = infra::provider_registry_error("country", "boom".to_string());
    assert_eq!(
        error.to_string(),
        "Configuration error: Failed to create provider 'country': boom"
    );
}

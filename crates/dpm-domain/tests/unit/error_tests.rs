//! Unit tests for domain error types

use dpm_domain::Error;

#[test]
fn test_invalid_argument_error() {
    let error = Error::invalid_argument("negative weight");
    match error {
        Error::InvalidArgument { message } => assert_eq!(message, "negative weight"),
        _ => panic!("Expected InvalidArgument error"),
    }
}

#[test]
fn test_production_error_names_provider() {
    let error = Error::production("finnish-exchange", "not a Finnish stock");
    assert_eq!(
        error.to_string(),
        "Provider finnish-exchange failed: not a Finnish stock"
    );
}

#[test]
fn test_io_error_conversion() {
    let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
    let error: Error = io_error.into();
    assert!(matches!(error, Error::IoSimple { .. }));
    assert!(error.to_string().contains("missing"));
}

#[test]
fn test_json_error_conversion() {
    let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let error: Error = json_error.into();
    assert!(matches!(error, Error::Json { .. }));
}

#[test]
fn test_configuration_error_display() {
    let error = Error::configuration("Server port must be non-zero");
    assert!(matches!(error, Error::Configuration { source: None, .. }));
    assert_eq!(
        error.to_string(),
        "Configuration error: Server port must be non-zero"
    );
}

#[test]
fn test_infrastructure_error_has_no_source() {
    let error = Error::infrastructure("subscriber already installed");
    match &error {
        Error::Infrastructure { message, source } => {
            assert_eq!(message, "subscriber already installed");
            assert!(source.is_none());
        }
        _ => panic!("Expected Infrastructure error"),
    }
    assert_eq!(
        error.to_string(),
        "Infrastructure error: subscriber already installed"
    );
}

//! One-shot request file tests

use dpm_domain::error::Error;
use dpm_domain::value_objects::Product;
use dpm_infrastructure::config::AppConfig;
use dpm_infrastructure::di::init_app;
use dpm_server::run_request;
use std::io::Write;

#[tokio::test]
async fn test_request_file_is_resolved() {
    let context = init_app(AppConfig::default()).await.unwrap();
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{
            "requestedDataProducts": {{
                "se.iqesolutions.datamanager.product.impl.Country": {{ "maxTime": 1.0 }}
            }},
            "alreadyAvailableDataProducts": [
                {{ "@class": "se.iqesolutions.datamanager.product.impl.TickerSymbol", "symbol": "AAPL" }}
            ]
        }}"#
    )
    .unwrap();

    let response = run_request(&context, file.path()).await.unwrap();

    assert!(response.is_complete());
    assert_eq!(response.find(Product::as_country).unwrap().name, "USA");
}

#[tokio::test]
async fn test_missing_request_file_is_io_error() {
    let context = init_app(AppConfig::default()).await.unwrap();
    let dir = tempfile::tempdir().unwrap();

    let error = run_request(&context, &dir.path().join("absent.json"))
        .await
        .unwrap_err();
    assert!(matches!(error, Error::Io { .. }));
}

#[tokio::test]
async fn test_malformed_request_file_is_json_error() {
    let context = init_app(AppConfig::default()).await.unwrap();
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "not json").unwrap();

    let error = run_request(&context, file.path()).await.unwrap_err();
    assert!(matches!(error, Error::Json { .. }));
}

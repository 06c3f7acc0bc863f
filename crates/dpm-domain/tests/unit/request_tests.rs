//! Unit tests for request and response shapes

use dpm_domain::Error;
use dpm_domain::constants::{COUNTRY, STOCK_SCORE, TICKER_SYMBOL};
use dpm_domain::value_objects::{
    Country, DataRequest, DataResponse, Product, ProductConstraint, TickerSymbol,
};
use serde_json::json;

#[test]
fn test_request_deserializes_from_wire_shape() {
    let request: DataRequest = serde_json::from_value(json!({
        "requestedDataProducts": {
            STOCK_SCORE: {
                "acceptableMethods": ["CALCULATION"],
                "maxCost": 1.0,
                "maxTime": 5.0,
                "costWeight": 0.5,
                "timeWeight": 0.5
            }
        },
        "alreadyAvailableDataProducts": [
            { "@class": TICKER_SYMBOL, "symbol": "NOK" }
        ]
    }))
    .unwrap();

    let constraint = &request.requested_data_products[STOCK_SCORE];
    assert_eq!(constraint.max_cost, 1.0);
    assert_eq!(constraint.max_time, 5.0);
    assert_eq!(
        request.already_available_data_products,
        vec![Product::TickerSymbol(TickerSymbol {
            symbol: "NOK".into()
        })]
    );
}

#[test]
fn test_request_with_unknown_discriminator_is_rejected() {
    let result: Result<DataRequest, _> = serde_json::from_value(json!({
        "requestedDataProducts": {},
        "alreadyAvailableDataProducts": [
            { "@class": "com.example.Unknown", "symbol": "NOK" }
        ]
    }));
    assert!(result.is_err());
}

#[test]
fn test_validation_names_offending_identifier() {
    let request = DataRequest::new()
        .request(COUNTRY, ProductConstraint::default())
        .request(STOCK_SCORE, ProductConstraint::default().with_max_cost(-1.0));

    match request.validate_constraints() {
        Err(Error::InvalidArgument { message }) => assert!(message.contains(STOCK_SCORE)),
        other => panic!("Expected InvalidArgument, got {other:?}"),
    }
}

#[test]
fn test_empty_request_is_valid() {
    assert!(DataRequest::new().validate_constraints().is_ok());
}

#[test]
fn test_response_serializes_camel_case() {
    let mut response = DataResponse::default();
    response
        .collected_data_products
        .push(Product::Country(Country {
            name: "Finland".into(),
        }));
    response
        .failed_data_products
        .insert(STOCK_SCORE.into(), "No provider available or dependencies not satisfied".into());

    let value = serde_json::to_value(&response).unwrap();
    assert_eq!(value["collectedDataProducts"][0]["@class"], json!(COUNTRY));
    assert_eq!(
        value["failedDataProducts"][STOCK_SCORE],
        json!("No provider available or dependencies not satisfied")
    );
    assert!(!response.is_complete());
    assert_eq!(
        response.find(Product::as_country).map(|c| c.name.as_str()),
        Some("Finland")
    );
}

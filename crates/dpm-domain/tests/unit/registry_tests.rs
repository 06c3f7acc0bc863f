//! Unit tests for the product type registry

use dpm_domain::constants::{NON_PRODUCT_TYPES, STOCK_SCORE, TICKER_SYMBOL};
use dpm_domain::registry::{ProductTypeRegistry, TypeKind};
use dpm_domain::value_objects::{FailureReason, ProductType};

#[test]
fn test_lookup_known_product() {
    let registry = ProductTypeRegistry::standard();
    let product_type = registry.lookup(STOCK_SCORE).unwrap();
    assert_eq!(product_type, ProductType::from_static(STOCK_SCORE));
}

#[test]
fn test_lookup_unknown_identifier() {
    let registry = ProductTypeRegistry::standard();
    let reason = registry.lookup("com.example.Missing").unwrap_err();
    assert_eq!(reason, FailureReason::unknown_type("com.example.Missing"));
    assert_eq!(reason.to_string(), "Product type com.example.Missing not found");
}

#[test]
fn test_lookup_non_product_identifier() {
    let registry = ProductTypeRegistry::standard();
    for identifier in NON_PRODUCT_TYPES {
        let reason = registry.lookup(identifier).unwrap_err();
        assert_eq!(reason, FailureReason::invalid_type(*identifier));
    }
}

#[test]
fn test_product_types_excludes_non_products() {
    let types = ProductTypeRegistry::standard().product_types();
    assert_eq!(types.len(), 6);
    assert!(types.contains(&ProductType::from_static(TICKER_SYMBOL)));
    for identifier in NON_PRODUCT_TYPES {
        assert!(!types.iter().any(|t| t.as_str() == *identifier));
    }
}

#[test]
fn test_product_types_are_sorted() {
    let types = ProductTypeRegistry::standard().product_types();
    let mut sorted = types.clone();
    sorted.sort();
    assert_eq!(types, sorted);
}

#[test]
fn test_custom_registration() {
    let registry = ProductTypeRegistry::new()
        .with("x.Thing", TypeKind::Product)
        .with("x.Envelope", TypeKind::NonProduct);
    assert!(registry.lookup("x.Thing").is_ok());
    assert!(matches!(
        registry.lookup("x.Envelope"),
        Err(FailureReason::InvalidType { .. })
    ));
    assert_eq!(registry.product_types(), vec![ProductType::new("x.Thing")]);
}

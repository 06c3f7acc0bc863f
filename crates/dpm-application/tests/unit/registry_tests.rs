//! Tests for the product provider registry and catalog
//!
//! Uses `extern crate dpm_providers` to force linkme registration of the
//! real providers.

// Force linkme registration of all providers from dpm-providers
extern crate dpm_providers;

use dpm_application::ports::registry::{
    ProductProviderConfig, ProviderCatalog, list_product_providers, resolve_product_provider,
};
use dpm_domain::constants::{COUNTRY, REAL_TIME_SHARE_PRICE, TICKER_SYMBOL};
use dpm_domain::value_objects::ProductType;

fn catalog(names: &[&str]) -> ProviderCatalog {
    ProviderCatalog::new(
        names
            .iter()
            .map(|name| resolve_product_provider(&ProductProviderConfig::new(*name)).unwrap())
            .collect(),
    )
}

#[test]
fn test_list_providers_is_sorted_and_complete() {
    let providers = list_product_providers();
    assert_eq!(providers.len(), 6);
    assert!(providers.windows(2).all(|w| w[0].0 < w[1].0));
    assert!(providers.iter().all(|(_, description)| !description.is_empty()));
}

#[test]
fn test_resolve_unknown_provider_lists_available() {
    let error = resolve_product_provider(&ProductProviderConfig::new("bloomberg"))
        .err()
        .unwrap();
    assert!(error.contains("bloomberg"));
    assert!(error.contains("real-time-feed"));
}

#[test]
fn test_candidates_follow_catalog_order() {
    let catalog = catalog(&["real-time-feed", "country", "finnish-exchange"]);
    let names: Vec<String> = catalog
        .candidates_for(&ProductType::from_static(REAL_TIME_SHARE_PRICE))
        .iter()
        .map(|p| p.provider_name().to_string())
        .collect();
    assert_eq!(names, vec!["real-time-feed", "finnish-exchange"]);
    assert!(
        catalog
            .candidates_for(&ProductType::from_static(TICKER_SYMBOL))
            .is_empty()
    );
}

#[test]
fn test_descriptors_expose_declared_capabilities() {
    let descriptors = catalog(&["country"]).describe();
    assert_eq!(descriptors.len(), 1);
    let capability = &descriptors[0].products[0];
    assert_eq!(capability.product_type, ProductType::from_static(COUNTRY));
    assert_eq!(
        capability.dependencies,
        vec![ProductType::from_static(TICKER_SYMBOL)]
    );
    assert_eq!(capability.methods, vec!["CONFIGURATION"]);

    let json = serde_json::to_value(&descriptors[0]).unwrap();
    assert_eq!(json["name"], "country");
    assert_eq!(json["products"][0]["expectedTime"], 0.1);
}

//! Country of listing provider

use std::sync::Arc;

use async_trait::async_trait;
use dpm_application::ports::registry::{
    PRODUCT_PROVIDERS, ProductProviderConfig, ProductProviderEntry,
};
use dpm_domain::constants::{COUNTRY, TICKER_SYMBOL};
use dpm_domain::error::Result;
use dpm_domain::ports::ProductProvider;
use dpm_domain::value_objects::{
    AvailableProducts, Country, Product, ProductConstraint, ProductType,
};

use crate::constants::{
    METHOD_CONFIGURATION, PROVIDER_COUNTRY, TICKER_COUNTRIES, UNKNOWN_COUNTRY,
};
use crate::utils::{AvailableProductsExt, ProductProfile};

const PROFILE: ProductProfile = ProductProfile {
    product_type: COUNTRY,
    dependencies: &[TICKER_SYMBOL],
    methods: &[METHOD_CONFIGURATION],
    expected_cost: 0.0,
    expected_time: 0.1,
};

/// Looks up the country where a ticker is listed in a static table
#[derive(Debug, Clone, Default)]
pub struct CountryProvider;

impl CountryProvider {
    pub fn new() -> Self {
        Self
    }

    /// Country of listing, or `Unknown` for tickers missing from the table
    pub fn country_of(symbol: &str) -> &'static str {
        TICKER_COUNTRIES
            .iter()
            .find(|(ticker, _)| *ticker == symbol)
            .map_or(UNKNOWN_COUNTRY, |(_, country)| *country)
    }
}

#[async_trait]
impl ProductProvider for CountryProvider {
    fn provider_name(&self) -> &str {
        PROVIDER_COUNTRY
    }

    fn supported_types(&self) -> Vec<ProductType> {
        PROFILE.supported_types()
    }

    fn dependencies_for(&self, product_type: &ProductType) -> Vec<ProductType> {
        PROFILE.dependencies_for(product_type)
    }

    fn methods_for(&self, product_type: &ProductType) -> Vec<String> {
        PROFILE.methods_for(product_type)
    }

    fn expected_cost(&self, product_type: &ProductType) -> f64 {
        PROFILE.expected_cost(product_type)
    }

    fn expected_time(&self, product_type: &ProductType) -> f64 {
        PROFILE.expected_time(product_type)
    }

    async fn produce(
        &self,
        product_type: &ProductType,
        available: &AvailableProducts,
        _constraint: Option<&ProductConstraint>,
    ) -> Result<Product> {
        PROFILE.ensure_covers(PROVIDER_COUNTRY, product_type)?;
        let ticker =
            available.require(PROVIDER_COUNTRY, TICKER_SYMBOL, Product::as_ticker_symbol)?;
        Ok(Product::Country(Country {
            name: Self::country_of(&ticker.symbol).to_string(),
        }))
    }
}

// ============================================================================
// Auto-registration via linkme
// ============================================================================

#[linkme::distributed_slice(PRODUCT_PROVIDERS)]
static COUNTRY_PROVIDER: ProductProviderEntry = ProductProviderEntry {
    name: PROVIDER_COUNTRY,
    description: "Country of listing from a static ticker table",
    factory: |_config: &ProductProviderConfig| Ok(Arc::new(CountryProvider::new())),
};

//! Finnish exchange feed
//!
//! Cheaper than the general feed but only quotes shares listed in Finland,
//! so it needs the country of listing before it can answer.

use std::sync::Arc;

use async_trait::async_trait;
use dpm_application::ports::registry::{
    PRODUCT_PROVIDERS, ProductProviderConfig, ProductProviderEntry,
};
use dpm_domain::constants::{COUNTRY, REAL_TIME_SHARE_PRICE, TICKER_SYMBOL};
use dpm_domain::error::{Error, Result};
use dpm_domain::ports::ProductProvider;
use dpm_domain::value_objects::{
    AvailableProducts, Product, ProductConstraint, ProductType, RealTimeSharePrice,
};
use tracing::debug;

use crate::constants::{
    FINLAND, METHOD_REAL_TIME_FEED, PLACEHOLDER_FINNISH_PRICE, PROVIDER_FINNISH_EXCHANGE,
};
use crate::utils::{AvailableProductsExt, ProductProfile};

const PROFILE: ProductProfile = ProductProfile {
    product_type: REAL_TIME_SHARE_PRICE,
    dependencies: &[TICKER_SYMBOL, COUNTRY],
    methods: &[METHOD_REAL_TIME_FEED],
    expected_cost: 0.001,
    expected_time: 2.0,
};

/// Real-time share prices for Finnish shares
#[derive(Debug, Clone, Default)]
pub struct FinnishExchangeProvider;

impl FinnishExchangeProvider {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ProductProvider for FinnishExchangeProvider {
    fn provider_name(&self) -> &str {
        PROVIDER_FINNISH_EXCHANGE
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
        PROFILE.ensure_covers(PROVIDER_FINNISH_EXCHANGE, product_type)?;
        let ticker = available.require(
            PROVIDER_FINNISH_EXCHANGE,
            TICKER_SYMBOL,
            Product::as_ticker_symbol,
        )?;
        let country =
            available.require(PROVIDER_FINNISH_EXCHANGE, COUNTRY, Product::as_country)?;

        if !country.name.eq_ignore_ascii_case(FINLAND) {
            return Err(Error::production(
                PROVIDER_FINNISH_EXCHANGE,
                format!(
                    "only Finnish shares are supported, {} is listed in {}",
                    ticker.symbol, country.name
                ),
            ));
        }

        debug!(
            provider = PROVIDER_FINNISH_EXCHANGE,
            ticker = %ticker.symbol,
            "Fetching share price"
        );
        Ok(Product::RealTimeSharePrice(RealTimeSharePrice {
            ticker_symbol: ticker.symbol.clone(),
            price: PLACEHOLDER_FINNISH_PRICE,
        }))
    }
}

// ============================================================================
// Auto-registration via linkme
// ============================================================================

#[linkme::distributed_slice(PRODUCT_PROVIDERS)]
static FINNISH_EXCHANGE_PROVIDER: ProductProviderEntry = ProductProviderEntry {
    name: PROVIDER_FINNISH_EXCHANGE,
    description: "Real-time share prices for shares listed in Finland",
    factory: |_config: &ProductProviderConfig| Ok(Arc::new(FinnishExchangeProvider::new())),
};

//! General real-time market data feed

use std::sync::Arc;

use async_trait::async_trait;
use dpm_application::ports::registry::{
    PRODUCT_PROVIDERS, ProductProviderConfig, ProductProviderEntry,
};
use dpm_domain::constants::{REAL_TIME_SHARE_PRICE, TICKER_SYMBOL};
use dpm_domain::error::Result;
use dpm_domain::ports::ProductProvider;
use dpm_domain::value_objects::{
    AvailableProducts, Product, ProductConstraint, ProductType, RealTimeSharePrice,
};
use tracing::debug;

use crate::constants::{METHOD_REAL_TIME_FEED, PLACEHOLDER_FEED_PRICE, PROVIDER_REAL_TIME_FEED};
use crate::utils::{AvailableProductsExt, ProductProfile};

const PROFILE: ProductProfile = ProductProfile {
    product_type: REAL_TIME_SHARE_PRICE,
    dependencies: &[TICKER_SYMBOL],
    methods: &[METHOD_REAL_TIME_FEED],
    expected_cost: 0.5,
    expected_time: 1.0,
};

/// Real-time share prices for any ticker
#[derive(Debug, Clone, Default)]
pub struct RealTimeFeedProvider;

impl RealTimeFeedProvider {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ProductProvider for RealTimeFeedProvider {
    fn provider_name(&self) -> &str {
        PROVIDER_REAL_TIME_FEED
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
        PROFILE.ensure_covers(PROVIDER_REAL_TIME_FEED, product_type)?;
        let ticker = available.require(
            PROVIDER_REAL_TIME_FEED,
            TICKER_SYMBOL,
            Product::as_ticker_symbol,
        )?;
        debug!(provider = PROVIDER_REAL_TIME_FEED, ticker = %ticker.symbol, "Fetching share price");
        Ok(Product::RealTimeSharePrice(RealTimeSharePrice {
            ticker_symbol: ticker.symbol.clone(),
            price: PLACEHOLDER_FEED_PRICE,
        }))
    }
}

// ============================================================================
// Auto-registration via linkme
// ============================================================================

#[linkme::distributed_slice(PRODUCT_PROVIDERS)]
static REAL_TIME_FEED_PROVIDER: ProductProviderEntry = ProductProviderEntry {
    name: PROVIDER_REAL_TIME_FEED,
    description: "Real-time share prices from a general market data feed",
    factory: |_config: &ProductProviderConfig| Ok(Arc::new(RealTimeFeedProvider::new())),
};

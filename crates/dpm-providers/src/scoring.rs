//! Stock scoring provider
//!
//! Scores a share by its price to earnings ratio, capped at the threshold
//! published by the configuration product.

use std::sync::Arc;

use async_trait::async_trait;
use dpm_application::ports::registry::{
    PRODUCT_PROVIDERS, ProductProviderConfig, ProductProviderEntry,
};
use dpm_domain::constants::{
    CONFIGURATION, COUNTRY, DEFAULT_STOCK_SCORE_THRESHOLD, LAST_REPORTED_EARNINGS_PER_SHARE,
    REAL_TIME_SHARE_PRICE, STOCK_SCORE, STOCK_SCORE_THRESHOLD_KEY,
};
use dpm_domain::error::Result;
use dpm_domain::ports::ProductProvider;
use dpm_domain::value_objects::{
    AvailableProducts, Product, ProductConstraint, ProductType, StockScore,
};
use tracing::debug;

use crate::constants::{METHOD_CALCULATION, PROVIDER_STOCK_SCORING};
use crate::utils::{AvailableProductsExt, ProductProfile};

const PROFILE: ProductProfile = ProductProfile {
    product_type: STOCK_SCORE,
    dependencies: &[
        REAL_TIME_SHARE_PRICE,
        LAST_REPORTED_EARNINGS_PER_SHARE,
        CONFIGURATION,
        COUNTRY,
    ],
    methods: &[METHOD_CALCULATION],
    expected_cost: 0.0,
    expected_time: 0.5,
};

/// Stock scoring provider
#[derive(Debug, Clone, Default)]
pub struct StockScoringProvider;

impl StockScoringProvider {
    pub fn new() -> Self {
        Self
    }

    /// `price / eps`, capped at `threshold`
    ///
    /// Zero earnings divide to infinity, which the cap turns into the
    /// threshold itself.
    pub fn score(price: f64, earnings_per_share: f64, threshold: f64) -> f64 {
        (price / earnings_per_share).min(threshold)
    }
}

#[async_trait]
impl ProductProvider for StockScoringProvider {
    fn provider_name(&self) -> &str {
        PROVIDER_STOCK_SCORING
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
        PROFILE.ensure_covers(PROVIDER_STOCK_SCORING, product_type)?;
        let price = available.require(
            PROVIDER_STOCK_SCORING,
            REAL_TIME_SHARE_PRICE,
            Product::as_real_time_share_price,
        )?;
        let earnings = available.require(
            PROVIDER_STOCK_SCORING,
            LAST_REPORTED_EARNINGS_PER_SHARE,
            Product::as_last_reported_earnings_per_share,
        )?;
        let configuration =
            available.require(PROVIDER_STOCK_SCORING, CONFIGURATION, Product::as_configuration)?;
        available.require(PROVIDER_STOCK_SCORING, COUNTRY, Product::as_country)?;

        let threshold = configuration
            .number(STOCK_SCORE_THRESHOLD_KEY)
            .unwrap_or(DEFAULT_STOCK_SCORE_THRESHOLD);
        let score = Self::score(price.price, earnings.earnings_per_share, threshold);

        debug!(
            provider = PROVIDER_STOCK_SCORING,
            ticker = %price.ticker_symbol,
            score,
            "Scored share"
        );
        Ok(Product::StockScore(StockScore {
            ticker_symbol: price.ticker_symbol.clone(),
            score,
        }))
    }
}

// ============================================================================
// Auto-registration via linkme
// ============================================================================

#[linkme::distributed_slice(PRODUCT_PROVIDERS)]
static STOCK_SCORING_PROVIDER: ProductProviderEntry = ProductProviderEntry {
    name: PROVIDER_STOCK_SCORING,
    description: "Price to earnings score capped at the configured threshold",
    factory: |_config: &ProductProviderConfig| Ok(Arc::new(StockScoringProvider::new())),
};

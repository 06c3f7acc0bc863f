//! Earnings report provider

use std::sync::Arc;

use async_trait::async_trait;
use dpm_application::ports::registry::{
    PRODUCT_PROVIDERS, ProductProviderConfig, ProductProviderEntry,
};
use dpm_domain::constants::{LAST_REPORTED_EARNINGS_PER_SHARE, TICKER_SYMBOL};
use dpm_domain::error::Result;
use dpm_domain::ports::ProductProvider;
use dpm_domain::value_objects::{
    AvailableProducts, LastReportedEarningsPerShare, Product, ProductConstraint, ProductType,
};
use tracing::debug;

use crate::constants::{
    METHOD_FINANCIAL_REPORT, PLACEHOLDER_EARNINGS_PER_SHARE, PROVIDER_EARNINGS,
};
use crate::utils::{AvailableProductsExt, ProductProfile};

const PROFILE: ProductProfile = ProductProfile {
    product_type: LAST_REPORTED_EARNINGS_PER_SHARE,
    dependencies: &[TICKER_SYMBOL],
    methods: &[METHOD_FINANCIAL_REPORT],
    expected_cost: 0.05,
    expected_time: 2.0,
};

/// Last reported earnings per share from financial reports
///
/// Stands in for a financial report service and answers with a fixed
/// placeholder figure.
#[derive(Debug, Clone, Default)]
pub struct EarningsProvider;

impl EarningsProvider {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ProductProvider for EarningsProvider {
    fn provider_name(&self) -> &str {
        PROVIDER_EARNINGS
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
        PROFILE.ensure_covers(PROVIDER_EARNINGS, product_type)?;
        let ticker =
            available.require(PROVIDER_EARNINGS, TICKER_SYMBOL, Product::as_ticker_symbol)?;
        debug!(provider = PROVIDER_EARNINGS, ticker = %ticker.symbol, "Fetching earnings report");
        Ok(Product::LastReportedEarningsPerShare(
            LastReportedEarningsPerShare {
                ticker_symbol: ticker.symbol.clone(),
                earnings_per_share: PLACEHOLDER_EARNINGS_PER_SHARE,
            },
        ))
    }
}

// ============================================================================
// Auto-registration via linkme
// ============================================================================

#[linkme::distributed_slice(PRODUCT_PROVIDERS)]
static EARNINGS_PROVIDER: ProductProviderEntry = ProductProviderEntry {
    name: PROVIDER_EARNINGS,
    description: "Last reported earnings per share from financial reports",
    factory: |_config: &ProductProviderConfig| Ok(Arc::new(EarningsProvider::new())),
};

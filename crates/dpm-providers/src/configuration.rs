//! Configuration provider
//!
//! Publishes runtime settings as a `Configuration` product so that other
//! providers can depend on them like on any other input.

use std::sync::Arc;

use async_trait::async_trait;
use dpm_application::ports::registry::{
    PRODUCT_PROVIDERS, ProductProviderConfig, ProductProviderEntry,
};
use dpm_domain::constants::{
    CONFIGURATION, DEFAULT_STOCK_SCORE_THRESHOLD, STOCK_SCORE_THRESHOLD_KEY,
};
use dpm_domain::error::Result;
use dpm_domain::ports::ProductProvider;
use dpm_domain::value_objects::{
    AvailableProducts, Configuration, Product, ProductConstraint, ProductType,
};
use serde_json::{Map, json};

use crate::constants::{METHOD_CONFIGURATION, PROVIDER_CONFIGURATION};
use crate::utils::ProductProfile;

const PROFILE: ProductProfile = ProductProfile {
    product_type: CONFIGURATION,
    dependencies: &[],
    methods: &[METHOD_CONFIGURATION],
    expected_cost: 0.0,
    expected_time: 0.0,
};

/// Configuration provider
///
/// # Example
///
/// ```rust
/// use dpm_providers::ConfigurationProvider;
///
/// let provider = ConfigurationProvider::new(7.5);
/// assert_eq!(provider.stock_score_threshold(), 7.5);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigurationProvider {
    stock_score_threshold: f64,
}

impl ConfigurationProvider {
    pub fn new(stock_score_threshold: f64) -> Self {
        Self {
            stock_score_threshold,
        }
    }

    /// Build from registry configuration, reading `stockScoreThreshold`
    pub fn from_config(config: &ProductProviderConfig) -> std::result::Result<Self, String> {
        let threshold = config
            .number_setting(STOCK_SCORE_THRESHOLD_KEY)?
            .unwrap_or(DEFAULT_STOCK_SCORE_THRESHOLD);
        Ok(Self::new(threshold))
    }

    pub fn stock_score_threshold(&self) -> f64 {
        self.stock_score_threshold
    }
}

impl Default for ConfigurationProvider {
    fn default() -> Self {
        Self::new(DEFAULT_STOCK_SCORE_THRESHOLD)
    }
}

#[async_trait]
impl ProductProvider for ConfigurationProvider {
    fn provider_name(&self) -> &str {
        PROVIDER_CONFIGURATION
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
        _available: &AvailableProducts,
        _constraint: Option<&ProductConstraint>,
    ) -> Result<Product> {
        PROFILE.ensure_covers(PROVIDER_CONFIGURATION, product_type)?;
        let mut settings = Map::new();
        settings.insert(
            STOCK_SCORE_THRESHOLD_KEY.to_string(),
            json!(self.stock_score_threshold),
        );
        Ok(Product::Configuration(Configuration { settings }))
    }
}

// ============================================================================
// Auto-registration via linkme
// ============================================================================

#[linkme::distributed_slice(PRODUCT_PROVIDERS)]
static CONFIGURATION_PROVIDER: ProductProviderEntry = ProductProviderEntry {
    name: PROVIDER_CONFIGURATION,
    description: "Runtime settings published as a Configuration product",
    factory: |config: &ProductProviderConfig| {
        Ok(Arc::new(ConfigurationProvider::from_config(config)?))
    },
};

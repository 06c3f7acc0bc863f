//! Static descriptor for single-product providers

use dpm_domain::error::{Error, Result};
use dpm_domain::value_objects::ProductType;

/// Declared capabilities of a provider producing exactly one type
///
/// Queries for any other type answer with no dependencies, no methods and
/// zero cost/time; the engine never asks, since the type is not listed as
/// supported.
#[derive(Debug, Clone, Copy)]
pub struct ProductProfile {
    pub product_type: &'static str,
    pub dependencies: &'static [&'static str],
    pub methods: &'static [&'static str],
    pub expected_cost: f64,
    pub expected_time: f64,
}

impl ProductProfile {
    pub fn covers(&self, product_type: &ProductType) -> bool {
        product_type.as_str() == self.product_type
    }

    pub fn supported_types(&self) -> Vec<ProductType> {
        vec![ProductType::from_static(self.product_type)]
    }

    pub fn dependencies_for(&self, product_type: &ProductType) -> Vec<ProductType> {
        if !self.covers(product_type) {
            return Vec::new();
        }
        self.dependencies
            .iter()
            .copied()
            .map(ProductType::from_static)
            .collect()
    }

    pub fn methods_for(&self, product_type: &ProductType) -> Vec<String> {
        if !self.covers(product_type) {
            return Vec::new();
        }
        self.methods.iter().map(|m| m.to_string()).collect()
    }

    pub fn expected_cost(&self, product_type: &ProductType) -> f64 {
        if self.covers(product_type) {
            self.expected_cost
        } else {
            0.0
        }
    }

    pub fn expected_time(&self, product_type: &ProductType) -> f64 {
        if self.covers(product_type) {
            self.expected_time
        } else {
            0.0
        }
    }

    /// Fail when asked to produce a type outside this profile
    pub fn ensure_covers(&self, provider: &str, product_type: &ProductType) -> Result<()> {
        if self.covers(product_type) {
            Ok(())
        } else {
            Err(Error::production(
                provider,
                format!("unsupported product type {product_type}"),
            ))
        }
    }
}

//! Request and response shapes exchanged with callers

use crate::error::{Error, Result};
use crate::value_objects::{Product, ProductConstraint};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use validator::Validate;

/// Batch request for data products
///
/// Maps product type identifiers to the constraint the caller attaches to
/// each, plus the products the caller already holds.
///
/// ## Example
///
/// ```rust
/// use dpm_domain::constants::REAL_TIME_SHARE_PRICE;
/// use dpm_domain::value_objects::{DataRequest, Product, ProductConstraint, TickerSymbol};
///
/// let request = DataRequest::new()
///     .request(REAL_TIME_SHARE_PRICE, ProductConstraint::default().with_max_cost(1.0))
///     .with_available(Product::TickerSymbol(TickerSymbol { symbol: "AAPL".into() }));
///
/// assert_eq!(request.requested_data_products.len(), 1);
/// assert!(request.validate_constraints().is_ok());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataRequest {
    /// Requested identifiers and their constraints
    #[serde(default)]
    pub requested_data_products: BTreeMap<String, ProductConstraint>,

    /// Products the caller already holds, in caller order
    #[serde(default)]
    pub already_available_data_products: Vec<Product>,
}

impl DataRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a requested identifier with its constraint
    pub fn request(mut self, identifier: impl Into<String>, constraint: ProductConstraint) -> Self {
        self.requested_data_products
            .insert(identifier.into(), constraint);
        self
    }

    /// Add an already-available product
    pub fn with_available(mut self, product: Product) -> Self {
        self.already_available_data_products.push(product);
        self
    }

    /// Check every constraint, naming the first identifier that violates one
    pub fn validate_constraints(&self) -> Result<()> {
        for (identifier, constraint) in &self.requested_data_products {
            constraint.validate().map_err(|errors| {
                Error::invalid_argument(format!(
                    "Invalid constraint for {identifier}: {errors}"
                ))
            })?;
        }
        Ok(())
    }
}

/// Outcome of a batch request
///
/// `collected_data_products` lists already-available products first, in
/// caller order, followed by newly produced ones in production order.
/// `failed_data_products` covers every type that did not end up collected.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataResponse {
    /// Available and produced products
    pub collected_data_products: Vec<Product>,
    /// Identifier to failure reason
    pub failed_data_products: BTreeMap<String, String>,
}

impl DataResponse {
    /// Whether every requested and dependency type was collected
    pub fn is_complete(&self) -> bool {
        self.failed_data_products.is_empty()
    }

    /// First collected product matching the predicate
    pub fn find<T>(&self, extract: impl Fn(&Product) -> Option<&T>) -> Option<&T> {
        self.collected_data_products.iter().find_map(extract)
    }
}

//! Product type registry
//!
//! Maps identifiers supplied by callers onto the known product types. The
//! registry also knows a few identifiers that name wire shapes which are
//! not products, so that requests naming them can be told apart from
//! requests naming something that does not exist at all.

use crate::constants::{
    CONFIGURATION, COUNTRY, LAST_REPORTED_EARNINGS_PER_SHARE, NON_PRODUCT_TYPES,
    REAL_TIME_SHARE_PRICE, STOCK_SCORE, TICKER_SYMBOL,
};
use crate::value_objects::{FailureReason, ProductType};
use std::collections::BTreeMap;

/// What a registered identifier names
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeKind {
    /// A data product that providers can produce
    Product,
    /// A known shape that cannot be requested as a product
    NonProduct,
}

/// Registry of known type identifiers
///
/// ## Example
///
/// ```rust
/// use dpm_domain::constants::TICKER_SYMBOL;
/// use dpm_domain::registry::ProductTypeRegistry;
///
/// let registry = ProductTypeRegistry::standard();
/// assert_eq!(registry.lookup(TICKER_SYMBOL).unwrap().as_str(), TICKER_SYMBOL);
/// assert!(registry.lookup("no.such.Type").is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ProductTypeRegistry {
    entries: BTreeMap<String, TypeKind>,
}

impl ProductTypeRegistry {
    /// Empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding every built-in product and non-product identifier
    pub fn standard() -> Self {
        let products = [
            TICKER_SYMBOL,
            COUNTRY,
            REAL_TIME_SHARE_PRICE,
            LAST_REPORTED_EARNINGS_PER_SHARE,
            CONFIGURATION,
            STOCK_SCORE,
        ];
        let registry = products
            .into_iter()
            .fold(Self::new(), |registry, id| {
                registry.with(id, TypeKind::Product)
            });
        NON_PRODUCT_TYPES
            .iter()
            .fold(registry, |registry, id| registry.with(*id, TypeKind::NonProduct))
    }

    /// Register an identifier
    pub fn with(mut self, identifier: impl Into<String>, kind: TypeKind) -> Self {
        self.entries.insert(identifier.into(), kind);
        self
    }

    /// Resolve an identifier to a product type
    ///
    /// Unknown identifiers fail with [`FailureReason::UnknownType`], known
    /// non-product identifiers with [`FailureReason::InvalidType`].
    pub fn lookup(&self, identifier: &str) -> Result<ProductType, FailureReason> {
        match self.entries.get(identifier) {
            Some(TypeKind::Product) => Ok(ProductType::new(identifier)),
            Some(TypeKind::NonProduct) => Err(FailureReason::invalid_type(identifier)),
            None => Err(FailureReason::unknown_type(identifier)),
        }
    }

    /// All registered product types, in identifier order
    pub fn product_types(&self) -> Vec<ProductType> {
        self.entries
            .iter()
            .filter(|(_, kind)| **kind == TypeKind::Product)
            .map(|(id, _)| ProductType::new(id.as_str()))
            .collect()
    }
}

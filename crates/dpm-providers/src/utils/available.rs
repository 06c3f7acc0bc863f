//! Available product lookup

use dpm_domain::error::{Error, Result};
use dpm_domain::value_objects::{AvailableProducts, Product, ProductType};

/// Typed access to the products collected so far in a request
///
/// # Example
///
/// ```rust
/// use dpm_domain::constants::COUNTRY;
/// use dpm_domain::value_objects::{AvailableProducts, Country, Product, ProductType};
/// use dpm_providers::utils::AvailableProductsExt;
///
/// let mut available = AvailableProducts::new();
/// available.insert(
///     ProductType::from_static(COUNTRY),
///     Product::Country(Country { name: "Finland".into() }),
/// );
/// let country = available.require("demo", COUNTRY, Product::as_country).unwrap();
/// assert_eq!(country.name, "Finland");
/// ```
pub trait AvailableProductsExt {
    /// Fetch a dependency, failing when it is absent or has the wrong shape
    fn require<T>(
        &self,
        provider: &str,
        identifier: &'static str,
        extract: fn(&Product) -> Option<&T>,
    ) -> Result<&T>;
}

impl AvailableProductsExt for AvailableProducts {
    fn require<T>(
        &self,
        provider: &str,
        identifier: &'static str,
        extract: fn(&Product) -> Option<&T>,
    ) -> Result<&T> {
        let product_type = ProductType::from_static(identifier);
        self.get(&product_type).and_then(extract).ok_or_else(|| {
            Error::production(
                provider,
                format!("{} dependency not satisfied", product_type.short_name()),
            )
        })
    }
}

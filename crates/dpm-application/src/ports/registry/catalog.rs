//! Provider Catalog
//!
//! The fixed, read-only, ordered list of providers the resolution engine
//! plans against. Built once at startup and shared across requests.

use std::sync::Arc;

use dpm_domain::ports::ProductProvider;
use dpm_domain::value_objects::ProductType;
use serde::Serialize;

/// Read-only provider list in registration order
///
/// Catalog order is the tie-breaker when two candidates rank equally.
#[derive(Clone, Default)]
pub struct ProviderCatalog {
    providers: Vec<Arc<dyn ProductProvider>>,
}

impl ProviderCatalog {
    pub fn new(providers: Vec<Arc<dyn ProductProvider>>) -> Self {
        Self { providers }
    }

    /// Providers in catalog order
    pub fn providers(&self) -> &[Arc<dyn ProductProvider>] {
        &self.providers
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }

    /// Providers supporting the type, in catalog order
    pub fn candidates_for(&self, product_type: &ProductType) -> Vec<Arc<dyn ProductProvider>> {
        self.providers
            .iter()
            .filter(|provider| provider.supports(product_type))
            .cloned()
            .collect()
    }

    /// Describe every provider for discovery endpoints
    pub fn describe(&self) -> Vec<ProviderDescriptor> {
        self.providers
            .iter()
            .map(|provider| ProviderDescriptor::of(provider.as_ref()))
            .collect()
    }
}

impl std::fmt::Debug for ProviderCatalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.providers.iter().map(|p| p.provider_name()))
            .finish()
    }
}

/// Static description of one provider
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderDescriptor {
    /// Registry name
    pub name: String,
    /// One entry per supported type
    pub products: Vec<ProductCapability>,
}

/// What a provider declares for one supported type
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductCapability {
    pub product_type: ProductType,
    pub dependencies: Vec<ProductType>,
    pub methods: Vec<String>,
    pub expected_cost: f64,
    pub expected_time: f64,
}

impl ProviderDescriptor {
    /// Snapshot the provider's declared capabilities
    pub fn of(provider: &dyn ProductProvider) -> Self {
        let products = provider
            .supported_types()
            .into_iter()
            .map(|product_type| ProductCapability {
                dependencies: provider.dependencies_for(&product_type),
                methods: provider.methods_for(&product_type),
                expected_cost: provider.expected_cost(&product_type),
                expected_time: provider.expected_time(&product_type),
                product_type,
            })
            .collect();
        Self {
            name: provider.provider_name().to_string(),
            products,
        }
    }
}

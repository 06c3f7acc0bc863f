//! Provider Resolver - builds the provider catalog from the linkme registry
//!
//! ```text
//! AppConfig.providers → Resolver → linkme registry → Vec<Arc<dyn ProductProvider>>
//! ```

use crate::config::AppConfig;
use dpm_application::ports::registry::{
    ProviderCatalog, list_product_providers, resolve_product_provider,
};
use dpm_domain::ports::ProductProvider;
use std::sync::Arc;

/// Resolver for product providers
///
/// `providers.enabled` fixes both the selection and the catalog order. When
/// it is empty every registered provider is loaded, ordered by name.
pub struct ProductProviderResolver {
    config: Arc<AppConfig>,
}

impl ProductProviderResolver {
    /// Create a new resolver with config
    pub fn new(config: Arc<AppConfig>) -> Self {
        Self { config }
    }

    /// Names to instantiate, in catalog order
    fn selected_names(&self) -> Vec<String> {
        if self.config.providers.enabled.is_empty() {
            list_product_providers()
                .into_iter()
                .map(|(name, _)| name.to_string())
                .collect()
        } else {
            self.config.providers.enabled.clone()
        }
    }

    /// Resolve one provider by name using its configured settings
    fn resolve(&self, name: &str) -> Result<Arc<dyn ProductProvider>, String> {
        resolve_product_provider(&self.config.providers.registry_config(name))
    }

    /// Resolve every selected provider into a catalog, failing on the first error
    pub fn resolve_catalog(&self) -> Result<ProviderCatalog, (String, String)> {
        let providers = self
            .selected_names()
            .into_iter()
            .map(|name| self.resolve(&name).map_err(|message| (name, message)))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(ProviderCatalog::new(providers))
    }
}

impl std::fmt::Debug for ProductProviderResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProductProviderResolver")
            .field("enabled", &self.config.providers.enabled)
            .finish()
    }
}

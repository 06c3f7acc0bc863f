//! Application bootstrap
//!
//! Builds the [`AppContext`] from an [`AppConfig`]:
//!
//! ```text
//! AppConfig → ProductProviderResolver → ProviderCatalog → DataCollectionService
//!                     ↑
//!                  linkme
//!                 registry
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! let context = init_app(AppConfig::default()).await?;
//! let response = context.collection().collect(request).await?;
//! ```

use crate::config::AppConfig;
use crate::di::provider_resolvers::ProductProviderResolver;
use crate::error_ext::infra;
use dpm_application::ports::registry::ProviderCatalog;
use dpm_application::ports::services::DataCollectionInterface;
use dpm_application::use_cases::DataCollectionService;
use dpm_domain::error::Result;
use dpm_domain::registry::ProductTypeRegistry;
use std::sync::Arc;
use tracing::info;

/// Application context: configuration plus the services built from it
pub struct AppContext {
    /// Application configuration
    pub config: Arc<AppConfig>,

    catalog: Arc<ProviderCatalog>,
    collection: Arc<dyn DataCollectionInterface>,
}

impl AppContext {
    /// Get the data collection service
    pub fn collection(&self) -> Arc<dyn DataCollectionInterface> {
        self.collection.clone()
    }

    /// Get the provider catalog
    pub fn catalog(&self) -> Arc<ProviderCatalog> {
        self.catalog.clone()
    }
}

impl std::fmt::Debug for AppContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppContext")
            .field("catalog", &self.catalog)
            .finish_non_exhaustive()
    }
}

/// Initialize the application context
///
/// Fails when an enabled provider is not registered or its factory rejects
/// the configured settings.
pub async fn init_app(config: AppConfig) -> Result<AppContext> {
    info!("Initializing application context");

    let config = Arc::new(config);
    let catalog = ProductProviderResolver::new(config.clone())
        .resolve_catalog()
        .map_err(|(name, message)| infra::provider_registry_error(&name, message))?;
    let catalog = Arc::new(catalog);

    info!(
        providers = catalog.len(),
        "Resolved product providers from registry"
    );

    let collection: Arc<dyn DataCollectionInterface> = Arc::new(DataCollectionService::new(
        Arc::new(ProductTypeRegistry::standard()),
        catalog.clone(),
    ));

    Ok(AppContext {
        config,
        catalog,
        collection,
    })
}

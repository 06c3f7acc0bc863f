//! Product Provider Registry
//!
//! Auto-registration system for product providers using linkme distributed
//! slices. Providers register themselves via `#[linkme::distributed_slice]`
//! and are discovered at startup.

use std::collections::HashMap;
use std::sync::Arc;

use dpm_domain::ports::ProductProvider;

/// Configuration for product provider creation
///
/// Carries the provider name plus free-form string settings taken from the
/// `providers.settings.<name>` configuration table. Providers use what they
/// need and ignore the rest.
#[derive(Debug, Clone, Default)]
pub struct ProductProviderConfig {
    /// Provider name (e.g., "earnings", "real-time-feed")
    pub provider: String,
    /// Provider-specific settings
    pub settings: HashMap<String, String>,
}

impl ProductProviderConfig {
    /// Create a new config with the given provider name
    pub fn new(provider: impl Into<String>) -> Self {
        Self {
            provider: provider.into(),
            ..Default::default()
        }
    }

    /// Add a setting
    pub fn with_setting(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.settings.insert(key.into(), value.into());
        self
    }

    /// Replace all settings
    pub fn with_settings(mut self, settings: HashMap<String, String>) -> Self {
        self.settings = settings;
        self
    }

    /// Read a setting
    pub fn setting(&self, key: &str) -> Option<&str> {
        self.settings.get(key).map(String::as_str)
    }

    /// Read a numeric setting, failing when present but not a number
    pub fn number_setting(&self, key: &str) -> Result<Option<f64>, String> {
        self.setting(key)
            .map(|raw| {
                raw.trim().parse::<f64>().map_err(|e| {
                    format!(
                        "Invalid value '{raw}' for setting '{key}' of provider '{}': {e}",
                        self.provider
                    )
                })
            })
            .transpose()
    }
}

/// Registry entry for product providers
///
/// Each provider implementation registers itself with this entry using
/// `#[linkme::distributed_slice(PRODUCT_PROVIDERS)]`. The entry contains
/// metadata and a factory function to create provider instances.
pub struct ProductProviderEntry {
    /// Unique provider name (e.g., "earnings", "finnish-exchange")
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Factory function to create provider instance
    pub factory: fn(&ProductProviderConfig) -> Result<Arc<dyn ProductProvider>, String>,
}

// Auto-collection via linkme distributed slices - providers submit entries at compile time
#[linkme::distributed_slice]
pub static PRODUCT_PROVIDERS: [ProductProviderEntry] = [..];

/// Resolve product provider by name from registry
///
/// # Returns
/// * `Ok(Arc<dyn ProductProvider>)` - Created provider instance
/// * `Err(String)` - Error message if provider not found or creation failed
pub fn resolve_product_provider(
    config: &ProductProviderConfig,
) -> Result<Arc<dyn ProductProvider>, String> {
    let provider_name = &config.provider;

    for entry in PRODUCT_PROVIDERS {
        if entry.name == provider_name {
            return (entry.factory)(config);
        }
    }

    let available: Vec<&str> = PRODUCT_PROVIDERS.iter().map(|e| e.name).collect();

    Err(format!(
        "Unknown product provider '{}'. Available providers: {:?}",
        provider_name, available
    ))
}

/// List all registered product providers
///
/// Returns (name, description) tuples sorted by name, so the listing does
/// not depend on link order.
pub fn list_product_providers() -> Vec<(&'static str, &'static str)> {
    let mut providers: Vec<_> = PRODUCT_PROVIDERS
        .iter()
        .map(|e| (e.name, e.description))
        .collect();
    providers.sort_unstable_by_key(|(name, _)| *name);
    providers
}

//! Application Ports
//!
//! - **registry/** - Provider registration and the read-only provider catalog
//! - **services** - Use case interfaces

/// Provider registry and catalog
pub mod registry;
/// Use case interfaces
pub mod services;

pub use registry::{
    PRODUCT_PROVIDERS, ProductCapability, ProductProviderConfig, ProductProviderEntry,
    ProviderCatalog, ProviderDescriptor, list_product_providers, resolve_product_provider,
};
pub use services::DataCollectionInterface;

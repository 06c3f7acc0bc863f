//! Provider Registry System
//!
//! Auto-registration infrastructure for product providers. Uses the
//! `linkme` crate for compile-time registration of providers that are
//! discovered and instantiated at startup, then frozen into a
//! [`ProviderCatalog`] handed to the resolution engine.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    Provider Registration Flow                    │
//! ├─────────────────────────────────────────────────────────────────┤
//! │                                                                 │
//! │  1. Provider defines:  #[linkme::distributed_slice(PROVIDERS)]  │
//! │                        static ENTRY: ProductProviderEntry = ... │
//! │                              ↓                                  │
//! │  2. Registry declares: #[linkme::distributed_slice]             │
//! │                        pub static PRODUCT_PROVIDERS: [..]       │
//! │                              ↓                                  │
//! │  3. Startup resolves:  resolve_product_provider(&config)        │
//! │                              ↓                                  │
//! │  4. Catalog freezes:   ProviderCatalog::new(providers)          │
//! │                                                                 │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ### Registering a Provider (in dpm-providers)
//!
//! ```ignore
//! use dpm_application::ports::registry::{PRODUCT_PROVIDERS, ProductProviderEntry};
//!
//! #[linkme::distributed_slice(PRODUCT_PROVIDERS)]
//! static EARNINGS_PROVIDER: ProductProviderEntry = ProductProviderEntry {
//!     name: "earnings",
//!     description: "Last reported earnings per share from financial reports",
//!     factory: |_config| Ok(Arc::new(EarningsProvider::new())),
//! };
//! ```
//!
//! ### Resolving a Provider (in dpm-infrastructure)
//!
//! ```ignore
//! use dpm_application::ports::registry::{ProductProviderConfig, resolve_product_provider};
//!
//! let provider = resolve_product_provider(&ProductProviderConfig::new("earnings"))?;
//! ```

pub mod catalog;
pub mod product;

pub use catalog::{ProductCapability, ProviderCatalog, ProviderDescriptor};
pub use product::{
    PRODUCT_PROVIDERS, ProductProviderConfig, ProductProviderEntry, list_product_providers,
    resolve_product_provider,
};

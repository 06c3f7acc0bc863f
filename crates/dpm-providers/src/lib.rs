//! # Data Product Manager - Provider Implementations
//!
//! User-selectable product providers. Each provider implements the
//! `ProductProvider` port from `dpm-domain` and registers itself in the
//! `PRODUCT_PROVIDERS` registry from `dpm-application`.
//!
//! ## Providers
//!
//! | Name | Produces | Depends on |
//! |------|----------|-----------|
//! | `configuration` | Configuration | - |
//! | `country` | Country | TickerSymbol |
//! | `earnings` | LastReportedEarningsPerShare | TickerSymbol |
//! | `real-time-feed` | RealTimeSharePrice | TickerSymbol |
//! | `finnish-exchange` | RealTimeSharePrice | TickerSymbol, Country |
//! | `stock-scoring` | StockScore | RealTimeSharePrice, LastReportedEarningsPerShare, Configuration, Country |
//!
//! ## Feature Flags
//!
//! Each provider can be enabled/disabled via feature flags:
//!
//! ```toml
//! [dependencies]
//! dpm-providers = { version = "0.1", default-features = false, features = ["provider-country"] }
//! ```

pub use dpm_domain::error::{Error, Result};
pub use dpm_domain::ports::ProductProvider;

/// Provider-specific constants
pub mod constants;

/// Shared utilities for provider implementations
pub mod utils;

/// Configuration product provider
#[cfg(feature = "provider-configuration")]
pub mod configuration;

/// Country of listing provider
#[cfg(feature = "provider-country")]
pub mod country;

/// Earnings report provider
#[cfg(feature = "provider-earnings")]
pub mod earnings;

/// Real-time share price providers
pub mod share_price;

/// Stock scoring provider
#[cfg(feature = "provider-stock-scoring")]
pub mod scoring;

#[cfg(feature = "provider-configuration")]
pub use configuration::ConfigurationProvider;
#[cfg(feature = "provider-country")]
pub use country::CountryProvider;
#[cfg(feature = "provider-earnings")]
pub use earnings::EarningsProvider;
#[cfg(feature = "provider-stock-scoring")]
pub use scoring::StockScoringProvider;

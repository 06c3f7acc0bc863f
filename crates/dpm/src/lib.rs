//! # Data Product Manager
//!
//! Resolves requested data products by choosing among registered providers,
//! recursively satisfying their dependencies, and reporting a reason for
//! every type that could not be produced.
//!
//! ## Example
//!
//! ```no_run
//! use dpm::constants::{STOCK_SCORE, TICKER_SYMBOL};
//! use dpm::infrastructure::{AppConfig, init_app};
//! use dpm::{DataRequest, Product, ProductConstraint, TickerSymbol};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let context = init_app(AppConfig::default()).await?;
//! let request = DataRequest::new()
//!     .request(
//!         STOCK_SCORE,
//!         ProductConstraint::default().with_max_cost(1.0).with_max_time(5.0),
//!     )
//!     .with_available(Product::TickerSymbol(TickerSymbol { symbol: "NOK".into() }));
//!
//! let response = context.collection().collect(request).await?;
//! assert!(response.failed_data_products.get(TICKER_SYMBOL).is_none());
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! - `domain` - product types, constraints, errors and the provider port
//! - `application` - provider registry, resolution engine, collection use case
//! - `infrastructure` - configuration, logging, composition root
//! - `server` - HTTP transport and one-shot request mode

// Force-link dpm-providers so every provider lands in the registry slice
extern crate dpm_providers;

/// Domain layer - core types and contracts
pub mod domain {
    pub use dpm_domain::*;
}

/// Application layer - registry, engine and use cases
pub mod application {
    pub use dpm_application::*;
}

/// Infrastructure layer - configuration, logging and wiring
pub mod infrastructure {
    pub use dpm_infrastructure::*;
}

/// Server layer - HTTP transport and entry points
pub mod server {
    pub use dpm_server::*;
}

/// Built-in providers
pub mod providers {
    pub use dpm_providers::*;
}

// Re-export commonly used domain types at the crate root
pub use domain::*;

// Re-export main entry point at the crate root
pub use server::run;

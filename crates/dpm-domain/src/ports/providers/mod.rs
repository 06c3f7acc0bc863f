//! Provider Ports
//!
//! | Port | Description |
//! |------|-------------|
//! | [`ProductProvider`] | Produces one or more product types from available inputs |

/// Product provider port
pub mod product_provider;

pub use product_provider::ProductProvider;

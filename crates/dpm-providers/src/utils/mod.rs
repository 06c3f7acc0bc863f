//! Provider Utilities
//!
//! Shared utilities used by provider implementations.

mod available;
mod profile;

pub use available::AvailableProductsExt;
pub use profile::ProductProfile;

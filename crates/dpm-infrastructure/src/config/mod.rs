//! Configuration
//!
//! Typed configuration sections plus the Figment-based loader.

pub mod loader;
pub mod types;

pub use loader::ConfigLoader;
pub use types::*;

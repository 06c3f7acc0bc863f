//! Domain Layer - Data Product Manager
//!
//! Core types of the data product resolution service: product type
//! identifiers, the closed set of product shapes and their tagged wire
//! encoding, constraints, failure reasons, and the provider port.
//!
//! ## Architecture
//!
//! The domain layer:
//! - Holds value objects and the rules attached to them
//! - Defines the provider port implemented by `dpm-providers`
//! - Has no dependencies on application, infrastructure or transport
//!
//! ## Modules
//!
//! - [`value_objects`]: products, constraints, failures, request/response
//! - [`registry`]: identifier to product type lookup
//! - [`ports`]: provider contract
//! - [`constants`]: identifiers and shared messages
//! - [`error`]: domain error type

/// Shared identifiers and messages
pub mod constants;
/// Domain error type
pub mod error;
/// Port interfaces
pub mod ports;
/// Product type registry
pub mod registry;
/// Value objects
pub mod value_objects;

pub use error::{Error, Result};
pub use ports::ProductProvider;
pub use registry::{ProductTypeRegistry, TypeKind};
pub use value_objects::*;

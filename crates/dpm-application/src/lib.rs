//! Application Layer - Data Product Manager
//!
//! Use cases and orchestration for data product resolution, following
//! Clean Architecture principles.
//!
//! ## Architecture
//!
//! The application layer:
//! - Declares the provider registry that `dpm-providers` registers into
//! - Owns the resolution engine that plans and drives providers
//! - Translates batch requests at the boundary and assembles responses
//! - Has no dependencies on infrastructure or transport
//!
//! ## Ports (Interfaces)
//!
//! - `ports::registry::*`: provider registration and the provider catalog
//! - `ports::services::*`: use case interfaces consumed by transports
//!
//! ## Dependencies
//!
//! This crate depends only on:
//! - `dpm-domain`: product types, constraints and the provider port
//! - Pure Rust libraries for async, logging and registration

pub mod domain_services;
pub mod ports;
pub mod use_cases;

pub use domain_services::*;
pub use ports::*;
pub use use_cases::*;

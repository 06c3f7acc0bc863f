//! Domain Port Interfaces
//!
//! Contracts between the domain and the layers that implement it. Provider
//! implementations live in `dpm-providers`; the engine that drives them
//! lives in `dpm-application`.
//!
//! ## Organization
//!
//! - **providers/** - Product provider port

/// Product provider ports
pub mod providers;

pub use providers::ProductProvider;

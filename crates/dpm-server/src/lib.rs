//! # Data Product Manager Server
//!
//! HTTP transport over the data collection service, plus the one-shot
//! request mode used by the command line.
//!
//! ## Endpoints
//!
//! | Path | Method | Description |
//! |------|--------|-------------|
//! | `/data/collect` | POST | Resolve a batch request |
//! | `/data/product-types` | GET | Recognised product identifiers |
//! | `/data/providers` | GET | Loaded providers and their declarations |
//! | `/health` | GET | Liveness and provider count |
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use dpm_server::run;
//!
//! #[rocket::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Default config search, no request file: serve HTTP
//!     run(None, None).await
//! }
//! ```

// Allow Rust 2024 compatibility lints raised inside Rocket's route macros
#![allow(rust_2024_compatibility)]

pub mod constants;
pub mod handlers;
pub mod init;
pub mod transport;

pub use init::{run, run_request, run_server};
pub use transport::http::{HttpServer, HttpServerConfig, build_rocket};

//! Configuration types module

pub mod app;
pub mod logging;
pub mod providers;
pub mod server;

// Re-export main types
pub use app::AppConfig;
pub use logging::LoggingConfig;
pub use providers::ProvidersConfig;
pub use server::ServerConfig;

//! Main application configuration

use super::{LoggingConfig, ProvidersConfig, ServerConfig};
use serde::{Deserialize, Serialize};

/// Root configuration, one field per TOML section
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server
    #[serde(default)]
    pub server: ServerConfig,

    /// Logging
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Provider selection and settings
    #[serde(default)]
    pub providers: ProvidersConfig,
}

//! Infrastructure layer constants
//!
//! Contains constants that are part of the infrastructure implementation.
//! Domain-specific constants are defined in `dpm_domain::constants`.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "dpm.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "dpm";

/// Environment variable prefix for configuration
pub const CONFIG_ENV_PREFIX: &str = "DPM";

/// Separator between nested keys in environment variables (`DPM_SERVER__PORT`)
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// SERVER CONSTANTS
// ============================================================================

/// Default bind address
pub const DEFAULT_SERVER_HOST: &str = "127.0.0.1";

/// Default HTTP port
pub const DEFAULT_SERVER_PORT: u16 = 8080;

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable overriding the log filter
pub const LOG_ENV_FILTER: &str = "DPM_LOG";

/// File stem used when the configured log path has none
pub const LOG_FILE_STEM: &str = "dpm";

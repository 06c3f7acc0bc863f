//! Server constants

/// Error code for requests rejected before resolution
pub const ERROR_CODE_INVALID_REQUEST: &str = "INVALID_REQUEST";

/// Error code for malformed bodies Rocket could not parse
pub const ERROR_CODE_BAD_REQUEST: &str = "BAD_REQUEST";

/// Error code for bodies that parse but do not fit the request shape
pub const ERROR_CODE_UNPROCESSABLE: &str = "UNPROCESSABLE_ENTITY";

/// Error code for unknown routes
pub const ERROR_CODE_NOT_FOUND: &str = "NOT_FOUND";

/// Error code for unexpected failures
pub const ERROR_CODE_INTERNAL: &str = "INTERNAL_ERROR";

/// Status reported by the health endpoint
pub const HEALTH_STATUS_HEALTHY: &str = "healthy";

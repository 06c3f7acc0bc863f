//! Error bodies and catchers
//!
//! Every error leaving the server is `{"error": "...", "code": "..."}`.

use crate::constants::*;
use dpm_domain::error::Error;
use rocket::http::Status;
use rocket::serde::json::Json;
use rocket::{Request, catch};
use serde::Serialize;

/// JSON error body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
    /// Error code for programmatic handling
    pub code: String,
}

impl ErrorResponse {
    fn new(error: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            code: code.into(),
        }
    }

    /// Request rejected by validation
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::new(message, ERROR_CODE_INVALID_REQUEST)
    }

    /// Unexpected failure
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(message, ERROR_CODE_INTERNAL)
    }
}

/// Map a service error to a status and body
pub fn error_response(error: &Error) -> (Status, Json<ErrorResponse>) {
    match error {
        Error::InvalidArgument { message } => (
            Status::BadRequest,
            Json(ErrorResponse::invalid_request(message.clone())),
        ),
        other => (
            Status::InternalServerError,
            Json(ErrorResponse::internal(other.to_string())),
        ),
    }
}

#[catch(400)]
pub fn bad_request(_req: &Request<'_>) -> Json<ErrorResponse> {
    Json(ErrorResponse::new(
        "Malformed request body",
        ERROR_CODE_BAD_REQUEST,
    ))
}

#[catch(404)]
pub fn not_found(req: &Request<'_>) -> Json<ErrorResponse> {
    Json(ErrorResponse::new(
        format!("No route for {} {}", req.method(), req.uri()),
        ERROR_CODE_NOT_FOUND,
    ))
}

#[catch(422)]
pub fn unprocessable(_req: &Request<'_>) -> Json<ErrorResponse> {
    Json(ErrorResponse::new(
        "Request body does not match the expected shape",
        ERROR_CODE_UNPROCESSABLE,
    ))
}

#[catch(500)]
pub fn internal_error(_req: &Request<'_>) -> Json<ErrorResponse> {
    Json(ErrorResponse::internal("Internal server error"))
}

//! Health endpoint

use super::ServerState;
use crate::constants::HEALTH_STATUS_HEALTHY;
use rocket::serde::json::Json;
use rocket::{State, get};
use serde::Serialize;

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Server status
    pub status: &'static str,
    /// Number of loaded providers
    pub providers: usize,
}

#[get("/health")]
pub async fn health(state: &State<ServerState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: HEALTH_STATUS_HEALTHY,
        providers: state.collection.providers().len(),
    })
}

//! Batch collection endpoint

use super::ServerState;
use super::errors::{ErrorResponse, error_response};
use dpm_domain::value_objects::{DataRequest, DataResponse};
use rocket::http::Status;
use rocket::serde::json::Json;
use rocket::{State, post};
use tracing::{info, warn};

/// Resolve a batch request
///
/// Per-type failures are part of a 200 response; only requests rejected
/// before resolution (invalid constraint values) yield 400.
#[post("/data/collect", format = "json", data = "<request>")]
pub async fn collect(
    state: &State<ServerState>,
    request: Json<DataRequest>,
) -> Result<Json<DataResponse>, (Status, Json<ErrorResponse>)> {
    let request = request.into_inner();
    info!(
        requested = request.requested_data_products.len(),
        available = request.already_available_data_products.len(),
        "Collect request received"
    );

    let response = state.collection.collect(request).await.map_err(|e| {
        warn!(error = %e, "Collect request rejected");
        error_response(&e)
    })?;

    info!(
        collected = response.collected_data_products.len(),
        failed = response.failed_data_products.len(),
        "Collect request resolved"
    );
    Ok(Json(response))
}

//! Discovery endpoints

use super::ServerState;
use dpm_application::ports::registry::ProviderDescriptor;
use rocket::serde::json::Json;
use rocket::{State, get};

/// Recognised product type identifiers, sorted
#[get("/data/product-types")]
pub async fn product_types(state: &State<ServerState>) -> Json<Vec<String>> {
    Json(
        state
            .collection
            .product_types()
            .iter()
            .map(|t| t.as_str().to_string())
            .collect(),
    )
}

/// Loaded providers in catalog order
#[get("/data/providers")]
pub async fn providers(state: &State<ServerState>) -> Json<Vec<ProviderDescriptor>> {
    Json(state.collection.providers())
}

//! Route handlers
//!
//! | Module | Routes |
//! |--------|--------|
//! | [`collect`] | `POST /data/collect` |
//! | [`discovery`] | `GET /data/product-types`, `GET /data/providers` |
//! | [`health`] | `GET /health` |
//! | [`errors`] | JSON catchers |

pub mod collect;
pub mod discovery;
pub mod errors;
pub mod health;

use dpm_application::ports::services::DataCollectionInterface;
use std::sync::Arc;

pub use errors::ErrorResponse;

/// Shared handler state
#[derive(Clone)]
pub struct ServerState {
    /// Data collection service
    pub collection: Arc<dyn DataCollectionInterface>,
}

impl ServerState {
    pub fn new(collection: Arc<dyn DataCollectionInterface>) -> Self {
        Self { collection }
    }
}

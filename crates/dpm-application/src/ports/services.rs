//! Application Service Port Interfaces
//!
//! Contracts implemented by application services and consumed by
//! transports (HTTP server, CLI).

use crate::ports::registry::ProviderDescriptor;
use async_trait::async_trait;
use dpm_domain::error::Result;
use dpm_domain::value_objects::{DataRequest, DataResponse, ProductType};

// ============================================================================
// Data Collection Interface
// ============================================================================

/// Data Collection Service Interface
///
/// Resolves batch requests for data products and exposes what the service
/// knows about product types and providers.
#[async_trait]
pub trait DataCollectionInterface: Send + Sync {
    /// Resolve a batch request
    ///
    /// Fails as a whole only for malformed input (invalid constraint
    /// values). Every other outcome is reported per type in the response.
    async fn collect(&self, request: DataRequest) -> Result<DataResponse>;

    /// Product types the service recognises
    fn product_types(&self) -> Vec<ProductType>;

    /// Providers available to the resolution engine, in catalog order
    fn providers(&self) -> Vec<ProviderDescriptor>;
}

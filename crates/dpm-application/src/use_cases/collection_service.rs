//! Data Collection Use Case
//!
//! Translates a batch request into engine input, runs the resolution
//! engine and assembles the response. Unknown and non-product identifiers
//! are answered here and never reach the engine.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use dpm_domain::error::Result;
use dpm_domain::registry::ProductTypeRegistry;
use dpm_domain::value_objects::{DataRequest, DataResponse, ProductConstraint, ProductType};
use tracing::{info, warn};

use crate::domain_services::DataCollectionInterface;
use crate::ports::registry::{ProviderCatalog, ProviderDescriptor};
use crate::use_cases::resolution_engine::{ResolutionEngine, ResolutionState};

/// Data collection service implementation
#[derive(Debug, Clone)]
pub struct DataCollectionService {
    registry: Arc<ProductTypeRegistry>,
    engine: ResolutionEngine,
}

impl DataCollectionService {
    /// Create a service over the given registry and catalog
    pub fn new(registry: Arc<ProductTypeRegistry>, catalog: Arc<ProviderCatalog>) -> Self {
        Self {
            registry,
            engine: ResolutionEngine::new(catalog),
        }
    }

    /// Service over the built-in type registry
    pub fn with_catalog(catalog: Arc<ProviderCatalog>) -> Self {
        Self::new(Arc::new(ProductTypeRegistry::standard()), catalog)
    }

    pub fn engine(&self) -> &ResolutionEngine {
        &self.engine
    }
}

#[async_trait]
impl DataCollectionInterface for DataCollectionService {
    async fn collect(&self, request: DataRequest) -> Result<DataResponse> {
        request.validate_constraints()?;

        let mut state = ResolutionState::new();
        for product in request.already_available_data_products {
            let product_type = product.product_type();
            info!(product_type = %product_type, "Data product already available");
            if state.seed(product).is_some() {
                warn!(
                    product_type = %product_type,
                    "Duplicate already-available data product, the later one is used"
                );
            }
        }

        let mut boundary_failures = BTreeMap::new();
        let mut requested: BTreeMap<ProductType, ProductConstraint> = BTreeMap::new();
        for (identifier, constraint) in request.requested_data_products {
            match self.registry.lookup(&identifier) {
                Ok(product_type) => {
                    requested.insert(product_type, constraint);
                }
                Err(reason) => {
                    warn!(identifier = %identifier, reason = %reason, "Requested type rejected");
                    boundary_failures.insert(identifier, reason.to_string());
                }
            }
        }

        let resolution = self.engine.resolve(&requested, state).await;

        let mut failed_data_products: BTreeMap<String, String> = resolution
            .failures
            .into_iter()
            .map(|(product_type, reason)| (product_type.to_string(), reason.to_string()))
            .collect();
        failed_data_products.extend(boundary_failures);

        Ok(DataResponse {
            collected_data_products: resolution.collected,
            failed_data_products,
        })
    }

    fn product_types(&self) -> Vec<ProductType> {
        self.registry.product_types()
    }

    fn providers(&self) -> Vec<ProviderDescriptor> {
        self.engine.catalog().describe()
    }
}

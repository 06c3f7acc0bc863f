use crate::error::Result;
use crate::value_objects::{
    AvailableProducts, CandidateProfile, Product, ProductConstraint, ProductType,
};
use async_trait::async_trait;

/// Data Product Provider Interface
///
/// A pluggable producer of one or more product types. The descriptor half
/// of the trait (supported types, dependencies, methods, expected cost and
/// time) is static and read by the resolution engine for planning; the
/// `produce` half may perform arbitrary external I/O.
///
/// Implementations are registered once at startup and shared read-only
/// across concurrent requests, so `produce` must not rely on mutable state
/// shared between calls.
///
/// # Example
///
/// ```ignore
/// use dpm_domain::ports::providers::ProductProvider;
///
/// let provider: Arc<dyn ProductProvider> = catalog.providers()[0].clone();
/// for product_type in provider.supported_types() {
///     println!("{} needs {:?}", product_type, provider.dependencies_for(&product_type));
/// }
/// ```
#[async_trait]
pub trait ProductProvider: Send + Sync {
    /// Registry name of this provider (e.g., "real-time-feed")
    fn provider_name(&self) -> &str;

    /// Types this provider can produce (non-empty)
    fn supported_types(&self) -> Vec<ProductType>;

    /// Types that must be collected before `produce` is attempted
    fn dependencies_for(&self, product_type: &ProductType) -> Vec<ProductType>;

    /// Acquisition method tags for the given type (non-empty)
    fn methods_for(&self, product_type: &ProductType) -> Vec<String>;

    /// Declared expected cost for the given type
    fn expected_cost(&self, product_type: &ProductType) -> f64;

    /// Declared expected time for the given type
    fn expected_time(&self, product_type: &ProductType) -> f64;

    /// Attempt to produce a product of the given type
    ///
    /// `available` holds every product collected so far in the request,
    /// which includes all declared dependencies. `constraint` is the
    /// caller's constraint when the type was requested directly and `None`
    /// when it is being resolved as a dependency.
    async fn produce(
        &self,
        product_type: &ProductType,
        available: &AvailableProducts,
        constraint: Option<&ProductConstraint>,
    ) -> Result<Product>;

    /// Whether this provider lists the type among its supported types
    fn supports(&self, product_type: &ProductType) -> bool {
        self.supported_types().contains(product_type)
    }

    /// Planning view of this provider for one type
    fn candidate_profile(&self, product_type: &ProductType) -> CandidateProfile {
        CandidateProfile::new(
            self.expected_cost(product_type),
            self.expected_time(product_type),
            self.methods_for(product_type),
        )
    }
}

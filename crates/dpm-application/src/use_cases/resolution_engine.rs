//! Resolution Engine
//!
//! Recursive planner turning requested product types plus constraints into
//! produced products and per-type failures.
//!
//! Each type moves through `Unvisited → InProgress → {Collected | Failed}`
//! within one request. The traversal is depth-first and sequential; the
//! only suspension points are provider `produce` calls.
//!
//! ## Per-type algorithm
//!
//! 1. Already collected: succeed without invoking any provider.
//! 2. Already failed: fail with the recorded reason, no retry.
//! 3. Currently in progress: record a cycle failure and fail.
//! 4. Otherwise rank the supporting providers and try them in order,
//!    filtering by the constraint (requested types only), resolving each
//!    candidate's dependencies unconstrained, then calling `produce`.
//!    The first success is collected; if none succeeds the type fails.

use std::collections::{BTreeMap, HashSet};
use std::sync::Arc;

use dpm_domain::ports::ProductProvider;
use dpm_domain::value_objects::{
    AvailableProducts, FailureReason, Product, ProductConstraint, ProductType, RankingWeights,
};
use futures::future::{BoxFuture, FutureExt};
use tracing::{debug, error, info, warn};

use crate::ports::registry::ProviderCatalog;

/// Per-request resolution state
///
/// Freshly allocated for every request and never shared between requests.
#[derive(Debug, Default)]
pub struct ResolutionState {
    collected: AvailableProducts,
    ordered: Vec<Product>,
    failures: BTreeMap<ProductType, FailureReason>,
    in_progress: HashSet<ProductType>,
}

impl ResolutionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an already-available product
    ///
    /// Every seeded product is kept in the output in caller order. When a
    /// type is seeded twice the later product is the one dependents see,
    /// and the shadowed one is returned.
    pub fn seed(&mut self, product: Product) -> Option<Product> {
        let product_type = product.product_type();
        self.ordered.push(product.clone());
        self.collected.insert(product_type, product)
    }

    pub fn is_collected(&self, product_type: &ProductType) -> bool {
        self.collected.contains_key(product_type)
    }

    pub fn failure(&self, product_type: &ProductType) -> Option<&FailureReason> {
        self.failures.get(product_type)
    }

    /// Products collected so far, keyed by type
    pub fn available(&self) -> &AvailableProducts {
        &self.collected
    }

    pub fn into_resolution(self) -> Resolution {
        Resolution {
            collected: self.ordered,
            failures: self.failures,
        }
    }

    fn collect(&mut self, product_type: ProductType, product: Product) {
        self.failures.remove(&product_type);
        self.collected.insert(product_type, product.clone());
        self.ordered.push(product);
    }

    /// Record a failure unless one is already recorded for the type
    fn fail(&mut self, product_type: &ProductType, reason: FailureReason) {
        self.failures
            .entry(product_type.clone())
            .or_insert(reason);
    }
}

/// Final outcome of one request's resolution
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Resolution {
    /// Seeded products in caller order, then produced ones in production order
    pub collected: Vec<Product>,
    /// Every requested or dependency type that did not end up collected
    pub failures: BTreeMap<ProductType, FailureReason>,
}

/// Recursive resolution planner over a fixed provider catalog
#[derive(Debug, Clone)]
pub struct ResolutionEngine {
    catalog: Arc<ProviderCatalog>,
}

impl ResolutionEngine {
    pub fn new(catalog: Arc<ProviderCatalog>) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &ProviderCatalog {
        &self.catalog
    }

    /// Resolve every requested type, in key order, against the catalog
    pub async fn resolve(
        &self,
        requested: &BTreeMap<ProductType, ProductConstraint>,
        mut state: ResolutionState,
    ) -> Resolution {
        for (product_type, constraint) in requested {
            self.resolve_type(product_type, Some(constraint), &mut state)
                .await;
        }
        state.into_resolution()
    }

    /// Supporting providers ordered by ascending score
    ///
    /// Ties keep catalog order.
    pub fn rank_candidates(
        &self,
        product_type: &ProductType,
        constraint: Option<&ProductConstraint>,
    ) -> Vec<Arc<dyn ProductProvider>> {
        let weights = RankingWeights::for_constraint(constraint);
        let mut scored: Vec<_> = self
            .catalog
            .candidates_for(product_type)
            .into_iter()
            .map(|provider| {
                let score = weights.score(&provider.candidate_profile(product_type));
                (score, provider)
            })
            .collect();
        scored.sort_by(|(a, _), (b, _)| a.total_cmp(b));
        scored.into_iter().map(|(_, provider)| provider).collect()
    }

    /// Resolve one type, returning whether it ended up collected
    ///
    /// `constraint` is `Some` only for originally requested types.
    pub fn resolve_type<'a>(
        &'a self,
        product_type: &'a ProductType,
        constraint: Option<&'a ProductConstraint>,
        state: &'a mut ResolutionState,
    ) -> BoxFuture<'a, bool> {
        async move {
            if state.is_collected(product_type) {
                return true;
            }
            if state.failures.contains_key(product_type) {
                return false;
            }
            if !state.in_progress.insert(product_type.clone()) {
                error!(product_type = %product_type, "Cycle detected");
                state.fail(product_type, FailureReason::cycle(product_type.clone()));
                return false;
            }

            let outcome = self.try_candidates(product_type, constraint, state).await;
            state.in_progress.remove(product_type);

            match outcome {
                Ok(product) => {
                    info!(product_type = %product_type, "Collected data product");
                    state.collect(product_type.clone(), product);
                    true
                }
                Err(reason) => {
                    warn!(product_type = %product_type, reason = %reason, "Data product failed");
                    state.fail(product_type, reason);
                    false
                }
            }
        }
        .boxed()
    }

    async fn try_candidates(
        &self,
        product_type: &ProductType,
        constraint: Option<&ProductConstraint>,
        state: &mut ResolutionState,
    ) -> Result<Product, FailureReason> {
        let mut blocked_by_cycle: Option<FailureReason> = None;

        for provider in self.rank_candidates(product_type, constraint) {
            let name = provider.provider_name();

            if let Some(constraint) = constraint
                && !constraint.admits(&provider.candidate_profile(product_type))
            {
                debug!(
                    product_type = %product_type,
                    provider = name,
                    "Candidate filtered by constraint"
                );
                continue;
            }

            let mut satisfied = true;
            for dependency in provider.dependencies_for(product_type) {
                if self.resolve_type(&dependency, None, state).await {
                    continue;
                }
                if blocked_by_cycle.is_none() {
                    blocked_by_cycle = state
                        .failure(&dependency)
                        .filter(|reason| reason.is_cycle())
                        .cloned();
                }
                debug!(
                    product_type = %product_type,
                    provider = name,
                    dependency = %dependency,
                    "Candidate dependency not satisfied"
                );
                satisfied = false;
                break;
            }
            if !satisfied {
                continue;
            }

            match provider
                .produce(product_type, state.available(), constraint)
                .await
            {
                Ok(product) if product.product_type() == *product_type => return Ok(product),
                Ok(product) => error!(
                    product_type = %product_type,
                    provider = name,
                    produced = %product.product_type(),
                    "Provider returned a product of the wrong type"
                ),
                Err(e) => error!(
                    product_type = %product_type,
                    provider = name,
                    error = %e,
                    "Provider failed to produce data product"
                ),
            }
        }

        Err(blocked_by_cycle.unwrap_or(FailureReason::NoViableProvider))
    }
}

//! Per-product constraints and candidate scoring
//!
//! A [`ProductConstraint`] is attached to an originally requested product
//! type only. Dependency edges are always resolved without one, so the
//! filters below never apply to them and their ranking uses neutral
//! weights.

use crate::constants::NEUTRAL_RANKING_WEIGHT;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// Value Object: Product Constraint
///
/// Acceptance criteria for one requested product type.
///
/// ## Business Rules
///
/// - An empty or missing method list accepts any provider
/// - Missing cost/time ceilings default to `0.0`, so only candidates with
///   zero expected cost and time pass an unset ceiling
/// - Weights and ceilings are non-negative; violations reject the whole
///   request before resolution begins
/// - `cache_key` and `max_cache_age_seconds` are carried but not interpreted
///
/// ## Example
///
/// ```rust
/// use dpm_domain::value_objects::{CandidateProfile, ProductConstraint};
///
/// let constraint = ProductConstraint::default()
///     .with_methods(["REAL_TIME_FEED"])
///     .with_max_cost(1.0)
///     .with_max_time(1.0);
///
/// let feed = CandidateProfile::new(0.5, 1.0, vec!["REAL_TIME_FEED".into()]);
/// assert!(constraint.admits(&feed));
/// assert!(!ProductConstraint::default().admits(&feed));
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
#[validate(schema(function = "validate_finite_numbers"))]
pub struct ProductConstraint {
    /// Acquisition method tags the caller accepts (empty = any)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub acceptable_methods: Option<Vec<String>>,

    /// Cache key supplied by the caller (not interpreted)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cache_key: Option<String>,

    /// Maximum acceptable cache age in seconds (not interpreted)
    pub max_cache_age_seconds: u64,

    /// Highest acceptable expected cost
    #[validate(range(min = 0.0))]
    pub max_cost: f64,

    /// Highest acceptable expected time
    #[validate(range(min = 0.0))]
    pub max_time: f64,

    /// Weight of expected cost in the ranking score
    #[validate(range(min = 0.0))]
    pub cost_weight: f64,

    /// Weight of expected time in the ranking score
    #[validate(range(min = 0.0))]
    pub time_weight: f64,
}

fn validate_finite_numbers(constraint: &ProductConstraint) -> Result<(), ValidationError> {
    let numbers = [
        constraint.max_cost,
        constraint.max_time,
        constraint.cost_weight,
        constraint.time_weight,
    ];
    if numbers.into_iter().all(f64::is_finite) {
        Ok(())
    } else {
        Err(ValidationError::new("non_finite_number"))
    }
}

impl ProductConstraint {
    /// Restrict the acceptable acquisition methods
    pub fn with_methods<I, S>(mut self, methods: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.acceptable_methods = Some(methods.into_iter().map(Into::into).collect());
        self
    }

    /// Set the cost ceiling
    pub fn with_max_cost(mut self, max_cost: f64) -> Self {
        self.max_cost = max_cost;
        self
    }

    /// Set the time ceiling
    pub fn with_max_time(mut self, max_time: f64) -> Self {
        self.max_time = max_time;
        self
    }

    /// Set the ranking weights
    pub fn with_weights(mut self, cost_weight: f64, time_weight: f64) -> Self {
        self.cost_weight = cost_weight;
        self.time_weight = time_weight;
        self
    }

    /// Set the (uninterpreted) cache hints
    pub fn with_cache(mut self, cache_key: impl Into<String>, max_age_seconds: u64) -> Self {
        self.cache_key = Some(cache_key.into());
        self.max_cache_age_seconds = max_age_seconds;
        self
    }

    /// Whether at least one of the candidate's methods is acceptable
    pub fn accepts_methods<S: AsRef<str>>(&self, methods: &[S]) -> bool {
        match self.acceptable_methods.as_deref() {
            None | Some([]) => true,
            Some(acceptable) => methods
                .iter()
                .any(|method| acceptable.iter().any(|a| a == method.as_ref())),
        }
    }

    /// Whether the expected cost and time are within the ceilings
    pub fn within_limits(&self, cost: f64, time: f64) -> bool {
        cost <= self.max_cost && time <= self.max_time
    }

    /// Method filter and cost/time filter combined
    pub fn admits(&self, candidate: &CandidateProfile) -> bool {
        self.accepts_methods(&candidate.methods)
            && self.within_limits(candidate.expected_cost, candidate.expected_time)
    }

    /// Ranking weights, substituting neutral weights when both are zero
    pub fn ranking_weights(&self) -> RankingWeights {
        if self.cost_weight == 0.0 && self.time_weight == 0.0 {
            RankingWeights::neutral()
        } else {
            RankingWeights {
                cost: self.cost_weight,
                time: self.time_weight,
            }
        }
    }
}

/// What the planner knows about one candidate provider for one type
#[derive(Debug, Clone, PartialEq)]
pub struct CandidateProfile {
    /// Declared expected cost
    pub expected_cost: f64,
    /// Declared expected time
    pub expected_time: f64,
    /// Declared acquisition method tags
    pub methods: Vec<String>,
}

impl CandidateProfile {
    pub fn new(expected_cost: f64, expected_time: f64, methods: Vec<String>) -> Self {
        Self {
            expected_cost,
            expected_time,
            methods,
        }
    }
}

/// Cost and time weights used to rank candidates (lower score wins)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankingWeights {
    /// Weight applied to expected cost
    pub cost: f64,
    /// Weight applied to expected time
    pub time: f64,
}

impl RankingWeights {
    /// Equal unit weights
    pub const fn neutral() -> Self {
        Self {
            cost: NEUTRAL_RANKING_WEIGHT,
            time: NEUTRAL_RANKING_WEIGHT,
        }
    }

    /// Weights for an optional constraint; dependencies get neutral weights
    pub fn for_constraint(constraint: Option<&ProductConstraint>) -> Self {
        constraint.map_or_else(Self::neutral, ProductConstraint::ranking_weights)
    }

    /// `cost * cost_weight + time * time_weight`
    pub fn score(&self, candidate: &CandidateProfile) -> f64 {
        candidate.expected_cost * self.cost + candidate.expected_time * self.time
    }
}

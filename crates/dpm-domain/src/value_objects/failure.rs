//! Per-type failure reasons
//!
//! Every outcome that keeps a requested or dependency type out of the
//! collected list is recorded as one of these, keyed by type. None of them
//! aborts the batch.

use crate::constants::NO_VIABLE_PROVIDER_MESSAGE;
use crate::value_objects::ProductType;
use std::fmt;

/// Why a product type did not end up collected
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureReason {
    /// The identifier does not name any known type (boundary)
    UnknownType {
        /// Identifier as supplied by the caller
        identifier: String,
    },
    /// The identifier names a known shape that is not a product (boundary)
    InvalidType {
        /// Identifier as supplied by the caller
        identifier: String,
    },
    /// Resolution revisited a type that was still being resolved
    CycleDetected {
        /// Type at which the cycle closed
        product_type: ProductType,
    },
    /// No candidate passed the filters or had its dependencies satisfied
    NoViableProvider,
}

impl FailureReason {
    pub fn unknown_type(identifier: impl Into<String>) -> Self {
        Self::UnknownType {
            identifier: identifier.into(),
        }
    }

    pub fn invalid_type(identifier: impl Into<String>) -> Self {
        Self::InvalidType {
            identifier: identifier.into(),
        }
    }

    pub fn cycle(product_type: ProductType) -> Self {
        Self::CycleDetected { product_type }
    }

    /// Whether this failure was caused by a dependency cycle
    pub fn is_cycle(&self) -> bool {
        matches!(self, Self::CycleDetected { .. })
    }
}

impl fmt::Display for FailureReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownType { identifier } => write!(f, "Product type {identifier} not found"),
            Self::InvalidType { identifier } => {
                write!(f, "Type {identifier} is not a data product")
            }
            Self::CycleDetected { product_type } => {
                write!(f, "Cycle detected involving {product_type}")
            }
            Self::NoViableProvider => f.write_str(NO_VIABLE_PROVIDER_MESSAGE),
        }
    }
}

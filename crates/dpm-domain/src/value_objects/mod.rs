//! Domain Value Objects
//!
//! Immutable values exchanged between the resolution engine, providers
//! and callers.
//!
//! ## Value Objects
//!
//! | Value Object | Description |
//! |--------------|-------------|
//! | [`ProductType`] | Globally unique product type identifier |
//! | [`Product`] | Tagged data product value |
//! | [`ProductConstraint`] | Acceptance criteria for a requested product |
//! | [`FailureReason`] | Why a type did not end up collected |
//! | [`DataRequest`] | Batch request received at the boundary |
//! | [`DataResponse`] | Collected and failed products returned to callers |

/// Per-product constraints and candidate ranking
pub mod constraint;
/// Per-type failure reasons
pub mod failure;
/// Product shapes
pub mod product;
/// Product type identifiers
pub mod product_type;
/// Request and response shapes
pub mod request;

pub use constraint::{CandidateProfile, ProductConstraint, RankingWeights};
pub use failure::FailureReason;
pub use product::{
    AvailableProducts, Configuration, Country, LastReportedEarningsPerShare, Product,
    RealTimeSharePrice, StockScore, TickerSymbol,
};
pub use product_type::ProductType;
pub use request::{DataRequest, DataResponse};

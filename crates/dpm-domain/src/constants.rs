//! Domain layer constants
//!
//! Product type identifiers, failure messages and ranking defaults shared
//! by the application and provider layers. Infrastructure-specific
//! constants remain in `dpm_infrastructure::constants`.

// ============================================================================
// WIRE FORMAT CONSTANTS
// ============================================================================

/// Discriminator property carrying the product type on the wire
pub const PRODUCT_DISCRIMINATOR: &str = "@class";

/// Ticker symbol identifying a listed share
pub const TICKER_SYMBOL: &str = "se.iqesolutions.datamanager.product.impl.TickerSymbol";

/// Country of listing for a ticker symbol
pub const COUNTRY: &str = "se.iqesolutions.datamanager.product.impl.Country";

/// Real-time price of a share
pub const REAL_TIME_SHARE_PRICE: &str =
    "se.iqesolutions.datamanager.product.impl.RealTimeSharePrice";

/// Most recently reported earnings per share
pub const LAST_REPORTED_EARNINGS_PER_SHARE: &str =
    "se.iqesolutions.datamanager.product.impl.LastReportedEarningsPerShare";

/// Runtime configuration settings exposed as a product
pub const CONFIGURATION: &str = "se.iqesolutions.datamanager.product.impl.Configuration";

/// Calculated score for a share
pub const STOCK_SCORE: &str = "se.iqesolutions.datamanager.product.impl.StockScore";

/// Known identifiers that name wire shapes which are not products
pub const NON_PRODUCT_TYPES: &[&str] = &[
    "se.iqesolutions.datamanager.constraints.DataProductConstraint",
    "se.iqesolutions.datamanager.DataManagerRequest",
    "se.iqesolutions.datamanager.DataManagerResponse",
];

// ============================================================================
// RESOLUTION CONSTANTS
// ============================================================================

/// Ranking weight used for cost and time when no preference is expressed
pub const NEUTRAL_RANKING_WEIGHT: f64 = 1.0;

/// Failure reason when no candidate passed the filters or had its dependencies met
pub const NO_VIABLE_PROVIDER_MESSAGE: &str =
    "No provider available or dependencies not satisfied";

// ============================================================================
// SETTINGS KEYS
// ============================================================================

/// Settings key for the stock score cap published by the configuration product
pub const STOCK_SCORE_THRESHOLD_KEY: &str = "stockScoreThreshold";

/// Stock score cap used when no threshold is configured
pub const DEFAULT_STOCK_SCORE_THRESHOLD: f64 = 5.0;

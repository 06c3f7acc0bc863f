//! Provider Constants
//!
//! Constants specific to provider implementations. Product identifiers and
//! shared messages live in `dpm_domain::constants`.

// ============================================================================
// ACQUISITION METHOD TAGS
// ============================================================================

/// Value derived from static configuration or reference tables
pub const METHOD_CONFIGURATION: &str = "CONFIGURATION";

/// Value taken from published financial reports
pub const METHOD_FINANCIAL_REPORT: &str = "FINANCIAL_REPORT";

/// Value taken from a live market data feed
pub const METHOD_REAL_TIME_FEED: &str = "REAL_TIME_FEED";

/// Value computed from other products
pub const METHOD_CALCULATION: &str = "CALCULATION";

// ============================================================================
// PROVIDER NAMES
// ============================================================================

pub const PROVIDER_CONFIGURATION: &str = "configuration";
pub const PROVIDER_COUNTRY: &str = "country";
pub const PROVIDER_EARNINGS: &str = "earnings";
pub const PROVIDER_REAL_TIME_FEED: &str = "real-time-feed";
pub const PROVIDER_FINNISH_EXCHANGE: &str = "finnish-exchange";
pub const PROVIDER_STOCK_SCORING: &str = "stock-scoring";

// ============================================================================
// REFERENCE DATA
// ============================================================================

/// Country name for tickers missing from the listing table
pub const UNKNOWN_COUNTRY: &str = "Unknown";

/// Country served by the Finnish exchange feed
pub const FINLAND: &str = "Finland";

/// Ticker to country of listing
pub const TICKER_COUNTRIES: &[(&str, &str)] = &[("AAPL", "USA"), ("TSLA", "USA"), ("NOK", FINLAND)];

/// Placeholder earnings per share returned by the earnings provider
pub const PLACEHOLDER_EARNINGS_PER_SHARE: f64 = 3.50;

/// Placeholder price returned by the real-time feed
pub const PLACEHOLDER_FEED_PRICE: f64 = 100.0;

/// Placeholder price returned by the Finnish exchange feed
pub const PLACEHOLDER_FINNISH_PRICE: f64 = 50.0;

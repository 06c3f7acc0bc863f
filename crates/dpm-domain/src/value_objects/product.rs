//! Data products
//!
//! The closed set of product shapes the service understands. Each product
//! carries its type on the wire through the `@class` discriminator so that
//! already-available products sent by callers and produced products sent
//! back share a single tagged encoding.

use crate::constants::{
    CONFIGURATION, COUNTRY, LAST_REPORTED_EARNINGS_PER_SHARE, REAL_TIME_SHARE_PRICE, STOCK_SCORE,
    TICKER_SYMBOL,
};
use crate::value_objects::ProductType;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;

/// Products already resolved within one request, keyed by their type
pub type AvailableProducts = HashMap<ProductType, Product>;

/// Ticker symbol of a listed share
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickerSymbol {
    /// Exchange symbol, e.g. `AAPL`
    pub symbol: String,
}

/// Country where a share is listed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    /// Country name
    pub name: String,
}

/// Real-time share price
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RealTimeSharePrice {
    /// Ticker the price belongs to
    pub ticker_symbol: String,
    /// Last traded price
    pub price: f64,
}

/// Last reported earnings per share
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LastReportedEarningsPerShare {
    /// Ticker the report belongs to
    pub ticker_symbol: String,
    /// Reported earnings per share
    pub earnings_per_share: f64,
}

/// Configuration settings published as a product
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Configuration {
    /// Arbitrary named settings
    pub settings: Map<String, Value>,
}

impl Configuration {
    /// Read a numeric setting
    pub fn number(&self, key: &str) -> Option<f64> {
        self.settings.get(key).and_then(Value::as_f64)
    }
}

/// Calculated score for a share
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockScore {
    /// Ticker the score belongs to
    pub ticker_symbol: String,
    /// Score value
    pub score: f64,
}

/// Value Object: Data Product
///
/// An immutable value tagged with its type identifier. Produced at most
/// once per type per request, or supplied pre-made by the caller.
///
/// ## Example
///
/// ```rust
/// use dpm_domain::constants::TICKER_SYMBOL;
/// use dpm_domain::value_objects::{Product, TickerSymbol};
///
/// let product: Product = serde_json::from_str(
///     r#"{"@class":"se.iqesolutions.datamanager.product.impl.TickerSymbol","symbol":"AAPL"}"#,
/// ).unwrap();
/// assert_eq!(product.product_type().as_str(), TICKER_SYMBOL);
/// assert_eq!(product, Product::TickerSymbol(TickerSymbol { symbol: "AAPL".into() }));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "@class")]
pub enum Product {
    /// Ticker symbol
    #[serde(rename = "se.iqesolutions.datamanager.product.impl.TickerSymbol")]
    TickerSymbol(TickerSymbol),
    /// Country of listing
    #[serde(rename = "se.iqesolutions.datamanager.product.impl.Country")]
    Country(Country),
    /// Real-time share price
    #[serde(rename = "se.iqesolutions.datamanager.product.impl.RealTimeSharePrice")]
    RealTimeSharePrice(RealTimeSharePrice),
    /// Last reported earnings per share
    #[serde(rename = "se.iqesolutions.datamanager.product.impl.LastReportedEarningsPerShare")]
    LastReportedEarningsPerShare(LastReportedEarningsPerShare),
    /// Configuration settings
    #[serde(rename = "se.iqesolutions.datamanager.product.impl.Configuration")]
    Configuration(Configuration),
    /// Stock score
    #[serde(rename = "se.iqesolutions.datamanager.product.impl.StockScore")]
    StockScore(StockScore),
}

impl Product {
    /// The type this product belongs to
    pub fn product_type(&self) -> ProductType {
        ProductType::from_static(match self {
            Self::TickerSymbol(_) => TICKER_SYMBOL,
            Self::Country(_) => COUNTRY,
            Self::RealTimeSharePrice(_) => REAL_TIME_SHARE_PRICE,
            Self::LastReportedEarningsPerShare(_) => LAST_REPORTED_EARNINGS_PER_SHARE,
            Self::Configuration(_) => CONFIGURATION,
            Self::StockScore(_) => STOCK_SCORE,
        })
    }

    pub fn as_ticker_symbol(&self) -> Option<&TickerSymbol> {
        match self {
            Self::TickerSymbol(inner) => Some(inner),
            _ => None,
        }
    }

    pub fn as_country(&self) -> Option<&Country> {
        match self {
            Self::Country(inner) => Some(inner),
            _ => None,
        }
    }

    pub fn as_real_time_share_price(&self) -> Option<&RealTimeSharePrice> {
        match self {
            Self::RealTimeSharePrice(inner) => Some(inner),
            _ => None,
        }
    }

    pub fn as_last_reported_earnings_per_share(&self) -> Option<&LastReportedEarningsPerShare> {
        match self {
            Self::LastReportedEarningsPerShare(inner) => Some(inner),
            _ => None,
        }
    }

    pub fn as_configuration(&self) -> Option<&Configuration> {
        match self {
            Self::Configuration(inner) => Some(inner),
            _ => None,
        }
    }

    pub fn as_stock_score(&self) -> Option<&StockScore> {
        match self {
            Self::StockScore(inner) => Some(inner),
            _ => None,
        }
    }
}

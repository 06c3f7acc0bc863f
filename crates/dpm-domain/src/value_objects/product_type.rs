//! Product type identifiers

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

/// Value Object: Product Type Identifier
///
/// A globally unique string naming one product kind. Used as the key of
/// every per-request map (collected products, failures, in-progress set).
///
/// ## Example
///
/// ```rust
/// use dpm_domain::constants::TICKER_SYMBOL;
/// use dpm_domain::value_objects::ProductType;
///
/// let ticker = ProductType::from_static(TICKER_SYMBOL);
/// assert_eq!(ticker.as_str(), TICKER_SYMBOL);
/// assert_eq!(ticker.short_name(), "TickerSymbol");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductType(Cow<'static, str>);

impl ProductType {
    /// Create an identifier from an owned or borrowed string
    pub fn new(identifier: impl Into<String>) -> Self {
        Self(Cow::Owned(identifier.into()))
    }

    /// Create an identifier from a static string without allocating
    pub const fn from_static(identifier: &'static str) -> Self {
        Self(Cow::Borrowed(identifier))
    }

    /// The full identifier
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The last dotted segment of the identifier, used in log output
    pub fn short_name(&self) -> &str {
        self.0.rsplit('.').next().unwrap_or(&self.0)
    }
}

impl fmt::Display for ProductType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&'static str> for ProductType {
    fn from(identifier: &'static str) -> Self {
        Self::from_static(identifier)
    }
}

impl From<String> for ProductType {
    fn from(identifier: String) -> Self {
        Self::new(identifier)
    }
}

impl AsRef<str> for ProductType {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

//! Real-Time Share Price Providers
//!
//! Competing providers for `RealTimeSharePrice`. The engine ranks them by
//! cost and time and falls back from one to the other when a provider
//! rejects a share.
//!
//! | Provider | Cost | Time | Coverage |
//! |----------|------|------|----------|
//! | [`RealTimeFeedProvider`] | 0.5 | 1.0 | any ticker |
//! | [`FinnishExchangeProvider`] | 0.001 | 2.0 | Finnish shares only |

#[cfg(feature = "provider-finnish-exchange")]
pub mod finnish_exchange;
#[cfg(feature = "provider-real-time-feed")]
pub mod real_time_feed;

#[cfg(feature = "provider-finnish-exchange")]
pub use finnish_exchange::FinnishExchangeProvider;
#[cfg(feature = "provider-real-time-feed")]
pub use real_time_feed::RealTimeFeedProvider;

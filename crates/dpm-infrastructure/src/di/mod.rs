//! Composition root
//!
//! Wiring only: configuration in, ready-to-use services out. Providers come
//! from the linkme registry; business logic lives in the application crate.

pub mod bootstrap;
pub mod provider_resolvers;

pub use bootstrap::{AppContext, init_app};
pub use provider_resolvers::ProductProviderResolver;

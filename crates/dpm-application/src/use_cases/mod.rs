//! Use Cases
//!
//! | Use Case | Description |
//! |----------|-------------|
//! | [`ResolutionEngine`] | Recursive planner over the provider catalog |
//! | [`DataCollectionService`] | Boundary translation and response assembly |

/// Data collection use case
pub mod collection_service;
/// Recursive resolution engine
pub mod resolution_engine;

pub use collection_service::DataCollectionService;
pub use resolution_engine::{Resolution, ResolutionEngine, ResolutionState};

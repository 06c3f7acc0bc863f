//! Data Collection Service Interface
//!
//! Re-exports the service interface from the ports module.
//! The canonical definition is in `crate::ports::services`.

pub use crate::ports::services::DataCollectionInterface;

//! Domain Services
//!
//! | Service | Description |
//! |---------|-------------|
//! | [`DataCollectionInterface`] | Batch resolution of data products |

/// Data collection service interface
pub mod collection;

pub use collection::DataCollectionInterface;

//! Infrastructure layer: I/O implementations
//!
//! This layer implements the storage boundary trait for the taxonomy snapshot.

pub mod error;
pub mod traits;

pub use error::{InfraError, InfraResult};
pub use traits::{StorageError, StorageResult, StoreRepository, TomlStoreRepository};

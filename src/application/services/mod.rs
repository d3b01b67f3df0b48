//! Application services
//!
//! Concrete service implementations that orchestrate domain logic.
//! Services depend on the storage boundary trait but are themselves
//! concrete structs, not traits.

mod taxonomy;

pub use taxonomy::TaxonomyService;

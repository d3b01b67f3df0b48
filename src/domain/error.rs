//! Domain-level errors (no external dependencies)

use thiserror::Error;

use crate::domain::entities::CategoryId;

/// Domain errors represent business rule violations.
/// Every validation fires before any structural change, so a failed
/// operation leaves the store exactly as it was.
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("category name cannot be empty")]
    EmptyName,

    #[error("a category named '{name}' already exists under the same parent")]
    DuplicateSiblingName { name: String },

    #[error("parent category {parent} already has {max} children")]
    ChildCapacityExceeded { parent: CategoryId, max: usize },

    #[error("duplicate category id: {0}")]
    DuplicateId(CategoryId),

    #[error("category not found: {0}")]
    NotFound(CategoryId),
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;

//! Domain entities: core data structures

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::error::DomainError;

/// Maximum number of children a parent category may hold.
pub const MAX_CHILDREN: usize = 20;

/// Opaque category identifier.
///
/// Assigned at creation, immutable, never reused. Backed by a UUID v4
/// so identifiers stay collision-free across snapshot reloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryId(Uuid);

impl CategoryId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for CategoryId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// A named node in the taxonomy tree.
///
/// Children are not stored on the entity; the store derives child sequences
/// from its parent index, keeping a single source of truth for links.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    /// `None` marks a root category (omitted in snapshots; TOML has no null)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<CategoryId>,
    /// Reserved for soft delete; the core never flips it
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl Category {
    /// Construct a category with a fresh id.
    ///
    /// The name must be non-empty after trimming; blank names are rejected
    /// here, before the store touches any structure.
    pub fn new(
        name: impl Into<String>,
        parent_id: Option<CategoryId>,
    ) -> Result<Self, DomainError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::EmptyName);
        }
        Ok(Self {
            id: CategoryId::generate(),
            name,
            parent_id,
            is_active: true,
            created_at: Utc::now(),
        })
    }

    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }
}

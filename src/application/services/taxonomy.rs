//! Taxonomy service
//!
//! Orchestrates the hierarchy store against the snapshot repository:
//! every mutating call loads the persisted store, applies the operation
//! through the domain layer, and mirrors the result back.

use std::sync::Arc;

use tracing::debug;

use crate::application::{ApplicationError, ApplicationResult};
use crate::domain::{Category, CategoryId, HierarchyStore};
use crate::infrastructure::traits::{StorageError, StoreRepository};

/// Service for managing the persisted category taxonomy.
pub struct TaxonomyService {
    repo: Arc<dyn StoreRepository>,
}

impl TaxonomyService {
    /// Create a new taxonomy service.
    pub fn new(repo: Arc<dyn StoreRepository>) -> Self {
        Self { repo }
    }

    /// Create a category and persist the updated taxonomy.
    pub fn create(
        &self,
        name: &str,
        parent: Option<CategoryId>,
    ) -> ApplicationResult<Category> {
        let mut store = self.load_store()?;
        let category = store.create_category(name, parent)?;
        self.save(&store)?;
        debug!("persisted new category {}", category.id);
        Ok(category)
    }

    /// Look up a single category by id.
    pub fn find(&self, id: &CategoryId) -> ApplicationResult<Option<Category>> {
        let store = self.load_store()?;
        Ok(store.find_category(id).cloned())
    }

    /// List categories: children of `parent` when given, otherwise the full
    /// flat index. Both in creation order.
    pub fn list(&self, parent: Option<CategoryId>) -> ApplicationResult<Vec<Category>> {
        let store = self.load_store()?;
        let categories = match parent {
            Some(parent) => store.children_of(&parent).into_iter().cloned().collect(),
            None => store.categories().cloned().collect(),
        };
        Ok(categories)
    }

    /// Delete a category and its subtree; persists the shrunken taxonomy.
    /// Returns how many categories were removed.
    pub fn delete(&self, id: &CategoryId) -> ApplicationResult<usize> {
        let mut store = self.load_store()?;
        let removed = store.delete_category(id)?;
        self.save(&store)?;
        debug!("persisted deletion of {id} ({removed} removed)");
        Ok(removed)
    }

    /// Load the full store, e.g. for tree rendering.
    pub fn load_store(&self) -> ApplicationResult<HierarchyStore> {
        self.repo
            .load()
            .map_err(|e| Self::map_storage("load taxonomy snapshot", e))
    }

    fn save(&self, store: &HierarchyStore) -> ApplicationResult<()> {
        self.repo
            .save(store)
            .map_err(|e| Self::map_storage("save taxonomy snapshot", e))
    }

    /// Surface snapshot validation failures as the domain errors they are;
    /// everything else is an infrastructure failure with context.
    fn map_storage(context: &str, error: StorageError) -> ApplicationError {
        match error {
            StorageError::Domain(domain) => ApplicationError::Domain(domain),
            other => ApplicationError::OperationFailed {
                context: context.to_string(),
                source: Box::new(other),
            },
        }
    }
}

//! The hierarchy store: owns all categories and enforces the tree invariants.
//!
//! Single source of truth is the id -> category map plus an insertion-order
//! list; the parent -> child-id index (with roots as the top-level sequence)
//! is derived state maintained on every mutation. Children are never owned
//! by their parent entity, so the two views cannot diverge.

use std::collections::{HashMap, HashSet};

use tracing::{debug, instrument, warn};

use crate::domain::entities::{Category, CategoryId, MAX_CHILDREN};
use crate::domain::error::{DomainError, DomainResult};

/// In-memory category hierarchy with sibling-unique names and bounded fan-out.
///
/// Designed for a single logical owner: every operation is synchronous and
/// runs to completion. Concurrent callers must serialize on the whole store.
#[derive(Debug, Default)]
pub struct HierarchyStore {
    /// Master index of all live categories
    categories: HashMap<CategoryId, Category>,
    /// Insertion order of the master index
    order: Vec<CategoryId>,
    /// Child ids per live parent, in creation order
    children: HashMap<CategoryId, Vec<CategoryId>>,
    /// Root ids, in creation order (the root-level sibling scope)
    roots: Vec<CategoryId>,
}

impl HierarchyStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a category, optionally under a parent.
    ///
    /// A `parent_id` that does not resolve to a live category is treated as
    /// "no parent": the new category becomes a root. This mirrors the v1
    /// behavior; a warning is logged so typo'd ids remain visible.
    ///
    /// Validation order: resolve parent, sibling-name uniqueness within the
    /// resolved scope, fan-out capacity (parents only), then construction.
    /// Nothing is mutated unless every check passes.
    #[instrument(level = "debug", skip(self))]
    pub fn create_category(
        &mut self,
        name: &str,
        parent_id: Option<CategoryId>,
    ) -> DomainResult<Category> {
        let parent = parent_id.filter(|id| self.categories.contains_key(id));
        if let (Some(requested), None) = (parent_id, parent) {
            warn!("unknown parent {requested}, creating '{name}' as root");
        }

        self.validate_placement(name, parent)?;

        let category = Category::new(name, parent)?;
        debug!("created category {} '{}'", category.id, category.name);
        self.attach(category.clone());
        Ok(category)
    }

    /// Look up a category by id. Never errors.
    pub fn find_category(&self, id: &CategoryId) -> Option<&Category> {
        self.categories.get(id)
    }

    /// Children of `parent_id` in creation order.
    /// Empty when the parent is absent or childless, not an error.
    pub fn children_of(&self, parent_id: &CategoryId) -> Vec<&Category> {
        self.children
            .get(parent_id)
            .map(|ids| self.resolve(ids))
            .unwrap_or_default()
    }

    /// Root categories in creation order.
    pub fn root_categories(&self) -> Vec<&Category> {
        self.resolve(&self.roots)
    }

    /// Flat listing of the full master index in insertion order.
    pub fn categories(&self) -> impl Iterator<Item = &Category> {
        self.order.iter().filter_map(|id| self.categories.get(id))
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Delete a category and its entire descendant subtree.
    ///
    /// Classification walks each candidate's ancestor chain over the master
    /// index (O(depth) per candidate, no recursion over owned graphs). The
    /// deleted category is detached from its former sibling scope; deeper
    /// descendants vanish together with their doomed ancestors.
    ///
    /// Returns the number of categories removed. Fails fast with `NotFound`
    /// without mutating anything when `id` is not live.
    #[instrument(level = "debug", skip(self))]
    pub fn delete_category(&mut self, id: &CategoryId) -> DomainResult<usize> {
        let target = self.categories.get(id).ok_or(DomainError::NotFound(*id))?;
        let former_parent = target.parent_id;

        let doomed: HashSet<CategoryId> = self
            .order
            .iter()
            .copied()
            .filter(|candidate| self.in_subtree(candidate, id))
            .collect();

        match former_parent {
            Some(parent) => {
                if let Some(siblings) = self.children.get_mut(&parent) {
                    siblings.retain(|child| child != id);
                }
            }
            None => self.roots.retain(|root| root != id),
        }

        self.order.retain(|candidate| !doomed.contains(candidate));
        for dead in &doomed {
            self.categories.remove(dead);
            self.children.remove(dead);
        }

        debug!("deleted {id}, {} categories removed", doomed.len());
        Ok(doomed.len())
    }

    /// Rebuild a store from snapshot rows, re-validating every invariant.
    ///
    /// Rows must arrive in insertion order, so a parent always precedes its
    /// children. An unknown `parent_id` in a row degrades to root, mirroring
    /// the create fallback; duplicate ids, duplicate sibling names, and
    /// capacity overruns reject the whole snapshot.
    pub fn restore(rows: impl IntoIterator<Item = Category>) -> DomainResult<Self> {
        let mut store = Self::new();
        for mut row in rows {
            if row.name.trim().is_empty() {
                return Err(DomainError::EmptyName);
            }
            if store.categories.contains_key(&row.id) {
                return Err(DomainError::DuplicateId(row.id));
            }
            let parent = row
                .parent_id
                .filter(|id| store.categories.contains_key(id));
            if let (Some(requested), None) = (row.parent_id, parent) {
                warn!(
                    "snapshot row {} references unknown parent {requested}, restoring as root",
                    row.id
                );
            }
            store.validate_placement(&row.name, parent)?;
            row.parent_id = parent;
            store.attach(row);
        }
        Ok(store)
    }

    /// Reject placements that would break sibling uniqueness or fan-out.
    fn validate_placement(&self, name: &str, parent: Option<CategoryId>) -> DomainResult<()> {
        let scope: &[CategoryId] = match parent {
            Some(ref p) => self.children.get(p).map(Vec::as_slice).unwrap_or(&[]),
            None => &self.roots,
        };

        if self
            .resolve(scope)
            .iter()
            .any(|sibling| sibling.name == name)
        {
            return Err(DomainError::DuplicateSiblingName {
                name: name.to_string(),
            });
        }

        if let Some(parent) = parent {
            if scope.len() >= MAX_CHILDREN {
                return Err(DomainError::ChildCapacityExceeded {
                    parent,
                    max: MAX_CHILDREN,
                });
            }
        }

        Ok(())
    }

    /// Insert a validated category into the master index and link index.
    fn attach(&mut self, category: Category) {
        match category.parent_id {
            Some(parent) => self.children.entry(parent).or_default().push(category.id),
            None => self.roots.push(category.id),
        }
        self.order.push(category.id);
        self.categories.insert(category.id, category);
    }

    /// Is `candidate` equal to `root` or one of its descendants?
    /// Walks the parent chain; terminates because the tree is acyclic.
    fn in_subtree(&self, candidate: &CategoryId, root: &CategoryId) -> bool {
        let mut current = Some(*candidate);
        while let Some(id) = current {
            if id == *root {
                return true;
            }
            current = self.categories.get(&id).and_then(|c| c.parent_id);
        }
        false
    }

    fn resolve(&self, ids: &[CategoryId]) -> Vec<&Category> {
        ids.iter().filter_map(|id| self.categories.get(id)).collect()
    }
}

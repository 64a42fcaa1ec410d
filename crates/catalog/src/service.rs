use std::collections::HashSet;

use vitrine_core::CategoryId;

use crate::category::CategoryNode;
use crate::store::{CatalogStoreError, CategoryStore};
use crate::tree::{build_forest, descendant_ids};

/// Snapshot-read-then-transform composition over a [`CategoryStore`].
///
/// Each call performs one store read and one pure transform; the service
/// holds no inter-call state. A store failure propagates immediately.
pub struct CatalogService<S> {
    store: S,
}

impl<S> CatalogService<S>
where
    S: CategoryStore,
{
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// The active-category forest, for navigation/display.
    pub fn forest(&self) -> Result<Vec<CategoryNode>, CatalogStoreError> {
        Ok(build_forest(self.store.list_active()?))
    }

    /// Ids scoping a product query to `root_id` and everything under it.
    pub fn category_scope(&self, root_id: CategoryId) -> Result<HashSet<CategoryId>, CatalogStoreError> {
        Ok(descendant_ids(&self.store.list_active()?, root_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::Category;
    use crate::store::InMemoryCategoryStore;

    fn category(id: CategoryId, parent_id: Option<CategoryId>, position: i32) -> Category {
        Category {
            id,
            parent_id,
            name: String::new(),
            position,
            is_active: true,
        }
    }

    #[test]
    fn scope_spans_root_and_descendants() {
        let root = CategoryId::new();
        let child = CategoryId::new();
        let store = InMemoryCategoryStore::with_categories(vec![
            category(root, None, 0),
            category(child, Some(root), 0),
        ]);
        let service = CatalogService::new(store);

        assert_eq!(
            service.category_scope(root).unwrap(),
            HashSet::from([root, child])
        );
    }

    #[test]
    fn deactivated_categories_leave_the_forest() {
        let root = CategoryId::new();
        let child = CategoryId::new();
        let store = InMemoryCategoryStore::with_categories(vec![
            category(root, None, 0),
            category(child, Some(root), 0),
        ]);
        store.deactivate(child);
        let service = CatalogService::new(store);

        let forest = service.forest().unwrap();
        assert_eq!(forest.len(), 1);
        assert!(forest[0].children.is_empty());
    }

    #[test]
    fn child_of_deactivated_parent_is_promoted() {
        // Deactivating a parent leaves its children dangling in the snapshot;
        // they surface as roots instead of disappearing from the catalog.
        let root = CategoryId::new();
        let child = CategoryId::new();
        let store = InMemoryCategoryStore::with_categories(vec![
            category(root, None, 0),
            category(child, Some(root), 1),
        ]);
        store.deactivate(root);
        let service = CatalogService::new(store);

        let forest = service.forest().unwrap();
        assert_eq!(forest.len(), 1);
        assert_eq!(forest[0].id(), child);
    }
}

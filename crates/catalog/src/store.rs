use std::sync::{Arc, RwLock};

use thiserror::Error;

use vitrine_core::CategoryId;

use crate::category::Category;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogStoreError {
    #[error("category store unavailable: {0}")]
    Unavailable(String),
}

/// Read contract for the category snapshot.
///
/// One point-in-time read per resolution; no ordering guarantee beyond the
/// `position` field on each record.
pub trait CategoryStore: Send + Sync {
    /// All active categories, flat.
    fn list_active(&self) -> Result<Vec<Category>, CatalogStoreError>;
}

impl<S> CategoryStore for Arc<S>
where
    S: CategoryStore + ?Sized,
{
    fn list_active(&self) -> Result<Vec<Category>, CatalogStoreError> {
        (**self).list_active()
    }
}

/// In-memory category store for tests/dev.
#[derive(Debug, Default)]
pub struct InMemoryCategoryStore {
    inner: RwLock<Vec<Category>>,
}

impl InMemoryCategoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_categories(categories: Vec<Category>) -> Self {
        Self {
            inner: RwLock::new(categories),
        }
    }

    pub fn upsert(&self, category: Category) {
        if let Ok(mut list) = self.inner.write() {
            match list.iter_mut().find(|c| c.id == category.id) {
                Some(existing) => *existing = category,
                None => list.push(category),
            }
        }
    }

    pub fn deactivate(&self, id: CategoryId) {
        if let Ok(mut list) = self.inner.write() {
            if let Some(existing) = list.iter_mut().find(|c| c.id == id) {
                existing.is_active = false;
            }
        }
    }
}

impl CategoryStore for InMemoryCategoryStore {
    fn list_active(&self) -> Result<Vec<Category>, CatalogStoreError> {
        let list = self
            .inner
            .read()
            .map_err(|_| CatalogStoreError::Unavailable("lock poisoned".to_string()))?;
        Ok(list.iter().filter(|c| c.is_active).cloned().collect())
    }
}

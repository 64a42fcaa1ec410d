use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use thiserror::Error;

use vitrine_core::SubjectId;

use crate::principal::{Principal, PrincipalDraft};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Insert raced another insert for the same subject id.
    ///
    /// The store must surface this rather than silently overwriting; the
    /// resolver handles it by re-fetching.
    #[error("principal already exists for subject '{0}'")]
    Conflict(SubjectId),

    /// Backing store unreachable or otherwise failed.
    #[error("principal store unavailable: {0}")]
    Unavailable(String),
}

/// Persistence contract for principals.
///
/// Implementations must enforce uniqueness on `subject_id` — that constraint
/// is the cross-process enforcement point for idempotent provisioning, since
/// the resolver may run across independent process instances.
pub trait PrincipalStore: Send + Sync {
    fn find_by_subject_id(&self, subject_id: &SubjectId) -> Result<Option<Principal>, StoreError>;

    /// Insert a new principal, failing with [`StoreError::Conflict`] when a
    /// record for the draft's subject id already exists.
    fn insert(&self, draft: PrincipalDraft) -> Result<Principal, StoreError>;
}

impl<S> PrincipalStore for Arc<S>
where
    S: PrincipalStore + ?Sized,
{
    fn find_by_subject_id(&self, subject_id: &SubjectId) -> Result<Option<Principal>, StoreError> {
        (**self).find_by_subject_id(subject_id)
    }

    fn insert(&self, draft: PrincipalDraft) -> Result<Principal, StoreError> {
        (**self).insert(draft)
    }
}

/// In-memory principal store for tests/dev.
#[derive(Debug, Default)]
pub struct InMemoryPrincipalStore {
    inner: RwLock<HashMap<SubjectId, Principal>>,
}

impl InMemoryPrincipalStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.inner.read().map(|m| m.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl PrincipalStore for InMemoryPrincipalStore {
    fn find_by_subject_id(&self, subject_id: &SubjectId) -> Result<Option<Principal>, StoreError> {
        let map = self
            .inner
            .read()
            .map_err(|_| StoreError::Unavailable("lock poisoned".to_string()))?;
        Ok(map.get(subject_id).cloned())
    }

    fn insert(&self, draft: PrincipalDraft) -> Result<Principal, StoreError> {
        let mut map = self
            .inner
            .write()
            .map_err(|_| StoreError::Unavailable("lock poisoned".to_string()))?;

        if map.contains_key(&draft.subject_id) {
            return Err(StoreError::Conflict(draft.subject_id));
        }

        let principal = draft.into_principal();
        map.insert(principal.subject_id.clone(), principal.clone());
        Ok(principal)
    }
}

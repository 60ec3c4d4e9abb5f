//! In-memory implementation of [`CatRepository`].

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::future::{Future, ready};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use catsapi_app::ports::CatRepository;
use catsapi_domain::cat::Cat;
use catsapi_domain::error::CatsError;
use catsapi_domain::id::CatId;

use crate::error::StorageError;

type CatMap = HashMap<CatId, Cat>;

/// Cat repository held entirely in process memory.
///
/// Reads share the lock, `try_create` and `delete` take it exclusively.
/// Guards never outlive the synchronous part of a call, so the returned
/// futures are always ready.
#[derive(Debug, Default)]
pub struct InMemoryCatRepository {
    cats: RwLock<CatMap>,
}

impl InMemoryCatRepository {
    /// Create an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, CatMap>, StorageError> {
        self.cats.read().map_err(|_| StorageError::Poisoned)
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, CatMap>, StorageError> {
        self.cats.write().map_err(|_| StorageError::Poisoned)
    }
}

impl CatRepository for InMemoryCatRepository {
    fn try_create(
        &self,
        id: CatId,
        cat: Cat,
    ) -> impl Future<Output = Result<bool, CatsError>> + Send {
        let result = self.write().map_err(CatsError::from).map(|mut cats| {
            match cats.entry(id) {
                Entry::Occupied(_) => false,
                Entry::Vacant(slot) => {
                    let id = slot.key().clone();
                    slot.insert(cat.with_id(id));
                    true
                }
            }
        });
        ready(result)
    }

    fn get_by_id(
        &self,
        id: &CatId,
    ) -> impl Future<Output = Result<Option<Cat>, CatsError>> + Send {
        let result = self
            .read()
            .map(|cats| cats.get(id).cloned())
            .map_err(CatsError::from);
        ready(result)
    }

    fn list_ids(&self) -> impl Future<Output = Result<Vec<CatId>, CatsError>> + Send {
        let result = self
            .read()
            .map(|cats| cats.keys().cloned().collect())
            .map_err(CatsError::from);
        ready(result)
    }

    fn delete(&self, id: &CatId) -> impl Future<Output = Result<bool, CatsError>> + Send {
        let result = self
            .write()
            .map(|mut cats| cats.remove(id).is_some())
            .map_err(CatsError::from);
        ready(result)
    }
}

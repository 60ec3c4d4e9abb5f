//! Cat service — use-cases for managing cat records.

use catsapi_domain::cat::Cat;
use catsapi_domain::error::{AlreadyExistsError, CatsError, NotFoundError};
use catsapi_domain::id::CatId;

use crate::ports::{CatRepository, IdGenerator};

const ENTITY: &str = "Cat";

/// How many generated identifiers are tried before giving up on a create.
pub const MAX_ID_ATTEMPTS: usize = 16;

/// Application service for cat create/list/get/delete.
pub struct CatService<R, G> {
    repo: R,
    ids: G,
}

impl<R: CatRepository, G: IdGenerator> CatService<R, G> {
    /// Create a new service backed by the given repository and id generator.
    pub fn new(repo: R, ids: G) -> Self {
        Self { repo, ids }
    }

    /// Store a new cat under a freshly generated identifier.
    ///
    /// Any identifier carried by `cat` is discarded. Generated identifiers
    /// that are already in use are skipped.
    ///
    /// # Errors
    ///
    /// Returns [`CatsError::IdentifiersExhausted`] if the generator produced
    /// only taken keys for [`MAX_ID_ATTEMPTS`] rounds, or a storage error
    /// propagated from the repository.
    pub async fn create_cat(&self, cat: Cat) -> Result<CatId, CatsError> {
        tracing::info!(name = %cat.name, "creating cat");
        for _ in 0..MAX_ID_ATTEMPTS {
            let id = self.ids.next_id();
            if self.repo.try_create(id.clone(), cat.clone()).await? {
                tracing::info!(%id, "cat saved");
                return Ok(id);
            }
            tracing::warn!(%id, "generated id already in use, retrying");
        }
        Err(CatsError::IdentifiersExhausted {
            attempts: MAX_ID_ATTEMPTS,
        })
    }

    /// Store a cat keeping its own identifier, used for startup seeding.
    ///
    /// Records without an identifier (or with an empty one) go through
    /// [`Self::create_cat`] instead.
    ///
    /// # Errors
    ///
    /// Returns [`CatsError::AlreadyExists`] when the identifier is taken, or
    /// the errors of [`Self::create_cat`].
    pub async fn import_cat(&self, cat: Cat) -> Result<CatId, CatsError> {
        let Some(id) = cat.id.clone().filter(|id| !id.is_empty()) else {
            return self.create_cat(cat).await;
        };
        if self.repo.try_create(id.clone(), cat).await? {
            tracing::info!(%id, "cat imported");
            Ok(id)
        } else {
            Err(AlreadyExistsError {
                entity: ENTITY,
                id: id.to_string(),
            }
            .into())
        }
    }

    /// List the identifiers of every stored cat.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_cat_ids(&self) -> Result<Vec<CatId>, CatsError> {
        self.repo.list_ids().await
    }

    /// Look up a cat by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`CatsError::NotFound`] when no cat with `id` exists,
    /// or a storage error from the repository.
    pub async fn get_cat(&self, id: &CatId) -> Result<Cat, CatsError> {
        self.repo.get_by_id(id).await?.ok_or_else(|| {
            NotFoundError {
                entity: ENTITY,
                id: id.to_string(),
            }
            .into()
        })
    }

    /// Delete a cat by id.
    ///
    /// # Errors
    ///
    /// Returns [`CatsError::NotFound`] when no cat with `id` exists (the
    /// store is left untouched), or a storage error from the repository.
    pub async fn delete_cat(&self, id: &CatId) -> Result<(), CatsError> {
        if self.repo.delete(id).await? {
            tracing::info!(%id, "cat deleted");
            Ok(())
        } else {
            Err(NotFoundError {
                entity: ENTITY,
                id: id.to_string(),
            }
            .into())
        }
    }
}

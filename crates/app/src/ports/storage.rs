//! Storage port — repository trait for cat records.

use std::future::Future;

use catsapi_domain::cat::Cat;
use catsapi_domain::error::CatsError;
use catsapi_domain::id::CatId;

/// Keyed storage for [`Cat`] records.
///
/// The repository owns every record it holds; callers only ever receive
/// clones. Structural mutations (`try_create`, `delete`) must be mutually
/// exclusive with each other and with reads.
pub trait CatRepository {
    /// Store `cat` under `id` unless that key is already taken. The stored
    /// copy is stamped with `id`.
    ///
    /// Resolves to `true` when the record was stored and `false` when the key
    /// was occupied, in which case the store is left untouched. The check and
    /// the insert happen atomically.
    fn try_create(
        &self,
        id: CatId,
        cat: Cat,
    ) -> impl Future<Output = Result<bool, CatsError>> + Send;

    /// Fetch a clone of the record stored under `id`.
    fn get_by_id(
        &self,
        id: &CatId,
    ) -> impl Future<Output = Result<Option<Cat>, CatsError>> + Send;

    /// Snapshot of every stored identifier, in no particular order.
    fn list_ids(&self) -> impl Future<Output = Result<Vec<CatId>, CatsError>> + Send;

    /// Remove the record stored under `id`, resolving to whether one existed.
    fn delete(&self, id: &CatId) -> impl Future<Output = Result<bool, CatsError>> + Send;
}

//! Identifier generator port.

use std::sync::Arc;

use catsapi_domain::id::CatId;

/// Produces identifiers for newly created records.
///
/// Implementations should return opaque, unpredictable values. The service
/// layer still checks every value against the store, so a generator that
/// repeats itself can never overwrite an existing record.
pub trait IdGenerator {
    /// Return the next candidate identifier.
    fn next_id(&self) -> CatId;
}

impl<T: IdGenerator + ?Sized> IdGenerator for Arc<T> {
    fn next_id(&self) -> CatId {
        (**self).next_id()
    }
}

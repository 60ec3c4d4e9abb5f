//! Shared application state for axum handlers.

use std::sync::Arc;

use catsapi_app::ports::{CatRepository, IdGenerator};
use catsapi_app::services::cat_service::CatService;

/// Application state shared across all axum handlers.
///
/// Generic over the repository and identifier generator to avoid dynamic
/// dispatch. `Clone` is implemented manually so the underlying types
/// themselves do not need to be `Clone`; only the `Arc` wrappers are cloned.
pub struct AppState<R, G> {
    /// Cat CRUD service, owner of the record store.
    pub cat_service: Arc<CatService<R, G>>,
    /// Software version shown on the home page.
    pub version: Arc<str>,
}

impl<R, G> Clone for AppState<R, G> {
    fn clone(&self) -> Self {
        Self {
            cat_service: Arc::clone(&self.cat_service),
            version: Arc::clone(&self.version),
        }
    }
}

impl<R, G> AppState<R, G>
where
    R: CatRepository + Send + Sync + 'static,
    G: IdGenerator + Send + Sync + 'static,
{
    /// Create a new application state from a service instance.
    pub fn new(cat_service: CatService<R, G>, version: impl Into<Arc<str>>) -> Self {
        Self::from_arc(Arc::new(cat_service), version)
    }

    /// Create a new application state from a pre-wrapped `Arc` service.
    ///
    /// Use this when the service is also needed outside the HTTP layer,
    /// e.g. for seeding or inspection in tests.
    pub fn from_arc(cat_service: Arc<CatService<R, G>>, version: impl Into<Arc<str>>) -> Self {
        Self {
            cat_service,
            version: version.into(),
        }
    }
}

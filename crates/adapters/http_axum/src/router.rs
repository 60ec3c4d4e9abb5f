//! Axum router assembly.

use std::path::Path;

use axum::Router;
use axum::routing::get;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use catsapi_app::ports::{CatRepository, IdGenerator};

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Serves the cats routes both at the root and under `/api`, plus the home
/// page at `/`. Includes a [`TraceLayer`] that logs each HTTP
/// request/response at the `DEBUG` level using the `tracing` ecosystem.
pub fn build<R, G>(state: AppState<R, G>) -> Router
where
    R: CatRepository + Send + Sync + 'static,
    G: IdGenerator + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(crate::home::index::<R, G>))
        .route("/health", get(health_check))
        .merge(crate::api::routes::<R, G>())
        .nest("/api", crate::api::routes::<R, G>())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Serve the static files under `dir` (typically a Swagger UI bundle and the
/// `OpenAPI` document) at `/swagger`.
pub fn with_docs(router: Router, dir: impl AsRef<Path>) -> Router {
    router.nest_service("/swagger", ServeDir::new(dir))
}

async fn health_check() -> &'static str {
    "OK"
}

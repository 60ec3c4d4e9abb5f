//! JSON REST API for cats.
//!
//! | Method | Path          | Handler          |
//! |--------|---------------|------------------|
//! | GET    | `/cats`       | [`cats::list`]   |
//! | POST   | `/cats`       | [`cats::create`] |
//! | GET    | `/cats/{id}`  | [`cats::get`]    |
//! | DELETE | `/cats/{id}`  | [`cats::delete`] |
//!
//! Anything after the identifier segment is ignored, and a missing
//! identifier (`/cats/`) is looked up as the empty string.

#[allow(clippy::missing_errors_doc)]
pub mod cats;
pub mod extract;
pub mod response;

use axum::Router;
use axum::routing::get;

use catsapi_app::ports::{CatRepository, IdGenerator};

use crate::state::AppState;

/// Build the cats sub-router.
pub fn routes<R, G>() -> Router<AppState<R, G>>
where
    R: CatRepository + Send + Sync + 'static,
    G: IdGenerator + Send + Sync + 'static,
{
    let single = get(cats::get::<R, G>).delete(cats::delete::<R, G>);

    Router::new()
        .route(
            "/cats",
            get(cats::list::<R, G>).post(cats::create::<R, G>),
        )
        .route("/cats/", single.clone())
        .route("/cats/{id}", single.clone())
        .route("/cats/{id}/", single.clone())
        .route("/cats/{id}/{*rest}", single)
}

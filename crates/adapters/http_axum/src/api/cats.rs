//! JSON REST handlers for cats.

use axum::body::Bytes;
use axum::extract::State;
use serde::Deserialize;

use catsapi_app::ports::{CatRepository, IdGenerator};
use catsapi_domain::cat::Cat;

use super::extract::CatIdSegment;
use super::response::{ApiResponse, ResponseBody};
use crate::error::ApiError;
use crate::state::AppState;

/// `GET /cats`
pub async fn list<R, G>(State(state): State<AppState<R, G>>) -> Result<ApiResponse, ApiError>
where
    R: CatRepository + Send + Sync + 'static,
    G: IdGenerator + Send + Sync + 'static,
{
    tracing::info!("listing the cats");
    let ids = state.cat_service.list_cat_ids().await?;
    Ok(ApiResponse::ok(ResponseBody::Ids(ids)))
}

/// `POST /cats`
///
/// The body is decoded by hand rather than through the `Json` extractor so
/// that every decode failure, including a missing or wrong content type,
/// answers the same fixed `400`. Only the first JSON value is read; whatever
/// follows it is ignored.
pub async fn create<R, G>(
    State(state): State<AppState<R, G>>,
    body: Bytes,
) -> Result<ApiResponse, ApiError>
where
    R: CatRepository + Send + Sync + 'static,
    G: IdGenerator + Send + Sync + 'static,
{
    let mut decoder = serde_json::Deserializer::from_slice(&body);
    let cat = Cat::deserialize(&mut decoder)?;
    let id = state.cat_service.create_cat(cat).await?;
    Ok(ApiResponse::created(&id))
}

/// `GET /cats/{id}`
pub async fn get<R, G>(
    State(state): State<AppState<R, G>>,
    CatIdSegment(id): CatIdSegment,
) -> Result<ApiResponse, ApiError>
where
    R: CatRepository + Send + Sync + 'static,
    G: IdGenerator + Send + Sync + 'static,
{
    tracing::info!(%id, "getting the cat");
    let cat = state.cat_service.get_cat(&id).await?;
    tracing::info!(%id, "cat found");
    Ok(ApiResponse::ok(ResponseBody::Cat(cat)))
}

/// `DELETE /cats/{id}`
pub async fn delete<R, G>(
    State(state): State<AppState<R, G>>,
    CatIdSegment(id): CatIdSegment,
) -> Result<ApiResponse, ApiError>
where
    R: CatRepository + Send + Sync + 'static,
    G: IdGenerator + Send + Sync + 'static,
{
    tracing::info!(%id, "deleting the cat");
    state.cat_service.delete_cat(&id).await?;
    Ok(ApiResponse::no_content())
}

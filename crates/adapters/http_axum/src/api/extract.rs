//! Path identifier extraction for `/cats/{id}` routes.

use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use catsapi_domain::id::CatId;

/// The identifier addressed by a `/cats/{id}` request.
///
/// Never rejects: a missing segment yields the empty identifier, which no
/// stored record can carry, so handlers answer `404` instead of the router.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatIdSegment(pub CatId);

impl<S: Send + Sync> FromRequestParts<S> for CatIdSegment {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self(cat_id_from_path(parts.uri.path())))
    }
}

/// Take the segment right after `/cats/`, verbatim, stopping at the next `/`.
///
/// Extra trailing segments are dropped (`/cats/123/extra` addresses `123`).
#[must_use]
pub fn cat_id_from_path(path: &str) -> CatId {
    let segment = path
        .split_once("/cats/")
        .map_or("", |(_, rest)| rest.split('/').next().unwrap_or_default());
    CatId::new(segment)
}

//! Tagged handler results and their JSON encoding.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use catsapi_domain::cat::Cat;
use catsapi_domain::id::CatId;

/// Payload of a handler result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResponseBody {
    /// No body at all, used for `204 No Content`.
    Empty,
    /// A bare JSON string: a new identifier or a fixed message.
    Text(String),
    /// A full record.
    Cat(Cat),
    /// A JSON array of identifiers.
    Ids(Vec<CatId>),
}

/// Status code plus payload, produced by every handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: StatusCode,
    pub body: ResponseBody,
}

impl ApiResponse {
    #[must_use]
    pub fn new(status: StatusCode, body: ResponseBody) -> Self {
        Self { status, body }
    }

    /// `200 OK` with the given payload.
    #[must_use]
    pub fn ok(body: ResponseBody) -> Self {
        Self::new(StatusCode::OK, body)
    }

    /// `201 Created` carrying the new identifier as a JSON string.
    #[must_use]
    pub fn created(id: &CatId) -> Self {
        Self::new(StatusCode::CREATED, ResponseBody::Text(id.to_string()))
    }

    /// `204 No Content`.
    #[must_use]
    pub fn no_content() -> Self {
        Self::new(StatusCode::NO_CONTENT, ResponseBody::Empty)
    }

    /// Any status with a bare JSON string body.
    #[must_use]
    pub fn text(status: StatusCode, message: impl Into<String>) -> Self {
        Self::new(status, ResponseBody::Text(message.into()))
    }
}

impl IntoResponse for ApiResponse {
    fn into_response(self) -> Response {
        let Self { status, body } = self;
        match body {
            ResponseBody::Empty => status.into_response(),
            ResponseBody::Text(text) => (status, Json(text)).into_response(),
            ResponseBody::Cat(cat) => (status, Json(cat)).into_response(),
            ResponseBody::Ids(ids) => (status, Json(ids)).into_response(),
        }
    }
}

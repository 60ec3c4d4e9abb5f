//! HTTP error response mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use catsapi_domain::error::CatsError;

use crate::api::response::ApiResponse;

/// Body of every 404 returned by the cats routes.
pub const CAT_NOT_FOUND: &str = "Cat not found";
/// Body of the 400 returned when a create payload does not decode.
pub const INVALID_JSON_INPUT: &str = "Invalid JSON input";
/// Body of every 500.
pub const INTERNAL_ERROR: &str = "Internal server error";

/// Failures a handler can end with, mapped to fixed status/message pairs.
#[derive(Debug)]
pub enum ApiError {
    /// The request body was not a well-formed cat document.
    InvalidJson(serde_json::Error),
    /// The application layer refused the operation.
    Domain(CatsError),
}

impl From<CatsError> for ApiError {
    fn from(err: CatsError) -> Self {
        Self::Domain(err)
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        Self::InvalidJson(err)
    }
}

impl ApiError {
    fn to_api_response(&self) -> ApiResponse {
        match self {
            Self::InvalidJson(err) => {
                tracing::info!(error = %err, "unable to parse the JSON input for cat creation");
                ApiResponse::text(StatusCode::BAD_REQUEST, INVALID_JSON_INPUT)
            }
            Self::Domain(CatsError::NotFound(err)) => {
                tracing::info!(error = %err, "cat not found");
                ApiResponse::text(StatusCode::NOT_FOUND, CAT_NOT_FOUND)
            }
            Self::Domain(CatsError::AlreadyExists(err)) => {
                ApiResponse::text(StatusCode::CONFLICT, err.to_string())
            }
            Self::Domain(err) => {
                tracing::error!(error = %err, "request failed");
                ApiResponse::text(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR)
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        self.to_api_response().into_response()
    }
}

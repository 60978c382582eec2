//! Mapping from domain errors to HTTP responses.
//!
//! Validation failures become 400, unknown ids become 404, and everything
//! else becomes an opaque 500 whose details are logged server-side only.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use catalog_core::CatalogError;
use serde_json::json;
use tracing::error;

/// An error ready to be rendered as an HTTP response.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request's parameters or body were invalid.
    #[error("{0}")]
    BadRequest(String),
    /// The requested resource does not exist.
    #[error("{0}")]
    NotFound(String),
    /// Unexpected failure; the message is logged, not returned.
    #[error("internal server error")]
    Internal(#[source] CatalogError),
}

impl ApiError {
    /// Convenience constructor for handler-side validation failures.
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest(message.into())
    }

    /// HTTP status for this error.
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<CatalogError> for ApiError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::EmptyTitle => Self::BadRequest(err.to_string()),
            CatalogError::NotFound { .. } => Self::NotFound(err.to_string()),
            CatalogError::Unavailable { .. } | CatalogError::Internal(_) => Self::Internal(err),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let Self::Internal(ref source) = self {
            error!(error = %source, "request failed unexpectedly");
        }
        let body = Json(json!({ "error": self.to_string() }));
        (self.status(), body).into_response()
    }
}

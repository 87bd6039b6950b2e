//! Error type for the item endpoints.

use std::error::Error;
use std::fmt;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::repository::RepositoryError;

/// Error type for HTTP handlers. Rendered as `{ "error": <message> }`.
#[derive(Debug)]
pub enum ApiError {
    /// No item matches the path id.
    NotFound,
    /// A field required for creation was missing.
    InvalidInput,
    /// Request body could not be decoded.
    DecodeFailed(String),
    /// Repository failure unrelated to the request.
    Repository(RepositoryError),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::NotFound => write!(f, "Item not found"),
            ApiError::InvalidInput => write!(f, "Name, description, and price are required"),
            ApiError::DecodeFailed(msg) => write!(f, "Invalid request body: {}", msg),
            ApiError::Repository(e) => write!(f, "repository error: {}", e),
        }
    }
}

impl Error for ApiError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ApiError::Repository(e) => Some(e),
            _ => None,
        }
    }
}

impl From<RepositoryError> for ApiError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => ApiError::NotFound,
            RepositoryError::InvalidInput { .. } => ApiError::InvalidInput,
            other => ApiError::Repository(other),
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::DecodeFailed(err.to_string())
    }
}

impl From<serde_urlencoded::de::Error> for ApiError {
    fn from(err: serde_urlencoded::de::Error) -> Self {
        ApiError::DecodeFailed(err.to_string())
    }
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::InvalidInput => StatusCode::BAD_REQUEST,
            ApiError::DecodeFailed(_) => StatusCode::BAD_REQUEST,
            ApiError::Repository(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = match &self {
            ApiError::Repository(e) => {
                tracing::error!(error = %e, "item request failed");
                "Internal server error".to_string()
            }
            other => other.to_string(),
        };
        (status, Json(json!({ "error": message }))).into_response()
    }
}

//! # REST API Errors
//!
//! Error types for the REST API module.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::schema::ValidationError;
use crate::store::StoreError;

/// Result type for REST operations
pub type RestResult<T> = Result<T, RestError>;

/// REST API errors
#[derive(Debug, Clone, Error)]
pub enum RestError {
    // ==================
    // Client Errors (4xx)
    // ==================
    /// Required field missing, empty or of the wrong type
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// Body was not a JSON document
    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    /// Path identifier was not an integer
    #[error("Invalid id: {0}")]
    InvalidId(String),

    // ==================
    // Server Errors (5xx)
    // ==================
    /// Query execution failed in the store
    #[error("{0}")]
    Store(#[from] StoreError),
}

impl RestError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            RestError::Validation(_) => StatusCode::BAD_REQUEST,
            RestError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            RestError::InvalidId(_) => StatusCode::BAD_REQUEST,

            RestError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl From<RestError> for ErrorResponse {
    fn from(err: RestError) -> Self {
        Self {
            error: err.to_string(),
        }
    }
}

impl IntoResponse for RestError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(ErrorResponse::from(self));
        (status, body).into_response()
    }
}

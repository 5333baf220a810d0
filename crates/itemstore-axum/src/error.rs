//! Axum-specific error types and mappings.
//!
//! This module maps `CoreError` and `RepositoryError` onto HTTP status codes
//! and renders a JSON error body.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use itemstore_core::{CoreError, RepositoryError};
use serde::Serialize;
use thiserror::Error;

/// Axum-specific error type.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Path id and payload id disagree.
    #[error("Bad request: {0}")]
    IdMismatch(String),

    /// Conflict (resource already exists).
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Malformed input: bad JSON, wrong types, missing fields or a field
    /// constraint violation.
    #[error("Unprocessable entity: {0}")]
    Validation(String),
}

impl HttpError {
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::IdMismatch(_) => StatusCode::BAD_REQUEST,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }

    /// Stable error type discriminant for client-side handling.
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "NOT_FOUND",
            Self::IdMismatch(_) => "ID_MISMATCH",
            Self::Conflict(_) => "ALREADY_EXISTS",
            Self::Validation(_) => "VALIDATION_ERROR",
        }
    }

    fn message(&self) -> &str {
        match self {
            Self::NotFound(msg)
            | Self::IdMismatch(msg)
            | Self::Conflict(msg)
            | Self::Validation(msg) => msg,
        }
    }
}

/// JSON error response body.
#[derive(Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
    status: u16,
    #[serde(rename = "type")]
    error_type: &'static str,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorBody {
            error: self.message(),
            status: status.as_u16(),
            error_type: self.error_type(),
        };

        (status, axum::Json(body)).into_response()
    }
}

impl From<CoreError> for HttpError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Repository(repo_err) => repo_err.into(),
            CoreError::Validation(validation_err) => Self::Validation(validation_err.to_string()),
            err @ CoreError::IdMismatch { .. } => Self::IdMismatch(err.to_string()),
        }
    }
}

impl From<RepositoryError> for HttpError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound(_) => Self::NotFound(err.to_string()),
            RepositoryError::AlreadyExists(_) => Self::Conflict(err.to_string()),
        }
    }
}

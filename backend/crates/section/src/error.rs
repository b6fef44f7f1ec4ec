//! Section Error Types
//!
//! This module provides section-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

use crate::domain::value_objects::SectionId;

/// Section-specific result type alias
pub type SectionResult<T> = Result<T, SectionError>;

/// Section-specific error variants
///
/// Every variant is a terminal outcome for the request; none is retried.
#[derive(Debug, Error)]
pub enum SectionError {
    /// Payload is empty, malformed or fails a required-field check
    #[error("Invalid section: {0}")]
    InvalidInput(String),

    /// Path segment is not an integer section id
    #[error("Invalid section id: {0}")]
    InvalidId(String),

    /// No section stored under the id
    #[error("Section {0} not found")]
    NotFound(SectionId),

    /// A section with the id already exists
    #[error("Section {0} already exists")]
    Conflict(SectionId),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Marker attached to error responses so response middleware can tell
/// domain failures apart from other responses with the same status.
#[derive(Debug, Clone)]
pub struct FailureDetail {
    pub kind: ErrorKind,
    pub message: String,
}

impl SectionError {
    pub fn invalid(message: impl Into<String>) -> Self {
        SectionError::InvalidInput(message.into())
    }

    /// Get the canonical HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            SectionError::InvalidInput(_) | SectionError::InvalidId(_) => {
                StatusCode::BAD_REQUEST
            }
            SectionError::NotFound(_) => StatusCode::NOT_FOUND,
            SectionError::Conflict(_) => StatusCode::CONFLICT,
            SectionError::Database(_) | SectionError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            SectionError::InvalidInput(_) | SectionError::InvalidId(_) => ErrorKind::BadRequest,
            SectionError::NotFound(_) => ErrorKind::NotFound,
            SectionError::Conflict(_) => ErrorKind::Conflict,
            SectionError::Database(_) | SectionError::Internal(_) => {
                ErrorKind::InternalServerError
            }
        }
    }

    /// Convert to AppError
    ///
    /// Storage details stay in the logs; the client only sees a generic message.
    pub fn to_app_error(&self) -> AppError {
        match self {
            SectionError::InvalidInput(_) => AppError::new(self.kind(), self.to_string())
                .with_action("Send a non-zero Id and a non-empty Name"),
            SectionError::InvalidId(_) => AppError::new(self.kind(), self.to_string())
                .with_action("Use a 32-bit integer section id in the path"),
            SectionError::NotFound(_) => AppError::new(self.kind(), self.to_string()),
            SectionError::Conflict(_) => AppError::new(self.kind(), self.to_string())
                .with_action("Use PUT to change an existing section"),
            SectionError::Database(_) | SectionError::Internal(_) => {
                AppError::new(self.kind(), "Section storage failure")
            }
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            SectionError::Database(e) => {
                tracing::error!(error = %e, "Section database error");
            }
            SectionError::Internal(msg) => {
                tracing::error!(message = %msg, "Section internal error");
            }
            SectionError::Conflict(id) => {
                tracing::warn!(section_id = %id, "Duplicate section id rejected");
            }
            _ => {
                tracing::debug!(error = %self, "Section request rejected");
            }
        }
    }
}

impl From<SectionError> for AppError {
    fn from(err: SectionError) -> Self {
        err.to_app_error()
    }
}

impl IntoResponse for SectionError {
    fn into_response(self) -> Response {
        self.log();
        let app_error = self.to_app_error();
        let detail = FailureDetail {
            kind: app_error.kind(),
            message: app_error.message().to_string(),
        };
        let mut response = app_error.into_response();
        response.extensions_mut().insert(detail);
        response
    }
}

impl From<JsonRejection> for SectionError {
    fn from(rejection: JsonRejection) -> Self {
        SectionError::InvalidInput(rejection.body_text())
    }
}

impl From<PathRejection> for SectionError {
    fn from(rejection: PathRejection) -> Self {
        SectionError::InvalidId(rejection.body_text())
    }
}

//! Unified error handling with Sentry integration.
//!
//! Provides a unified `AppError` type that every handler returns. Its
//! `IntoResponse` impl is the one place errors become HTTP responses: each is
//! rendered as `{"error": {"code": ..., "message": ...}}` and the
//! [`ErrorCode`] is attached to the response extensions for the error-logging
//! middleware.

use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use recipe_box_core::{ErrorCode, ErrorEnvelope, ValidationError};
use thiserror::Error;

use crate::db::RepositoryError;
use crate::services::RecipeError;

/// Application-level error type.
#[derive(Debug, Error)]
pub enum AppError {
    /// Recipe operation failed.
    #[error("Recipe error: {0}")]
    Recipe(#[from] RecipeError),

    /// Payload failed a field rule outside the recipe service.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Resource not found; the message is sent to the client as-is.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Framework-level failure with the status to pass through.
    #[error("HTTP error {status}: {message}")]
    Http { status: StatusCode, message: String },

    /// Store operation failed outside the recipe service.
    #[error("Database error: {0}")]
    Database(#[from] RepositoryError),
}

impl AppError {
    /// Build an `http_error` with an explicit status.
    #[must_use]
    pub fn http(status: StatusCode, message: impl Into<String>) -> Self {
        Self::Http {
            status,
            message: message.into(),
        }
    }

    /// The taxonomy code this error renders with.
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::Recipe(RecipeError::Validation(_)) | Self::Validation(_) => {
                ErrorCode::ValidationError
            }
            Self::Recipe(RecipeError::NotFound(_)) | Self::NotFound(_) => ErrorCode::NotFound,
            Self::Recipe(RecipeError::Repository(_)) | Self::Http { .. } | Self::Database(_) => {
                ErrorCode::HttpError
            }
        }
    }

    /// The HTTP status this error renders with.
    ///
    /// Codes with a fixed status use [`ErrorCode::default_status`]; an
    /// `http_error` carries its own.
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Http { status, .. } => *status,
            _ if self.is_server_error() => StatusCode::INTERNAL_SERVER_ERROR,
            _ => self
                .code()
                .default_status()
                .and_then(|status| StatusCode::from_u16(status).ok())
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
        }
    }

    const fn is_server_error(&self) -> bool {
        matches!(
            self,
            Self::Recipe(RecipeError::Repository(_)) | Self::Database(_)
        )
    }

    /// Client-facing message. Store details are never exposed.
    fn message(&self) -> String {
        match self {
            Self::Recipe(RecipeError::Validation(err)) | Self::Validation(err) => err.to_string(),
            Self::Recipe(RecipeError::NotFound(_)) => "recipe not found".to_string(),
            Self::NotFound(message) | Self::Http { message, .. } => message.clone(),
            Self::Recipe(RecipeError::Repository(_)) | Self::Database(_) => {
                "Internal server error".to_string()
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Capture server errors to Sentry
        if self.is_server_error() {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Request error"
            );
        }

        let code = self.code();
        let envelope = ErrorEnvelope::new(code, self.message());

        let mut response = (self.status(), Json(envelope)).into_response();
        response.extensions_mut().insert(code);
        response
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        Self::http(rejection.status(), rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        Self::http(rejection.status(), rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        Self::http(rejection.status(), rejection.body_text())
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

//! Unified application error handling.
//!
//! Provides a single error type for the service layer that maps to a stable
//! error code, an HTTP status and an Axum response body.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use domain::DomainError;
use serde::Serialize;
use thiserror::Error;

/// Application error types.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AppError {
    // Authentication
    #[error("Invalid credentials")]
    InvalidCredentials,

    // Resource errors
    #[error("Resource not found")]
    NotFound,

    #[error("{} with ID {id} not found", capitalize(.entity))]
    NotFoundEntity { entity: String, id: String },

    #[error("{0} already exists")]
    Conflict(String),

    // Validation
    #[error("{0}")]
    Validation(String),

    // Storage failures, message already carries the operation context
    #[error("{0}")]
    Persistence(String),

    // Internal
    #[error("Internal server error")]
    Internal(String),
}

/// Error response body for HTTP
#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    code: String,
    message: String,
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

impl AppError {
    /// Get error code for client
    pub fn code(&self) -> &'static str {
        match self {
            AppError::InvalidCredentials => "INVALID_CREDENTIALS",
            AppError::NotFound | AppError::NotFoundEntity { .. } => "NOT_FOUND",
            AppError::Conflict(_) => "CONFLICT",
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::Persistence(_) => "PERSISTENCE_ERROR",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Get HTTP status code
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            AppError::NotFound | AppError::NotFoundEntity { .. } => StatusCode::NOT_FOUND,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Persistence(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get user-facing message (hides internal details)
    pub fn user_message(&self) -> String {
        match self {
            AppError::Validation(msg) => msg.clone(),
            AppError::Conflict(msg) => {
                if msg.ends_with("already exists") {
                    msg.clone()
                } else {
                    format!("{} already exists", msg)
                }
            }
            AppError::Persistence(msg) => {
                tracing::error!("Persistence error: {}", msg);
                msg.clone()
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                "An internal error occurred".to_string()
            }

            _ => self.to_string(),
        }
    }
}

// =============================================================================
// HTTP Response (Axum)
// =============================================================================

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorResponse {
            error: ErrorBody {
                code: self.code().to_string(),
                message: self.user_message(),
            },
        };

        (status, Json(body)).into_response()
    }
}

// =============================================================================
// Domain Error Conversion
// =============================================================================

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(msg) => AppError::Validation(msg),
            DomainError::Password(msg) => AppError::Validation(msg),
            DomainError::Internal(msg) => AppError::Internal(msg),
        }
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Extension trait for Option -> AppError conversion
pub trait OptionExt<T> {
    fn ok_or_not_found(self) -> AppResult<T>;

    /// `None` becomes `"<Entity> with ID <id> not found"`.
    fn ok_or_not_found_entity(self, entity: &str, id: &str) -> AppResult<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_not_found(self) -> AppResult<T> {
        self.ok_or(AppError::NotFound)
    }

    fn ok_or_not_found_entity(self, entity: &str, id: &str) -> AppResult<T> {
        self.ok_or_else(|| AppError::not_found_entity(entity, id))
    }
}

/// Adds operation context to storage failures.
pub trait ResultExt<T> {
    /// Turn a persistence or internal failure into
    /// `Persistence("Failed to <verb> <entity>: <cause>")`. Client errors pass
    /// through untouched.
    fn op_context(self, verb: &str, entity: &str) -> AppResult<T>;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: Into<AppError>,
{
    fn op_context(self, verb: &str, entity: &str) -> AppResult<T> {
        self.map_err(|err| match err.into() {
            AppError::Persistence(cause) | AppError::Internal(cause) => {
                AppError::Persistence(format!("Failed to {} {}: {}", verb, entity, cause))
            }
            other => other,
        })
    }
}

/// Convenience constructors
impl AppError {
    pub fn not_found_entity(entity: impl Into<String>, id: impl Into<String>) -> Self {
        AppError::NotFoundEntity {
            entity: entity.into(),
            id: id.into(),
        }
    }

    pub fn conflict(entity: impl Into<String>) -> Self {
        AppError::Conflict(entity.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    pub fn persistence(msg: impl Into<String>) -> Self {
        AppError::Persistence(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_entity_message() {
        let err = AppError::not_found_entity("actor", "abc");
        assert_eq!(err.to_string(), "Actor with ID abc not found");
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.code(), "NOT_FOUND");
    }

    #[test]
    fn test_domain_validation_stays_client_error() {
        let err: AppError = DomainError::validation("name: Name cannot contain numbers").into();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.user_message(), "name: Name cannot contain numbers");
    }

    #[test]
    fn test_op_context_wraps_persistence_failure() {
        let result: AppResult<()> = Err(AppError::persistence("DB error"));
        let err = result.op_context("create", "actor").unwrap_err();
        assert_eq!(err, AppError::Persistence("Failed to create actor: DB error".into()));
        assert_eq!(err.user_message(), "Failed to create actor: DB error");
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_op_context_passes_client_errors_through() {
        let result: AppResult<()> = Err(AppError::validation("title: Title cannot be empty"));
        let err = result.op_context("update", "movie").unwrap_err();
        assert_eq!(err, AppError::validation("title: Title cannot be empty"));
    }

    #[test]
    fn test_op_context_accepts_domain_errors() {
        let result: Result<(), DomainError> = Err(DomainError::internal("hash failed"));
        let err = result.op_context("create", "user").unwrap_err();
        assert_eq!(err, AppError::Persistence("Failed to create user: hash failed".into()));
    }

    #[test]
    fn test_internal_message_is_hidden() {
        let err = AppError::internal("lock poisoned");
        assert_eq!(err.user_message(), "An internal error occurred");
    }

    #[test]
    fn test_conflict_message_not_duplicated() {
        assert_eq!(AppError::conflict("User").user_message(), "User already exists");
        assert_eq!(
            AppError::conflict("User already exists").user_message(),
            "User already exists"
        );
    }

    #[test]
    fn test_into_response_status() {
        let response = AppError::InvalidCredentials.into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_option_ext() {
        let missing: Option<u8> = None;
        assert_eq!(missing.ok_or_not_found(), Err(AppError::NotFound));
        assert_eq!(
            missing.ok_or_not_found_entity("movie", "m-1"),
            Err(AppError::not_found_entity("movie", "m-1"))
        );
    }
}

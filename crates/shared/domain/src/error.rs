//! Domain-level errors.
//!
//! These errors represent business rule violations and domain logic failures.
//! They are independent of infrastructure concerns (HTTP, database).

use thiserror::Error;

/// Domain-specific errors for business rule violations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    /// A value object or aggregate invariant was violated
    #[error("Validation error: {0}")]
    Validation(String),

    /// Password hashing or verification failed
    #[error("Password error: {0}")]
    Password(String),

    /// Internal domain error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl DomainError {
    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        DomainError::Validation(msg.into())
    }

    /// Create a validation error scoped to a field, e.g. `"title: Title cannot be empty"`.
    pub fn invalid_field(field: &str, err: DomainError) -> Self {
        match err {
            DomainError::Validation(msg) => DomainError::Validation(format!("{}: {}", field, msg)),
            other => other,
        }
    }

    /// Create a password error
    pub fn password(msg: impl Into<String>) -> Self {
        DomainError::Password(msg.into())
    }

    /// Create an internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        DomainError::Internal(msg.into())
    }
}

/// Result type alias for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_field_prefixes_validation_message() {
        let err = DomainError::invalid_field("name", DomainError::validation("Name cannot contain numbers"));
        assert_eq!(err, DomainError::Validation("name: Name cannot contain numbers".to_string()));
    }

    #[test]
    fn test_invalid_field_keeps_other_errors() {
        let err = DomainError::invalid_field("password", DomainError::password("too short"));
        assert_eq!(err, DomainError::Password("too short".to_string()));
    }
}

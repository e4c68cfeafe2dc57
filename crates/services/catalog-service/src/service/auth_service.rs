//! Authentication service - Handles registration and credential checks.
//!
//! Uses the domain Password value object for hashing. Token issuance is the
//! transport layer's concern; a successful login returns the user.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::{info, warn};

use common::{AppError, AppResult, OptionExt, ResultExt};
use domain::{Password, User, UserProps, UserResponse, ENTITY_USER};

use crate::dto::{validate_request, LoginRequest, RegisterRequest};
use crate::mappers::{Mapper, UserMapper};
use crate::repository::UserRepository;

/// Authentication service trait for dependency injection.
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Register a new user
    async fn register(&self, request: RegisterRequest) -> AppResult<UserResponse>;

    /// Check credentials and return the matching user
    async fn login(&self, request: LoginRequest) -> AppResult<UserResponse>;

    async fn find_by_email(&self, email: &str) -> AppResult<Option<UserResponse>>;
}

/// Concrete implementation of AuthService using repository.
pub struct Authenticator {
    users: Arc<dyn UserRepository>,
}

impl Authenticator {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }
}

#[async_trait]
impl AuthService for Authenticator {
    async fn register(&self, request: RegisterRequest) -> AppResult<UserResponse> {
        validate_request(&request)?;

        if self
            .users
            .find_by_email(&request.email)
            .await
            .op_context("register", ENTITY_USER)?
            .is_some()
        {
            return Err(AppError::conflict("User"));
        }

        let password_hash = Password::new(&request.password)?.into_string();
        let user = User::create(UserProps::new(request.email, password_hash), None)?;

        let created = self
            .users
            .create(user)
            .await
            .op_context("register", ENTITY_USER)?;

        info!(user_id = %created.id(), "User registered");
        Ok(UserMapper::to_json(&created))
    }

    async fn login(&self, request: LoginRequest) -> AppResult<UserResponse> {
        validate_request(&request)?;

        let user = self
            .users
            .find_by_email(&request.email)
            .await
            .op_context("log in", ENTITY_USER)?
            .ok_or_not_found()
            .inspect_err(|_| warn!("Login for unknown email"))?;

        if !Password::from_hash(user.password_hash()).verify(&request.password) {
            warn!(user_id = %user.id(), "Login with wrong password");
            return Err(AppError::InvalidCredentials);
        }

        info!(user_id = %user.id(), "User logged in");
        Ok(UserMapper::to_json(&user))
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<UserResponse>> {
        let user = self
            .users
            .find_by_email(email)
            .await
            .op_context("find", ENTITY_USER)?;

        Ok(user.as_ref().map(UserMapper::to_json))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::UserId;
    use mockall::predicate::eq;

    use crate::repository::MockUserRepository;

    fn stored_user(password: &str) -> User {
        let hash = Password::new(password).unwrap().into_string();
        User::create(
            UserProps::new("admin@example.com", hash),
            Some(UserId::new("u-1")),
        )
        .unwrap()
    }

    fn register_request() -> RegisterRequest {
        RegisterRequest {
            email: "admin@example.com".to_string(),
            password: "12345678".to_string(),
        }
    }

    #[tokio::test]
    async fn test_register_hashes_password() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email()
            .with(eq("admin@example.com"))
            .returning(|_| Ok(None));
        repo.expect_create()
            .withf(|user| {
                user.password_hash() != "12345678"
                    && Password::from_hash(user.password_hash()).verify("12345678")
            })
            .returning(|user| Ok(user));

        let response = Authenticator::new(Arc::new(repo))
            .register(register_request())
            .await
            .unwrap();

        assert_eq!(response.email, "admin@example.com");
    }

    #[tokio::test]
    async fn test_register_existing_email_is_conflict() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email()
            .returning(|_| Ok(Some(stored_user("12345678"))));
        repo.expect_create().never();

        let err = Authenticator::new(Arc::new(repo))
            .register(register_request())
            .await
            .unwrap_err();

        assert_eq!(err.user_message(), "User already exists");
    }

    #[tokio::test]
    async fn test_login_success() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email()
            .returning(|_| Ok(Some(stored_user("12345678"))));

        let response = Authenticator::new(Arc::new(repo))
            .login(LoginRequest {
                email: "admin@example.com".to_string(),
                password: "12345678".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(response.id, "u-1");
    }

    #[tokio::test]
    async fn test_login_wrong_password() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email()
            .returning(|_| Ok(Some(stored_user("12345678"))));

        let err = Authenticator::new(Arc::new(repo))
            .login(LoginRequest {
                email: "admin@example.com".to_string(),
                password: "wrong-password".to_string(),
            })
            .await
            .unwrap_err();

        assert_eq!(err, AppError::InvalidCredentials);
    }

    #[tokio::test]
    async fn test_login_unknown_email() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email().returning(|_| Ok(None));

        let err = Authenticator::new(Arc::new(repo))
            .login(LoginRequest {
                email: "ghost@example.com".to_string(),
                password: "12345678".to_string(),
            })
            .await
            .unwrap_err();

        assert_eq!(err, AppError::NotFound);
    }
}

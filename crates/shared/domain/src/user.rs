//! User domain entity and related types.

use serde::{Deserialize, Serialize};

use crate::error::DomainResult;
use crate::ids::UserId;

/// User domain entity.
///
/// Email format and password length are checked on the request DTO, so the
/// factory does no validation. `password_hash` is always the stored hash.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    id: UserId,
    email: String,
    password_hash: String,
}

/// Properties accepted by [`User::create`]
#[derive(Debug, Clone, PartialEq)]
pub struct UserProps {
    pub email: String,
    pub password_hash: String,
}

impl UserProps {
    pub fn new(email: impl Into<String>, password_hash: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password_hash: password_hash.into(),
        }
    }

    /// Replace the fields present in `patch`, keep the others.
    pub fn merge(self, patch: UserPatch) -> Self {
        Self {
            email: patch.email.unwrap_or(self.email),
            password_hash: patch.password_hash.unwrap_or(self.password_hash),
        }
    }
}

/// Partial update for a user
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserPatch {
    pub email: Option<String>,
    pub password_hash: Option<String>,
}

impl User {
    /// Build a user. Kept fallible so every aggregate factory has the same shape.
    pub fn create(props: UserProps, id: Option<UserId>) -> DomainResult<Self> {
        Ok(Self {
            id: id.unwrap_or_else(UserId::generate),
            email: props.email,
            password_hash: props.password_hash,
        })
    }

    pub fn id(&self) -> &UserId {
        &self.id
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password_hash(&self) -> &str {
        &self.password_hash
    }

    pub fn props(&self) -> UserProps {
        UserProps::new(self.email.clone(), self.password_hash.clone())
    }

    /// New user with `patch` merged over the current props. The id is kept.
    pub fn apply(&self, patch: UserPatch) -> DomainResult<Self> {
        User::create(self.props().merge(patch), Some(self.id.clone()))
    }
}

/// User response (safe to return to client)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: String,
    pub email: String,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            email: user.email.clone(),
        }
    }
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id.into_string(),
            email: user.email,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_generates_id() {
        let user = User::create(UserProps::new("admin@example.com", "hash"), None).unwrap();
        assert!(!user.id().as_str().is_empty());
        assert_eq!(user.email(), "admin@example.com");
    }

    #[test]
    fn test_response_hides_password() {
        let user = User::create(UserProps::new("a@b.io", "secret-hash"), Some(UserId::new("u-1"))).unwrap();
        let json = serde_json::to_value(UserResponse::from(&user)).unwrap();
        assert_eq!(json, serde_json::json!({ "id": "u-1", "email": "a@b.io" }));
    }

    #[test]
    fn test_apply_changes_email_only() {
        let user = User::create(UserProps::new("old@example.com", "hash"), None).unwrap();
        let updated = user
            .apply(UserPatch {
                email: Some("new@example.com".to_string()),
                ..Default::default()
            })
            .unwrap();
        assert_eq!(updated.id(), user.id());
        assert_eq!(updated.email(), "new@example.com");
        assert_eq!(updated.password_hash(), "hash");
    }
}

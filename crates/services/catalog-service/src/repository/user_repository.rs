//! User repository contract and its in-memory implementation.

use async_trait::async_trait;
use tracing::debug;

use common::{AppError, AppResult};
use domain::{DomainResult, User, UserId};

use super::memory_store::MemoryStore;
use crate::mappers::{Mapper, UserMapper};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User repository trait for dependency injection.
///
/// Emails are unique: storing a second user with the same email is a conflict.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create(&self, user: User) -> AppResult<User>;

    async fn find_by_id(&self, id: &UserId) -> AppResult<Option<User>>;

    /// Find user by email address
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    async fn find_all(&self) -> AppResult<Vec<User>>;

    async fn update(&self, id: &UserId, user: User) -> AppResult<Option<User>>;

    async fn delete(&self, id: &UserId) -> AppResult<bool>;
}

#[async_trait]
impl UserRepository for MemoryStore {
    async fn create(&self, user: User) -> AppResult<User> {
        let record = UserMapper::to_persistence(&user);
        let mut tables = self.tables.write().await;

        if tables
            .users
            .iter()
            .any(|row| row.email == record.email || row.id == record.id)
        {
            return Err(AppError::conflict("User"));
        }

        tables.users.push(record.clone());
        debug!(user_id = %record.id, "Stored user");

        Ok(UserMapper::to_domain(&record)?)
    }

    async fn find_by_id(&self, id: &UserId) -> AppResult<Option<User>> {
        let tables = self.tables.read().await;
        let user = tables
            .users
            .iter()
            .find(|row| row.id == id.as_str())
            .map(UserMapper::to_domain)
            .transpose()?;

        Ok(user)
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let tables = self.tables.read().await;
        let user = tables
            .users
            .iter()
            .find(|row| row.email == email)
            .map(UserMapper::to_domain)
            .transpose()?;

        debug!(found = user.is_some(), "Looked up user by email");
        Ok(user)
    }

    async fn find_all(&self) -> AppResult<Vec<User>> {
        let tables = self.tables.read().await;
        let users = tables
            .users
            .iter()
            .map(UserMapper::to_domain)
            .collect::<DomainResult<Vec<_>>>()?;

        Ok(users)
    }

    async fn update(&self, id: &UserId, user: User) -> AppResult<Option<User>> {
        let mut record = UserMapper::to_persistence(&user);
        record.id = id.to_string();
        let mut tables = self.tables.write().await;

        let Some(position) = tables.users.iter().position(|row| row.id == record.id) else {
            return Ok(None);
        };
        if tables
            .users
            .iter()
            .any(|row| row.email == record.email && row.id != record.id)
        {
            return Err(AppError::conflict("User"));
        }

        tables.users[position] = record.clone();
        debug!(user_id = %id, "Updated user");

        Ok(Some(UserMapper::to_domain(&record)?))
    }

    async fn delete(&self, id: &UserId) -> AppResult<bool> {
        let mut tables = self.tables.write().await;
        let before = tables.users.len();
        tables.users.retain(|row| row.id != id.as_str());
        let removed = tables.users.len() != before;

        debug!(user_id = %id, removed, "Deleted user");
        Ok(removed)
    }
}

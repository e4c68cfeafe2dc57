//! Actor repository contract and its in-memory implementation.

use async_trait::async_trait;
use tracing::debug;

use common::{AppError, AppResult, ListOptions, Page};
use domain::{Actor, ActorId, DomainResult};

use super::entities::ActorRecord;
use super::memory_store::{contains_ignore_case, paginate, MemoryStore, SortKey};
use crate::mappers::{ActorMapper, Mapper};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Fields an actor listing can be sorted by
pub const ACTOR_SORT_FIELDS: &[&str] = &["name", "lastName"];

/// Actor repository trait for dependency injection.
///
/// Writes return the stored actor with its relations resolved.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait ActorRepository: Send + Sync {
    /// Insert a new actor and link it to its movies
    async fn create(&self, actor: Actor) -> AppResult<Actor>;

    async fn find_by_id(&self, id: &ActorId) -> AppResult<Option<Actor>>;

    /// Search on name or last name, sort, then page
    async fn find_all_paginated(&self, options: &ListOptions) -> AppResult<Page<Actor>>;

    /// Replace the stored actor. `None` when no actor has this id.
    async fn update(&self, id: &ActorId, actor: Actor) -> AppResult<Option<Actor>>;

    /// Remove the actor and its movie links. `false` when nothing was removed.
    async fn delete(&self, id: &ActorId) -> AppResult<bool>;
}

#[async_trait]
impl ActorRepository for MemoryStore {
    async fn create(&self, actor: Actor) -> AppResult<Actor> {
        let record = ActorMapper::to_persistence(&actor);
        let mut tables = self.tables.write().await;

        if tables.actor_row(&record.id).is_some() {
            return Err(AppError::conflict(format!("Actor with ID {}", record.id)));
        }
        tables.ensure_movies_exist(&record.movies)?;
        tables.link_actor(&record.id, &record.movies);

        let row = ActorRecord {
            movies: Vec::new(),
            ..record
        };
        tables.actors.push(row.clone());
        debug!(actor_id = %row.id, "Stored actor");

        Ok(ActorMapper::to_domain(&tables.hydrate_actor(&row))?)
    }

    async fn find_by_id(&self, id: &ActorId) -> AppResult<Option<Actor>> {
        let tables = self.tables.read().await;
        let actor = tables
            .actor_row(id.as_str())
            .map(|row| ActorMapper::to_domain(&tables.hydrate_actor(row)))
            .transpose()?;

        debug!(actor_id = %id, found = actor.is_some(), "Loaded actor");
        Ok(actor)
    }

    async fn find_all_paginated(&self, options: &ListOptions) -> AppResult<Page<Actor>> {
        let tables = self.tables.read().await;
        let actors = tables
            .actors
            .iter()
            .map(|row| ActorMapper::to_domain(&tables.hydrate_actor(row)))
            .collect::<DomainResult<Vec<_>>>()?;

        paginate(
            actors,
            options,
            ACTOR_SORT_FIELDS,
            |actor, needle| {
                contains_ignore_case(actor.name().value(), needle)
                    || contains_ignore_case(actor.last_name().value(), needle)
            },
            |actor, field| match field {
                "lastName" => SortKey::Text(actor.last_name().value().to_string()),
                _ => SortKey::Text(actor.name().value().to_string()),
            },
        )
    }

    async fn update(&self, id: &ActorId, actor: Actor) -> AppResult<Option<Actor>> {
        let record = ActorMapper::to_persistence(&actor);
        let mut tables = self.tables.write().await;

        let Some(position) = tables.actors.iter().position(|row| row.id == id.as_str()) else {
            return Ok(None);
        };
        tables.ensure_movies_exist(&record.movies)?;
        tables.link_actor(id.as_str(), &record.movies);

        let row = ActorRecord {
            id: id.to_string(),
            movies: Vec::new(),
            ..record
        };
        tables.actors[position] = row.clone();
        debug!(actor_id = %id, "Updated actor");

        Ok(Some(ActorMapper::to_domain(&tables.hydrate_actor(&row))?))
    }

    async fn delete(&self, id: &ActorId) -> AppResult<bool> {
        let removed = self.tables.write().await.remove_actor(id.as_str());
        debug!(actor_id = %id, removed, "Deleted actor");
        Ok(removed)
    }
}

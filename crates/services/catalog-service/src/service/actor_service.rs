//! Actor service - Handles actor use cases.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::{info, warn};

use common::{AppError, AppResult, ListOptions, MessageResponse, OptionExt, Paginated, ResultExt};
use domain::{Actor, ActorId, ActorResponse, MovieId, ENTITY_ACTOR};

use crate::dto::{validate_request, CreateActorRequest, UpdateActorRequest};
use crate::mappers::{ActorMapper, Mapper};
use crate::repository::ActorRepository;

/// Actor service trait for dependency injection.
#[async_trait]
pub trait ActorService: Send + Sync {
    async fn create(&self, request: CreateActorRequest) -> AppResult<ActorResponse>;

    async fn find_all(&self, options: ListOptions) -> AppResult<Paginated<ActorResponse>>;

    async fn find_one(&self, id: &str) -> AppResult<ActorResponse>;

    /// Merge the present fields over the stored actor. The id never changes.
    async fn update(&self, id: &str, request: UpdateActorRequest) -> AppResult<ActorResponse>;

    async fn remove(&self, id: &str) -> AppResult<MessageResponse>;

    /// Record that the actor appears in a movie. Adding the same movie twice is a no-op.
    async fn add_actor_to_movie(&self, actor_id: &str, movie_id: &str) -> AppResult<ActorResponse>;
}

/// Concrete implementation of ActorService using repository.
pub struct ActorManager {
    repo: Arc<dyn ActorRepository>,
}

impl ActorManager {
    pub fn new(repo: Arc<dyn ActorRepository>) -> Self {
        Self { repo }
    }

    async fn load(&self, id: &str) -> AppResult<Actor> {
        let actor = self
            .repo
            .find_by_id(&ActorId::new(id))
            .await
            .op_context("retrieve", ENTITY_ACTOR)?;

        if actor.is_none() {
            warn!(actor_id = %id, "Actor not found");
        }
        actor.ok_or_not_found_entity(ENTITY_ACTOR, id)
    }

    async fn save(&self, actor: Actor) -> AppResult<ActorResponse> {
        let id = actor.id().clone();
        let saved = self
            .repo
            .update(&id, actor)
            .await
            .op_context("update", ENTITY_ACTOR)?
            .ok_or_not_found_entity(ENTITY_ACTOR, id.as_str())?;

        info!(actor_id = %id, "Actor updated");
        Ok(ActorMapper::to_json(&saved))
    }
}

#[async_trait]
impl ActorService for ActorManager {
    async fn create(&self, request: CreateActorRequest) -> AppResult<ActorResponse> {
        validate_request(&request)?;
        let actor = Actor::create(request.into_props(), None)?;

        let created = self
            .repo
            .create(actor)
            .await
            .op_context("create", ENTITY_ACTOR)?;

        info!(actor_id = %created.id(), "Actor created");
        Ok(ActorMapper::to_json(&created))
    }

    async fn find_all(&self, options: ListOptions) -> AppResult<Paginated<ActorResponse>> {
        let page = self
            .repo
            .find_all_paginated(&options)
            .await
            .op_context("retrieve", "actors")?;

        Ok(Paginated::from_page(
            page.map(|actor| ActorMapper::to_json(&actor)),
            &options,
        ))
    }

    async fn find_one(&self, id: &str) -> AppResult<ActorResponse> {
        let actor = self.load(id).await?;
        Ok(ActorMapper::to_json(&actor))
    }

    async fn update(&self, id: &str, request: UpdateActorRequest) -> AppResult<ActorResponse> {
        validate_request(&request)?;
        let existing = self.load(id).await?;
        let updated = existing.apply(request.into_patch())?;
        self.save(updated).await
    }

    async fn remove(&self, id: &str) -> AppResult<MessageResponse> {
        let existing = self.load(id).await?;

        let deleted = self
            .repo
            .delete(existing.id())
            .await
            .op_context("delete", ENTITY_ACTOR)?;
        if !deleted {
            return Err(AppError::persistence(format!(
                "Failed to delete actor with ID {}",
                id
            )));
        }

        info!(actor_id = %id, "Actor deleted");
        Ok(MessageResponse::new(format!(
            "Actor with ID {} deleted successfully",
            id
        )))
    }

    async fn add_actor_to_movie(&self, actor_id: &str, movie_id: &str) -> AppResult<ActorResponse> {
        let actor = self.load(actor_id).await?;
        info!(actor_id = %actor_id, movie_id = %movie_id, "Adding actor to movie");
        self.save(actor.with_movie(MovieId::new(movie_id))).await
    }
}

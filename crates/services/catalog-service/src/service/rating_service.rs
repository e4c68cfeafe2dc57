//! Rating service - Handles rating use cases.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::{info, warn};

use common::{AppError, AppResult, ListOptions, MessageResponse, OptionExt, Paginated, ResultExt};
use domain::{Rating, RatingId, RatingResponse, ENTITY_RATING};

use crate::dto::{validate_request, CreateRatingRequest, UpdateRatingRequest};
use crate::mappers::{Mapper, RatingMapper};
use crate::repository::RatingRepository;

/// Rating service trait for dependency injection.
#[async_trait]
pub trait RatingService: Send + Sync {
    /// Rate an existing movie
    async fn create(&self, request: CreateRatingRequest) -> AppResult<RatingResponse>;

    async fn find_all(&self, options: ListOptions) -> AppResult<Paginated<RatingResponse>>;

    async fn find_one(&self, id: &str) -> AppResult<RatingResponse>;

    async fn update(&self, id: &str, request: UpdateRatingRequest) -> AppResult<RatingResponse>;

    async fn remove(&self, id: &str) -> AppResult<MessageResponse>;
}

/// Concrete implementation of RatingService using repository.
pub struct RatingManager {
    repo: Arc<dyn RatingRepository>,
}

impl RatingManager {
    pub fn new(repo: Arc<dyn RatingRepository>) -> Self {
        Self { repo }
    }

    async fn load(&self, id: &str) -> AppResult<Rating> {
        let rating = self
            .repo
            .find_by_id(&RatingId::new(id))
            .await
            .op_context("retrieve", ENTITY_RATING)?;

        if rating.is_none() {
            warn!(rating_id = %id, "Rating not found");
        }
        rating.ok_or_not_found_entity(ENTITY_RATING, id)
    }
}

#[async_trait]
impl RatingService for RatingManager {
    async fn create(&self, request: CreateRatingRequest) -> AppResult<RatingResponse> {
        validate_request(&request)?;
        let rating = Rating::create(request.into_props(), None)?;

        let created = self
            .repo
            .create(rating)
            .await
            .op_context("create", ENTITY_RATING)?;

        info!(rating_id = %created.id(), movie_id = %created.movie_id(), "Rating created");
        Ok(RatingMapper::to_json(&created))
    }

    async fn find_all(&self, options: ListOptions) -> AppResult<Paginated<RatingResponse>> {
        let page = self
            .repo
            .find_all_paginated(&options)
            .await
            .op_context("retrieve", "ratings")?;

        Ok(Paginated::from_page(
            page.map(|rating| RatingMapper::to_json(&rating)),
            &options,
        ))
    }

    async fn find_one(&self, id: &str) -> AppResult<RatingResponse> {
        let rating = self.load(id).await?;
        Ok(RatingMapper::to_json(&rating))
    }

    async fn update(&self, id: &str, request: UpdateRatingRequest) -> AppResult<RatingResponse> {
        validate_request(&request)?;
        let existing = self.load(id).await?;
        let updated = existing.apply(request.into_patch())?;

        let saved = self
            .repo
            .update(existing.id(), updated)
            .await
            .op_context("update", ENTITY_RATING)?
            .ok_or_not_found_entity(ENTITY_RATING, id)?;

        info!(rating_id = %id, "Rating updated");
        Ok(RatingMapper::to_json(&saved))
    }

    async fn remove(&self, id: &str) -> AppResult<MessageResponse> {
        let existing = self.load(id).await?;

        let deleted = self
            .repo
            .delete(existing.id())
            .await
            .op_context("delete", ENTITY_RATING)?;
        if !deleted {
            return Err(AppError::persistence(format!(
                "Failed to delete rating with ID {}",
                id
            )));
        }

        info!(rating_id = %id, "Rating deleted");
        Ok(MessageResponse::new(format!(
            "Rating with ID {} deleted successfully",
            id
        )))
    }
}

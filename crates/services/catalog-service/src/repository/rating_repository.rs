//! Rating repository contract and its in-memory implementation.

use async_trait::async_trait;
use tracing::debug;

use common::{AppError, AppResult, ListOptions, Page};
use domain::{DomainResult, Rating, RatingId};

use super::entities::RatingRecord;
use super::memory_store::{contains_ignore_case, paginate, MemoryStore, SortKey};
use crate::mappers::{Mapper, RatingMapper};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Fields a rating listing can be sorted by
pub const RATING_SORT_FIELDS: &[&str] = &["score", "comment"];

/// Rating repository trait for dependency injection.
///
/// Every write requires the referenced movie to exist.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait RatingRepository: Send + Sync {
    async fn create(&self, rating: Rating) -> AppResult<Rating>;

    async fn find_by_id(&self, id: &RatingId) -> AppResult<Option<Rating>>;

    /// All ratings in insertion order
    async fn find_all(&self) -> AppResult<Vec<Rating>>;

    /// Search on comment, sort, then page
    async fn find_all_paginated(&self, options: &ListOptions) -> AppResult<Page<Rating>>;

    async fn update(&self, id: &RatingId, rating: Rating) -> AppResult<Option<Rating>>;

    async fn delete(&self, id: &RatingId) -> AppResult<bool>;
}

#[async_trait]
impl RatingRepository for MemoryStore {
    async fn create(&self, rating: Rating) -> AppResult<Rating> {
        let record = RatingMapper::to_persistence(&rating);
        let mut tables = self.tables.write().await;

        if tables.rating_row(&record.id).is_some() {
            return Err(AppError::conflict(format!("Rating with ID {}", record.id)));
        }
        tables.ensure_movies_exist(record.movie.as_ref())?;

        tables.ratings.push(record.clone());
        debug!(rating_id = %record.id, "Stored rating");

        Ok(RatingMapper::to_domain(&tables.hydrate_rating(&record))?)
    }

    async fn find_by_id(&self, id: &RatingId) -> AppResult<Option<Rating>> {
        let tables = self.tables.read().await;
        let rating = tables
            .rating_row(id.as_str())
            .map(|row| RatingMapper::to_domain(&tables.hydrate_rating(row)))
            .transpose()?;

        debug!(rating_id = %id, found = rating.is_some(), "Loaded rating");
        Ok(rating)
    }

    async fn find_all(&self) -> AppResult<Vec<Rating>> {
        let tables = self.tables.read().await;
        let ratings = tables
            .ratings
            .iter()
            .map(|row| RatingMapper::to_domain(&tables.hydrate_rating(row)))
            .collect::<DomainResult<Vec<_>>>()?;

        Ok(ratings)
    }

    async fn find_all_paginated(&self, options: &ListOptions) -> AppResult<Page<Rating>> {
        let ratings = self.find_all().await?;

        paginate(
            ratings,
            options,
            RATING_SORT_FIELDS,
            |rating, needle| contains_ignore_case(rating.comment(), needle),
            |rating, field| match field {
                "comment" => SortKey::Text(rating.comment().to_string()),
                _ => SortKey::Number(rating.score().value()),
            },
        )
    }

    async fn update(&self, id: &RatingId, rating: Rating) -> AppResult<Option<Rating>> {
        let record = RatingMapper::to_persistence(&rating);
        let mut tables = self.tables.write().await;

        let Some(position) = tables.ratings.iter().position(|row| row.id == id.as_str()) else {
            return Ok(None);
        };
        tables.ensure_movies_exist(record.movie.as_ref())?;

        let row = RatingRecord {
            id: id.to_string(),
            ..record
        };
        tables.ratings[position] = row.clone();
        debug!(rating_id = %id, "Updated rating");

        Ok(Some(RatingMapper::to_domain(&tables.hydrate_rating(&row))?))
    }

    async fn delete(&self, id: &RatingId) -> AppResult<bool> {
        let mut tables = self.tables.write().await;
        let before = tables.ratings.len();
        tables.ratings.retain(|row| row.id != id.as_str());
        let removed = tables.ratings.len() != before;

        debug!(rating_id = %id, removed, "Deleted rating");
        Ok(removed)
    }
}

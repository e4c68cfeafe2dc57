//! Movie repository contract and its in-memory implementation.

use async_trait::async_trait;
use tracing::debug;

use common::{AppError, AppResult, ListOptions, Page};
use domain::{DomainResult, Movie, MovieId};

use super::entities::MovieRecord;
use super::memory_store::{contains_ignore_case, paginate, MemoryStore, SortKey};
use crate::mappers::{Mapper, MovieMapper};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Fields a movie listing can be sorted by
pub const MOVIE_SORT_FIELDS: &[&str] = &["title", "description"];

/// Movie repository trait for dependency injection.
///
/// Stored movies come back with their actors and rating scores resolved.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait MovieRepository: Send + Sync {
    async fn create(&self, movie: Movie) -> AppResult<Movie>;

    async fn find_by_id(&self, id: &MovieId) -> AppResult<Option<Movie>>;

    /// Search on title, sort, then page
    async fn find_all_paginated(&self, options: &ListOptions) -> AppResult<Page<Movie>>;

    /// Replace the stored movie. The actor links only change when the new
    /// movie lists actors. `None` when no movie has this id.
    async fn update(&self, id: &MovieId, movie: Movie) -> AppResult<Option<Movie>>;

    /// Remove the movie, its actor links and its ratings.
    async fn delete(&self, id: &MovieId) -> AppResult<bool>;
}

#[async_trait]
impl MovieRepository for MemoryStore {
    async fn create(&self, movie: Movie) -> AppResult<Movie> {
        let record = MovieMapper::to_persistence(&movie);
        let mut tables = self.tables.write().await;

        if tables.movie_row(&record.id).is_some() {
            return Err(AppError::conflict(format!("Movie with ID {}", record.id)));
        }
        tables.ensure_actors_exist(&record.actors)?;
        tables.link_movie(&record.id, &record.actors);

        let row = MovieRecord {
            actors: Vec::new(),
            ratings: Vec::new(),
            ..record
        };
        tables.movies.push(row.clone());
        debug!(movie_id = %row.id, "Stored movie");

        Ok(MovieMapper::to_domain(&tables.hydrate_movie(&row))?)
    }

    async fn find_by_id(&self, id: &MovieId) -> AppResult<Option<Movie>> {
        let tables = self.tables.read().await;
        let movie = tables
            .movie_row(id.as_str())
            .map(|row| MovieMapper::to_domain(&tables.hydrate_movie(row)))
            .transpose()?;

        debug!(movie_id = %id, found = movie.is_some(), "Loaded movie");
        Ok(movie)
    }

    async fn find_all_paginated(&self, options: &ListOptions) -> AppResult<Page<Movie>> {
        let tables = self.tables.read().await;
        let movies = tables
            .movies
            .iter()
            .map(|row| MovieMapper::to_domain(&tables.hydrate_movie(row)))
            .collect::<DomainResult<Vec<_>>>()?;

        paginate(
            movies,
            options,
            MOVIE_SORT_FIELDS,
            |movie, needle| contains_ignore_case(movie.title().value(), needle),
            |movie, field| match field {
                "description" => SortKey::Text(movie.description().value().to_string()),
                _ => SortKey::Text(movie.title().value().to_string()),
            },
        )
    }

    async fn update(&self, id: &MovieId, movie: Movie) -> AppResult<Option<Movie>> {
        let record = MovieMapper::to_persistence(&movie);
        let mut tables = self.tables.write().await;

        let Some(position) = tables.movies.iter().position(|row| row.id == id.as_str()) else {
            return Ok(None);
        };
        if !record.actors.is_empty() {
            tables.ensure_actors_exist(&record.actors)?;
            tables.link_movie(id.as_str(), &record.actors);
        }

        let row = MovieRecord {
            id: id.to_string(),
            actors: Vec::new(),
            ratings: Vec::new(),
            ..record
        };
        tables.movies[position] = row.clone();
        debug!(movie_id = %id, "Updated movie");

        Ok(Some(MovieMapper::to_domain(&tables.hydrate_movie(&row))?))
    }

    async fn delete(&self, id: &MovieId) -> AppResult<bool> {
        let removed = self.tables.write().await.remove_movie(id.as_str());
        debug!(movie_id = %id, removed, "Deleted movie");
        Ok(removed)
    }
}

//! Movie service - Handles movie use cases.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::{info, warn};

use common::{AppError, AppResult, ListOptions, MessageResponse, OptionExt, Paginated, ResultExt};
use domain::{Movie, MovieId, MovieResponse, ENTITY_MOVIE};

use crate::dto::{validate_request, CreateMovieRequest, UpdateMovieRequest};
use crate::mappers::{Mapper, MovieMapper};
use crate::repository::MovieRepository;

/// Movie service trait for dependency injection.
#[async_trait]
pub trait MovieService: Send + Sync {
    async fn create(&self, request: CreateMovieRequest) -> AppResult<MovieResponse>;

    /// Page of movies, searchable by title
    async fn find_all(&self, options: ListOptions) -> AppResult<Paginated<MovieResponse>>;

    async fn find_one(&self, id: &str) -> AppResult<MovieResponse>;

    /// Merge the present fields over the stored movie. Ratings are untouched.
    async fn update(&self, id: &str, request: UpdateMovieRequest) -> AppResult<MovieResponse>;

    /// Delete the movie together with its ratings.
    async fn remove(&self, id: &str) -> AppResult<MessageResponse>;
}

/// Concrete implementation of MovieService using repository.
pub struct MovieManager {
    repo: Arc<dyn MovieRepository>,
}

impl MovieManager {
    pub fn new(repo: Arc<dyn MovieRepository>) -> Self {
        Self { repo }
    }

    async fn load(&self, id: &str) -> AppResult<Movie> {
        let movie = self
            .repo
            .find_by_id(&MovieId::new(id))
            .await
            .op_context("retrieve", ENTITY_MOVIE)?;

        if movie.is_none() {
            warn!(movie_id = %id, "Movie not found");
        }
        movie.ok_or_not_found_entity(ENTITY_MOVIE, id)
    }
}

#[async_trait]
impl MovieService for MovieManager {
    async fn create(&self, request: CreateMovieRequest) -> AppResult<MovieResponse> {
        validate_request(&request)?;
        let movie = Movie::create(request.into_props(), None)?;

        let created = self
            .repo
            .create(movie)
            .await
            .op_context("create", ENTITY_MOVIE)?;

        info!(movie_id = %created.id(), actors = created.actors().len(), "Movie created");
        Ok(MovieMapper::to_json(&created))
    }

    async fn find_all(&self, options: ListOptions) -> AppResult<Paginated<MovieResponse>> {
        let page = self
            .repo
            .find_all_paginated(&options)
            .await
            .op_context("retrieve", "movies")?;

        Ok(Paginated::from_page(
            page.map(|movie| MovieMapper::to_json(&movie)),
            &options,
        ))
    }

    async fn find_one(&self, id: &str) -> AppResult<MovieResponse> {
        let movie = self.load(id).await?;
        Ok(MovieMapper::to_json(&movie))
    }

    async fn update(&self, id: &str, request: UpdateMovieRequest) -> AppResult<MovieResponse> {
        validate_request(&request)?;
        let existing = self.load(id).await?;
        let updated = existing.apply(request.into_patch())?;

        let saved = self
            .repo
            .update(existing.id(), updated)
            .await
            .op_context("update", ENTITY_MOVIE)?
            .ok_or_not_found_entity(ENTITY_MOVIE, id)?;

        info!(movie_id = %id, "Movie updated");
        Ok(MovieMapper::to_json(&saved))
    }

    async fn remove(&self, id: &str) -> AppResult<MessageResponse> {
        let existing = self.load(id).await?;

        let deleted = self
            .repo
            .delete(existing.id())
            .await
            .op_context("delete", ENTITY_MOVIE)?;
        if !deleted {
            return Err(AppError::persistence(format!(
                "Failed to delete movie with ID {}",
                id
            )));
        }

        info!(movie_id = %id, "Movie deleted");
        Ok(MessageResponse::new(format!(
            "Movie with ID {} deleted successfully",
            id
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::{ActorId, MovieProps, Score};

    use crate::repository::MockMovieRepository;

    fn titanic(id: &str) -> Movie {
        Movie::create(
            MovieProps::new("Titanic", "A tragic love story aboard the Titanic.")
                .with_actors(vec![ActorId::new("a-1")])
                .with_ratings(vec![Score::new(5.0).unwrap()]),
            Some(MovieId::new(id)),
        )
        .unwrap()
    }

    fn service(repo: MockMovieRepository) -> MovieManager {
        MovieManager::new(Arc::new(repo))
    }

    #[tokio::test]
    async fn test_create_rejects_blank_title() {
        let mut repo = MockMovieRepository::new();
        repo.expect_create().never();

        let err = service(repo)
            .create(CreateMovieRequest::new("   ", "Something"))
            .await
            .unwrap_err();

        assert_eq!(err, AppError::validation("title: Title cannot be empty"));
    }

    #[tokio::test]
    async fn test_create_with_actors() {
        let mut repo = MockMovieRepository::new();
        repo.expect_create().returning(|movie| Ok(movie));

        let mut request = CreateMovieRequest::new("Inception", "Dreams within dreams.");
        request.actors = vec!["a-1".to_string()];

        let response = service(repo).create(request).await.unwrap();
        assert_eq!(response.actors, vec!["a-1"]);
        assert_eq!(response.ratings, 0.0);
    }

    #[tokio::test]
    async fn test_find_one_reports_average() {
        let mut repo = MockMovieRepository::new();
        repo.expect_find_by_id()
            .returning(|id| Ok(Some(titanic(id.as_str()))));

        let response = service(repo).find_one("movie-1").await.unwrap();
        assert_eq!(response.ratings, 5.0);
    }

    #[tokio::test]
    async fn test_update_keeps_ratings_and_id() {
        let mut repo = MockMovieRepository::new();
        repo.expect_find_by_id()
            .returning(|id| Ok(Some(titanic(id.as_str()))));
        repo.expect_update().returning(|_, movie| Ok(Some(movie)));

        let response = service(repo)
            .update(
                "movie-1",
                UpdateMovieRequest {
                    title: Some("Titanic (1997)".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(response.id, "movie-1");
        assert_eq!(response.title, "Titanic (1997)");
        assert_eq!(response.ratings, 5.0);
        assert_eq!(response.actors, vec!["a-1"]);
    }

    #[tokio::test]
    async fn test_update_vanished_row_is_not_found() {
        let mut repo = MockMovieRepository::new();
        repo.expect_find_by_id()
            .returning(|id| Ok(Some(titanic(id.as_str()))));
        repo.expect_update().returning(|_, _| Ok(None));

        let err = service(repo)
            .update("movie-1", UpdateMovieRequest::default())
            .await
            .unwrap_err();

        assert_eq!(err, AppError::not_found_entity("movie", "movie-1"));
    }

    #[tokio::test]
    async fn test_remove_missing_movie() {
        let mut repo = MockMovieRepository::new();
        repo.expect_find_by_id().returning(|_| Ok(None));
        repo.expect_delete().never();

        let err = service(repo).remove("nope").await.unwrap_err();
        assert_eq!(err.to_string(), "Movie with ID nope not found");
    }
}

//! Demo catalog seeding.
//!
//! Builds the same small catalog on every run: one admin user, two actors,
//! two movies with their casts and one rating per movie.

use serde::Serialize;
use tracing::info;

use common::{AppResult, ListOptions, MAX_PAGE_SIZE};
use domain::{ActorResponse, MovieResponse, RatingResponse, UserResponse};

use crate::config::CatalogConfig;
use crate::dto::{CreateActorRequest, CreateMovieRequest, CreateRatingRequest, RegisterRequest};
use crate::Catalog;

/// Everything `seed` stored, in wire form.
#[derive(Debug, Clone, Serialize)]
pub struct SeedReport {
    pub users: Vec<UserResponse>,
    pub actors: Vec<ActorResponse>,
    pub movies: Vec<MovieResponse>,
    pub ratings: Vec<RatingResponse>,
}

/// Seed `catalog` through its services and report the stored state.
pub async fn seed(catalog: &Catalog, config: &CatalogConfig) -> AppResult<SeedReport> {
    let admin = catalog
        .auth
        .register(RegisterRequest {
            email: config.seed_admin_email.clone(),
            password: config.seed_admin_password.clone(),
        })
        .await?;

    let leonardo = catalog
        .actors
        .create(CreateActorRequest::new("Leonardo", "DiCaprio"))
        .await?;
    let kate = catalog
        .actors
        .create(CreateActorRequest::new("Kate", "Winslet"))
        .await?;

    let mut titanic = CreateMovieRequest::new("Titanic", "A tragic love story aboard the Titanic.");
    titanic.actors = vec![leonardo.id.clone(), kate.id.clone()];
    let titanic = catalog.movies.create(titanic).await?;

    let mut inception = CreateMovieRequest::new(
        "Inception",
        "A mind-bending thriller about dreams within dreams.",
    );
    inception.actors = vec![leonardo.id.clone()];
    let inception = catalog.movies.create(inception).await?;

    catalog
        .ratings
        .create(CreateRatingRequest::new(&titanic.id, 5).with_comment("Amazing movie!"))
        .await?;
    catalog
        .ratings
        .create(CreateRatingRequest::new(&inception.id, 4).with_comment("Very interesting plot."))
        .await?;

    let everything = ListOptions::new(1, MAX_PAGE_SIZE);
    let report = SeedReport {
        users: vec![admin],
        actors: catalog.actors.find_all(everything.clone()).await?.data,
        movies: catalog.movies.find_all(everything.clone()).await?.data,
        ratings: catalog.ratings.find_all(everything).await?.data,
    };

    info!(
        actors = report.actors.len(),
        movies = report.movies.len(),
        ratings = report.ratings.len(),
        "Catalog seeded"
    );
    Ok(report)
}

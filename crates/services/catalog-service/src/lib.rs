//! Catalog Service Library
//!
//! Movies, actors, ratings and users: persistence records, mappers,
//! repository contracts with an in-memory implementation, and the
//! application services that drive the domain layer.

pub mod config;
pub mod dto;
pub mod mappers;
pub mod repository;
pub mod seed;
pub mod service;

use std::sync::Arc;

use serde::Serialize;

use common::ListOptions;

use crate::config::CatalogConfig;
use crate::repository::MemoryStore;
use crate::service::{
    ActorManager, ActorService, AuthService, Authenticator, MovieManager, MovieService,
    RatingManager, RatingService,
};

/// The application services wired to one store.
#[derive(Clone)]
pub struct Catalog {
    pub actors: Arc<dyn ActorService>,
    pub movies: Arc<dyn MovieService>,
    pub ratings: Arc<dyn RatingService>,
    pub auth: Arc<dyn AuthService>,
}

impl Catalog {
    /// Services over a fresh, empty in-memory store.
    pub fn in_memory() -> Self {
        Self::with_store(Arc::new(MemoryStore::new()))
    }

    pub fn with_store(store: Arc<MemoryStore>) -> Self {
        Self {
            actors: Arc::new(ActorManager::new(store.clone())),
            movies: Arc::new(MovieManager::new(store.clone())),
            ratings: Arc::new(RatingManager::new(store.clone())),
            auth: Arc::new(Authenticator::new(store)),
        }
    }
}

/// Listing printed by the CLI.
#[derive(Debug, Clone, Copy)]
pub enum ListTarget {
    Movies,
    Actors,
}

/// Seed a fresh catalog and print it as JSON.
pub async fn run_seed(config: &CatalogConfig, pretty: bool) -> Result<(), Box<dyn std::error::Error>> {
    let catalog = Catalog::in_memory();
    let report = seed::seed(&catalog, config).await?;
    print_json(&report, pretty)
}

/// Seed a fresh catalog and print one page of movies or actors as JSON.
pub async fn run_list(
    config: &CatalogConfig,
    target: ListTarget,
    options: ListOptions,
) -> Result<(), Box<dyn std::error::Error>> {
    let catalog = Catalog::in_memory();
    seed::seed(&catalog, config).await?;

    match target {
        ListTarget::Movies => print_json(&catalog.movies.find_all(options).await?, true),
        ListTarget::Actors => print_json(&catalog.actors.find_all(options).await?, true),
    }
}

fn print_json<T: Serialize>(value: &T, pretty: bool) -> Result<(), Box<dyn std::error::Error>> {
    let output = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{}", output);
    Ok(())
}

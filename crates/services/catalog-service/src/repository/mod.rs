//! Repository layer for data access.

mod actor_repository;
pub mod entities;
mod memory_store;
mod movie_repository;
mod rating_repository;
mod user_repository;

pub use actor_repository::{ActorRepository, ACTOR_SORT_FIELDS};
pub use memory_store::MemoryStore;
pub use movie_repository::{MovieRepository, MOVIE_SORT_FIELDS};
pub use rating_repository::{RatingRepository, RATING_SORT_FIELDS};
pub use user_repository::UserRepository;

#[cfg(any(test, feature = "test-utils"))]
pub use actor_repository::MockActorRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use movie_repository::MockMovieRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use rating_repository::MockRatingRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use user_repository::MockUserRepository;

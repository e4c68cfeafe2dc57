//! Application services: the use cases driving the domain layer.

mod actor_service;
mod auth_service;
mod movie_service;
mod rating_service;

pub use actor_service::{ActorManager, ActorService};
pub use auth_service::{AuthService, Authenticator};
pub use movie_service::{MovieManager, MovieService};
pub use rating_service::{RatingManager, RatingService};

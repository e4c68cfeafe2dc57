//! Domain layer - Core catalog entities and value objects.
//!
//! This crate contains pure domain logic with no infrastructure dependencies.
//! Aggregates are immutable records: every change goes through a factory
//! that re-validates the value objects and produces a new instance.

pub mod actor;
pub mod constants;
pub mod error;
pub mod ids;
pub mod input;
pub mod movie;
pub mod password;
pub mod rating;
pub mod user;
pub mod value_objects;

pub use actor::{Actor, ActorPatch, ActorProps, ActorResponse};
pub use constants::*;
pub use error::{DomainError, DomainResult};
pub use ids::{ActorId, MovieId, RatingId, UserId};
pub use input::Input;
pub use movie::{Movie, MoviePatch, MovieProps, MovieResponse};
pub use password::Password;
pub use rating::{Rating, RatingPatch, RatingProps, RatingResponse};
pub use user::{User, UserPatch, UserProps, UserResponse};
pub use value_objects::{Description, Name, Score, Title, ValueObject};

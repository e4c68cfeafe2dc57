//! Persistence records.
//!
//! Storage shape of the aggregates: snake_case columns, raw scalars instead
//! of value objects, relations as stub references.

pub mod actor;
pub mod movie;
pub mod rating;
pub mod user;

pub use actor::{ActorRecord, ActorRef};
pub use movie::{MovieRecord, MovieRef};
pub use rating::{RatingRecord, RatingRef};
pub use user::UserRecord;

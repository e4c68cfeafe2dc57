//! Mappers between the three representations of each aggregate:
//! domain object, persistence record and wire response.

mod actor_mapper;
mod movie_mapper;
mod rating_mapper;
mod user_mapper;

pub use actor_mapper::ActorMapper;
pub use movie_mapper::MovieMapper;
pub use rating_mapper::RatingMapper;
pub use user_mapper::UserMapper;

use domain::DomainResult;

/// Stateless conversions for one aggregate.
pub trait Mapper {
    type Domain;
    type Record;
    type Json;

    /// Rebuild the aggregate from a record, re-validating every value object.
    fn to_domain(record: &Self::Record) -> DomainResult<Self::Domain>;

    /// Flatten the aggregate into its storage shape. Relations become stub references.
    fn to_persistence(domain: &Self::Domain) -> Self::Record;

    /// Wire representation.
    fn to_json(domain: &Self::Domain) -> Self::Json;
}

use domain::{Actor, ActorId, ActorProps, ActorResponse, DomainResult, MovieId};

use super::Mapper;
use crate::repository::entities::{ActorRecord, MovieRef};

pub struct ActorMapper;

impl Mapper for ActorMapper {
    type Domain = Actor;
    type Record = ActorRecord;
    type Json = ActorResponse;

    fn to_domain(record: &ActorRecord) -> DomainResult<Actor> {
        let movies = record
            .movies
            .iter()
            .map(|movie| MovieId::new(movie.id.clone()))
            .collect();

        Actor::create(
            ActorProps::new(record.name.clone(), record.last_name.clone()).with_movies(movies),
            Some(ActorId::new(record.id.clone())),
        )
    }

    fn to_persistence(actor: &Actor) -> ActorRecord {
        ActorRecord {
            id: actor.id().to_string(),
            name: actor.name().value().to_string(),
            last_name: actor.last_name().value().to_string(),
            movies: actor
                .movies()
                .iter()
                .map(|id| MovieRef::stub(id.as_str()))
                .collect(),
        }
    }

    fn to_json(actor: &Actor) -> ActorResponse {
        ActorResponse::from(actor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::DomainError;

    fn record() -> ActorRecord {
        ActorRecord {
            id: "actor-123".to_string(),
            name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            movies: vec![MovieRef {
                id: "m1".to_string(),
                title: Some("Heat".to_string()),
            }],
        }
    }

    #[test]
    fn test_to_domain_flattens_movies() {
        let actor = ActorMapper::to_domain(&record()).unwrap();
        assert_eq!(actor.id().as_str(), "actor-123");
        assert_eq!(actor.movies(), &[MovieId::new("m1")]);
    }

    #[test]
    fn test_to_domain_rejects_invalid_name() {
        let mut bad = record();
        bad.last_name = "D0e".to_string();
        assert_eq!(
            ActorMapper::to_domain(&bad).unwrap_err(),
            DomainError::validation("lastName: Name cannot contain numbers")
        );
    }

    #[test]
    fn test_to_persistence_uses_stub_references() {
        let actor = ActorMapper::to_domain(&record()).unwrap();
        let stored = ActorMapper::to_persistence(&actor);
        assert_eq!(stored.movies, vec![MovieRef::stub("m1")]);
        assert_eq!(stored.last_name, "Doe");
    }

    #[test]
    fn test_round_trip_keeps_json() {
        let actor = ActorMapper::to_domain(&record()).unwrap();
        let again = ActorMapper::to_domain(&ActorMapper::to_persistence(&actor)).unwrap();
        assert_eq!(ActorMapper::to_json(&again), ActorMapper::to_json(&actor));

        let json = serde_json::to_value(ActorMapper::to_json(&actor)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "id": "actor-123", "name": "Jane", "lastName": "Doe", "movies": ["m1"] })
        );
    }

    #[test]
    fn test_round_trip_keeps_movie_order() {
        let mut stored = record();
        stored.movies = vec![MovieRef::stub("m2"), MovieRef::stub("m1")];

        let actor = ActorMapper::to_domain(&stored).unwrap();
        assert_eq!(actor.movies(), &[MovieId::new("m2"), MovieId::new("m1")]);

        let again = ActorMapper::to_persistence(&actor);
        assert_eq!(again.movies, vec![MovieRef::stub("m2"), MovieRef::stub("m1")]);
    }
}

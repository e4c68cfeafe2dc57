//! Actor aggregate and related types.

use serde::{Deserialize, Serialize};

use crate::error::DomainResult;
use crate::ids::{ActorId, MovieId};
use crate::input::Input;
use crate::value_objects::Name;

/// Actor aggregate.
///
/// `movies` holds weak references to movies by id, in insertion order.
#[derive(Debug, Clone, PartialEq)]
pub struct Actor {
    id: ActorId,
    name: Name,
    last_name: Name,
    movies: Vec<MovieId>,
}

/// Properties accepted by [`Actor::create`]
#[derive(Debug, Clone, PartialEq)]
pub struct ActorProps {
    pub name: Input<Name>,
    pub last_name: Input<Name>,
    /// Defaults to an empty list
    pub movies: Option<Vec<MovieId>>,
}

impl ActorProps {
    pub fn new(name: impl Into<Input<Name>>, last_name: impl Into<Input<Name>>) -> Self {
        Self {
            name: name.into(),
            last_name: last_name.into(),
            movies: None,
        }
    }

    pub fn with_movies(mut self, movies: Vec<MovieId>) -> Self {
        self.movies = Some(movies);
        self
    }

    /// Replace the fields present in `patch`, keep the others.
    pub fn merge(self, patch: ActorPatch) -> Self {
        Self {
            name: patch.name.unwrap_or(self.name),
            last_name: patch.last_name.unwrap_or(self.last_name),
            movies: patch.movies.or(self.movies),
        }
    }
}

/// Partial update for an actor
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ActorPatch {
    pub name: Option<Input<Name>>,
    pub last_name: Option<Input<Name>>,
    pub movies: Option<Vec<MovieId>>,
}

impl Actor {
    /// Build an actor, validating raw names. A fresh id is generated when `id` is `None`.
    pub fn create(props: ActorProps, id: Option<ActorId>) -> DomainResult<Self> {
        let name = props.name.normalize_field("name")?;
        let last_name = props.last_name.normalize_field("lastName")?;

        Ok(Self {
            id: id.unwrap_or_else(ActorId::generate),
            name,
            last_name,
            movies: props.movies.unwrap_or_default(),
        })
    }

    pub fn id(&self) -> &ActorId {
        &self.id
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn last_name(&self) -> &Name {
        &self.last_name
    }

    pub fn movies(&self) -> &[MovieId] {
        &self.movies
    }

    /// Current state as already-validated props.
    pub fn props(&self) -> ActorProps {
        ActorProps {
            name: self.name.clone().into(),
            last_name: self.last_name.clone().into(),
            movies: Some(self.movies.clone()),
        }
    }

    /// New actor with `patch` merged over the current props. The id is kept.
    pub fn apply(&self, patch: ActorPatch) -> DomainResult<Self> {
        Actor::create(self.props().merge(patch), Some(self.id.clone()))
    }

    /// New actor that also appears in `movie_id`. Appending a movie twice is a no-op.
    pub fn with_movie(&self, movie_id: MovieId) -> Self {
        let mut actor = self.clone();
        if !actor.movies.contains(&movie_id) {
            actor.movies.push(movie_id);
        }
        actor
    }
}

/// Actor wire representation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActorResponse {
    pub id: String,
    pub name: String,
    pub last_name: String,
    pub movies: Vec<String>,
}

impl From<&Actor> for ActorResponse {
    fn from(actor: &Actor) -> Self {
        Self {
            id: actor.id.to_string(),
            name: actor.name.value().to_string(),
            last_name: actor.last_name.value().to_string(),
            movies: actor.movies.iter().map(MovieId::to_string).collect(),
        }
    }
}

impl From<Actor> for ActorResponse {
    fn from(actor: Actor) -> Self {
        Self {
            id: actor.id.into_string(),
            name: actor.name.into_inner(),
            last_name: actor.last_name.into_inner(),
            movies: actor.movies.into_iter().map(MovieId::into_string).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DomainError;

    fn john_doe() -> Actor {
        Actor::create(ActorProps::new("John", "Doe"), Some(ActorId::new("actor-123"))).unwrap()
    }

    #[test]
    fn test_create_generates_id_and_defaults_movies() {
        let actor = Actor::create(ActorProps::new("Jane", "Smith"), None).unwrap();

        assert!(!actor.id().as_str().is_empty());
        assert!(actor.movies().is_empty());

        let json = ActorResponse::from(&actor);
        assert_eq!(json.name, "Jane");
        assert_eq!(json.last_name, "Smith");
        assert!(json.movies.is_empty());
        assert_eq!(json.id, actor.id().to_string());
    }

    #[test]
    fn test_create_accepts_validated_names() {
        let props = ActorProps::new(Name::new("Kate").unwrap(), "Winslet");
        let actor = Actor::create(props, None).unwrap();
        assert_eq!(actor.name().value(), "Kate");
    }

    #[test]
    fn test_create_rejects_digit_in_last_name() {
        let err = Actor::create(ActorProps::new("John", "Doe2"), None).unwrap_err();
        assert_eq!(err, DomainError::validation("lastName: Name cannot contain numbers"));
    }

    #[test]
    fn test_apply_changes_only_patched_fields() {
        let actor = john_doe();
        let updated = actor
            .apply(ActorPatch {
                name: Some("Jonathan".into()),
                ..Default::default()
            })
            .unwrap();

        assert_eq!(updated.id(), actor.id());
        assert_eq!(updated.name().value(), "Jonathan");
        assert_eq!(updated.last_name().value(), "Doe");
        assert!(updated.movies().is_empty());
        // source actor untouched
        assert_eq!(actor.name().value(), "John");
    }

    #[test]
    fn test_apply_invalid_patch_fails() {
        let actor = john_doe();
        let result = actor.apply(ActorPatch {
            name: Some("J0hn".into()),
            ..Default::default()
        });
        assert!(result.is_err());
    }

    #[test]
    fn test_with_movie_appends_once() {
        let actor = john_doe()
            .with_movie(MovieId::new("m-1"))
            .with_movie(MovieId::new("m-2"))
            .with_movie(MovieId::new("m-1"));

        assert_eq!(actor.movies(), &[MovieId::new("m-1"), MovieId::new("m-2")]);
    }

    #[test]
    fn test_response_serializes_camel_case() {
        let json = serde_json::to_value(ActorResponse::from(john_doe())).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": "actor-123",
                "name": "John",
                "lastName": "Doe",
                "movies": []
            })
        );
    }
}

//! Movie aggregate and related types.

use serde::{Deserialize, Serialize};

use crate::constants::NO_RATINGS_AVERAGE;
use crate::error::DomainResult;
use crate::ids::{ActorId, MovieId};
use crate::input::Input;
use crate::value_objects::{Description, Score, Title};

/// Movie aggregate.
///
/// `actors` are weak references by id. `ratings` are the scores of the
/// ratings attached to this movie; the ratings themselves are owned by the
/// rating aggregate.
#[derive(Debug, Clone, PartialEq)]
pub struct Movie {
    id: MovieId,
    title: Title,
    description: Description,
    actors: Vec<ActorId>,
    ratings: Vec<Score>,
}

/// Properties accepted by [`Movie::create`]
#[derive(Debug, Clone, PartialEq)]
pub struct MovieProps {
    pub title: Input<Title>,
    pub description: Input<Description>,
    pub actors: Vec<ActorId>,
    pub ratings: Vec<Score>,
}

impl MovieProps {
    pub fn new(title: impl Into<Input<Title>>, description: impl Into<Input<Description>>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            actors: Vec::new(),
            ratings: Vec::new(),
        }
    }

    pub fn with_actors(mut self, actors: Vec<ActorId>) -> Self {
        self.actors = actors;
        self
    }

    pub fn with_ratings(mut self, ratings: Vec<Score>) -> Self {
        self.ratings = ratings;
        self
    }

    /// Replace the fields present in `patch`, keep the others.
    pub fn merge(self, patch: MoviePatch) -> Self {
        Self {
            title: patch.title.unwrap_or(self.title),
            description: patch.description.unwrap_or(self.description),
            actors: patch.actors.unwrap_or(self.actors),
            ratings: self.ratings,
        }
    }
}

/// Partial update for a movie. Ratings change through the rating aggregate.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MoviePatch {
    pub title: Option<Input<Title>>,
    pub description: Option<Input<Description>>,
    pub actors: Option<Vec<ActorId>>,
}

impl Movie {
    /// Build a movie, validating raw title and description.
    pub fn create(props: MovieProps, id: Option<MovieId>) -> DomainResult<Self> {
        let title = props.title.normalize_field("title")?;
        let description = props.description.normalize_field("description")?;

        Ok(Self {
            id: id.unwrap_or_else(MovieId::generate),
            title,
            description,
            actors: props.actors,
            ratings: props.ratings,
        })
    }

    pub fn id(&self) -> &MovieId {
        &self.id
    }

    pub fn title(&self) -> &Title {
        &self.title
    }

    pub fn description(&self) -> &Description {
        &self.description
    }

    pub fn actors(&self) -> &[ActorId] {
        &self.actors
    }

    pub fn ratings(&self) -> &[Score] {
        &self.ratings
    }

    /// Mean score, `NO_RATINGS_AVERAGE` when the movie has no ratings.
    pub fn average_rating(&self) -> f64 {
        Score::average(&self.ratings).unwrap_or(NO_RATINGS_AVERAGE)
    }

    pub fn props(&self) -> MovieProps {
        MovieProps {
            title: self.title.clone().into(),
            description: self.description.clone().into(),
            actors: self.actors.clone(),
            ratings: self.ratings.clone(),
        }
    }

    /// New movie with `patch` merged over the current props. The id is kept.
    pub fn apply(&self, patch: MoviePatch) -> DomainResult<Self> {
        Movie::create(self.props().merge(patch), Some(self.id.clone()))
    }
}

/// Movie wire representation. `ratings` is the average score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieResponse {
    pub id: String,
    pub title: String,
    pub description: String,
    pub actors: Vec<String>,
    pub ratings: f64,
}

impl From<&Movie> for MovieResponse {
    fn from(movie: &Movie) -> Self {
        Self {
            id: movie.id.to_string(),
            title: movie.title.value().to_string(),
            description: movie.description.value().to_string(),
            actors: movie.actors.iter().map(ActorId::to_string).collect(),
            ratings: movie.average_rating(),
        }
    }
}

impl From<Movie> for MovieResponse {
    fn from(movie: Movie) -> Self {
        MovieResponse::from(&movie)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DomainError;

    fn titanic() -> Movie {
        Movie::create(
            MovieProps::new("Titanic", "A tragic love story aboard the Titanic.")
                .with_actors(vec![ActorId::new("a-1"), ActorId::new("a-2")])
                .with_ratings(vec![Score::new(5.0).unwrap(), Score::new(4.0).unwrap()]),
            Some(MovieId::new("movie-1")),
        )
        .unwrap()
    }

    #[test]
    fn test_empty_title_is_rejected() {
        let err = Movie::create(MovieProps::new("", "A film"), None).unwrap_err();
        assert_eq!(err, DomainError::validation("title: Title cannot be empty"));
    }

    #[test]
    fn test_blank_description_is_rejected() {
        let err = Movie::create(MovieProps::new("Heat", "  "), None).unwrap_err();
        assert_eq!(err, DomainError::validation("description: Description cannot be empty"));
    }

    #[test]
    fn test_average_rating() {
        assert_eq!(titanic().average_rating(), 4.5);

        let unrated = Movie::create(MovieProps::new("Heat", "Crime"), None).unwrap();
        assert_eq!(unrated.average_rating(), 0.0);
    }

    #[test]
    fn test_apply_keeps_unpatched_fields() {
        let movie = titanic();
        let updated = movie
            .apply(MoviePatch {
                description: Some("Ship, iceberg.".into()),
                ..Default::default()
            })
            .unwrap();

        assert_eq!(updated.id(), movie.id());
        assert_eq!(updated.title(), movie.title());
        assert_eq!(updated.description().value(), "Ship, iceberg.");
        assert_eq!(updated.actors(), movie.actors());
        assert_eq!(updated.ratings(), movie.ratings());
    }

    #[test]
    fn test_response_uses_average() {
        let json = serde_json::to_value(MovieResponse::from(titanic())).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": "movie-1",
                "title": "Titanic",
                "description": "A tragic love story aboard the Titanic.",
                "actors": ["a-1", "a-2"],
                "ratings": 4.5
            })
        );
    }
}

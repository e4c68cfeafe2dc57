//! Request payloads accepted by the application services.
//!
//! Transport-level checks live here (required fields, score range for client
//! requests, email format, password length). Value object invariants are
//! enforced again by the domain factories.

use serde::Deserialize;
use uuid::Uuid;
use validator::{Validate, ValidationError, ValidationErrors};

use common::{AppError, AppResult};
use domain::{ActorId, ActorPatch, ActorProps, MovieId, MoviePatch, MovieProps, RatingPatch, RatingProps};

// =============================================================================
// Actors
// =============================================================================

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateActorRequest {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "Last name is required"))]
    pub last_name: String,
    #[serde(default)]
    pub movies: Option<Vec<String>>,
}

impl CreateActorRequest {
    pub fn new(name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            last_name: last_name.into(),
            movies: None,
        }
    }

    pub fn into_props(self) -> ActorProps {
        let props = ActorProps::new(self.name, self.last_name);
        match self.movies {
            Some(movies) => props.with_movies(movies.into_iter().map(MovieId::from).collect()),
            None => props,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateActorRequest {
    #[validate(length(min = 1, message = "Name cannot be blank"))]
    pub name: Option<String>,
    #[validate(length(min = 1, message = "Last name cannot be blank"))]
    pub last_name: Option<String>,
    pub movies: Option<Vec<String>>,
}

impl UpdateActorRequest {
    pub fn into_patch(self) -> ActorPatch {
        ActorPatch {
            name: self.name.map(Into::into),
            last_name: self.last_name.map(Into::into),
            movies: self
                .movies
                .map(|movies| movies.into_iter().map(MovieId::from).collect()),
        }
    }
}

// =============================================================================
// Movies
// =============================================================================

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateMovieRequest {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,
    #[serde(default)]
    pub actors: Vec<String>,
}

impl CreateMovieRequest {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            actors: Vec::new(),
        }
    }

    pub fn into_props(self) -> MovieProps {
        MovieProps::new(self.title, self.description)
            .with_actors(self.actors.into_iter().map(ActorId::from).collect())
    }
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMovieRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub actors: Option<Vec<String>>,
}

impl UpdateMovieRequest {
    pub fn into_patch(self) -> MoviePatch {
        MoviePatch {
            title: self.title.map(Into::into),
            description: self.description.map(Into::into),
            actors: self
                .actors
                .map(|actors| actors.into_iter().map(ActorId::from).collect()),
        }
    }
}

// =============================================================================
// Ratings
// =============================================================================

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateRatingRequest {
    #[validate(custom(function = "validate_uuid_v4", message = "Movie ID must be a valid UUID"))]
    pub movie_id: String,
    #[validate(range(min = 1, max = 10, message = "Score must be between 1 and 10"))]
    pub score: i32,
    pub comment: Option<String>,
}

impl CreateRatingRequest {
    pub fn new(movie_id: impl Into<String>, score: i32) -> Self {
        Self {
            movie_id: movie_id.into(),
            score,
            comment: None,
        }
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    pub fn into_props(self) -> RatingProps {
        let props = RatingProps::new(self.score, self.movie_id);
        match self.comment {
            Some(comment) => props.with_comment(comment),
            None => props,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRatingRequest {
    #[validate(range(min = 1, max = 10, message = "Score must be between 1 and 10"))]
    pub score: Option<i32>,
    pub comment: Option<String>,
}

impl UpdateRatingRequest {
    pub fn into_patch(self) -> RatingPatch {
        RatingPatch {
            score: self.score.map(Into::into),
            comment: self.comment,
            movie_id: None,
        }
    }
}

// =============================================================================
// Auth
// =============================================================================

/// User registration request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,
}

/// User login request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

// =============================================================================
// Validation helpers
// =============================================================================

fn validate_uuid_v4(value: &str) -> Result<(), ValidationError> {
    match Uuid::parse_str(value) {
        Ok(id) if id.get_version_num() == 4 => Ok(()),
        _ => Err(ValidationError::new("uuid")),
    }
}

/// Run the derived validation rules and turn failures into a validation error.
pub fn validate_request<T: Validate>(request: &T) -> AppResult<()> {
    request
        .validate()
        .map_err(|e| AppError::validation(format_validation_errors(&e)))
}

/// Format validation errors into a user-friendly string
fn format_validation_errors(errors: &ValidationErrors) -> String {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|(a, _), (b, _)| a.cmp(b));

    fields
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| {
                e.message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("{} is invalid", field))
            })
        })
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_actor_requires_names() {
        let err = validate_request(&CreateActorRequest::new("", "Doe")).unwrap_err();
        assert_eq!(err, AppError::validation("Name is required"));
    }

    #[test]
    fn test_create_actor_deserializes_camel_case() {
        let request: CreateActorRequest =
            serde_json::from_str(r#"{"name":"Kate","lastName":"Winslet","movies":["m1"]}"#).unwrap();
        assert_eq!(request.last_name, "Winslet");
        assert_eq!(request.into_props().movies, Some(vec![MovieId::new("m1")]));
    }

    #[test]
    fn test_rating_score_range() {
        let movie_id = Uuid::new_v4().to_string();
        assert!(validate_request(&CreateRatingRequest::new(&movie_id, 10)).is_ok());

        let err = validate_request(&CreateRatingRequest::new(&movie_id, 0)).unwrap_err();
        assert_eq!(err, AppError::validation("Score must be between 1 and 10"));
    }

    #[test]
    fn test_rating_movie_id_must_be_uuid() {
        let err = validate_request(&CreateRatingRequest::new("movie-1", 5)).unwrap_err();
        assert_eq!(err, AppError::validation("Movie ID must be a valid UUID"));
    }

    #[test]
    fn test_register_rules() {
        let ok = RegisterRequest {
            email: "admin@example.com".into(),
            password: "123456".into(),
        };
        assert!(validate_request(&ok).is_ok());

        let short = RegisterRequest {
            email: "admin@example.com".into(),
            password: "12345".into(),
        };
        assert_eq!(
            validate_request(&short).unwrap_err(),
            AppError::validation("Password must be at least 6 characters")
        );

        let bad_email = RegisterRequest {
            email: "not-an-email".into(),
            password: "123456".into(),
        };
        assert_eq!(
            validate_request(&bad_email).unwrap_err(),
            AppError::validation("Invalid email format")
        );
    }

    #[test]
    fn test_update_patch_only_sets_present_fields() {
        let patch = UpdateRatingRequest {
            score: Some(9),
            comment: None,
        }
        .into_patch();
        assert!(patch.score.is_some());
        assert!(patch.comment.is_none());
        assert!(patch.movie_id.is_none());
    }
}

//! Rating aggregate and related types.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_COMMENT;
use crate::error::DomainResult;
use crate::ids::{MovieId, RatingId};
use crate::input::Input;
use crate::value_objects::Score;

/// Rating aggregate: a score left on a movie, with an optional comment.
#[derive(Debug, Clone, PartialEq)]
pub struct Rating {
    id: RatingId,
    score: Score,
    comment: String,
    movie_id: MovieId,
}

/// Properties accepted by [`Rating::create`]
#[derive(Debug, Clone, PartialEq)]
pub struct RatingProps {
    pub score: Input<Score, f64>,
    /// Defaults to an empty comment
    pub comment: Option<String>,
    pub movie_id: MovieId,
}

impl RatingProps {
    pub fn new(score: impl Into<Input<Score, f64>>, movie_id: impl Into<MovieId>) -> Self {
        Self {
            score: score.into(),
            comment: None,
            movie_id: movie_id.into(),
        }
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    /// Replace the fields present in `patch`, keep the others.
    pub fn merge(self, patch: RatingPatch) -> Self {
        Self {
            score: patch.score.unwrap_or(self.score),
            comment: patch.comment.or(self.comment),
            movie_id: patch.movie_id.unwrap_or(self.movie_id),
        }
    }
}

/// Partial update for a rating
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RatingPatch {
    pub score: Option<Input<Score, f64>>,
    pub comment: Option<String>,
    pub movie_id: Option<MovieId>,
}

impl Rating {
    /// Build a rating, validating a raw score.
    pub fn create(props: RatingProps, id: Option<RatingId>) -> DomainResult<Self> {
        let score = props.score.normalize_field("score")?;

        Ok(Self {
            id: id.unwrap_or_else(RatingId::generate),
            score,
            comment: props.comment.unwrap_or_else(|| DEFAULT_COMMENT.to_string()),
            movie_id: props.movie_id,
        })
    }

    pub fn id(&self) -> &RatingId {
        &self.id
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn comment(&self) -> &str {
        &self.comment
    }

    pub fn movie_id(&self) -> &MovieId {
        &self.movie_id
    }

    pub fn props(&self) -> RatingProps {
        RatingProps {
            score: self.score.into(),
            comment: Some(self.comment.clone()),
            movie_id: self.movie_id.clone(),
        }
    }

    /// New rating with `patch` merged over the current props. The id is kept.
    pub fn apply(&self, patch: RatingPatch) -> DomainResult<Self> {
        Rating::create(self.props().merge(patch), Some(self.id.clone()))
    }
}

/// Rating wire representation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RatingResponse {
    pub id: String,
    pub score: f64,
    pub comment: String,
    pub movie_id: String,
}

impl From<&Rating> for RatingResponse {
    fn from(rating: &Rating) -> Self {
        Self {
            id: rating.id.to_string(),
            score: rating.score.value(),
            comment: rating.comment.clone(),
            movie_id: rating.movie_id.to_string(),
        }
    }
}

impl From<Rating> for RatingResponse {
    fn from(rating: Rating) -> Self {
        Self {
            id: rating.id.into_string(),
            score: rating.score.value(),
            comment: rating.comment,
            movie_id: rating.movie_id.into_string(),
        }
    }
}

//! Movie record and the reference other records hold to a movie.

use serde::{Deserialize, Serialize};

use super::actor::ActorRef;
use super::rating::RatingRef;

/// Row of the `movies` table with its resolved relations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieRecord {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub actors: Vec<ActorRef>,
    #[serde(default)]
    pub ratings: Vec<RatingRef>,
}

/// Movie side of a relation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieRef {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl MovieRef {
    /// Reference carrying only the foreign id.
    pub fn stub(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: None,
        }
    }
}

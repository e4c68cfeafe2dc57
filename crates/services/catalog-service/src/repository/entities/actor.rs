//! Actor record and the reference other records hold to an actor.

use serde::{Deserialize, Serialize};

use super::movie::MovieRef;

/// Row of the `actors` table with its resolved movie relation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActorRecord {
    pub id: String,
    pub name: String,
    pub last_name: String,
    #[serde(default)]
    pub movies: Vec<MovieRef>,
}

impl ActorRecord {
    /// "name last_name", skipping an empty part.
    pub fn display_name(&self) -> String {
        [self.name.as_str(), self.last_name.as_str()]
            .iter()
            .filter(|part| !part.trim().is_empty())
            .copied()
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Actor side of the movie-actor relation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActorRef {
    pub id: String,
    /// "name last_name", filled when storage resolves the relation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl ActorRef {
    /// Reference carrying only the foreign id.
    pub fn stub(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: None,
        }
    }
}

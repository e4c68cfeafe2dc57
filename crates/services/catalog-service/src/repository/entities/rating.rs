//! Rating record.

use serde::{Deserialize, Serialize};

use super::movie::MovieRef;

/// Row of the `ratings` table. `movie` is the many-to-one side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatingRecord {
    pub id: String,
    pub score: f64,
    #[serde(default)]
    pub comment: String,
    pub movie: Option<MovieRef>,
}

/// Rating as seen from its movie.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatingRef {
    pub id: String,
    pub score: f64,
}

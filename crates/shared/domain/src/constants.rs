//! Domain-level constants.
//!
//! These constants define business rules and validation requirements.

// =============================================================================
// Scores
// =============================================================================

/// Lowest score a rating can carry
pub const MIN_SCORE: f64 = 0.0;

/// Highest score a rating can carry
pub const MAX_SCORE: f64 = 10.0;

/// Average reported for a movie without ratings
pub const NO_RATINGS_AVERAGE: f64 = 0.0;

// =============================================================================
// Validation
// =============================================================================

/// Minimum password length requirement
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Comment stored when a rating is created without one
pub const DEFAULT_COMMENT: &str = "";

// =============================================================================
// Entity labels
// =============================================================================

/// Entity names used in error messages
pub const ENTITY_ACTOR: &str = "actor";
pub const ENTITY_MOVIE: &str = "movie";
pub const ENTITY_RATING: &str = "rating";
pub const ENTITY_USER: &str = "user";

//! Rating score value object.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::ValueObject;
use crate::constants::{MAX_SCORE, MIN_SCORE};
use crate::error::{DomainError, DomainResult};

/// A validated score in `[MIN_SCORE, MAX_SCORE]`, both ends inclusive.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Score(f64);

impl Score {
    /// Create a new validated score.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if the value is outside the range or NaN.
    pub fn new(value: f64) -> DomainResult<Self> {
        if !(MIN_SCORE..=MAX_SCORE).contains(&value) {
            return Err(DomainError::validation(format!(
                "Score must be between {} and {}",
                MIN_SCORE, MAX_SCORE
            )));
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    /// Mean of a set of scores, `None` when empty.
    pub fn average(scores: &[Score]) -> Option<f64> {
        if scores.is_empty() {
            return None;
        }
        let sum: f64 = scores.iter().map(Score::value).sum();
        Some(sum / scores.len() as f64)
    }
}

impl ValueObject for Score {
    type Raw = f64;

    fn from_raw(raw: f64) -> DomainResult<Self> {
        Score::new(raw)
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<f64> for Score {
    type Error = DomainError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Score> for f64 {
    fn from(score: Score) -> f64 {
        score.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_bounds_are_inclusive() {
        assert_eq!(Score::new(0.0).unwrap().value(), 0.0);
        assert_eq!(Score::new(10.0).unwrap().value(), 10.0);
        assert_eq!(Score::new(7.5).unwrap().value(), 7.5);
    }

    #[test]
    fn test_score_out_of_range() {
        for value in [-0.5, 10.1, 11.0, -100.0, f64::NAN, f64::INFINITY] {
            let err = Score::new(value).unwrap_err();
            assert_eq!(err, DomainError::validation("Score must be between 0 and 10"));
        }
    }

    #[test]
    fn test_average() {
        let scores = [Score::new(5.0).unwrap(), Score::new(4.0).unwrap()];
        assert_eq!(Score::average(&scores), Some(4.5));
        assert_eq!(Score::average(&[]), None);
    }

    #[test]
    fn test_score_deserialize_validates() {
        assert!(serde_json::from_str::<Score>("11").is_err());
        assert_eq!(serde_json::from_str::<Score>("3").unwrap().value(), 3.0);
    }
}

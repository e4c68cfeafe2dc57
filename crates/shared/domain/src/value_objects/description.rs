//! Movie description value object.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::ValueObject;
use crate::error::{DomainError, DomainResult};

/// A validated movie description (non-empty after trimming, stored verbatim)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Description(String);

impl Description {
    /// Create a new validated description.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if the description is empty or whitespace only.
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::validation("Description cannot be empty"));
        }
        Ok(Self(value))
    }

    /// Returns the description as a string slice.
    pub fn value(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl ValueObject for Description {
    type Raw = String;

    fn from_raw(raw: String) -> DomainResult<Self> {
        Description::new(raw)
    }
}

impl fmt::Display for Description {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for Description {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<Description> for String {
    fn from(description: Description) -> String {
        description.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_description_rejects_blank() {
        assert_eq!(
            Description::new("   ").unwrap_err(),
            DomainError::validation("Description cannot be empty")
        );
    }

    #[test]
    fn test_description_round_trips() {
        let text = "A mind-bending thriller about dreams within dreams.";
        assert_eq!(Description::new(text).unwrap().value(), text);
    }
}

//! Person name value object.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::ValueObject;
use crate::error::{DomainError, DomainResult};

/// A validated person name (first or last). Digits are not allowed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Name(String);

impl Name {
    /// Create a new validated name.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if the name contains a digit.
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.chars().any(|c| c.is_ascii_digit()) {
            return Err(DomainError::validation("Name cannot contain numbers"));
        }
        Ok(Self(value))
    }

    /// Returns the name as a string slice.
    pub fn value(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl ValueObject for Name {
    type Raw = String;

    fn from_raw(raw: String) -> DomainResult<Self> {
        Name::new(raw)
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for Name {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<Name> for String {
    fn from(name: Name) -> String {
        name.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_round_trips_value() {
        for raw in ["Jane", "O'Brien", "José", "Mary-Kate", "", "   "] {
            assert_eq!(Name::new(raw).unwrap().value(), raw);
        }
    }

    #[test]
    fn test_name_rejects_digits() {
        for raw in ["Jane2", "0", "R2D2", "Agent 47"] {
            let err = Name::new(raw).unwrap_err();
            assert_eq!(err, DomainError::validation("Name cannot contain numbers"));
        }
    }

    #[test]
    fn test_name_deserialize_validates() {
        let ok: Name = serde_json::from_str("\"Kate\"").unwrap();
        assert_eq!(ok.value(), "Kate");
        assert!(serde_json::from_str::<Name>("\"K4te\"").is_err());
    }
}

//! Raw-or-validated factory input.
//!
//! Aggregate factories are called both with raw request data and with value
//! objects that were already validated (for example when a repository
//! rebuilds an aggregate, or an update merges over existing props).
//! `Input` carries either form and `normalize` turns it into the value object.

use serde::Deserialize;

use crate::error::{DomainError, DomainResult};
use crate::value_objects::{Description, Name, Score, Title, ValueObject};

/// Either a raw scalar still to be validated or an already validated value object.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Input<V, R = String> {
    /// Unvalidated scalar
    Raw(R),
    /// Value object that already holds its invariant
    Valid(V),
}

impl<V, R> Input<V, R>
where
    V: ValueObject<Raw = R>,
{
    /// Produce the value object, validating the raw scalar when needed.
    pub fn normalize(self) -> DomainResult<V> {
        match self {
            Input::Raw(raw) => V::from_raw(raw),
            Input::Valid(value) => Ok(value),
        }
    }

    /// Like `normalize`, but names the field in the validation message.
    pub fn normalize_field(self, field: &str) -> DomainResult<V> {
        self.normalize()
            .map_err(|e| DomainError::invalid_field(field, e))
    }
}

impl<V> From<String> for Input<V, String> {
    fn from(raw: String) -> Self {
        Input::Raw(raw)
    }
}

impl<V> From<&str> for Input<V, String> {
    fn from(raw: &str) -> Self {
        Input::Raw(raw.to_string())
    }
}

impl<V> From<f64> for Input<V, f64> {
    fn from(raw: f64) -> Self {
        Input::Raw(raw)
    }
}

impl<V> From<i32> for Input<V, f64> {
    fn from(raw: i32) -> Self {
        Input::Raw(f64::from(raw))
    }
}

macro_rules! valid_input {
    ($value:ty, $raw:ty) => {
        impl From<$value> for Input<$value, $raw> {
            fn from(value: $value) -> Self {
                Input::Valid(value)
            }
        }
    };
}

valid_input!(Name, String);
valid_input!(Title, String);
valid_input!(Description, String);
valid_input!(Score, f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_input_is_validated() {
        let input: Input<Name> = "Jane".into();
        assert_eq!(input.normalize().unwrap().value(), "Jane");

        let bad: Input<Name> = "J4ne".into();
        assert!(bad.normalize().is_err());
    }

    #[test]
    fn test_valid_input_passes_through() {
        let name = Name::new("Kate").unwrap();
        let input: Input<Name> = name.clone().into();
        assert_eq!(input.normalize().unwrap(), name);
    }

    #[test]
    fn test_normalize_field_names_the_field() {
        let input: Input<Title> = "".into();
        let err = input.normalize_field("title").unwrap_err();
        assert_eq!(err, DomainError::validation("title: Title cannot be empty"));
    }

    #[test]
    fn test_numeric_inputs() {
        let input: Input<Score, f64> = 7.into();
        assert_eq!(input.normalize().unwrap().value(), 7.0);

        let input: Input<Score, f64> = 11.5.into();
        assert!(input.normalize().is_err());
    }

    #[test]
    fn test_deserialize_raw_then_validate() {
        let input: Input<Score, f64> = serde_json::from_str("12").unwrap();
        assert!(input.normalize().is_err());
    }
}

//! Strongly-typed value objects used by domain entities.
//!
//! These wrappers enforce basic invariants (positive identifiers, non-empty
//! titles, `m:ss` durations) so that once a value reaches the domain layer it
//! can be treated as trusted.
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced when attempting to construct a constrained value object.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// Provided identifier is zero or negative.
    #[error("id must be greater than zero")]
    NonPositiveId,
    /// Provided string contained no non-whitespace characters.
    #[error("value cannot be empty")]
    EmptyString,
    /// Duration was not written as `m:ss`.
    #[error("invalid duration, expected m:ss")]
    InvalidDuration,
    /// Provided value failed custom validation.
    #[error("invalid value: {0}")]
    InvalidValue(String),
}

/// Macro to generate lightweight newtypes for positive identifiers.
macro_rules! id_newtype {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
        pub struct $name(i32);

        impl $name {
            /// Creates a new identifier ensuring it is greater than zero.
            pub fn new(value: i32) -> Result<Self, TypeConstraintError> {
                if value > 0 {
                    Ok(Self(value))
                } else {
                    Err(TypeConstraintError::NonPositiveId)
                }
            }

            /// Returns the raw `i32` backing this identifier.
            pub const fn get(self) -> i32 {
                self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl TryFrom<i32> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: i32) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for i32 {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

id_newtype!(UserId, "Unique identifier for a platform user.");
id_newtype!(PostId, "Unique identifier for a post.");
id_newtype!(ReportId, "Unique identifier for an abuse report.");
id_newtype!(
    MessageInsightId,
    "Unique identifier for a direct-message activity row."
);
id_newtype!(TrackId, "Unique identifier for a music track.");
id_newtype!(CategoryId, "Unique identifier for a music category.");
id_newtype!(InsightId, "Unique identifier for an insights row.");

/// Trimmed string guaranteed to contain at least one character.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct NonEmptyString(String);

impl NonEmptyString {
    /// Trims whitespace and rejects empty inputs.
    pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
        let trimmed = value.into().trim().to_string();
        if trimmed.is_empty() {
            return Err(TypeConstraintError::EmptyString);
        }
        Ok(Self(trimmed))
    }

    /// Borrow the inner string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the wrapper returning the owned string.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Display for NonEmptyString {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<&str> for NonEmptyString {
    type Error = TypeConstraintError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Track length written as `m:ss`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TrackDuration {
    seconds: u32,
}

impl TrackDuration {
    pub fn from_seconds(seconds: u32) -> Self {
        Self { seconds }
    }

    pub fn seconds(self) -> u32 {
        self.seconds
    }
}

impl FromStr for TrackDuration {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (minutes, seconds) = s
            .trim()
            .split_once(':')
            .ok_or(TypeConstraintError::InvalidDuration)?;

        if seconds.len() != 2 {
            return Err(TypeConstraintError::InvalidDuration);
        }

        let minutes: u32 = minutes
            .parse()
            .map_err(|_| TypeConstraintError::InvalidDuration)?;
        let seconds: u32 = seconds
            .parse()
            .map_err(|_| TypeConstraintError::InvalidDuration)?;

        if seconds >= 60 {
            return Err(TypeConstraintError::InvalidDuration);
        }

        minutes
            .checked_mul(60)
            .and_then(|total| total.checked_add(seconds))
            .map(Self::from_seconds)
            .ok_or(TypeConstraintError::InvalidDuration)
    }
}

impl Display for TrackDuration {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{:02}", self.seconds / 60, self.seconds % 60)
    }
}

impl Serialize for TrackDuration {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TrackDuration {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_must_be_positive() {
        assert_eq!(UserId::new(0), Err(TypeConstraintError::NonPositiveId));
        assert_eq!(ReportId::try_from(-3), Err(TypeConstraintError::NonPositiveId));
        assert_eq!(PostId::new(7).map(PostId::get), Ok(7));
    }

    #[test]
    fn non_empty_string_trims() {
        assert_eq!(NonEmptyString::new("  Pop ").unwrap().as_str(), "Pop");
        assert_eq!(
            NonEmptyString::new("   "),
            Err(TypeConstraintError::EmptyString)
        );
    }

    #[test]
    fn duration_parses_minutes_and_seconds() {
        let duration: TrackDuration = "3:45".parse().unwrap();

        assert_eq!(duration.seconds(), 225);
        assert_eq!(duration.to_string(), "3:45");
        assert_eq!(TrackDuration::from_seconds(62).to_string(), "1:02");
    }

    #[test]
    fn duration_rejects_malformed_input() {
        for raw in ["345", "3:5", "3:75", "a:10", "", "4294967295:00", "71582789:00"] {
            assert_eq!(
                raw.parse::<TrackDuration>(),
                Err(TypeConstraintError::InvalidDuration),
                "{raw}"
            );
        }
    }
}

//! Typed row identifiers
//!
//! Posts, users and comments are keyed by positive integers assigned by the
//! store. Each gets its own newtype so a `UserId` can never be passed where a
//! `PostId` is expected.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Error when parsing an identifier from a path segment or token claim
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum IdParseError {
    #[error("invalid id format")]
    InvalidFormat,

    #[error("id must be positive")]
    NotPositive,
}

macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Wrap a raw store id
            #[inline]
            pub const fn new(id: i64) -> Self {
                Self(id)
            }

            /// Get the inner i64 value
            #[inline]
            pub const fn into_inner(self) -> i64 {
                self.0
            }

            /// Parse from string representation, rejecting zero and negatives
            pub fn parse(s: &str) -> Result<Self, IdParseError> {
                let raw = s
                    .trim()
                    .parse::<i64>()
                    .map_err(|_| IdParseError::InvalidFormat)?;
                if raw <= 0 {
                    return Err(IdParseError::NotPositive);
                }
                Ok(Self(raw))
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<i64> for $name {
            fn from(id: i64) -> Self {
                Self(id)
            }
        }

        impl From<$name> for i64 {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl std::str::FromStr for $name {
            type Err = IdParseError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse(s)
            }
        }
    };
}

define_id!(
    /// Blog post identifier
    PostId
);

define_id!(
    /// Account identifier, taken from the `sub` claim of a verified token
    UserId
);

define_id!(
    /// Comment identifier
    CommentId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid() {
        let id = PostId::parse("42").unwrap();
        assert_eq!(id.into_inner(), 42);

        let id: UserId = " 7 ".parse().unwrap();
        assert_eq!(id, UserId::new(7));
    }

    #[test]
    fn test_parse_rejects_garbage_and_non_positive() {
        assert_eq!(PostId::parse("abc"), Err(IdParseError::InvalidFormat));
        assert_eq!(PostId::parse(""), Err(IdParseError::InvalidFormat));
        assert_eq!(PostId::parse("0"), Err(IdParseError::NotPositive));
        assert_eq!(PostId::parse("-3"), Err(IdParseError::NotPositive));
    }

    #[test]
    fn test_display() {
        assert_eq!(CommentId::new(123).to_string(), "123");
    }

    #[test]
    fn test_serializes_as_integer() {
        let json = serde_json::to_string(&PostId::new(9)).unwrap();
        assert_eq!(json, "9");

        let id: UserId = serde_json::from_str("15").unwrap();
        assert_eq!(id, UserId::new(15));
    }
}

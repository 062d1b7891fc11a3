//! Stable ID newtype for pets.
//!
//! Pet ids are caller-assigned 64-bit integers. [`PetId`] parses from the raw
//! path segment so the HTTP layer never handles a bare `i64`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Caller-assigned pet identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PetId(pub i64);

impl fmt::Display for PetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PetId {
    type Err = CoreError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        raw.parse::<i64>()
            .map(PetId)
            .map_err(|_| CoreError::InvalidId {
                raw: raw.to_string(),
            })
    }
}

impl From<i64> for PetId {
    fn from(value: i64) -> Self {
        PetId(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_integer() {
        assert_eq!("3".parse::<PetId>().unwrap(), PetId(3));
        assert_eq!("-7".parse::<PetId>().unwrap(), PetId(-7));
    }

    #[test]
    fn rejects_non_integer() {
        let err = "abc".parse::<PetId>().unwrap_err();
        assert_eq!(
            err,
            CoreError::InvalidId {
                raw: "abc".to_string()
            }
        );
        assert!("1.5".parse::<PetId>().is_err());
        assert!("".parse::<PetId>().is_err());
        assert!(" 4".parse::<PetId>().is_err());
        assert!("99999999999999999999".parse::<PetId>().is_err());
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", PetId(42)), "42");
    }

    #[test]
    fn serializes_as_bare_number() {
        assert_eq!(serde_json::to_string(&PetId(9)).unwrap(), "9");
    }
}

//! Opaque identifier shared by users and targets.

use serde::{Deserialize, Deserializer, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Identifier of a user or of a notification target.
///
/// Event files carry ids either as JSON integers or as strings, and the user id
/// given on the command line is plain text. All of them are normalized to their
/// textual form so that `1` and `"1"` compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Id(String);

impl Id {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Id {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for Id {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<u64> for Id {
    fn from(value: u64) -> Self {
        Self(value.to_string())
    }
}

impl FromStr for Id {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.trim().to_string()))
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Unsigned(u64),
    Signed(i64),
    Text(String),
}

impl<'de> Deserialize<'de> for Id {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match RawId::deserialize(deserializer)? {
            RawId::Unsigned(value) => Self(value.to_string()),
            RawId::Signed(value) => Self(value.to_string()),
            RawId::Text(value) => Self(value),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_and_string_ids_are_equal() {
        let from_int: Id = serde_json::from_str("42").unwrap();
        let from_str: Id = serde_json::from_str("\"42\"").unwrap();
        assert_eq!(from_int, from_str);
        assert_eq!(from_int, Id::from(42u64));
    }

    #[test]
    fn test_negative_id() {
        let id: Id = serde_json::from_str("-7").unwrap();
        assert_eq!(id.as_str(), "-7");
    }

    #[test]
    fn test_parse_from_cli_text_trims() {
        let id: Id = " 12 ".parse().unwrap();
        assert_eq!(id, Id::from("12"));
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let serialized = serde_json::to_string(&Id::from("abc")).unwrap();
        assert_eq!(serialized, "\"abc\"");
    }

    #[test]
    fn test_rejects_non_scalar_id() {
        assert!(serde_json::from_str::<Id>("[1]").is_err());
    }
}

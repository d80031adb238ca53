//! Directed, named, time-bounded edges between entities.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use crate::errors::CoreError;

/// Direction of a relation as seen from the entity it was listed for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Direction {
    Outgoing,
    Incoming,
    /// Any direction string the read API sends that is not recognized, or none.
    #[default]
    #[serde(other)]
    Unknown,
}

impl Direction {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Outgoing => "OUTGOING",
            Self::Incoming => "INCOMING",
            Self::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "OUTGOING" | "OUT" => Ok(Self::Outgoing),
            "INCOMING" | "IN" => Ok(Self::Incoming),
            _ => Err(CoreError::InvalidValue {
                field: "direction".to_string(),
                value: s.to_string(),
            }),
        }
    }
}

/// One edge returned by `POST /{entityId}/relations`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelationResult {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub direction: Direction,
    pub related_entity_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
}

/// The read API sends `null` for absent fields as often as it omits them.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_relation_from_read_api_shape() {
        let rel: RelationResult = serde_json::from_str(
            r#"{
                "id": "rel-1",
                "name": "AS_CATEGORY",
                "direction": "OUTGOING",
                "relatedEntityId": "cat-1",
                "startTime": "2022-01-01T00:00:00Z",
                "endTime": ""
            }"#,
        )
        .unwrap();

        assert_eq!(rel.direction, Direction::Outgoing);
        assert_eq!(rel.related_entity_id, "cat-1");
        assert_eq!(rel.start_time.as_deref(), Some("2022-01-01T00:00:00Z"));
        assert_eq!(rel.end_time.as_deref(), Some(""));
    }

    #[test]
    fn unrecognized_direction_is_unknown() {
        let rel: RelationResult =
            serde_json::from_str(r#"{"name":"X","direction":"SIDEWAYS","relatedEntityId":"e"}"#)
                .unwrap();
        assert_eq!(rel.direction, Direction::Unknown);
        assert!(rel.id.is_empty());
    }

    #[test]
    fn null_fields_fall_back_to_defaults() {
        let rel: RelationResult = serde_json::from_str(
            r#"{"id":null,"name":null,"direction":null,"relatedEntityId":"c1","startTime":null}"#,
        )
        .unwrap();
        assert!(rel.id.is_empty());
        assert!(rel.name.is_empty());
        assert_eq!(rel.direction, Direction::Unknown);
        assert_eq!(rel.related_entity_id, "c1");
        assert_eq!(rel.start_time, None);
    }

    #[test]
    fn direction_from_str_is_case_insensitive() {
        assert_eq!("outgoing".parse::<Direction>(), Ok(Direction::Outgoing));
        assert_eq!("IN".parse::<Direction>(), Ok(Direction::Incoming));
        assert!("north".parse::<Direction>().is_err());
    }
}

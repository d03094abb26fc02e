//! Event data models

use chrono::{DateTime, Utc};
use serde::{de, Deserialize, Deserializer, Serialize};

use super::Id;

/// One raw interaction record from the input stream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// The user the event is addressed to.
    #[serde(rename = "user_id")]
    pub receiver_id: Id,
    pub sender_id: Id,
    pub target_id: Id,
    #[serde(default)]
    pub target_type: String,
    /// Kept raw so unknown ids reach validation instead of failing the decode.
    pub notification_type_id: i64,
    #[serde(deserialize_with = "deserialize_millis")]
    pub created_at: DateTime<Utc>,
}

/// Converts a millisecond epoch to a point in time with whole-second precision.
///
/// Sub-second digits are floored away, so `-1` maps to one second before the epoch.
pub fn millis_to_datetime(millis: i64) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp(millis.div_euclid(1000), 0)
}

fn deserialize_millis<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let millis = i64::deserialize(deserializer)?;
    millis_to_datetime(millis)
        .ok_or_else(|| de::Error::custom(format!("created_at {} is out of range", millis)))
}

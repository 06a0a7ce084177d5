//! Timestamp formats seen on the roster service wire.
//!
//! Scheduled flight times are local date-times, either with seconds
//! (`2025-12-01T10:00:00`) or without, as produced by a `datetime-local` form
//! field (`2025-12-01T10:00`). Roster generation dates come back either as
//! RFC 3339 strings or epoch milliseconds.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serializer, de::Error as _};

const LOCAL_FORMATS: [&str; 3] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S"];

pub fn parse_local(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    LOCAL_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
        .or_else(|| DateTime::parse_from_rfc3339(value).ok().map(|dt| dt.naive_local()))
}

pub mod local {
    use super::{Deserialize, Deserializer, NaiveDateTime, Serializer, parse_local};
    use serde::de::Error as _;

    pub fn serialize<S>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.format("%Y-%m-%dT%H:%M:%S").to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        parse_local(&raw).ok_or_else(|| D::Error::custom(format!("unsupported date-time {raw:?}")))
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Stamp {
    Millis(i64),
    Text(String),
}

pub fn serialize_generated<S>(value: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match value {
        Some(stamp) => serializer.serialize_str(&stamp.to_rfc3339()),
        None => serializer.serialize_none(),
    }
}

pub fn deserialize_generated<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Stamp>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Stamp::Millis(ms)) => DateTime::from_timestamp_millis(ms)
            .map(Some)
            .ok_or_else(|| D::Error::custom(format!("timestamp out of range: {ms}"))),
        Some(Stamp::Text(raw)) => DateTime::parse_from_rfc3339(raw.trim())
            .map(|dt| Some(dt.with_timezone(&Utc)))
            .or_else(|_| {
                parse_local(&raw)
                    .map(|naive| Some(naive.and_utc()))
                    .ok_or_else(|| D::Error::custom(format!("unsupported timestamp {raw:?}")))
            }),
    }
}

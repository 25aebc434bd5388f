//! Serde helper functions for request deserialization.
//!
//! Clients send dates in a handful of shapes (full RFC 3339, a naive
//! timestamp, or a bare date) and use empty strings to mean "leave this
//! alone" in update payloads. These helpers normalize both.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer};

/// Parse a timestamp, accepting RFC 3339, `YYYY-MM-DDTHH:MM:SS[.fff]` or `YYYY-MM-DD`.
///
/// Timestamps without an offset are taken as UTC. A bare date maps to midnight UTC.
pub fn parse_datetime(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }

    if let Ok(naive) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc());
    }

    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Deserialize a required timestamp in any of the shapes [`parse_datetime`] accepts.
pub fn deserialize_datetime<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    parse_datetime(&s)
        .ok_or_else(|| serde::de::Error::custom(format!("invalid date or timestamp: {s}")))
}

/// Deserialize an optional timestamp, treating null and empty strings as None.
pub fn deserialize_optional_datetime<'de, D>(
    deserializer: D,
) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    match s {
        Some(s) if !s.trim().is_empty() => parse_datetime(&s)
            .map(Some)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid date or timestamp: {s}"))),
        _ => Ok(None),
    }
}

/// Deserialize a string that may be null, mapping null to the empty string.
pub fn deserialize_nullable_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    Ok(s.unwrap_or_default())
}

/// Deserialize an optional string, treating empty strings as None.
///
/// Whitespace-only strings are kept: only the empty string means "absent".
pub fn deserialize_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    Ok(s.filter(|s| !s.is_empty()))
}

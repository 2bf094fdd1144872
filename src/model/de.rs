//! Per-field default policies for record deserialization
//!
//! A collection read must never fail because one record field is absent
//! or damaged. Each helper decodes whatever JSON value is present and
//! falls back to the field's default (empty string, zero, false, or the
//! current time) instead of erroring. Only an unparseable root document
//! fails the read, with [`crate::ShelfError::MalformedStore`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// String field: non-string values collapse to `""`.
pub(crate) fn string_or_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value.as_str().map(str::to_owned).unwrap_or_default())
}

/// Integer id field: non-numeric values collapse to `0`.
pub(crate) fn id_or_zero<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value.as_u64().unwrap_or(0))
}

/// Rating field: non-numeric values collapse to `0`.
pub(crate) fn rating_or_zero<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value.as_u64().unwrap_or(0) as u32)
}

/// Boolean flag: accepts a JSON bool or a "true"/"false" string,
/// anything else collapses to `false`.
pub(crate) fn bool_or_false<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value
        .as_bool()
        .or_else(|| value.as_str().and_then(|s| s.trim().to_lowercase().parse().ok()))
        .unwrap_or(false))
}

/// Timestamp field: an unparseable or missing ISO-8601 string collapses
/// to the current time.
pub(crate) fn timestamp_or_now<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value
        .as_str()
        .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or_else(Utc::now))
}

//! Tolerant timestamp coercion for upstream record fields.
//!
//! Sheet rows carry timestamps in whatever shape the operator typed or
//! the exporter produced: RFC 3339 strings, bare dates, `YYYY-MM-DD
//! HH:MM[:SS]`, or unix seconds/milliseconds. Anything unrecognizable
//! coerces to `None` rather than failing the whole fetch.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde_json::Value;

/// Unix values at or above this are treated as milliseconds.
/// 100_000_000_000 seconds would be the year 5138.
const MILLIS_CUTOFF: i64 = 100_000_000_000;

/// Best-effort coercion of a JSON value into a UTC timestamp.
pub fn coerce(value: &Value) -> Option<DateTime<Utc>> {
    match value {
        Value::String(s) => parse_str(s),
        Value::Number(n) => n.as_i64().and_then(parse_unix),
        _ => None,
    }
}

/// Best-effort coercion of a string into a UTC timestamp.
pub fn parse_str(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }

    for fmt in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M", "%Y-%m-%dT%H:%M:%S"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(Utc.from_utc_datetime(&naive));
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return date
            .and_hms_opt(0, 0, 0)
            .map(|naive| Utc.from_utc_datetime(&naive));
    }

    // A bare number serialized as a string still counts.
    s.parse::<i64>().ok().and_then(parse_unix)
}

fn parse_unix(n: i64) -> Option<DateTime<Utc>> {
    if n <= 0 {
        return None;
    }
    if n >= MILLIS_CUTOFF {
        Utc.timestamp_millis_opt(n).single()
    } else {
        Utc.timestamp_opt(n, 0).single()
    }
}

/// Serde `with` module for `Option<DateTime<Utc>>` fields.
///
/// Serializes as RFC 3339; deserializes through [`coerce`], so malformed
/// upstream values become `None` instead of a record-level error.
pub mod flexible {
    use super::*;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(dt) => serializer.serialize_str(&dt.to_rfc3339()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<Value>::deserialize(deserializer)?;
        Ok(value.as_ref().and_then(coerce))
    }
}

//! UTC timestamp normalisation.
//!
//! Every timestamp leaving the service is rendered by `format_utc`:
//! ISO-8601, second precision, explicit `+00:00` offset. Values without a
//! zone are taken to be UTC.

use chrono::{DateTime, NaiveDateTime, SecondsFormat, TimeZone, Utc};
use serde::Serializer;

const NAIVE_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"];

/// Renders `value` in UTC as `YYYY-MM-DDTHH:MM:SS+00:00`.
pub fn format_utc<Tz: TimeZone>(value: &DateTime<Tz>) -> String {
    value
        .with_timezone(&Utc)
        .to_rfc3339_opts(SecondsFormat::Secs, false)
}

/// Parses stored timestamp text. Accepts RFC 3339, or naive
/// `YYYY-MM-DD HH:MM:SS[.f]` (space or `T` separated) which is assumed UTC.
pub fn parse_stored(text: &str) -> Option<DateTime<Utc>> {
    let text = text.trim();
    if let Ok(value) = DateTime::parse_from_rfc3339(text) {
        return Some(value.with_timezone(&Utc));
    }
    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(text, fmt).ok())
        .map(|naive| naive.and_utc())
}

/// Text written to SQLite: naive UTC with microseconds. Sorts
/// lexicographically in time order and parses back through `parse_stored`.
pub fn to_stored(value: &DateTime<Utc>) -> String {
    value.format("%Y-%m-%d %H:%M:%S%.6f").to_string()
}

/// `serialize_with` adapter for record timestamps.
pub fn serialize<S: Serializer>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&format_utc(value))
}

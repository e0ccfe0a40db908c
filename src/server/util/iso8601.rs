//! ISO-8601 timestamps as exchanged with API clients.
//!
//! Clients send UTC timestamps with anywhere from zero to seven fractional second
//! digits (`2023-12-31T23:40:50Z`, `2023-12-31T23:40:50.Z`, `2023-12-31T23:40:50.1234567Z`).
//! Longer fractions are cut down to seven digits, the seventh digit being the
//! 100 ns unit: UTC input longer than 28 characters keeps its first 27 and gets a
//! fresh `Z`, whatever followed. A `+HH:MM`/`-HH:MM` offset may replace the trailing
//! `Z`; the result is always normalized to UTC.
//!
//! The module doubles as a serde adapter for `DateTime<Utc>` fields:
//!
//! ```rust,ignore
//! #[serde(with = "crate::server::util::iso8601")]
//! pub created: DateTime<Utc>,
//! ```

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, TimeZone, Timelike, Utc};
use serde::{Deserialize, Deserializer, Serializer};
use thiserror::Error;

/// Shortest accepted input, `YYYY-MM-DDTHH:MM:SSZ`.
const MIN_LENGTH: usize = 20;
/// Length of the `YYYY-MM-DDTHH:MM:SS` part.
const DATE_TIME_LENGTH: usize = 19;
/// Longest UTC input, `YYYY-MM-DDTHH:MM:SS.fffffffZ`.
const MAX_LENGTH: usize = 28;
/// Length of a `+HH:MM` zone designator.
const OFFSET_LENGTH: usize = 6;
const MAX_FRACTION_DIGITS: usize = 7;

const FORMAT: &str = "%Y-%m-%dT%H:%M:%S";
const FORMAT_UTC: &str = "%Y-%m-%dT%H:%M:%SZ";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Iso8601Error {
    /// Input shorter than `YYYY-MM-DDTHH:MM:SSZ`.
    #[error("Invalid length {length} of ISO-8601 string '{value}'")]
    InvalidLength { value: String, length: usize },

    /// Input has an acceptable length but does not match any accepted shape.
    #[error("Invalid ISO-8601 date time '{value}'")]
    InvalidFormat { value: String },

    /// Input of `eval_date` is not a `YYYY-MM-DD` date.
    #[error("Date format not accepted: '{value}'")]
    InvalidDate { value: String },
}

/// Parses an ISO-8601 timestamp into UTC.
///
/// # Arguments
/// - `value` - Timestamp such as `2023-12-31T23:40:50.123Z` or `2023-12-31T23:40:50+01:00`
///
/// # Returns
/// - `Ok(DateTime<Utc>)` - Parsed timestamp with up to 100 ns precision
/// - `Err(Iso8601Error::InvalidLength)` - Input shorter than 20 characters
/// - `Err(Iso8601Error::InvalidFormat)` - Input does not match an accepted shape
pub fn from_iso8601_string(value: &str) -> Result<DateTime<Utc>, Iso8601Error> {
    let invalid = || Iso8601Error::InvalidFormat {
        value: value.to_string(),
    };

    if value.len() < MIN_LENGTH {
        return Err(Iso8601Error::InvalidLength {
            value: value.to_string(),
            length: value.len(),
        });
    }
    // All accepted shapes are ASCII, which keeps the byte slicing below on char boundaries.
    if !value.is_ascii() {
        return Err(invalid());
    }

    let truncated;
    let value = if value.len() > MAX_LENGTH && parse_offset(value).is_none() {
        truncated = format!("{}Z", &value[..MAX_LENGTH - 1]);
        truncated.as_str()
    } else {
        value
    };

    let (body, offset) = split_zone(value).ok_or_else(invalid)?;
    if body.len() < DATE_TIME_LENGTH {
        return Err(invalid());
    }

    let (date_time, fraction) = body.split_at(DATE_TIME_LENGTH);
    let naive = NaiveDateTime::parse_from_str(date_time, FORMAT).map_err(|_| invalid())?;
    let nanos = parse_fraction(fraction).ok_or_else(invalid)?;
    let naive = naive.with_nanosecond(nanos).ok_or_else(invalid)?;

    offset
        .from_local_datetime(&naive)
        .single()
        .map(|dt| dt.with_timezone(&Utc))
        .ok_or_else(invalid)
}

/// Splits the trailing zone designator (`Z` or `+HH:MM`) off the input.
fn split_zone(value: &str) -> Option<(&str, FixedOffset)> {
    if let Some(body) = value.strip_suffix('Z') {
        return Some((body, FixedOffset::east_opt(0)?));
    }

    let body = &value[..value.len().checked_sub(OFFSET_LENGTH)?];

    Some((body, parse_offset(value)?))
}

/// Parses a trailing `+HH:MM`/`-HH:MM` zone designator.
fn parse_offset(value: &str) -> Option<FixedOffset> {
    let zone = &value[value.len().checked_sub(OFFSET_LENGTH)?..];
    let bytes = zone.as_bytes();
    let sign = match bytes[0] {
        b'+' => 1,
        b'-' => -1,
        _ => return None,
    };
    if bytes[3] != b':' {
        return None;
    }
    let hours: i32 = zone[1..3].parse().ok()?;
    let minutes: i32 = zone[4..6].parse().ok()?;
    if hours > 23 || minutes > 59 {
        return None;
    }

    FixedOffset::east_opt(sign * (hours * 3_600 + minutes * 60))
}

/// Converts `""`, `"."` or `".<digits>"` into nanoseconds, keeping at most seven digits.
fn parse_fraction(fraction: &str) -> Option<u32> {
    if fraction.is_empty() {
        return Some(0);
    }

    let digits = fraction.strip_prefix('.')?;
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let digits = &digits[..digits.len().min(MAX_FRACTION_DIGITS)];
    if digits.is_empty() {
        return Some(0);
    }

    let value: u32 = digits.parse().ok()?;
    Some(value * 10u32.pow(9 - digits.len() as u32))
}

/// Formats a timestamp as `YYYY-MM-DDTHH:MM:SSZ`.
pub fn to_iso8601_string(value: &DateTime<Utc>) -> String {
    value.format(FORMAT_UTC).to_string()
}

/// Evaluates an optional `YYYY-MM-DD` date filter such as `?createdFrom=2023-12-01`.
///
/// # Arguments
/// - `date` - Date string, usually taken from a query parameter
///
/// # Returns
/// - `Ok(DateTime<Utc>::MIN_UTC)` - No date given or shorter than ten characters
/// - `Ok(DateTime<Utc>)` - Midnight UTC of the given date
/// - `Err(Iso8601Error::InvalidDate)` - Ten or more characters that are not a valid date
pub fn eval_date(date: Option<&str>) -> Result<DateTime<Utc>, Iso8601Error> {
    let Some(date) = date.filter(|d| d.len() >= 10) else {
        return Ok(DateTime::<Utc>::MIN_UTC);
    };

    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|d| d.and_utc())
        .ok_or_else(|| Iso8601Error::InvalidDate {
            value: date.to_string(),
        })
}

pub fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&to_iso8601_string(value))
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    let value = String::deserialize(deserializer)?;
    from_iso8601_string(&value).map_err(D::Error::custom)
}

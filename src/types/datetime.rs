// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Timestamp parsing for Nest device data.
//!
//! The Nest API emits ISO 8601 timestamps with a `Z` suffix and
//! millisecond precision (`"2017-02-02T21:00:06.000Z"`). Older payloads and
//! hand-written fixtures sometimes drop the zone or use epoch milliseconds,
//! so parsing is lenient and always yields a timezone-aware value.
//!
//! # Supported Formats
//!
//! - RFC 3339: `"2024-01-15T10:30:00.000Z"`, `"2024-01-15T10:30:00+01:00"`
//! - ISO 8601 without timezone (read as UTC): `"2024-01-15T10:30:00"`
//! - Unix epoch milliseconds: `"1705314600000"`
//!
//! # Examples
//!
//! ```
//! use nestor_lib::types::parse_timestamp;
//!
//! let dt = parse_timestamp("2024-01-15T10:30:00.000Z").unwrap();
//! assert_eq!(dt.format("%Y-%m-%d").to_string(), "2024-01-15");
//! ```

use chrono::{DateTime, FixedOffset, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Deserializer};

/// Error returned when parsing a timestamp string fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateTimeParseError {
    input: String,
}

impl DateTimeParseError {
    fn new(input: &str) -> Self {
        Self {
            input: input.to_string(),
        }
    }

    /// Returns the input string that failed to parse.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }
}

impl std::fmt::Display for DateTimeParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "failed to parse timestamp: '{}' (expected ISO 8601 or epoch milliseconds)",
            self.input
        )
    }
}

impl std::error::Error for DateTimeParseError {}

/// Parses a Nest timestamp into a timezone-aware datetime.
///
/// # Errors
///
/// Returns [`DateTimeParseError`] if the input matches none of the
/// supported formats.
pub fn parse_timestamp(s: &str) -> Result<DateTime<FixedOffset>, DateTimeParseError> {
    let s = s.trim();

    if !s.is_empty()
        && s.chars().all(|c| c.is_ascii_digit())
        && let Some(dt) = parse_epoch_millis(s)
    {
        return Ok(dt);
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt);
    }

    parse_naive_utc(s).ok_or_else(|| DateTimeParseError::new(s))
}

fn parse_epoch_millis(s: &str) -> Option<DateTime<FixedOffset>> {
    let millis: i64 = s.parse().ok()?;
    let dt = Utc.timestamp_millis_opt(millis).single()?;
    Some(dt.fixed_offset())
}

fn parse_naive_utc(s: &str) -> Option<DateTime<FixedOffset>> {
    const FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

    FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .map(|naive| naive.and_utc().fixed_offset())
}

/// Serde helper for optional timestamp fields.
///
/// Use with `#[serde(default, deserialize_with = "...")]`; `null` and missing
/// fields both map to `None`.
pub(crate) fn deserialize_optional<'de, D>(
    deserializer: D,
) -> Result<Option<DateTime<FixedOffset>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    raw.map(|s| parse_timestamp(&s).map_err(serde::de::Error::custom))
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn parse_nest_api_format() {
        let dt = parse_timestamp("2017-02-02T21:00:06.000Z").unwrap();
        assert_eq!(dt.year(), 2017);
        assert_eq!(dt.hour(), 21);
        assert_eq!(dt.second(), 6);
        assert_eq!(dt.offset().local_minus_utc(), 0);
    }

    #[test]
    fn parse_with_offset() {
        let dt = parse_timestamp("2024-01-15T10:30:00-05:00").unwrap();
        assert_eq!(dt.hour(), 10);
        assert_eq!(dt.offset().local_minus_utc(), -5 * 3600);
    }

    #[test]
    fn parse_naive_as_utc() {
        let dt = parse_timestamp("2024-01-15T10:30:00").unwrap();
        assert_eq!(dt.minute(), 30);
        assert_eq!(dt.offset().local_minus_utc(), 0);

        let dt = parse_timestamp("2024-01-15 10:30:00.250").unwrap();
        assert_eq!(dt.nanosecond(), 250_000_000);
    }

    #[test]
    fn parse_epoch_milliseconds() {
        let dt = parse_timestamp("1705314600000").unwrap();
        assert_eq!(dt.year(), 2024);
        assert_eq!(dt.month(), 1);
        assert_eq!(dt.day(), 15);
        assert_eq!(dt.hour(), 10);
    }

    #[test]
    fn parse_invalid_returns_error() {
        let err = parse_timestamp("yesterday").unwrap_err();
        assert_eq!(err.input(), "yesterday");
        assert!(err.to_string().contains("failed to parse timestamp"));

        assert!(parse_timestamp("").is_err());
        assert!(parse_timestamp("2024-13-45T00:00:00").is_err());
    }

    #[derive(Deserialize)]
    struct Holder {
        #[serde(default, deserialize_with = "deserialize_optional")]
        at: Option<DateTime<FixedOffset>>,
    }

    #[test]
    fn deserialize_optional_handles_null_and_missing() {
        let holder: Holder = serde_json::from_str(r#"{"at": null}"#).unwrap();
        assert!(holder.at.is_none());

        let holder: Holder = serde_json::from_str("{}").unwrap();
        assert!(holder.at.is_none());

        let holder: Holder = serde_json::from_str(r#"{"at": "2024-01-15T10:30:00Z"}"#).unwrap();
        assert_eq!(holder.at.unwrap().day(), 15);

        assert!(serde_json::from_str::<Holder>(r#"{"at": "soon"}"#).is_err());
    }
}

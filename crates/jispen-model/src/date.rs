//! Calendar dates of disposal events.
//!
//! The source system stores a timestamp, but only the calendar day matters
//! to the registry. Inputs may be plain dates, local date-times or RFC 3339
//! timestamps; the day is taken as written, ignoring any time or offset.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serializer};

use crate::{ModelError, Result};

const DATE_FORMAT: &str = "%Y-%m-%d";
const DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Parse a calendar date from a date or date-time string.
pub fn parse_calendar_date(value: &str) -> Result<NaiveDate> {
    let trimmed = value.trim();
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, DATE_FORMAT) {
        return Ok(date);
    }
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(timestamp.naive_local().date());
    }
    DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(trimmed, format).ok())
        .map(|timestamp| timestamp.date())
        .ok_or_else(|| ModelError::InvalidDate(value.to_string()))
}

/// Serde adapter for `#[serde(with = "...")]` on calendar date fields.
pub mod serde_calendar_date {
    use super::{Deserialize, Deserializer, NaiveDate, Serializer, parse_calendar_date};

    pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&date.format(super::DATE_FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse_calendar_date(&raw).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn plain_date() {
        assert_eq!(parse_calendar_date("2024-03-05").unwrap(), ymd(2024, 3, 5));
    }

    #[test]
    fn time_component_is_dropped() {
        assert_eq!(
            parse_calendar_date("2024-03-05T18:30:00").unwrap(),
            ymd(2024, 3, 5)
        );
        assert_eq!(
            parse_calendar_date("2024-03-05 23:59:59.999").unwrap(),
            ymd(2024, 3, 5)
        );
    }

    #[test]
    fn offset_does_not_shift_the_day() {
        assert_eq!(
            parse_calendar_date("2024-03-05T23:30:00-05:00").unwrap(),
            ymd(2024, 3, 5)
        );
        assert_eq!(
            parse_calendar_date("2024-03-05T00:15:00+02:00").unwrap(),
            ymd(2024, 3, 5)
        );
    }

    #[test]
    fn rejects_garbage() {
        assert!(matches!(
            parse_calendar_date("05.03.2024"),
            Err(ModelError::InvalidDate(_))
        ));
    }
}

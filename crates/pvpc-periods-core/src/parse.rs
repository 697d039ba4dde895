//! Input parsing for local timestamps and dates.
//!
//! Timestamps are read as wall-clock local time. Accepted forms:
//! - `2024-03-15T07:00:00` / `2024-03-15 07:00:00`
//! - `2024-03-15T07:00` / `2024-03-15 07:00`
//! - RFC3339 with an offset (`2024-03-15T07:00:00+01:00`); the offset is
//!   dropped and the wall-clock part is kept

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::error::{PeriodError, Result};

const LOCAL_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Parse a local timestamp.
///
/// # Examples
///
/// ```
/// use pvpc_periods_core::parse::parse_local_timestamp;
/// use chrono::Timelike;
///
/// let local = parse_local_timestamp("2024-03-15T07:00:00").unwrap();
/// assert_eq!(local.hour(), 7);
///
/// // Offsets are dropped, the wall clock is kept
/// let local = parse_local_timestamp("2024-03-15T07:30:00+01:00").unwrap();
/// assert_eq!(local.hour(), 7);
/// ```
pub fn parse_local_timestamp(input: &str) -> Result<NaiveDateTime> {
    let trimmed = input.trim();

    for fmt in &LOCAL_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, fmt) {
            return Ok(dt);
        }
    }

    DateTime::parse_from_rfc3339(trimmed)
        .map(|dt| dt.naive_local())
        .map_err(|_| {
            PeriodError::ParseError(format!(
                "Invalid local timestamp: '{}'. Expected YYYY-MM-DDTHH:MM[:SS] or RFC3339",
                trimmed
            ))
        })
}

/// Parse a calendar date (`YYYY-MM-DD`).
pub fn parse_date(input: &str) -> Result<NaiveDate> {
    let trimmed = input.trim();
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").map_err(|e| {
        PeriodError::ParseError(format!(
            "Invalid date: '{}'. Expected YYYY-MM-DD. Error: {}",
            trimmed, e
        ))
    })
}

/// Format a local timestamp as `YYYY-MM-DDTHH:MM:SS`.
pub fn format_local(local: &NaiveDateTime) -> String {
    local.format("%Y-%m-%dT%H:%M:%S").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn parse_seconds_precision() {
        let dt = parse_local_timestamp("2024-03-15T07:00:00").unwrap();
        assert_eq!(dt.year(), 2024);
        assert_eq!(dt.month(), 3);
        assert_eq!(dt.day(), 15);
        assert_eq!(dt.hour(), 7);
    }

    #[test]
    fn parse_space_separator_and_minutes() {
        let dt = parse_local_timestamp(" 2024-03-15 18:45 ").unwrap();
        assert_eq!(dt.hour(), 18);
        assert_eq!(dt.minute(), 45);
    }

    #[test]
    fn parse_rfc3339_keeps_wall_clock() {
        let dt = parse_local_timestamp("2024-03-15T23:15:00+01:00").unwrap();
        assert_eq!(dt.day(), 15);
        assert_eq!(dt.hour(), 23);

        let dt = parse_local_timestamp("2024-03-15T23:15:00Z").unwrap();
        assert_eq!(dt.hour(), 23);
    }

    #[test]
    fn parse_invalid_timestamp() {
        assert!(matches!(
            parse_local_timestamp("not-a-time"),
            Err(PeriodError::ParseError(_))
        ));
        assert!(parse_local_timestamp("2024-02-30T10:00:00").is_err());
    }

    #[test]
    fn parse_dates() {
        let date = parse_date("2024-01-06").unwrap();
        assert_eq!((date.year(), date.month(), date.day()), (2024, 1, 6));
        assert!(parse_date("2024-13-01").is_err());
    }

    #[test]
    fn format_local_timestamp() {
        let dt = parse_local_timestamp("2024-03-15 07:05").unwrap();
        assert_eq!(format_local(&dt), "2024-03-15T07:05:00");
    }
}

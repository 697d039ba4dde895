//! Error types for pvpc-periods-core.
//!
//! Holiday lookup failures are the only errors the classifier itself
//! produces; they propagate unchanged through every operation that
//! needs holiday membership.

use thiserror::Error;

/// The main error type for tariff period operations.
#[derive(Debug, Error)]
pub enum PeriodError {
    /// The holiday provider could not supply a holiday set for a year.
    #[error("Holiday lookup failed for {country} {year}: {reason}")]
    HolidayLookup {
        country: String,
        year: i32,
        reason: String,
    },

    /// No period change was found within the probe limit.
    #[error("No tariff period change found within {steps} hours")]
    TransitionNotFound { steps: u32 },

    /// A timestamp fell outside the representable date range.
    #[error("Timestamp out of range: {0}")]
    OutOfRange(String),

    /// Error parsing a timestamp, date or period key.
    #[error("Parse error: {0}")]
    ParseError(String),
}

impl PeriodError {
    pub fn holiday_lookup(country: &str, year: i32, reason: impl Into<String>) -> Self {
        PeriodError::HolidayLookup {
            country: country.to_string(),
            year,
            reason: reason.into(),
        }
    }
}

/// Result type alias for tariff period operations.
pub type Result<T> = std::result::Result<T, PeriodError>;

//! National holiday calendars.
//!
//! The classifier only needs to know whether a date is a national holiday.
//! Where that answer comes from is behind [`HolidayProvider`]; the built-in
//! [`SpainNationalHolidays`] computes it in memory.

use std::collections::BTreeSet;
use std::ops::RangeInclusive;

use chrono::{Datelike, Duration, NaiveDate};

use crate::error::{PeriodError, Result};

/// ISO 3166 code of the only country whose tariff rules are implemented.
pub const SPAIN: &str = "ES";

/// Immutable set of holiday dates for one (country, year) pair.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HolidaySet {
    dates: BTreeSet<NaiveDate>,
}

impl HolidaySet {
    pub fn new(dates: impl IntoIterator<Item = NaiveDate>) -> Self {
        Self {
            dates: dates.into_iter().collect(),
        }
    }

    pub fn contains(&self, date: &NaiveDate) -> bool {
        self.dates.contains(date)
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// Dates in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = &NaiveDate> {
        self.dates.iter()
    }
}

/// Source of holiday sets.
///
/// Implementations must be deterministic per (country, year) and must
/// return an error rather than an empty set when they cannot answer.
pub trait HolidayProvider: Send + Sync {
    fn holidays_for(&self, country: &str, year: i32) -> Result<HolidaySet>;
}

/// Spanish national holidays, computed without I/O.
///
/// Covers the ten holidays observed nationwide: New Year, Epiphany,
/// Good Friday, Labour Day, Assumption, National Day, All Saints,
/// Constitution Day, Immaculate Conception and Christmas. Regional
/// holidays and regional Monday substitutions are not included.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpainNationalHolidays;

impl SpainNationalHolidays {
    /// Years with a complete national calendar.
    pub const SUPPORTED_YEARS: RangeInclusive<i32> = 1979..=2099;

    const FIXED: [(u32, u32); 9] = [
        (1, 1),
        (1, 6),
        (5, 1),
        (8, 15),
        (10, 12),
        (11, 1),
        (12, 6),
        (12, 8),
        (12, 25),
    ];
}

impl HolidayProvider for SpainNationalHolidays {
    fn holidays_for(&self, country: &str, year: i32) -> Result<HolidaySet> {
        if !country.eq_ignore_ascii_case(SPAIN) {
            return Err(PeriodError::holiday_lookup(
                country,
                year,
                "only Spanish national holidays are available",
            ));
        }
        if !Self::SUPPORTED_YEARS.contains(&year) {
            return Err(PeriodError::holiday_lookup(
                country,
                year,
                format!(
                    "year outside supported range {}..={}",
                    Self::SUPPORTED_YEARS.start(),
                    Self::SUPPORTED_YEARS.end()
                ),
            ));
        }

        let mut dates = Vec::with_capacity(Self::FIXED.len() + 1);
        for (month, day) in Self::FIXED {
            let date = NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
                PeriodError::holiday_lookup(country, year, format!("invalid date {month}-{day}"))
            })?;
            dates.push(date);
        }
        let easter = easter_sunday(year).ok_or_else(|| {
            PeriodError::holiday_lookup(country, year, "could not compute Easter Sunday")
        })?;
        dates.push(easter - Duration::days(2));

        Ok(HolidaySet::new(dates))
    }
}

/// Gregorian Easter Sunday (anonymous Gregorian algorithm).
pub fn easter_sunday(year: i32) -> Option<NaiveDate> {
    let a = year % 19;
    let b = year / 100;
    let c = year % 100;
    let d = b / 4;
    let e = b % 4;
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    let h = (19 * a + b - d - g + 15) % 30;
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k) % 7;
    let m = (a + 11 * h + 22 * l) / 451;
    let month = (h + l - 7 * m + 114) / 31;
    let day = (h + l - 7 * m + 114) % 31 + 1;

    let date = NaiveDate::from_ymd_opt(
        year,
        u32::try_from(month).ok()?,
        u32::try_from(day).ok()?,
    )?;
    debug_assert_eq!(date.weekday(), chrono::Weekday::Sun);
    Some(date)
}

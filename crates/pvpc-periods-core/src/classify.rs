//! Tariff period classification.
//!
//! A [`TariffCalendar`] owns the holiday cache and answers which 2.0TD
//! period applies at a local timestamp, and when that period ends. The
//! free functions [`classify`] and [`next_transition`] use a process-wide
//! calendar backed by [`SpainNationalHolidays`].

use std::sync::OnceLock;

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use tracing::trace;

use crate::cache::HolidayCache;
use crate::error::{PeriodError, Result};
use crate::holidays::{HolidayProvider, SPAIN, SpainNationalHolidays};
use crate::models::{TariffPeriod, TariffZone, Transition};

/// Upper bound on hourly probes in [`TariffCalendar::next_transition`].
///
/// A holiday next to a weekend keeps P3 for up to 80 hours, so the bound
/// covers a full week.
pub const MAX_TRANSITION_STEPS: u32 = 7 * 24;

/// Hour at which working-day tariffs start; earlier hours are always P3.
const FIRST_WORKING_HOUR: u32 = 8;

/// Classifies local timestamps into tariff periods.
#[derive(Debug)]
pub struct TariffCalendar<P = SpainNationalHolidays> {
    holidays: HolidayCache<P>,
}

impl TariffCalendar<SpainNationalHolidays> {
    /// Process-wide calendar with the built-in Spanish holidays.
    pub fn global() -> &'static TariffCalendar {
        static CALENDAR: OnceLock<TariffCalendar> = OnceLock::new();
        CALENDAR.get_or_init(|| TariffCalendar::new(SpainNationalHolidays))
    }
}

impl Default for TariffCalendar<SpainNationalHolidays> {
    fn default() -> Self {
        Self::new(SpainNationalHolidays)
    }
}

impl<P: HolidayProvider> TariffCalendar<P> {
    pub fn new(provider: P) -> Self {
        Self {
            holidays: HolidayCache::new(provider, SPAIN),
        }
    }

    /// Whether `date` is a national holiday.
    pub fn is_holiday(&self, date: NaiveDate) -> Result<bool> {
        self.holidays.is_holiday(date)
    }

    pub fn holiday_cache(&self) -> &HolidayCache<P> {
        &self.holidays
    }

    /// Period in force at `local`.
    ///
    /// Rules, first match wins:
    /// 1. holidays, weekends and hours before 08:00 are P3
    /// 2. hours in the zone's P2 table are P2
    /// 3. everything else is P1
    ///
    /// Only the hour of `local` is looked at; minutes and seconds are ignored.
    pub fn period_at(&self, local: NaiveDateTime, zone: TariffZone) -> Result<TariffPeriod> {
        let day = local.date();
        let hour = local.hour();

        if self.is_holiday(day)? || day.weekday().number_from_monday() >= 6 {
            return Ok(TariffPeriod::P3);
        }
        if hour < FIRST_WORKING_HOUR {
            return Ok(TariffPeriod::P3);
        }
        if zone.p2_hours().contains(&hour) {
            return Ok(TariffPeriod::P2);
        }
        Ok(TariffPeriod::P1)
    }

    /// Current period, the period that follows it and the time until it starts.
    ///
    /// Probes `local + 1h`, `local + 2h`, ... on the wall clock and stops at
    /// the first probe whose period differs from the current one.
    pub fn next_transition(&self, local: NaiveDateTime, zone: TariffZone) -> Result<Transition> {
        let current = self.period_at(local, zone)?;

        for step in 1..=MAX_TRANSITION_STEPS {
            let until = Duration::hours(i64::from(step));
            let probe = local.checked_add_signed(until).ok_or_else(|| {
                PeriodError::OutOfRange(format!("{} + {}h", local, step))
            })?;
            let next = self.period_at(probe, zone)?;
            trace!(step, %next, "Probed tariff period");
            if next != current {
                return Ok(Transition {
                    current,
                    next,
                    until,
                });
            }
        }

        Err(PeriodError::TransitionNotFound {
            steps: MAX_TRANSITION_STEPS,
        })
    }

    /// Period of each hour of `date`, indexed by hour.
    pub fn day_schedule(&self, date: NaiveDate, zone: TariffZone) -> Result<[TariffPeriod; 24]> {
        let mut schedule = [TariffPeriod::P3; 24];
        for (hour, slot) in (0u32..24).zip(schedule.iter_mut()) {
            let time = NaiveTime::from_hms_opt(hour, 0, 0)
                .ok_or_else(|| PeriodError::OutOfRange(format!("hour {} of {}", hour, date)))?;
            *slot = self.period_at(date.and_time(time), zone)?;
        }
        Ok(schedule)
    }
}

/// Period in force at a local timestamp, using the process-wide calendar.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use pvpc_periods_core::{TariffPeriod, classify};
///
/// let local = NaiveDate::from_ymd_opt(2024, 3, 15)
///     .unwrap()
///     .and_hms_opt(14, 0, 0)
///     .unwrap();
///
/// assert_eq!(classify(local, false).unwrap(), TariffPeriod::P2);
/// ```
pub fn classify(local: NaiveDateTime, zone_ceuta_melilla: bool) -> Result<TariffPeriod> {
    TariffCalendar::global().period_at(local, zone_ceuta_melilla.into())
}

/// Next period change from a local timestamp, using the process-wide calendar.
///
/// # Examples
///
/// ```
/// use chrono::{Duration, NaiveDate};
/// use pvpc_periods_core::{TariffPeriod, next_transition};
///
/// let local = NaiveDate::from_ymd_opt(2024, 3, 15)
///     .unwrap()
///     .and_hms_opt(7, 0, 0)
///     .unwrap();
///
/// let (current, next, until) = next_transition(local, false).unwrap().into();
/// assert_eq!(current, TariffPeriod::P3);
/// assert_eq!(next, TariffPeriod::P2);
/// assert_eq!(until, Duration::hours(1));
/// ```
pub fn next_transition(local: NaiveDateTime, zone_ceuta_melilla: bool) -> Result<Transition> {
    TariffCalendar::global().next_transition(local, zone_ceuta_melilla.into())
}

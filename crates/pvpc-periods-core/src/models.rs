//! Core data types for pvpc-periods.
//!
//! - [`TariffPeriod`] - The 2.0TD period key (P1/P2/P3)
//! - [`TariffZone`] - Which peak-hour table applies
//! - [`Transition`] - Current period, next period and time until the change
//! - [`PeriodResult`] / [`TransitionResult`] - Serializable evaluation results

use std::str::FromStr;

use chrono::{Duration, NaiveDateTime};
use serde::Serialize;

use crate::error::{PeriodError, Result};

/// Hours of day that are P2 on working days, mainland/Balearic/Canary.
pub const PENINSULA_P2_HOURS: [u32; 8] = [8, 9, 14, 15, 16, 17, 22, 23];

/// Hours of day that are P2 on working days, Ceuta and Melilla.
pub const CEUTA_MELILLA_P2_HOURS: [u32; 8] = [8, 9, 10, 15, 16, 17, 18, 23];

/// Tariff period under the 2.0TD billing scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TariffPeriod {
    /// Peak, most expensive.
    P1,
    /// Standard.
    P2,
    /// Off-peak, cheapest.
    P3,
}

impl TariffPeriod {
    pub fn as_str(&self) -> &'static str {
        match self {
            TariffPeriod::P1 => "P1",
            TariffPeriod::P2 => "P2",
            TariffPeriod::P3 => "P3",
        }
    }
}

impl std::fmt::Display for TariffPeriod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TariffPeriod {
    type Err = PeriodError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_uppercase().as_str() {
            "P1" => Ok(TariffPeriod::P1),
            "P2" => Ok(TariffPeriod::P2),
            "P3" => Ok(TariffPeriod::P3),
            _ => Err(PeriodError::ParseError(format!(
                "Unknown tariff period: '{}'. Expected 'P1', 'P2' or 'P3'",
                s
            ))),
        }
    }
}

/// Peak-hour table selector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TariffZone {
    /// Mainland, Balearic and Canary Islands.
    #[default]
    Peninsula,
    /// Autonomous cities of Ceuta and Melilla.
    CeutaMelilla,
}

impl TariffZone {
    /// Hours of day that are P2 on a working day in this zone.
    pub fn p2_hours(&self) -> &'static [u32] {
        match self {
            TariffZone::Peninsula => &PENINSULA_P2_HOURS,
            TariffZone::CeutaMelilla => &CEUTA_MELILLA_P2_HOURS,
        }
    }

    pub fn is_ceuta_melilla(&self) -> bool {
        matches!(self, TariffZone::CeutaMelilla)
    }
}

impl From<bool> for TariffZone {
    fn from(zone_ceuta_melilla: bool) -> Self {
        if zone_ceuta_melilla {
            TariffZone::CeutaMelilla
        } else {
            TariffZone::Peninsula
        }
    }
}

impl std::fmt::Display for TariffZone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TariffZone::Peninsula => write!(f, "peninsula"),
            TariffZone::CeutaMelilla => write!(f, "ceuta_melilla"),
        }
    }
}

/// The next period change seen from a given local timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    /// Period in force at the evaluated timestamp.
    pub current: TariffPeriod,
    /// Period that follows the change.
    pub next: TariffPeriod,
    /// Wall-clock time from the evaluated timestamp until `next` begins.
    /// Always a positive whole number of hours.
    pub until: Duration,
}

impl Transition {
    /// First hourly probe that falls in `next`, given the evaluated timestamp.
    ///
    /// Minutes and seconds of `from` are carried over, so for a timestamp
    /// off the hour this is inside the first hour of `next`, not its start.
    pub fn starts_at(&self, from: NaiveDateTime) -> NaiveDateTime {
        from + self.until
    }
}

impl From<Transition> for (TariffPeriod, TariffPeriod, Duration) {
    fn from(t: Transition) -> Self {
        (t.current, t.next, t.until)
    }
}

/// Result of classifying a single timestamp.
#[derive(Debug, Clone, Serialize)]
pub struct PeriodResult {
    /// Original input string.
    pub input: String,
    /// Local timestamp that was classified (`YYYY-MM-DDTHH:MM:SS`).
    pub local: String,
    /// Peak-hour table used.
    pub zone: TariffZone,
    /// The period in force.
    pub period: TariffPeriod,
}

/// Result of a next-transition search.
#[derive(Debug, Clone, Serialize)]
pub struct TransitionResult {
    /// Local timestamp the search started from.
    pub local: String,
    /// Peak-hour table used.
    pub zone: TariffZone,
    /// Period in force at `local`.
    pub current: TariffPeriod,
    /// Period after the change.
    pub next: TariffPeriod,
    /// Whole hours until the change.
    pub hours: i64,
    /// Local timestamp at which `next` begins.
    pub starts_at: String,
}

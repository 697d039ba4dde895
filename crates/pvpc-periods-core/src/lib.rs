//! # pvpc-periods-core
//!
//! Tariff period classification for the Spanish PVPC 2.0TD tariff.
//!
//! Given a local timestamp in Spain, this library tells which period
//! applies (P1 peak, P2 standard, P3 off-peak) and when the next period
//! starts.
//!
//! ## Features
//!
//! - **Holiday aware**: national holidays and weekends are P3 all day.
//! - **Two hour tables**: mainland/Balearic/Canary and Ceuta/Melilla.
//! - **Memoized holidays**: holiday sets are computed once per year and
//!   shared across threads.
//! - **Pluggable calendars**: any [`HolidayProvider`] can back a
//!   [`TariffCalendar`].
//!
//! Timestamps are taken as already localized wall-clock time; no timezone
//! conversion happens here.
//!
//! ## Example
//!
//! ```rust
//! use pvpc_periods_core::prelude::*;
//!
//! let local = parse_local_timestamp("2024-03-15T10:00:00").unwrap();
//!
//! let period = classify(local, false).unwrap();
//! let transition = next_transition(local, false).unwrap();
//!
//! println!("Now: {}", period);
//! println!("Next: {} in {}h", transition.next, transition.until.num_hours());
//! ```

pub mod cache;
pub mod classify;
pub mod error;
pub mod holidays;
pub mod models;
pub mod parse;

// Re-export commonly used types at the crate root
pub use cache::HolidayCache;
pub use classify::{MAX_TRANSITION_STEPS, TariffCalendar, classify, next_transition};
pub use error::{PeriodError, Result};
pub use holidays::{HolidayProvider, HolidaySet, SPAIN, SpainNationalHolidays};
pub use models::{PeriodResult, TariffPeriod, TariffZone, Transition, TransitionResult};
pub use parse::{format_local, parse_date, parse_local_timestamp};

/// Prelude module for convenient imports.
///
/// ```
/// use pvpc_periods_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::classify::{TariffCalendar, classify, next_transition};
    pub use crate::error::{PeriodError, Result};
    pub use crate::holidays::{HolidayProvider, HolidaySet, SpainNationalHolidays};
    pub use crate::models::*;
    pub use crate::parse::{format_local, parse_date, parse_local_timestamp};
}

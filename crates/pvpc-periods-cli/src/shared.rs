use chrono::{NaiveDateTime, Utc};
use chrono_tz::Tz;
use pvpc_periods_core::parse_local_timestamp;

use crate::error::{CliError, CliResult};

pub fn parse_tz_or_input_error(name: &str) -> CliResult<Tz> {
    name.parse::<Tz>()
        .map_err(|_| CliError::input(format!("Invalid timezone '{}'", name)))
}

pub fn parse_local_or_input_error(s: &str) -> CliResult<NaiveDateTime> {
    parse_local_timestamp(s).map_err(|e| CliError::input(e.to_string()))
}

/// Current wall-clock time in `tz`, the way a caller localizes "now".
pub fn now_in(tz: Tz) -> NaiveDateTime {
    Utc::now().with_timezone(&tz).naive_local()
}

/// The explicit `--at` timestamp, or now in `tz_name`.
pub fn resolve_local(at: Option<&str>, tz_name: &str) -> CliResult<NaiveDateTime> {
    match at {
        Some(s) => parse_local_or_input_error(s),
        None => Ok(now_in(parse_tz_or_input_error(tz_name)?)),
    }
}

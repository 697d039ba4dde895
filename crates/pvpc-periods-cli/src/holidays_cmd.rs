use std::process::ExitCode;

use pvpc_periods_core::TariffCalendar;
use serde::Serialize;

use crate::cli::HolidaysArgs;
use crate::error::{CliError, CliResult, EXIT_SUCCESS, OutputFormat};

pub fn run_holidays(args: HolidaysArgs, output_format: OutputFormat) -> CliResult<ExitCode> {
    let holidays = list_holidays(args.year)?;

    match output_format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&holidays)
                .map_err(|e| CliError::runtime(format!("Failed to serialize JSON: {}", e)))?;
            println!("{}", json);
        }
        OutputFormat::Text => {
            for date in &holidays.dates {
                println!("{}", date);
            }
        }
    }

    Ok(ExitCode::from(EXIT_SUCCESS))
}

#[derive(Debug, Serialize)]
struct HolidayList {
    country: String,
    year: i32,
    dates: Vec<String>,
}

fn list_holidays(year: i32) -> CliResult<HolidayList> {
    let cache = TariffCalendar::global().holiday_cache();
    let set = cache.holidays(year)?;

    Ok(HolidayList {
        country: cache.country().to_string(),
        year,
        dates: set
            .iter()
            .map(|d| d.format("%Y-%m-%d").to_string())
            .collect(),
    })
}

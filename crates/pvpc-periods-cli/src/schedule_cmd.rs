use std::process::ExitCode;

use chrono::NaiveDate;
use pvpc_periods_core::{TariffCalendar, TariffPeriod, TariffZone, parse_date};
use serde::Serialize;

use crate::cli::ScheduleArgs;
use crate::error::{CliError, CliResult, EXIT_SUCCESS, OutputFormat};

pub fn run_schedule(args: ScheduleArgs, output_format: OutputFormat) -> CliResult<ExitCode> {
    let date = parse_date(&args.date)
        .map_err(|e| CliError::input(format!("Invalid date: {}", e)))?;
    let zone = TariffZone::from(args.ceuta_melilla);

    let schedule = day_schedule(date, zone)?;

    match output_format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&schedule)
                .map_err(|e| CliError::runtime(format!("Failed to serialize JSON: {}", e)))?;
            println!("{}", json);
        }
        OutputFormat::Text => {
            for slot in &schedule.hours {
                println!("{:02}:00-{:02}:00 {}", slot.hour, slot.hour + 1, slot.period);
            }
        }
    }

    Ok(ExitCode::from(EXIT_SUCCESS))
}

#[derive(Debug, Serialize)]
struct DaySchedule {
    date: String,
    zone: TariffZone,
    holiday: bool,
    hours: Vec<HourSlot>,
}

#[derive(Debug, Serialize)]
struct HourSlot {
    hour: u32,
    period: TariffPeriod,
}

fn day_schedule(date: NaiveDate, zone: TariffZone) -> CliResult<DaySchedule> {
    let calendar = TariffCalendar::global();
    let periods = calendar.day_schedule(date, zone)?;

    Ok(DaySchedule {
        date: date.format("%Y-%m-%d").to_string(),
        zone,
        holiday: calendar.is_holiday(date)?,
        hours: (0u32..)
            .zip(periods)
            .map(|(hour, period)| HourSlot { hour, period })
            .collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn working_day_has_all_three_periods() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        let schedule = day_schedule(date, TariffZone::Peninsula).unwrap();

        assert!(!schedule.holiday);
        assert_eq!(schedule.hours.len(), 24);
        assert_eq!(schedule.hours[7].period, TariffPeriod::P3);
        assert_eq!(schedule.hours[8].period, TariffPeriod::P2);
        assert_eq!(schedule.hours[12].period, TariffPeriod::P1);
    }

    #[test]
    fn holiday_flag() {
        let date = NaiveDate::from_ymd_opt(2024, 10, 12).unwrap();
        let schedule = day_schedule(date, TariffZone::CeutaMelilla).unwrap();
        assert!(schedule.holiday);
        assert!(schedule.hours.iter().all(|s| s.period == TariffPeriod::P3));
    }
}

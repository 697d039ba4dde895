use std::process::ExitCode;

use chrono::NaiveDateTime;
use pvpc_periods_core::{TariffZone, TransitionResult, format_local, next_transition};

use crate::cli::NextArgs;
use crate::error::{CliError, CliResult, EXIT_SUCCESS, OutputFormat};
use crate::shared::resolve_local;

pub fn run_next(args: NextArgs, output_format: OutputFormat) -> CliResult<ExitCode> {
    let local = resolve_local(args.at.as_deref(), &args.tz)?;
    let zone = TariffZone::from(args.ceuta_melilla);

    let result = explain_next(local, zone)?;

    match output_format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&result)
                .map_err(|e| CliError::runtime(format!("Failed to serialize JSON: {}", e)))?;
            println!("{}", json);
        }
        OutputFormat::Text => {
            println!("Local time: {}", result.local);
            println!("Zone: {}", result.zone);
            println!("Current: {}", result.current);
            println!(
                "Next: {} at {} (in {}h)",
                result.next, result.starts_at, result.hours
            );
        }
    }

    Ok(ExitCode::from(EXIT_SUCCESS))
}

fn explain_next(local: NaiveDateTime, zone: TariffZone) -> CliResult<TransitionResult> {
    let transition = next_transition(local, zone.is_ceuta_melilla())?;

    Ok(TransitionResult {
        local: format_local(&local),
        zone,
        current: transition.current,
        next: transition.next,
        hours: transition.until.num_hours(),
        starts_at: format_local(&transition.starts_at(local)),
    })
}

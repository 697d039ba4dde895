use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::process::ExitCode;

use pvpc_periods_core::{PeriodResult, TariffZone, classify, format_local};
use tracing::debug;

use crate::cli::PeriodArgs;
use crate::error::{CliError, CliResult, EXIT_SUCCESS, OutputFormat};
use crate::shared::parse_local_or_input_error;

pub fn run_period(args: PeriodArgs, output_format: OutputFormat) -> CliResult<ExitCode> {
    let zone = TariffZone::from(args.ceuta_melilla);

    let reader: Box<dyn BufRead> = if args.stdin || args.input == "-" {
        Box::new(io::stdin().lock())
    } else {
        let file = File::open(&args.input).map_err(|e| {
            CliError::runtime(format!("Failed to open file '{}': {}", args.input, e))
        })?;
        Box::new(BufReader::new(file))
    };

    for line in reader.lines() {
        let line = line.map_err(|e| CliError::runtime(format!("Failed to read line: {}", e)))?;
        let trimmed = line.trim();

        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let result = process_period_line(trimmed, zone)?;
        debug!(input = trimmed, period = %result.period, "Classified");

        match output_format {
            OutputFormat::Json => {
                let json = serde_json::to_string(&result)
                    .map_err(|e| CliError::runtime(format!("Failed to serialize JSON: {}", e)))?;
                println!("{}", json);
            }
            OutputFormat::Text => {
                println!("{} -> {}", result.local, result.period);
            }
        }
    }

    Ok(ExitCode::from(EXIT_SUCCESS))
}

fn process_period_line(input: &str, zone: TariffZone) -> CliResult<PeriodResult> {
    let context = || format!("Error processing '{}'", input);

    let local = parse_local_or_input_error(input).map_err(|e| e.context(context()))?;
    let period = classify(local, zone.is_ceuta_melilla())
        .map_err(|e| CliError::from(e).context(context()))?;

    Ok(PeriodResult {
        input: input.to_string(),
        local: format_local(&local),
        zone,
        period,
    })
}

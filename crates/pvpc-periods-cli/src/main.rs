use std::process::ExitCode;

use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

mod cli;
mod error;
mod holidays_cmd;
mod next_cmd;
mod period_cmd;
mod schedule_cmd;
mod shared;

use cli::{Cli, Commands};
use error::{CliResult, OutputFormat, output_format_hint, parse_output_format, render_error};
use holidays_cmd::run_holidays;
use next_cmd::run_next;
use period_cmd::run_period;
use schedule_cmd::run_schedule;

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn dispatch<A>(
    args: A,
    output_format: &str,
    run: fn(A, OutputFormat) -> CliResult<ExitCode>,
) -> ExitCode {
    let fallback = output_format_hint(output_format);
    let output_format = match parse_output_format(output_format) {
        Ok(format) => format,
        Err(err) => return render_error(&err, fallback),
    };

    match run(args, output_format) {
        Ok(code) => code,
        Err(err) => render_error(&err, output_format),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    debug!("Parsed CLI args: {:?}", cli);

    match cli.command {
        Commands::Period(args) => {
            let format = args.output_format.clone();
            dispatch(args, &format, run_period)
        }
        Commands::Next(args) => {
            let format = args.output_format.clone();
            dispatch(args, &format, run_next)
        }
        Commands::Schedule(args) => {
            let format = args.output_format.clone();
            dispatch(args, &format, run_schedule)
        }
        Commands::Holidays(args) => {
            let format = args.output_format.clone();
            dispatch(args, &format, run_holidays)
        }
    }
}

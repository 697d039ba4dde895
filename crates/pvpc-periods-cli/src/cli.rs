use clap::{Parser, Subcommand};

/// PVPC 2.0TD tariff period tool
#[derive(Parser, Debug)]
#[command(name = "pvpc-periods")]
#[command(version, about = "PVPC 2.0TD tariff period tool")]
pub struct Cli {
    /// Enable verbose (debug) logging
    #[arg(long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Classify local timestamps into tariff periods
    Period(PeriodArgs),
    /// Show the current period and when the next one starts
    Next(NextArgs),
    /// Show the period of every hour of a day
    Schedule(ScheduleArgs),
    /// List Spanish national holidays for a year
    Holidays(HolidaysArgs),
}

#[derive(clap::Args, Debug)]
pub struct PeriodArgs {
    /// Use the Ceuta/Melilla peak-hour table
    #[arg(long)]
    pub ceuta_melilla: bool,

    /// Output format: json, text
    #[arg(long, default_value = "text")]
    pub output_format: String,

    /// Input file path with one local timestamp per line (use - for stdin)
    #[arg(long, default_value = "-")]
    pub input: String,

    /// Read from stdin
    #[arg(long)]
    pub stdin: bool,
}

#[derive(clap::Args, Debug)]
pub struct NextArgs {
    /// Local timestamp (e.g., 2024-03-15T07:00:00). Defaults to now in --tz
    #[arg(long)]
    pub at: Option<String>,

    /// IANA timezone used when --at is omitted
    #[arg(short, long, default_value = "Europe/Madrid")]
    pub tz: String,

    /// Use the Ceuta/Melilla peak-hour table
    #[arg(long)]
    pub ceuta_melilla: bool,

    /// Output format: json, text
    #[arg(long, default_value = "json")]
    pub output_format: String,
}

#[derive(clap::Args, Debug)]
pub struct ScheduleArgs {
    /// Local date (YYYY-MM-DD)
    #[arg(long)]
    pub date: String,

    /// Use the Ceuta/Melilla peak-hour table
    #[arg(long)]
    pub ceuta_melilla: bool,

    /// Output format: json, text
    #[arg(long, default_value = "json")]
    pub output_format: String,
}

#[derive(clap::Args, Debug)]
pub struct HolidaysArgs {
    /// Calendar year
    #[arg(long)]
    pub year: i32,

    /// Output format: json, text
    #[arg(long, default_value = "json")]
    pub output_format: String,
}

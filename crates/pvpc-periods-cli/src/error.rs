use std::fmt;
use std::process::ExitCode;

use pvpc_periods_core::PeriodError;
use serde::Serialize;

pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_INPUT_ERROR: u8 = 2;
pub const EXIT_RUNTIME_ERROR: u8 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Text,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Input,
    Runtime,
}

#[derive(Debug)]
pub struct CliError {
    kind: ErrorKind,
    message: String,
    status: Option<&'static str>,
}

impl CliError {
    pub fn input(message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::Input,
            message: message.into(),
            status: None,
        }
    }

    pub fn runtime(message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::Runtime,
            message: message.into(),
            status: None,
        }
    }

    /// Map a library error, tagging it with a machine-readable status.
    pub fn period(err: PeriodError) -> Self {
        let (kind, status) = match &err {
            PeriodError::HolidayLookup { .. } => (ErrorKind::Input, "holiday_lookup"),
            PeriodError::TransitionNotFound { .. } => (ErrorKind::Runtime, "transition_not_found"),
            PeriodError::OutOfRange(_) => (ErrorKind::Input, "out_of_range"),
            PeriodError::ParseError(_) => (ErrorKind::Input, "parse"),
        };
        Self {
            kind,
            message: err.to_string(),
            status: Some(status),
        }
    }

    /// Prefix the message, keeping kind and status.
    pub fn context(mut self, prefix: impl std::fmt::Display) -> Self {
        self.message = format!("{}: {}", prefix, self.message);
        self
    }

    pub fn exit_code(&self) -> u8 {
        match self.kind {
            ErrorKind::Input => EXIT_INPUT_ERROR,
            ErrorKind::Runtime => EXIT_RUNTIME_ERROR,
        }
    }
}

impl From<PeriodError> for CliError {
    fn from(err: PeriodError) -> Self {
        CliError::period(err)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

pub type CliResult<T> = std::result::Result<T, CliError>;

#[derive(Debug, Serialize)]
struct ErrorOutput {
    error: String,
    exit_code: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    status: Option<String>,
}

pub fn render_error(err: &CliError, output_format: OutputFormat) -> ExitCode {
    match output_format {
        OutputFormat::Json => {
            let envelope = ErrorOutput {
                error: err.message.clone(),
                exit_code: err.exit_code(),
                status: err.status.map(str::to_string),
            };

            match serde_json::to_string_pretty(&envelope) {
                Ok(json) => eprintln!("{}", json),
                Err(_) => eprintln!("Error: {}", err.message),
            }
        }
        OutputFormat::Text => {
            eprintln!("Error: {}", err.message);
        }
    }

    ExitCode::from(err.exit_code())
}

pub fn output_format_hint(s: &str) -> OutputFormat {
    if s.eq_ignore_ascii_case("json") {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    }
}

pub fn parse_output_format(s: &str) -> CliResult<OutputFormat> {
    match s.to_lowercase().as_str() {
        "json" => Ok(OutputFormat::Json),
        "text" => Ok(OutputFormat::Text),
        _ => Err(CliError::input(format!(
            "Invalid output_format '{}'. Expected: json, text",
            s
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn holiday_lookup_is_input_error() {
        let err = CliError::from(PeriodError::holiday_lookup("ES", 1900, "unsupported"));
        assert_eq!(err.exit_code(), EXIT_INPUT_ERROR);
        assert_eq!(err.status, Some("holiday_lookup"));
    }

    #[test]
    fn transition_not_found_is_runtime_error() {
        let err = CliError::from(PeriodError::TransitionNotFound { steps: 168 });
        assert_eq!(err.exit_code(), EXIT_RUNTIME_ERROR);
    }

    #[test]
    fn context_keeps_kind_and_status() {
        let err = CliError::from(PeriodError::holiday_lookup("ES", 1950, "unsupported"))
            .context("Error processing '1950-06-01T12:00:00'");
        assert_eq!(err.exit_code(), EXIT_INPUT_ERROR);
        assert_eq!(err.status, Some("holiday_lookup"));
        assert!(err.to_string().starts_with("Error processing '1950-06-01T12:00:00': "));
    }

    #[test]
    fn output_format_parsing() {
        assert_eq!(parse_output_format("JSON").unwrap(), OutputFormat::Json);
        assert_eq!(parse_output_format("text").unwrap(), OutputFormat::Text);
        assert!(parse_output_format("yaml").is_err());
        assert_eq!(output_format_hint("yaml"), OutputFormat::Text);
    }
}

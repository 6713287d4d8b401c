//! Command-line front ends for the two pipeline stages.

use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::pipeline::{self, DateLimit, PipelineError};

/// Copy valid MM/DD/YYYY dates from stdin to stdout.
#[derive(Parser, Debug)]
#[command(name = "validate-dates")]
#[command(version, about, long_about = None)]
pub struct ValidateCli {
    /// Number of valid dates to output, 0 for all of them
    #[arg(value_name = "COUNT", allow_hyphen_values = true)]
    pub count: DateLimit,
}

/// Convert MM/DD/YYYY dates from stdin to DD MON YYYY on stdout.
///
/// Input is expected to come from validate-dates.
#[derive(Parser, Debug)]
#[command(name = "convert-dates")]
#[command(version, about, long_about = None)]
pub struct ConvertCli {
    /// File to display after the converted dates, preceded by a blank line
    #[arg(short, long, value_name = "FILE")]
    pub dump: Option<PathBuf>,
}

/// Install the stderr log subscriber, WARN by default, respecting `RUST_LOG`.
///
/// Logs must not go to stdout, which carries the date stream.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

/// Run the validator over stdin/stdout.
///
/// # Errors
/// Returns `PipelineError::Io` if stdin or stdout fails.
pub fn run_validate(cli: &ValidateCli) -> Result<usize, PipelineError> {
    let mut output = BufWriter::new(io::stdout().lock());
    let found = pipeline::validate_dates(io::stdin().lock(), &mut output, cli.count)?;
    output.flush()?;
    Ok(found)
}

/// Run the converter over stdin/stdout, then display the dump file if given.
///
/// # Errors
/// Any `PipelineError`; a month outside 1-12 is reported as an internal error.
pub fn run_convert(cli: &ConvertCli) -> Result<usize, PipelineError> {
    let mut output = BufWriter::new(io::stdout().lock());
    let converted = pipeline::convert_dates(io::stdin().lock(), &mut output)?;
    if let Some(path) = &cli.dump {
        pipeline::dump_file(path, &mut output)?;
    }
    output.flush()?;
    Ok(converted)
}

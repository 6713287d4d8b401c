//! Filters stdin down to valid MM/DD/YYYY dates.

use clap::Parser;
use mdy_dates::cli::{self, ValidateCli};

fn main() {
    cli::init_tracing();
    let args = ValidateCli::parse();

    if let Err(e) = cli::run_validate(&args) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

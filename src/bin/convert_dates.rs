//! Rewrites validated MM/DD/YYYY dates from stdin as DD MON YYYY.

use clap::Parser;
use mdy_dates::cli::{self, ConvertCli};

fn main() {
    cli::init_tracing();
    let args = ConvertCli::parse();

    if let Err(e) = cli::run_convert(&args) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

//! approxmatch - brute-force approximate dictionary matching
//!
//! Matches pattern files against dictionaries and checks report totals.

use clap::Parser;
use colored::Colorize;
use std::process;

use approxmatch::cli::{commands, init_tracing, Cli};

fn main() {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    if let Err(e) = commands::execute(cli.command) {
        eprintln!("{}: {:#}", "Error".red().bold(), e);
        process::exit(1);
    }
}

//! Courier Weight - chargeable weight and document numbering for shipments
//!
//! A CLI tool that derives volumetric and chargeable weights for packages and
//! issues daily AWB / bag / truck numbers.

mod cli;
mod commands;
mod logging;
mod output;

use clap::Parser;
use cli::Cli;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = commands::execute(cli) {
        tracing::debug!(error = ?e, "command failed");
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

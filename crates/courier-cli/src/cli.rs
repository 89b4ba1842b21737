//! CLI definition using clap

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use courier_types::{OutputFormat, SequenceKind};

#[derive(Parser)]
#[command(name = "courier-weight")]
#[command(version)]
#[command(about = "Chargeable weight calculation and document numbering for courier shipments")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Volumetric divisor in cm³/kg for this run
    #[arg(long, global = true)]
    pub divisor: Option<f64>,

    /// Config file to use instead of the user config
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory holding the sequence counters
    #[arg(long, global = true)]
    pub store_dir: Option<PathBuf>,

    /// Verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Calculate volumetric and chargeable weight for one package
    Weight {
        /// Length in cm
        #[arg(long, short = 'l', allow_hyphen_values = true)]
        length: Option<String>,

        /// Width in cm
        #[arg(long, short = 'w', allow_hyphen_values = true)]
        width: Option<String>,

        /// Height in cm
        #[arg(long = "height", short = 'H', allow_hyphen_values = true)]
        height: Option<String>,

        /// Actual (scale) weight in grams
        #[arg(long, short = 'a', allow_hyphen_values = true)]
        actual: Option<String>,
    },

    /// Calculate weights for every package in a CSV file
    Batch {
        /// CSV with reference,length,width,height,actual_weight
        csv: PathBuf,

        /// Export results (.csv or .xlsx)
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },

    /// Issue the next AWB, bag or truck number
    NextNumber {
        kind: SequenceKind,

        /// Issue for this date (YYYY-MM-DD) instead of today
        #[arg(long)]
        date: Option<String>,
    },

    /// Show the last number issued for a date
    LastNumber {
        kind: SequenceKind,

        /// Date (YYYY-MM-DD), defaults to today
        #[arg(long)]
        date: Option<String>,
    },

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set volumetric divisor (cm³/kg)
        #[arg(long)]
        set_divisor: Option<f64>,

        /// Set default output format
        #[arg(long)]
        set_output: Option<OutputFormat>,

        /// Set sequence store directory
        #[arg(long)]
        set_store_dir: Option<PathBuf>,

        /// Set advisory minimum for length+width+height (cm)
        #[arg(long)]
        set_min_dimension_sum: Option<f64>,

        /// Set advisory minimum weight (g)
        #[arg(long)]
        set_min_weight: Option<f64>,

        /// Reset to defaults
        #[arg(long)]
        reset: bool,
    },
}

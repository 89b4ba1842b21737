//! Command handlers

use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDate};

use crate::cli::{Cli, Commands, OutputFormat, SequenceKind};
use crate::output::{output_batch, output_quote};
use courier_app::app::{quote_package, run_batch, NumberingService};
use courier_app::config::Config;
use courier_app::export::export_results;
use courier_app::repository::open_sequence_repo;
use courier_domain::model::PackageDimensions;
use courier_types::{ConfigError, Error, Result};

pub fn execute(cli: Cli) -> Result<()> {
    let config_path = cli.config.as_deref();

    if let Commands::Config {
        show,
        set_divisor,
        set_output,
        ref set_store_dir,
        set_min_dimension_sum,
        set_min_weight,
        reset,
    } = cli.command
    {
        return cmd_config(
            config_path,
            show,
            ConfigUpdates {
                divisor: set_divisor,
                output: set_output,
                store_dir: set_store_dir.clone(),
                min_dimension_sum: set_min_dimension_sum,
                min_weight: set_min_weight,
            },
            reset,
        );
    }

    // Load config
    let mut config = load_config(config_path)?;

    // Override from CLI args
    if let Some(divisor) = cli.divisor {
        config.volumetric_divisor = divisor;
    }
    if cli.store_dir.is_some() {
        config.store_dir = cli.store_dir.clone();
    }
    let output_format = cli.format.unwrap_or(config.output_format);

    match &cli.command {
        Commands::Weight {
            length,
            width,
            height,
            actual,
        } => cmd_weight(
            &config,
            output_format,
            PackageDimensions::parse(length.as_deref(), width.as_deref(), height.as_deref(), actual.as_deref()),
        ),

        Commands::Batch { csv, output } => cmd_batch(&config, output_format, csv, output.as_deref()),

        Commands::NextNumber { kind, date } => cmd_next_number(&config, *kind, date.as_deref()),

        Commands::LastNumber { kind, date } => cmd_last_number(&config, *kind, date.as_deref()),

        Commands::Config { .. } => Ok(()),
    }
}

fn cmd_weight(config: &Config, output_format: OutputFormat, dims: PackageDimensions) -> Result<()> {
    let quote = quote_package(config, &dims)?;
    output_quote(output_format, &quote)
}

fn cmd_batch(
    config: &Config,
    output_format: OutputFormat,
    csv_path: &Path,
    output: Option<&Path>,
) -> Result<()> {
    if !csv_path.exists() {
        return Err(Error::FileNotFound(format!(
            "CSV file not found: {}",
            csv_path.display()
        )));
    }

    let results = run_batch(config, csv_path)?;
    output_batch(output_format, &results)?;

    if let Some(output_path) = output {
        export_results(&results, output_path)?;
        eprintln!("Exported to: {}", output_path.display());
    }

    Ok(())
}

fn parse_date(date: Option<&str>) -> Result<NaiveDate> {
    match date {
        Some(s) => NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map_err(|e| {
            Error::Config(ConfigError::InvalidValue(format!(
                "invalid date '{}' (expected YYYY-MM-DD): {}",
                s, e
            )))
        }),
        None => Ok(Local::now().date_naive()),
    }
}

fn cmd_next_number(config: &Config, kind: SequenceKind, date: Option<&str>) -> Result<()> {
    let date = parse_date(date)?;
    let service = NumberingService::new(open_sequence_repo(config)?);
    let number = service.issue_on(kind, date)?;
    println!("{}", number);
    Ok(())
}

fn cmd_last_number(config: &Config, kind: SequenceKind, date: Option<&str>) -> Result<()> {
    let date = parse_date(date)?;
    let service = NumberingService::new(open_sequence_repo(config)?);
    match service.last_issued(kind, date)? {
        Some(number) => println!("{}", number),
        None => println!("No {} number issued on {}", kind, date),
    }
    Ok(())
}

/// `--config` path if given, otherwise the user config directory
fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
}

fn save_config(config: &Config, path: Option<&Path>) -> Result<()> {
    match path {
        Some(path) => config.save_to(path),
        None => config.save(),
    }
}

struct ConfigUpdates {
    divisor: Option<f64>,
    output: Option<OutputFormat>,
    store_dir: Option<PathBuf>,
    min_dimension_sum: Option<f64>,
    min_weight: Option<f64>,
}

fn cmd_config(config_path: Option<&Path>, show: bool, updates: ConfigUpdates, reset: bool) -> Result<()> {
    if reset {
        let config = Config::default();
        save_config(&config, config_path)?;
        println!("Configuration reset to defaults");
        println!("\n{}", config);
        return Ok(());
    }

    let mut config = load_config(config_path)?;
    let mut modified = false;

    if let Some(divisor) = updates.divisor {
        config.volumetric_divisor = divisor;
        // Validate before saving
        config.calculator()?;
        modified = true;
    }

    if let Some(output_format) = updates.output {
        config.output_format = output_format;
        modified = true;
    }

    if let Some(store_dir) = updates.store_dir {
        config.store_dir = Some(store_dir);
        modified = true;
    }

    if let Some(min_sum) = updates.min_dimension_sum {
        config.min_dimension_sum_cm = min_sum;
        modified = true;
    }

    if let Some(min_weight) = updates.min_weight {
        config.min_weight_g = min_weight;
        modified = true;
    }

    if modified {
        save_config(&config, config_path)?;
        println!("Configuration updated");
    }

    if show || !modified {
        println!("{}", config);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date(Some("2026-10-19")).unwrap(),
            NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
        );
        assert!(parse_date(Some("19/10/2026")).is_err());
        assert_eq!(parse_date(None).unwrap(), Local::now().date_naive());
    }

    #[test]
    fn test_load_config_from_explicit_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");
        assert_eq!(load_config(Some(&path)).unwrap().volumetric_divisor, 5000.0);

        let config = Config {
            volumetric_divisor: 6000.0,
            ..Config::default()
        };
        save_config(&config, Some(&path)).unwrap();
        assert!(path.exists());
        assert_eq!(load_config(Some(&path)).unwrap().volumetric_divisor, 6000.0);
    }

    #[test]
    fn test_config_reset_writes_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        let config = Config {
            min_weight_g: 80.0,
            ..Config::default()
        };
        save_config(&config, Some(&path)).unwrap();

        let updates = ConfigUpdates {
            divisor: None,
            output: None,
            store_dir: None,
            min_dimension_sum: None,
            min_weight: None,
        };
        cmd_config(Some(&path), false, updates, true).unwrap();
        assert_eq!(load_config(Some(&path)).unwrap().min_weight_g, Config::default().min_weight_g);
    }
}

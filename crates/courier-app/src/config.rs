//! Configuration management for courier-weight
//!
//! Config stored at: ~/.config/courier-weight/config.json

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use courier_domain::service::weight_calculator::VOLUMETRIC_DIVISOR_CM3_PER_KG;
use courier_domain::service::{AdvisoryThresholds, WeightCalculator};
use courier_types::{ConfigError, OutputFormat, Result};

const APP_DIR: &str = "courier-weight";

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Volumetric divisor in cm³ per kg
    #[serde(default = "default_divisor")]
    pub volumetric_divisor: f64,

    /// Directory for the sequence counters (defaults to the data dir)
    #[serde(default)]
    pub store_dir: Option<PathBuf>,

    /// Default output format (json, table)
    #[serde(default)]
    pub output_format: OutputFormat,

    /// Advisory minimum for length+width+height
    #[serde(default = "default_min_dimension_sum")]
    pub min_dimension_sum_cm: f64,

    /// Advisory minimum for the scale weight
    #[serde(default = "default_min_weight")]
    pub min_weight_g: f64,
}

fn default_divisor() -> f64 {
    VOLUMETRIC_DIVISOR_CM3_PER_KG
}

fn default_min_dimension_sum() -> f64 {
    AdvisoryThresholds::default().min_dimension_sum_cm
}

fn default_min_weight() -> f64 {
    AdvisoryThresholds::default().min_weight_g
}

impl Default for Config {
    fn default() -> Self {
        Self {
            volumetric_divisor: default_divisor(),
            store_dir: None,
            output_format: OutputFormat::default(),
            min_dimension_sum_cm: default_min_dimension_sum(),
            min_weight_g: default_min_weight(),
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().ok_or(ConfigError::NotFound)?.join(APP_DIR);
        Ok(config_dir)
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    /// Get the store directory path
    pub fn store_dir(&self) -> Result<PathBuf> {
        if let Some(ref dir) = self.store_dir {
            return Ok(dir.clone());
        }

        let data_dir = dirs::data_dir().ok_or(ConfigError::NotFound)?.join(APP_DIR);
        Ok(data_dir)
    }

    /// Calculator for the configured divisor
    pub fn calculator(&self) -> Result<WeightCalculator> {
        WeightCalculator::with_divisor(self.volumetric_divisor).ok_or_else(|| {
            ConfigError::InvalidValue(format!(
                "volumetric_divisor must be a positive number, got {}",
                self.volumetric_divisor
            ))
            .into()
        })
    }

    pub fn thresholds(&self) -> AdvisoryThresholds {
        AdvisoryThresholds {
            min_dimension_sum_cm: self.min_dimension_sum_cm,
            min_weight_g: self.min_weight_g,
        }
    }

    /// Load config from file, or create default
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)?;
            tracing::debug!(path = %path.display(), "loaded config");
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    /// Save config to file
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

impl std::fmt::Display for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Courier Weight Configuration")?;
        writeln!(f, "============================")?;
        writeln!(f)?;
        writeln!(f, "Volumetric divisor:   {} cm³/kg", self.volumetric_divisor)?;
        writeln!(f, "Min L+W+H (advisory): {} cm", self.min_dimension_sum_cm)?;
        writeln!(f, "Min weight (advisory): {} g", self.min_weight_g)?;
        writeln!(f, "Output format:        {}", self.output_format)?;
        writeln!(
            f,
            "Store dir:            {}",
            self.store_dir()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|_| "(error)".to_string())
        )?;

        if let Ok(path) = Self::config_path() {
            writeln!(f)?;
            writeln!(f, "Config file:          {}", path.display())?;
        }

        Ok(())
    }
}

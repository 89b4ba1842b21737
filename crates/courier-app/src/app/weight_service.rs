//! Weight use cases: single package quotes and CSV batches

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use courier_domain::model::{PackageDimensions, WeightResult};
use courier_domain::service::{advisories, calculate_batch, Advisory, BatchWeightResults};
use courier_infra::package_csv::load_packages_from_csv;
use courier_types::Result;

use crate::config::Config;

/// Derived weights for one package plus the hints a form would show
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightQuote {
    pub dimensions: PackageDimensions,
    pub result: WeightResult,
    pub advisories: Vec<Advisory>,
}

impl WeightQuote {
    pub fn is_volume_billed(&self) -> bool {
        self.result.is_volume_billed()
    }
}

pub fn quote_package(config: &Config, dims: &PackageDimensions) -> Result<WeightQuote> {
    let calculator = config.calculator()?;
    let result = calculator.calculate(dims);
    let advisories = advisories(dims, &config.thresholds());
    for advisory in &advisories {
        warn!(%advisory, "package advisory");
    }
    Ok(WeightQuote {
        dimensions: *dims,
        result,
        advisories,
    })
}

/// Calculate every package listed in a CSV file
pub fn run_batch(config: &Config, csv_path: &Path) -> Result<BatchWeightResults> {
    let calculator = config.calculator()?;
    let packages = load_packages_from_csv(csv_path)?;
    let results = calculate_batch(&calculator, &packages);
    info!(
        packages = results.lines.len(),
        volume_billed = results.volume_billed_count,
        total_chargeable_g = results.total_chargeable_g,
        "batch calculated"
    );
    Ok(results)
}

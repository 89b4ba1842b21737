//! Weight calculation over a list of packages

use serde::{Deserialize, Serialize};

use super::weight_calculator::{round_weight, WeightCalculator};
use crate::model::{PackageDimensions, PackageRecord, WeightResult};

/// One calculated package
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackageWeightLine {
    pub reference: String,
    pub dimensions: PackageDimensions,
    pub result: WeightResult,
}

impl PackageWeightLine {
    pub fn is_volume_billed(&self) -> bool {
        self.result.is_volume_billed()
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BatchWeightResults {
    pub lines: Vec<PackageWeightLine>,
    pub total_actual_g: f64,
    pub total_volumetric_g: f64,
    pub total_chargeable_g: f64,
    /// Packages whose chargeable weight came from their volume
    pub volume_billed_count: usize,
}

pub fn calculate_batch(calculator: &WeightCalculator, packages: &[PackageRecord]) -> BatchWeightResults {
    let lines: Vec<PackageWeightLine> = packages
        .iter()
        .map(|p| PackageWeightLine {
            reference: p.reference.clone(),
            dimensions: p.dimensions,
            result: calculator.calculate(&p.dimensions),
        })
        .collect();

    // Totals are summed from the rounded per-line values shown to the user
    let total_actual_g = round_weight(lines.iter().map(|l| l.result.actual_weight_g).sum());
    let total_volumetric_g = round_weight(lines.iter().map(|l| l.result.volumetric_weight_g).sum());
    let total_chargeable_g = round_weight(lines.iter().map(|l| l.result.chargeable_weight_g).sum());
    let volume_billed_count = lines.iter().filter(|l| l.is_volume_billed()).count();

    BatchWeightResults {
        lines,
        total_actual_g,
        total_volumetric_g,
        total_chargeable_g,
        volume_billed_count,
    }
}

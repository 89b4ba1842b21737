//! Soft submission hints shown next to the weight fields

use serde::{Deserialize, Serialize};

use crate::model::PackageDimensions;
use courier_types::{Error, Result};

/// Minimums the order forms advise, but never enforce
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AdvisoryThresholds {
    pub min_dimension_sum_cm: f64,
    pub min_weight_g: f64,
}

impl Default for AdvisoryThresholds {
    fn default() -> Self {
        Self {
            min_dimension_sum_cm: 15.0,
            min_weight_g: 50.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Advisory {
    MissingDimension,
    DimensionSumBelowMinimum { sum_cm: f64, minimum_cm: f64 },
    WeightBelowMinimum { weight_g: f64, minimum_g: f64 },
}

impl std::fmt::Display for Advisory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Advisory::MissingDimension => {
                write!(f, "length, width and height are all required for volumetric weight")
            }
            Advisory::DimensionSumBelowMinimum { sum_cm, minimum_cm } => write!(
                f,
                "length+width+height should be at least {}cm (got {:.2}cm)",
                minimum_cm, sum_cm
            ),
            Advisory::WeightBelowMinimum { weight_g, minimum_g } => write!(
                f,
                "package weight should be at least {} grams (got {:.2}g)",
                minimum_g, weight_g
            ),
        }
    }
}

/// Collect the hints that apply to `dims`
pub fn advisories(dims: &PackageDimensions, thresholds: &AdvisoryThresholds) -> Vec<Advisory> {
    let mut hints = Vec::new();
    if !dims.has_volume() {
        hints.push(Advisory::MissingDimension);
    }
    let sum_cm = dims.dimension_sum_cm();
    if sum_cm < thresholds.min_dimension_sum_cm {
        hints.push(Advisory::DimensionSumBelowMinimum {
            sum_cm,
            minimum_cm: thresholds.min_dimension_sum_cm,
        });
    }
    if dims.actual_weight_g < thresholds.min_weight_g {
        hints.push(Advisory::WeightBelowMinimum {
            weight_g: dims.actual_weight_g,
            minimum_g: thresholds.min_weight_g,
        });
    }
    hints
}

/// Strict check for callers about to submit an order.
///
/// Only rejects values that make no physical sense; the advisory minimums
/// stay advisory.
pub fn validate_for_submission(dims: &PackageDimensions) -> Result<()> {
    if !dims.has_volume() {
        return Err(Error::InvalidPackage(format!(
            "dimensions must be positive (got {} x {} x {} cm)",
            dims.length_cm, dims.width_cm, dims.height_cm
        )));
    }
    if dims.actual_weight_g <= 0.0 || !dims.actual_weight_g.is_finite() {
        return Err(Error::InvalidPackage(format!(
            "actual weight must be positive (got {}g)",
            dims.actual_weight_g
        )));
    }
    Ok(())
}

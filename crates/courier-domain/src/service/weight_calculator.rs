//! Volumetric and chargeable weight calculation
//!
//! Couriers bill a package on whichever is greater: what it weighs on the
//! scale, or what its volume would weigh at a fixed density.
//!
//! # Formula
//! volumetric_kg = length_cm x width_cm x height_cm / 5000
//! volumetric_g  = volumetric_kg x 1000 = length_cm x width_cm x height_cm / 5
//! chargeable_g  = max(actual_g, volumetric_g)
//!
//! Nothing here returns an error. A half-filled form must keep rendering, so
//! unusable input degrades to `0` and validation is left to the caller
//! (see [`super::advisory::validate_for_submission`]).

use serde::{Deserialize, Serialize};

use crate::model::{NumericInput, PackageDimensions, WeightResult};

/// Industry-standard volumetric divisor in cm³ per kg
pub const VOLUMETRIC_DIVISOR_CM3_PER_KG: f64 = 5000.0;

pub const GRAMS_PER_KG: f64 = 1000.0;

/// Calculator bound to a volumetric divisor
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightCalculator {
    divisor_cm3_per_kg: f64,
}

impl Default for WeightCalculator {
    fn default() -> Self {
        Self {
            divisor_cm3_per_kg: VOLUMETRIC_DIVISOR_CM3_PER_KG,
        }
    }
}

impl WeightCalculator {
    /// Create a calculator with a custom divisor.
    ///
    /// Returns `None` for a divisor that is not a positive finite number.
    pub fn with_divisor(divisor_cm3_per_kg: f64) -> Option<Self> {
        if divisor_cm3_per_kg > 0.0 && divisor_cm3_per_kg.is_finite() {
            Some(Self { divisor_cm3_per_kg })
        } else {
            None
        }
    }

    pub fn divisor(&self) -> f64 {
        self.divisor_cm3_per_kg
    }

    /// Volumetric weight in grams, unrounded
    pub fn volumetric_grams(&self, length_cm: f64, width_cm: f64, height_cm: f64) -> f64 {
        let dims = PackageDimensions::new(length_cm, width_cm, height_cm, 0.0);
        if !dims.has_volume() {
            return 0.0;
        }
        // divisor / 1000 is exactly 5 for the default divisor
        let cubic_cm = length_cm * width_cm * height_cm;
        let volumetric = cubic_cm / (self.divisor_cm3_per_kg / GRAMS_PER_KG);
        if volumetric.is_finite() {
            volumetric
        } else {
            0.0
        }
    }

    /// Chargeable weight in grams, unrounded
    pub fn chargeable_grams(&self, dims: &PackageDimensions) -> f64 {
        let volumetric = self.volumetric_grams(dims.length_cm, dims.width_cm, dims.height_cm);
        volumetric.max(dims.actual_weight_g)
    }

    /// Actual, volumetric and chargeable weight, rounded to two decimals.
    ///
    /// Both inputs are rounded before the max is taken, so the chargeable
    /// weight is measured against the rounded actual weight in the result.
    pub fn calculate(&self, dims: &PackageDimensions) -> WeightResult {
        let actual = round_weight(dims.actual_weight_g);
        let volumetric =
            round_weight(self.volumetric_grams(dims.length_cm, dims.width_cm, dims.height_cm));
        WeightResult {
            actual_weight_g: actual,
            volumetric_weight_g: volumetric,
            chargeable_weight_g: volumetric.max(actual),
        }
    }
}

/// Volumetric weight in grams from raw form values
pub fn volumetric_weight_grams(
    length_cm: impl Into<NumericInput>,
    width_cm: impl Into<NumericInput>,
    height_cm: impl Into<NumericInput>,
) -> f64 {
    let dims = PackageDimensions::parse(length_cm, width_cm, height_cm, NumericInput::Missing);
    WeightCalculator::default().volumetric_grams(dims.length_cm, dims.width_cm, dims.height_cm)
}

/// Chargeable weight in grams from raw form values
pub fn chargeable_weight_grams(
    length_cm: impl Into<NumericInput>,
    width_cm: impl Into<NumericInput>,
    height_cm: impl Into<NumericInput>,
    actual_weight_g: impl Into<NumericInput>,
) -> f64 {
    let dims = PackageDimensions::parse(length_cm, width_cm, height_cm, actual_weight_g);
    WeightCalculator::default().chargeable_grams(&dims)
}

/// Round to two decimals, half away from zero.
///
/// Negative zero collapses to `0.0` so it never renders as `-0.00`.
pub fn round_weight(grams: f64) -> f64 {
    let rounded = (grams * 100.0).round() / 100.0;
    if rounded == 0.0 || !rounded.is_finite() {
        0.0
    } else {
        rounded
    }
}

/// Render a weight with exactly two decimals, e.g. `"123.46"`
pub fn format_weight(grams: f64) -> String {
    format!("{:.2}", round_weight(grams))
}

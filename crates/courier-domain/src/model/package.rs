//! Package measurements as entered on an order form

use serde::{Deserialize, Serialize};

/// Raw numeric value coming from a form field.
///
/// Form fields hold whatever the user typed so far, so a value may be a
/// number, a partially typed string, or missing altogether. [`NumericInput::parse`]
/// never fails: anything that is not a finite number reads as `0.0`.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum NumericInput {
    Number(f64),
    Text(String),
    #[default]
    Missing,
}

impl NumericInput {
    pub fn parse(&self) -> f64 {
        let value = match self {
            NumericInput::Number(n) => *n,
            NumericInput::Text(s) => s.trim().parse::<f64>().unwrap_or(0.0),
            NumericInput::Missing => 0.0,
        };
        if value.is_finite() {
            value
        } else {
            0.0
        }
    }
}

impl From<f64> for NumericInput {
    fn from(n: f64) -> Self {
        NumericInput::Number(n)
    }
}

impl From<f32> for NumericInput {
    fn from(n: f32) -> Self {
        NumericInput::Number(n as f64)
    }
}

impl From<i32> for NumericInput {
    fn from(n: i32) -> Self {
        NumericInput::Number(n as f64)
    }
}

impl From<u32> for NumericInput {
    fn from(n: u32) -> Self {
        NumericInput::Number(n as f64)
    }
}

impl From<&str> for NumericInput {
    fn from(s: &str) -> Self {
        NumericInput::Text(s.to_string())
    }
}

impl From<String> for NumericInput {
    fn from(s: String) -> Self {
        NumericInput::Text(s)
    }
}

impl From<&String> for NumericInput {
    fn from(s: &String) -> Self {
        NumericInput::Text(s.clone())
    }
}

impl<T: Into<NumericInput>> From<Option<T>> for NumericInput {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(NumericInput::Missing)
    }
}

/// Physical measurements of one package
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PackageDimensions {
    pub length_cm: f64,
    pub width_cm: f64,
    pub height_cm: f64,
    pub actual_weight_g: f64,
}

impl PackageDimensions {
    pub fn new(length_cm: f64, width_cm: f64, height_cm: f64, actual_weight_g: f64) -> Self {
        Self {
            length_cm,
            width_cm,
            height_cm,
            actual_weight_g,
        }
    }

    /// Build from raw form values using the parse-or-zero rule
    pub fn parse(
        length_cm: impl Into<NumericInput>,
        width_cm: impl Into<NumericInput>,
        height_cm: impl Into<NumericInput>,
        actual_weight_g: impl Into<NumericInput>,
    ) -> Self {
        Self {
            length_cm: length_cm.into().parse(),
            width_cm: width_cm.into().parse(),
            height_cm: height_cm.into().parse(),
            actual_weight_g: actual_weight_g.into().parse(),
        }
    }

    pub fn dimension_sum_cm(&self) -> f64 {
        self.length_cm + self.width_cm + self.height_cm
    }

    /// True when all three dimensions are positive
    pub fn has_volume(&self) -> bool {
        [self.length_cm, self.width_cm, self.height_cm]
            .iter()
            .all(|d| *d > 0.0 && d.is_finite())
    }
}

/// A package with the caller's reference (AWB, order id, row label)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackageRecord {
    pub reference: String,
    pub dimensions: PackageDimensions,
}

/// Weights in grams, all three rounded to two decimals.
///
/// `chargeable_weight_g` is the max of the two rounded weights held here, so
/// it is never below `actual_weight_g` or `volumetric_weight_g`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct WeightResult {
    pub actual_weight_g: f64,
    pub volumetric_weight_g: f64,
    pub chargeable_weight_g: f64,
}

impl WeightResult {
    /// True when the package is billed on its volume rather than its scale weight
    pub fn is_volume_billed(&self) -> bool {
        self.volumetric_weight_g > self.actual_weight_g
    }
}

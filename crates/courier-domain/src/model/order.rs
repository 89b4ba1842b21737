//! Weight fields of the order create/update payload

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::package::{NumericInput, PackageDimensions};

/// Weight section of an order sent to the order API.
///
/// `actual_weight` and `volumetric_weight` travel as two-decimal strings
/// (`"123.46"`); reading accepts either strings or plain numbers.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct OrderWeights {
    #[serde(deserialize_with = "lenient_number")]
    pub length: f64,
    #[serde(deserialize_with = "lenient_number")]
    pub width: f64,
    #[serde(deserialize_with = "lenient_number")]
    pub height: f64,
    #[serde(serialize_with = "fixed_two", deserialize_with = "lenient_number")]
    pub actual_weight: f64,
    #[serde(serialize_with = "fixed_two", deserialize_with = "lenient_number", default)]
    pub volumetric_weight: f64,
}

impl OrderWeights {
    pub fn dimensions(&self) -> PackageDimensions {
        PackageDimensions::new(self.length, self.width, self.height, self.actual_weight)
    }
}

fn fixed_two<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&crate::service::format_weight(*value))
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawNumber {
    Number(f64),
    Text(String),
    Null(()),
}

fn lenient_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    let input = match RawNumber::deserialize(deserializer)? {
        RawNumber::Number(n) => NumericInput::Number(n),
        RawNumber::Text(s) => NumericInput::Text(s),
        RawNumber::Null(()) => NumericInput::Missing,
    };
    Ok(input.parse())
}

//! Weight section of the order create / edit forms
//!
//! Holds the raw field text and keeps the derived weights current: editing a
//! dimension or the scale weight recomputes immediately, and
//! [`OrderWeightForm::recalculate`] is the manual button. Both paths go
//! through the same calculator call.

use courier_domain::model::{OrderWeights, PackageDimensions, WeightResult};
use courier_domain::service::{advisories, validate_for_submission, Advisory, AdvisoryThresholds, WeightCalculator};
use courier_types::Result;

#[derive(Debug, Clone, Default)]
pub struct OrderWeightForm {
    calculator: WeightCalculator,
    length: String,
    width: String,
    height: String,
    actual_weight: String,
    result: WeightResult,
}

impl OrderWeightForm {
    /// Empty create-order form
    pub fn new(calculator: WeightCalculator) -> Self {
        Self {
            calculator,
            ..Self::default()
        }
    }

    /// Edit-order form pre-populated from a stored order
    pub fn from_order(calculator: WeightCalculator, order: &OrderWeights) -> Self {
        let mut form = Self {
            calculator,
            length: order.length.to_string(),
            width: order.width.to_string(),
            height: order.height.to_string(),
            actual_weight: order.actual_weight.to_string(),
            result: WeightResult::default(),
        };
        form.recalculate();
        form
    }

    pub fn set_length(&mut self, value: impl Into<String>) {
        self.length = value.into();
        self.recalculate();
    }

    pub fn set_width(&mut self, value: impl Into<String>) {
        self.width = value.into();
        self.recalculate();
    }

    pub fn set_height(&mut self, value: impl Into<String>) {
        self.height = value.into();
        self.recalculate();
    }

    pub fn set_actual_weight(&mut self, value: impl Into<String>) {
        self.actual_weight = value.into();
        self.recalculate();
    }

    pub fn recalculate(&mut self) -> WeightResult {
        self.result = self.calculator.calculate(&self.dimensions());
        self.result
    }

    /// Current field values, parsed with the parse-or-zero rule
    pub fn dimensions(&self) -> PackageDimensions {
        PackageDimensions::parse(&self.length, &self.width, &self.height, &self.actual_weight)
    }

    pub fn result(&self) -> WeightResult {
        self.result
    }

    pub fn advisories(&self, thresholds: &AdvisoryThresholds) -> Vec<Advisory> {
        advisories(&self.dimensions(), thresholds)
    }

    /// Payload for the order API; fails if the package cannot be submitted
    pub fn to_payload(&self) -> Result<OrderWeights> {
        let dims = self.dimensions();
        validate_for_submission(&dims)?;
        Ok(OrderWeights {
            length: dims.length_cm,
            width: dims.width_cm,
            height: dims.height_cm,
            actual_weight: dims.actual_weight_g,
            volumetric_weight: self.result.volumetric_weight_g,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recomputes_on_each_dimension() {
        let mut form = OrderWeightForm::new(WeightCalculator::default());
        form.set_length("10");
        assert_eq!(form.result().volumetric_weight_g, 0.0);
        form.set_width("10");
        assert_eq!(form.result().volumetric_weight_g, 0.0);
        form.set_height("10");
        assert_eq!(form.result().volumetric_weight_g, 200.0);
        assert_eq!(form.result().chargeable_weight_g, 200.0);
    }

    #[test]
    fn test_actual_weight_updates_chargeable() {
        let mut form = OrderWeightForm::new(WeightCalculator::default());
        form.set_length("5");
        form.set_width("5");
        form.set_height("5");
        form.set_actual_weight("1000");
        assert_eq!(form.result().volumetric_weight_g, 25.0);
        assert_eq!(form.result().chargeable_weight_g, 1000.0);
    }

    #[test]
    fn test_manual_recalculate_matches_automatic() {
        let mut form = OrderWeightForm::new(WeightCalculator::default());
        form.set_length("33.3");
        form.set_width("21.7");
        form.set_height("9.9");
        form.set_actual_weight("900");
        let automatic = form.result();
        assert_eq!(form.recalculate(), automatic);
    }

    #[test]
    fn test_partial_input_never_fails() {
        let mut form = OrderWeightForm::new(WeightCalculator::default());
        form.set_length("1.");
        form.set_width("-");
        form.set_height("");
        assert_eq!(form.result(), WeightResult::default());
    }

    #[test]
    fn test_edit_form_roundtrip() {
        let order = OrderWeights {
            length: 50.0,
            width: 40.0,
            height: 30.0,
            actual_weight: 500.0,
            volumetric_weight: 0.0,
        };
        let form = OrderWeightForm::from_order(WeightCalculator::default(), &order);
        assert_eq!(form.result().chargeable_weight_g, 12000.0);
        let payload = form.to_payload().unwrap();
        assert_eq!(payload.volumetric_weight, 12000.0);
        assert_eq!(payload.actual_weight, 500.0);
    }

    #[test]
    fn test_payload_rejects_empty_weight() {
        let mut form = OrderWeightForm::new(WeightCalculator::default());
        form.set_length("10");
        form.set_width("10");
        form.set_height("10");
        assert!(form.to_payload().is_err());
    }

    #[test]
    fn test_advisories_use_thresholds() {
        let mut form = OrderWeightForm::new(WeightCalculator::default());
        form.set_length("4");
        form.set_width("4");
        form.set_height("4");
        form.set_actual_weight("60");
        assert_eq!(form.advisories(&AdvisoryThresholds::default()).len(), 1);
    }
}

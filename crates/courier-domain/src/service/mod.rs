//! Domain services

pub mod advisory;
pub mod batch;
pub mod sequence_number;
pub mod weight_calculator;

pub use advisory::{advisories, validate_for_submission, Advisory, AdvisoryThresholds};
pub use batch::{calculate_batch, BatchWeightResults, PackageWeightLine};
pub use sequence_number::{format_sequence_number, parse_sequence_number};
pub use weight_calculator::{
    chargeable_weight_grams, format_weight, round_weight, volumetric_weight_grams,
    WeightCalculator,
};

//! Domain model types

pub mod order;
pub mod package;
pub mod sequence;

pub use order::OrderWeights;
pub use package::{NumericInput, PackageDimensions, PackageRecord, WeightResult};
pub use sequence::DailyCounter;

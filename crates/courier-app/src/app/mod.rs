//! Application use cases

pub mod numbering;
pub mod order_form;
pub mod weight_service;

pub use numbering::NumberingService;
pub use order_form::OrderWeightForm;
pub use weight_service::{quote_package, run_batch, WeightQuote};

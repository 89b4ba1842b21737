//! Courier domain layer
//!
//! Package weight models, the volumetric/chargeable weight calculator,
//! document numbering, and the repository traits implemented by infra.

pub mod model;
pub mod repository;
pub mod service;

//! Application service layer - use cases, config, numbering, export

pub mod app;
pub mod config;
pub mod export;
pub mod repository;

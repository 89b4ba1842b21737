//! Infrastructure layer - persistence implementations, loaders

pub mod package_csv;
pub mod persistence;

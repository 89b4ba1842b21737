//! Core types for courier weight calculation

mod error;

pub use error::*;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Output format for results
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Kind of document number issued from a daily counter
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SequenceKind {
    /// Air waybill (per-package tracking number)
    Awb,
    Bag,
    Truck,
}

impl SequenceKind {
    pub const ALL: [SequenceKind; 3] = [SequenceKind::Awb, SequenceKind::Bag, SequenceKind::Truck];

    /// Prefix printed in front of issued numbers
    pub fn prefix(&self) -> &'static str {
        match self {
            SequenceKind::Awb => "AWB",
            SequenceKind::Bag => "BAG",
            SequenceKind::Truck => "TRK",
        }
    }

    pub fn from_prefix(prefix: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.prefix() == prefix)
    }
}

impl std::fmt::Display for SequenceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SequenceKind::Awb => write!(f, "awb"),
            SequenceKind::Bag => write!(f, "bag"),
            SequenceKind::Truck => write!(f, "truck"),
        }
    }
}

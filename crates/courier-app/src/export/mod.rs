//! Batch result export (CSV and Excel)

mod csv_export;
mod excel;

use std::path::Path;

use courier_domain::service::BatchWeightResults;
use courier_types::Result;

pub use csv_export::{export_to_csv, write_csv};
pub use excel::export_to_excel;

/// Export by file extension: `.xlsx` writes a workbook, anything else CSV
pub fn export_results(results: &BatchWeightResults, output_path: &Path) -> Result<()> {
    let is_excel = output_path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("xlsx"));
    if is_excel {
        export_to_excel(results, output_path)
    } else {
        export_to_csv(results, output_path)
    }
}

//! Excel export of batch results

use std::path::Path;

use rust_xlsxwriter::{Format, Workbook, Worksheet, XlsxError};

use courier_domain::service::BatchWeightResults;
use courier_types::{Error, Result};

fn xlsx_err(e: XlsxError) -> Error {
    Error::Excel(e.to_string())
}

/// Export batch results to an Excel workbook (Summary + Packages sheets)
pub fn export_to_excel(results: &BatchWeightResults, output_path: &Path) -> Result<()> {
    let mut workbook = Workbook::new();

    let summary_sheet = workbook.add_worksheet();
    write_summary_sheet(summary_sheet, results)?;

    let packages_sheet = workbook.add_worksheet();
    write_packages_sheet(packages_sheet, results)?;

    workbook.save(output_path).map_err(xlsx_err)?;
    tracing::info!(path = %output_path.display(), "exported workbook");

    Ok(())
}

fn write_summary_sheet(sheet: &mut Worksheet, results: &BatchWeightResults) -> Result<()> {
    sheet.set_name("Summary").map_err(xlsx_err)?;

    let header_format = Format::new().set_bold();
    let weight_format = Format::new().set_num_format("0.00");

    sheet
        .write_string_with_format(0, 0, "Chargeable Weight Report", &header_format)
        .map_err(xlsx_err)?;

    sheet.write_string(2, 0, "Packages:").map_err(xlsx_err)?;
    sheet
        .write_number(2, 1, results.lines.len() as f64)
        .map_err(xlsx_err)?;

    sheet.write_string(3, 0, "Billed by volume:").map_err(xlsx_err)?;
    sheet
        .write_number(3, 1, results.volume_billed_count as f64)
        .map_err(xlsx_err)?;

    let totals = [
        ("Total actual (g):", results.total_actual_g),
        ("Total volumetric (g):", results.total_volumetric_g),
        ("Total chargeable (g):", results.total_chargeable_g),
    ];
    for (offset, (label, value)) in totals.iter().enumerate() {
        let row = 4 + offset as u32;
        sheet.write_string(row, 0, *label).map_err(xlsx_err)?;
        sheet
            .write_number_with_format(row, 1, *value, &weight_format)
            .map_err(xlsx_err)?;
    }

    sheet.set_column_width(0, 24).map_err(xlsx_err)?;
    Ok(())
}

fn write_packages_sheet(sheet: &mut Worksheet, results: &BatchWeightResults) -> Result<()> {
    sheet.set_name("Packages").map_err(xlsx_err)?;

    let header_format = Format::new().set_bold();
    let weight_format = Format::new().set_num_format("0.00");

    let headers = [
        "Reference",
        "Length (cm)",
        "Width (cm)",
        "Height (cm)",
        "Actual (g)",
        "Volumetric (g)",
        "Chargeable (g)",
        "Billed By",
    ];
    for (col, header) in headers.iter().enumerate() {
        sheet
            .write_string_with_format(0, col as u16, *header, &header_format)
            .map_err(xlsx_err)?;
    }

    for (row_idx, line) in results.lines.iter().enumerate() {
        let row = (row_idx + 1) as u32;
        let dims = &line.dimensions;

        sheet.write_string(row, 0, &line.reference).map_err(xlsx_err)?;
        sheet.write_number(row, 1, dims.length_cm).map_err(xlsx_err)?;
        sheet.write_number(row, 2, dims.width_cm).map_err(xlsx_err)?;
        sheet.write_number(row, 3, dims.height_cm).map_err(xlsx_err)?;

        let weights = [
            line.result.actual_weight_g,
            line.result.volumetric_weight_g,
            line.result.chargeable_weight_g,
        ];
        for (offset, value) in weights.iter().enumerate() {
            sheet
                .write_number_with_format(row, 4 + offset as u16, *value, &weight_format)
                .map_err(xlsx_err)?;
        }

        let billed_by = if line.is_volume_billed() { "volume" } else { "actual" };
        sheet.write_string(row, 7, billed_by).map_err(xlsx_err)?;
    }

    sheet.set_column_width(0, 20).map_err(xlsx_err)?;
    for col in 1..=7u16 {
        sheet.set_column_width(col, 14).map_err(xlsx_err)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use courier_domain::model::{PackageDimensions, PackageRecord};
    use courier_domain::service::{calculate_batch, WeightCalculator};
    use tempfile::tempdir;

    #[test]
    fn test_export_writes_workbook() {
        let packages = vec![PackageRecord {
            reference: "AWB1".to_string(),
            dimensions: PackageDimensions::new(50.0, 40.0, 30.0, 500.0),
        }];
        let results = calculate_batch(&WeightCalculator::default(), &packages);
        let dir = tempdir().unwrap();
        let path = dir.path().join("weights.xlsx");
        export_to_excel(&results, &path).unwrap();
        let bytes = std::fs::read(&path).unwrap();
        // xlsx is a zip archive
        assert!(bytes.starts_with(b"PK"));
    }
}

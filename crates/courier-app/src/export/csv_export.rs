//! CSV export of batch results

use std::fs::File;
use std::io::Write;
use std::path::Path;

use courier_domain::service::{format_weight, BatchWeightResults};
use courier_types::Result;

const HEADERS: [&str; 8] = [
    "reference",
    "length_cm",
    "width_cm",
    "height_cm",
    "actual_weight_g",
    "volumetric_weight_g",
    "chargeable_weight_g",
    "billed_by",
];

pub fn export_to_csv(results: &BatchWeightResults, output_path: &Path) -> Result<()> {
    let file = File::create(output_path)?;
    write_csv(results, file)
}

/// Write one row per package; weights use two decimals
pub fn write_csv<W: Write>(results: &BatchWeightResults, sink: W) -> Result<()> {
    let mut writer = csv::Writer::from_writer(sink);
    writer.write_record(HEADERS)?;
    for line in &results.lines {
        let dims = &line.dimensions;
        writer.write_record([
            line.reference.clone(),
            dims.length_cm.to_string(),
            dims.width_cm.to_string(),
            dims.height_cm.to_string(),
            format_weight(line.result.actual_weight_g),
            format_weight(line.result.volumetric_weight_g),
            format_weight(line.result.chargeable_weight_g),
            if line.is_volume_billed() { "volume" } else { "actual" }.to_string(),
        ])?;
    }
    writer.flush()?;
    Ok(())
}

//! CSV loader for package measurements
//!
//! Expected columns (header optional):
//! reference, length_cm, width_cm, height_cm, actual_weight_g
//!
//! Numeric cells follow the form rule: anything unparsable reads as 0.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use tracing::{debug, warn};

use courier_domain::model::{PackageDimensions, PackageRecord};
use courier_types::{Error, Result};

const HEADER_KEYWORDS: [&str; 5] = ["reference", "length", "width", "height", "weight"];

/// Load packages from a CSV file
pub fn load_packages_from_csv(path: &Path) -> Result<Vec<PackageRecord>> {
    if !path.exists() {
        return Err(Error::FileNotFound(path.display().to_string()));
    }
    let file = File::open(path)?;
    let packages = read_packages(file)?;
    debug!(path = %path.display(), count = packages.len(), "loaded packages");
    Ok(packages)
}

/// Read packages from any CSV source
pub fn read_packages<R: Read>(source: R) -> Result<Vec<PackageRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(source);

    let mut packages = Vec::new();
    for (row_idx, result) in reader.records().enumerate() {
        let record = result?;
        let row_num = row_idx + 1;

        if row_idx == 0 && is_header(&record) {
            continue;
        }
        if record.iter().all(|field| field.is_empty()) {
            continue;
        }
        match parse_record(&record) {
            Some(package) => packages.push(package),
            None => warn!(row = row_num, fields = record.len(), "skipping row with fewer than 5 columns"),
        }
    }
    Ok(packages)
}

/// A header has no numeric measurement cells and names at least one column
fn is_header(record: &csv::StringRecord) -> bool {
    let has_number = record.iter().skip(1).any(|field| field.parse::<f64>().is_ok());
    let names_column = record.iter().any(|field| {
        let lower = field.to_lowercase();
        HEADER_KEYWORDS.iter().any(|kw| lower.contains(kw))
    });
    !has_number && names_column
}

fn parse_record(record: &csv::StringRecord) -> Option<PackageRecord> {
    if record.len() < 5 {
        return None;
    }
    let reference = record.get(0)?.to_string();
    let dimensions = PackageDimensions::parse(record.get(1)?, record.get(2)?, record.get(3)?, record.get(4)?);
    Some(PackageRecord {
        reference,
        dimensions,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_with_header() {
        let data = "reference,length,width,height,actual_weight\nAWB1, 10 ,10,10,150\nAWB2,50,40,30,500\n";
        let packages = read_packages(data.as_bytes()).unwrap();
        assert_eq!(packages.len(), 2);
        assert_eq!(packages[0].reference, "AWB1");
        assert_eq!(packages[0].dimensions, PackageDimensions::new(10.0, 10.0, 10.0, 150.0));
    }

    #[test]
    fn test_awb_reference_is_not_a_header() {
        let data = "AWB202610190001,10,10,10,150\n";
        let packages = read_packages(data.as_bytes()).unwrap();
        assert_eq!(packages.len(), 1);
    }

    #[test]
    fn test_read_without_header() {
        let data = "P-1,20,15,10,300\n";
        let packages = read_packages(data.as_bytes()).unwrap();
        assert_eq!(packages.len(), 1);
        assert_eq!(packages[0].dimensions.height_cm, 10.0);
    }

    #[test]
    fn test_malformed_cells_read_as_zero() {
        let data = "P-1,20,,abc,\n";
        let packages = read_packages(data.as_bytes()).unwrap();
        assert_eq!(packages[0].dimensions, PackageDimensions::new(20.0, 0.0, 0.0, 0.0));
    }

    #[test]
    fn test_short_and_blank_rows_skipped() {
        let data = "P-1,20,15\n\nP-2,1,2,3,4\n,,,,\n";
        let packages = read_packages(data.as_bytes()).unwrap();
        assert_eq!(packages.len(), 1);
        assert_eq!(packages[0].reference, "P-2");
    }

    #[test]
    fn test_missing_file() {
        let result = load_packages_from_csv(Path::new("/nonexistent/packages.csv"));
        assert!(matches!(result, Err(Error::FileNotFound(_))));
    }
}

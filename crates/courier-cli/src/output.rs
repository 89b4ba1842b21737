//! Output formatting module

use courier_app::app::WeightQuote;
use courier_domain::service::{format_weight, BatchWeightResults};
use courier_types::{OutputFormat, Result};

pub fn output_quote(output_format: OutputFormat, quote: &WeightQuote) -> Result<()> {
    if output_format == OutputFormat::Json {
        let content = serde_json::to_string_pretty(quote)?;
        println!("{}", content);
        return Ok(());
    }

    let dims = &quote.dimensions;
    println!("\nPackage Weight");
    println!("==============");
    println!(
        "Dimensions:      {} x {} x {} cm",
        dims.length_cm, dims.width_cm, dims.height_cm
    );
    println!("Actual weight:   {} g", format_weight(quote.result.actual_weight_g));
    println!("Volumetric:      {} g", format_weight(quote.result.volumetric_weight_g));
    println!("Chargeable:      {} g", format_weight(quote.result.chargeable_weight_g));
    println!(
        "Billed by:       {}",
        if quote.is_volume_billed() { "volume" } else { "actual weight" }
    );

    if !quote.advisories.is_empty() {
        println!("\nNotes:");
        for advisory in &quote.advisories {
            println!("  - {}", advisory);
        }
    }

    Ok(())
}

pub fn output_batch(output_format: OutputFormat, results: &BatchWeightResults) -> Result<()> {
    if output_format == OutputFormat::Json {
        let content = serde_json::to_string_pretty(results)?;
        println!("{}", content);
        return Ok(());
    }

    println!(
        "{:<18} {:>22} {:>12} {:>12} {:>12}",
        "Reference", "L x W x H (cm)", "Actual", "Volumetric", "Chargeable"
    );
    println!("{}", "-".repeat(80));
    for line in &results.lines {
        let dims = &line.dimensions;
        let size = format!("{} x {} x {}", dims.length_cm, dims.width_cm, dims.height_cm);
        println!(
            "{:<18} {:>22} {:>12} {:>12} {:>11}{}",
            truncate(&line.reference, 18),
            truncate(&size, 22),
            format_weight(line.result.actual_weight_g),
            format_weight(line.result.volumetric_weight_g),
            format_weight(line.result.chargeable_weight_g),
            if line.is_volume_billed() { "*" } else { " " }
        );
    }
    println!("{}", "-".repeat(80));
    println!(
        "{:<18} {:>22} {:>12} {:>12} {:>12}",
        format!("{} packages", results.lines.len()),
        "",
        format_weight(results.total_actual_g),
        format_weight(results.total_volumetric_g),
        format_weight(results.total_chargeable_g)
    );
    println!("\n* billed by volume ({} packages)", results.volume_billed_count);

    Ok(())
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() > max_len {
        let truncated: String = s.chars().take(max_len.saturating_sub(2)).collect();
        format!("{}..", truncated)
    } else {
        s.to_string()
    }
}

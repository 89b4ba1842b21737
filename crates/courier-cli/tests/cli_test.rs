//! End-to-end tests for the courier-weight binary
//!
//! Every run points `--config` and `--store-dir` at a temp dir so the user's
//! own configuration and counters are never touched.

use std::path::Path;
use std::process::{Command, Output};

use tempfile::{tempdir, TempDir};

fn run(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_courier-weight"))
        .arg("--config")
        .arg(dir.join("config.json"))
        .arg("--store-dir")
        .arg(dir.join("store"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run courier-weight")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

fn workspace() -> TempDir {
    tempdir().unwrap()
}

#[test]
fn test_weight_json_volume_dominates() {
    let dir = workspace();
    let output = run(
        dir.path(),
        &["weight", "-l", "50", "-w", "40", "-H", "30", "-a", "500", "--format", "json"],
    );
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(json["result"]["volumetric_weight_g"], 12000.0);
    assert_eq!(json["result"]["chargeable_weight_g"], 12000.0);
}

#[test]
fn test_weight_malformed_input_degrades_to_zero() {
    let dir = workspace();
    let output = run(
        dir.path(),
        &["weight", "-l", "-5", "-w", "abc", "-H", "10", "--format", "json"],
    );
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(json["result"]["volumetric_weight_g"], 0.0);
    assert_eq!(json["result"]["chargeable_weight_g"], 0.0);
    assert!(!json["advisories"].as_array().unwrap().is_empty());
}

#[test]
fn test_weight_table_shows_two_decimals() {
    let dir = workspace();
    let output = run(dir.path(), &["weight", "-l", "10", "-w", "10", "-H", "10", "-a", ""]);
    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("Volumetric:      200.00 g"));
    assert!(text.contains("Chargeable:      200.00 g"));
}

#[test]
fn test_divisor_override() {
    let dir = workspace();
    let output = run(
        dir.path(),
        &["--divisor", "6000", "weight", "-l", "60", "-w", "50", "-H", "40", "-f", "json"],
    );
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(json["result"]["volumetric_weight_g"], 20000.0);
}

#[test]
fn test_next_number_increments_and_persists() {
    let dir = workspace();
    let first = run(dir.path(), &["next-number", "awb", "--date", "2026-10-19"]);
    let second = run(dir.path(), &["next-number", "awb", "--date", "2026-10-19"]);
    let bag = run(dir.path(), &["next-number", "bag", "--date", "2026-10-19"]);
    assert_eq!(stdout(&first).trim(), "AWB202610190001");
    assert_eq!(stdout(&second).trim(), "AWB202610190002");
    assert_eq!(stdout(&bag).trim(), "BAG202610190001");

    let last = run(dir.path(), &["last-number", "awb", "--date", "2026-10-19"]);
    assert_eq!(stdout(&last).trim(), "AWB202610190002");

    let next_day = run(dir.path(), &["next-number", "awb", "--date", "2026-10-20"]);
    assert_eq!(stdout(&next_day).trim(), "AWB202610200001");
}

#[test]
fn test_next_number_rejects_bad_date() {
    let dir = workspace();
    let output = run(dir.path(), &["next-number", "truck", "--date", "yesterday"]);
    assert!(!output.status.success());
}

#[test]
fn test_batch_exports_csv() {
    let dir = workspace();
    let input = dir.path().join("packages.csv");
    let export = dir.path().join("weights.csv");
    std::fs::write(
        &input,
        "reference,length,width,height,actual_weight\nAWB1,5,5,5,1000\nAWB2,50,40,30,500\n",
    )
    .unwrap();

    let output = run(
        dir.path(),
        &[
            "batch",
            input.to_str().unwrap(),
            "-o",
            export.to_str().unwrap(),
            "-f",
            "json",
        ],
    );
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(json["total_chargeable_g"], 13000.0);
    assert_eq!(json["volume_billed_count"], 1);

    let exported = std::fs::read_to_string(&export).unwrap();
    assert!(exported.contains("AWB2,50,40,30,500.00,12000.00,12000.00,volume"));
}

#[test]
fn test_batch_missing_file_fails() {
    let dir = workspace();
    let missing = dir.path().join("missing.csv");
    let output = run(dir.path(), &["batch", missing.to_str().unwrap()]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("File not found"));
}

#[test]
fn test_config_set_and_reject_invalid_divisor() {
    let dir = workspace();
    let set = run(dir.path(), &["config", "--set-output", "json"]);
    assert!(set.status.success());
    let saved = std::fs::read_to_string(dir.path().join("config.json")).unwrap();
    assert!(saved.contains("\"output_format\": \"json\""));

    let bad = run(dir.path(), &["config", "--set-divisor", "0"]);
    assert!(!bad.status.success());
    let saved = std::fs::read_to_string(dir.path().join("config.json")).unwrap();
    assert!(saved.contains("\"volumetric_divisor\": 5000.0"));
}

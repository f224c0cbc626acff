//! Integration tests for the firemap binary
//!
//! These tests verify exit codes, JSON output, and written documents.

use std::fs;
use std::path::PathBuf;
use std::process::Command;
use tempfile::TempDir;

fn firemap_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_firemap"))
}

fn write_fixture(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

const FORECAST: &str = r#"{
    "type": "FeatureCollection",
    "features": [
        {
            "type": "Feature",
            "geometry": {"type": "Polygon", "coordinates": [[[0, 0], [2, 0], [2, 2], [0, 2], [0, 0]]]},
            "properties": {"AREA_NAME": "Zone 4", "RISK_LEVEL": "RED"}
        },
        {
            "type": "Feature",
            "geometry": {"type": "Point", "coordinates": [1.5, 1.5]},
            "properties": {"cluster_center": true}
        }
    ]
}"#;

#[test]
fn test_validate_json_output_is_valid() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(&dir, "forecast.geojson", FORECAST);

    let output = Command::new(firemap_bin())
        .args(["validate", "--json"])
        .arg(&path)
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success(), "Command should succeed");

    let stdout = String::from_utf8_lossy(&output.stdout);
    let parsed: serde_json::Value =
        serde_json::from_str(&stdout).expect("Output should be valid JSON");

    assert_eq!(parsed["status"], "success");
    assert_eq!(parsed["data"]["valid_count"], 1);
    assert_eq!(parsed["data"]["files"][0]["document_type"], "FeatureCollection");
}

#[test]
fn test_validate_fails_on_invalid_document() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(&dir, "broken.geojson", r#"{"type": "FeatureCollection"}"#);

    let output = Command::new(firemap_bin())
        .arg("validate")
        .arg(&path)
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success(), "Invalid document should fail");
}

#[test]
fn test_normalize_to_stdout() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(&dir, "forecast.geojson", FORECAST);

    let output = Command::new(firemap_bin())
        .args(["normalize", "--compact"])
        .arg(&path)
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success(), "Command should succeed");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.trim().lines().count(), 1, "Compact output is a single line");

    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let props = &parsed["features"][0]["properties"];
    assert_eq!(props["name"], "Zone 4");
    assert_eq!(props["risk_level"], "extreme");
    assert_eq!(props["calculated_area"].as_f64(), Some(4.0));
    assert!(props["processed_at"].is_string());
}

#[test]
fn test_normalize_writes_output_file() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(&dir, "forecast.geojson", FORECAST);
    let destination = dir.path().join("normalized.geojson");

    let output = Command::new(firemap_bin())
        .args(["normalize", "--no-area", "-o"])
        .arg(&destination)
        .arg(&path)
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success(), "Command should succeed");

    let written: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&destination).unwrap()).unwrap();
    assert!(written["features"][0]["properties"].get("calculated_area").is_none());
}

#[test]
fn test_inspect_json_summaries() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(&dir, "forecast.geojson", FORECAST);

    let output = Command::new(firemap_bin())
        .args(["inspect", "--json"])
        .arg(&path)
        .arg(&path)
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success(), "Command should succeed");

    let parsed: serde_json::Value =
        serde_json::from_str(&String::from_utf8_lossy(&output.stdout)).unwrap();
    let reports = parsed["data"].as_array().unwrap();
    assert_eq!(reports.len(), 2);
    // The same source is normalized once, so both reports are identical
    assert_eq!(reports[0], reports[1]);

    let features = reports[0]["features"].as_array().unwrap();
    assert_eq!(features[0]["risk_level"], "extreme");
    assert_eq!(features[0]["centroid"], serde_json::json!([1.0, 1.0]));
    assert_eq!(features[1]["cluster_center"], true);
}

#[test]
fn test_config_json_reports_sources() {
    let dir = TempDir::new().unwrap();
    let config = write_fixture(&dir, "custom.toml", "pretty = false\n");

    let output = Command::new(firemap_bin())
        .args(["config", "--json", "--config"])
        .arg(&config)
        .env_remove("FIREMAP_PRETTY")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success(), "Command should succeed");

    let parsed: serde_json::Value =
        serde_json::from_str(&String::from_utf8_lossy(&output.stdout)).unwrap();
    assert_eq!(parsed["data"]["pretty"]["value"], false);
    assert_eq!(parsed["data"]["pretty"]["source"], "File");
}

//! End-to-end tests for `kandi-layout config` commands.

use std::fs;
use tempfile::TempDir;

mod fixtures;
use fixtures::*;

// ============================================================================
// Show Command Tests
// ============================================================================

#[test]
fn test_config_show_default() {
    let config_dir = TempDir::new().unwrap();
    let output = isolated_command(&["config", "show"], config_dir.path())
        .output()
        .expect("Failed to execute command");

    assert_eq!(
        output.status.code(),
        Some(0),
        "Show config should succeed. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Catalog: (built-in)"));
    assert!(stdout.contains("Settle delay: 300 ms"));
}

#[test]
fn test_config_show_json_schema() {
    let config_dir = TempDir::new().unwrap();
    let output = isolated_command(&["config", "show", "--json"], config_dir.path())
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));

    let stdout = String::from_utf8_lossy(&output.stdout);
    let result: serde_json::Value =
        serde_json::from_str(&stdout).expect("Should parse JSON output");

    assert!(result["paths"].is_object(), "Should have paths object");
    assert!(result["layout"].is_object(), "Should have layout object");
    assert!(result["framing"].is_object(), "Should have framing object");
    assert_eq!(result["layout"]["min_sequence_len"], 18);
    assert_eq!(result["framing"]["settle_ms"], 300);
}

// ============================================================================
// Set Command Tests
// ============================================================================

#[test]
fn test_config_set_requires_an_option() {
    let config_dir = TempDir::new().unwrap();
    let output = isolated_command(&["config", "set"], config_dir.path())
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("At least one configuration option"));
}

#[test]
fn test_config_set_persists() {
    let config_dir = TempDir::new().unwrap();
    let output = isolated_command(
        &["config", "set", "--settle-ms", "120", "--jitter", "0"],
        config_dir.path(),
    )
    .output()
    .expect("Failed to execute command");
    assert_eq!(
        output.status.code(),
        Some(0),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let saved = fs::read_to_string(config_dir.path().join("config.toml")).unwrap();
    assert!(saved.contains("settle_ms = 120"));
    assert!(!config_dir.path().join("config.toml.tmp").exists());

    let output = isolated_command(&["config", "show", "--json"], config_dir.path())
        .output()
        .expect("Failed to execute command");
    let result: serde_json::Value =
        serde_json::from_str(&String::from_utf8_lossy(&output.stdout)).unwrap();
    assert_eq!(result["framing"]["settle_ms"], 120);
    assert_eq!(result["layout"]["jitter_amplitude"], 0.0);
}

#[test]
fn test_zero_jitter_config_gives_still_layout() {
    let config_dir = TempDir::new().unwrap();
    isolated_command(&["config", "set", "--jitter", "0"], config_dir.path())
        .output()
        .expect("Failed to execute command");

    let output = isolated_command(
        &["layout", "--bead", "pony:pink", "--output", "-"],
        config_dir.path(),
    )
    .output()
    .expect("Failed to execute command");
    assert_eq!(output.status.code(), Some(0));

    let result: serde_json::Value =
        serde_json::from_str(&String::from_utf8_lossy(&output.stdout)).unwrap();
    assert!(result["beads"]
        .as_array()
        .unwrap()
        .iter()
        .all(|b| b["jitter"]["x"] == 0.0 && b["jitter"]["y"] == 0.0 && b["jitter"]["z"] == 0.0));
}

#[test]
fn test_config_set_rejects_invalid_catalog() {
    let config_dir = TempDir::new().unwrap();
    let catalog_path = config_dir.path().join("broken.json");
    fs::write(&catalog_path, r#"{"default_width": 1.0, "types": {}, "colors": {}}"#).unwrap();

    let output = isolated_command(
        &["config", "set", "--catalog", catalog_path.to_str().unwrap()],
        config_dir.path(),
    )
    .output()
    .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("neutral color"), "stderr: {stderr}");
    assert!(!config_dir.path().join("config.toml").exists());
}

#[test]
fn test_config_set_rejects_negative_jitter() {
    let config_dir = TempDir::new().unwrap();
    let output = isolated_command(
        &["config", "set", "--jitter=-0.5"],
        config_dir.path(),
    )
    .output()
    .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_corrupt_config_is_reported() {
    let config_dir = TempDir::new().unwrap();
    fs::write(config_dir.path().join("config.toml"), "[framing\nsettle_ms = ").unwrap();

    let output = isolated_command(&["config", "show"], config_dir.path())
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to parse config file"));
}

#[test]
fn test_config_set_keeps_unloadable_config() {
    let config_dir = TempDir::new().unwrap();
    let config_path = config_dir.path().join("config.toml");
    let original = "[paths]\ncatalog = \"/nonexistent/catalog.json\"\n\n[layout]\nrow_spacing = 1.5\nmin_sequence_len = 30\n";
    fs::write(&config_path, original).unwrap();

    let output = isolated_command(&["config", "set", "--settle-ms", "100"], config_dir.path())
        .output()
        .expect("Failed to execute command");

    assert_ne!(output.status.code(), Some(0));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Catalog file does not exist"), "stderr: {stderr}");
    assert_eq!(fs::read_to_string(&config_path).unwrap(), original);
}

#[test]
fn test_config_set_rejects_unbounded_settle_delay() {
    let config_dir = TempDir::new().unwrap();
    let output = isolated_command(
        &["config", "set", "--settle-ms", "18446744073709551615"],
        config_dir.path(),
    )
    .output()
    .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("framing.settle_ms"), "stderr: {stderr}");
    assert!(!config_dir.path().join("config.toml").exists());
}

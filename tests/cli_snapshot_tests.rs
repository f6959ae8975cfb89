//! End-to-end tests for `kandi-layout snapshot`.

use kandi_layout::models::{Bead, Design};
use tempfile::TempDir;

mod fixtures;
use fixtures::*;

fn snapshot(args: &[&str]) -> (std::process::Output, TempDir) {
    let config_dir = TempDir::new().unwrap();
    let mut full = vec!["snapshot"];
    full.extend_from_slice(args);
    let output = isolated_command(&full, config_dir.path())
        .output()
        .expect("Failed to execute command");
    (output, config_dir)
}

fn single_row_design() -> Design {
    Design {
        pattern: vec![Bead::pony("pink"), Bead::pony("blue")],
        word: None,
        stitch: "ladder".to_string(),
        rows: 1,
    }
}

#[test]
fn test_snapshot_json_reports_camera_commands() {
    let (_temp_dir, path) = temp_design_file(&single_row_design());
    let (output, _config_dir) = snapshot(&["--design", path.to_str().unwrap(), "--json"]);

    assert_eq!(
        output.status.code(),
        Some(0),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let result: serde_json::Value =
        serde_json::from_str(&String::from_utf8_lossy(&output.stdout)).unwrap();

    assert_eq!(result["bead_count"], 18);
    assert!(result["settled_after_ms"].as_u64().unwrap() >= 300);

    let commands: Vec<&str> = result["camera"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["command"].as_str().unwrap())
        .collect();
    assert_eq!(commands, vec!["ambient_motion", "pose", "fit"]);
    assert_eq!(result["camera"][2]["purpose"], "snapshot");
}

#[test]
fn test_snapshot_reframes_after_row_change() {
    let (_temp_dir, path) = temp_design_file(&single_row_design());
    let (output, _config_dir) = snapshot(&[
        "--design",
        path.to_str().unwrap(),
        "--rerows",
        "3",
        "--json",
    ]);

    assert_eq!(output.status.code(), Some(0));
    let result: serde_json::Value =
        serde_json::from_str(&String::from_utf8_lossy(&output.stdout)).unwrap();

    assert_eq!(result["bead_count"], 54);
    let fits: Vec<&serde_json::Value> = result["camera"]
        .as_array()
        .unwrap()
        .iter()
        .filter(|e| e["command"] == "fit")
        .collect();
    assert_eq!(fits.len(), 2);
    assert_eq!(fits[1]["bounds"], result["stable_bounds"]);
    assert_ne!(fits[0]["bounds"], result["stable_bounds"]);
}

#[test]
fn test_snapshot_exit_restores_viewing() {
    let (_temp_dir, path) = temp_design_file(&single_row_design());
    let (output, _config_dir) =
        snapshot(&["--design", path.to_str().unwrap(), "--exit"]);

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("✓ Framed 18 beads"));
    assert!(stdout.contains("motion   on"));
    assert!(stdout.contains("fit      Viewing"));
}

#[test]
fn test_snapshot_missing_design() {
    let (output, _config_dir) = snapshot(&["--design", "/nonexistent.json"]);
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_snapshot_refuses_unbounded_settle_delay() {
    let (_temp_dir, path) = temp_design_file(&single_row_design());
    let config_dir = TempDir::new().unwrap();
    std::fs::write(
        config_dir.path().join("config.toml"),
        "[framing]\nsettle_ms = 86400000\n",
    )
    .unwrap();

    let output = isolated_command(
        &["snapshot", "--design", path.to_str().unwrap()],
        config_dir.path(),
    )
    .output()
    .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("framing.settle_ms"), "stderr: {stderr}");
}

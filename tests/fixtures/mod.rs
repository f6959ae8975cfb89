//! Shared test fixtures for layout and CLI tests.
#![allow(dead_code)]

use kandi_layout::models::{Bead, BeadType, Design};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// Path to the kandi-layout binary
pub fn kandi_bin() -> &'static str {
    env!("CARGO_BIN_EXE_kandi-layout")
}

/// Command with an isolated, initially empty config directory.
pub fn isolated_command(args: &[&str], config_dir: &Path) -> Command {
    let mut cmd = Command::new(kandi_bin());
    cmd.env("KANDI_LAYOUT_CONFIG_DIR", config_dir);
    cmd.env_remove("RUST_LOG");
    cmd.args(args);
    cmd
}

/// `len` pony beads alternating between two colors.
pub fn alternating_pattern(len: usize, a: &str, b: &str) -> Vec<Bead> {
    (0..len)
        .map(|i| Bead::pony(if i % 2 == 0 { a } else { b }))
        .collect()
}

/// `len` beads with distinct color tokens `c0`, `c1`, ...
pub fn distinct_pattern(len: usize) -> Vec<Bead> {
    (0..len).map(|i| Bead::pony(format!("c{i}"))).collect()
}

/// A small mixed design used across CLI tests.
pub fn test_design_basic() -> Design {
    Design {
        pattern: vec![
            Bead::pony("hot-pink"),
            Bead::new(BeadType::Star, "neon-green"),
            Bead::pony("purple"),
            Bead::new(BeadType::Heart, "red"),
        ],
        word: Some("LOVE".to_string()),
        stitch: "Brick Stitch Cuff".to_string(),
        rows: 2,
    }
}

/// Writes `design` as JSON into a new temp directory.
pub fn temp_design_file(design: &Design) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("design.json");
    let json = serde_json::to_string_pretty(design).expect("Failed to serialize design");
    fs::write(&path, json).expect("Failed to write design");
    (temp_dir, path)
}

/// Writes raw text as a design file into a new temp directory.
pub fn temp_raw_design(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("design.json");
    fs::write(&path, content).expect("Failed to write design");
    (temp_dir, path)
}

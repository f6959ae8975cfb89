//! Configuration management for the application.
//!
//! This module handles loading, validating, and saving application configuration
//! in TOML format with platform-specific directory resolution.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::constants::{APP_CONFIG_DIR_NAME, CONFIG_DIR_ENV};
use crate::framing::FramingSettings;
use crate::layout::{LayoutEngine, LayoutTuning};
use crate::models::BeadCatalog;

/// Path configuration for file system locations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct PathConfig {
    /// Bead catalog JSON replacing the embedded one
    pub catalog: Option<PathBuf>,
}

/// Application configuration.
///
/// # File Location
///
/// - Linux: `~/.config/KandiLayout/config.toml`
/// - macOS: `~/Library/Application Support/KandiLayout/config.toml`
/// - Windows: `%APPDATA%\KandiLayout\config.toml`
///
/// Setting `KANDI_LAYOUT_CONFIG_DIR` replaces the directory.
///
/// # Validation
///
/// - `catalog` path must exist (if set)
/// - layout tuning values must be positive
/// - framing elevation must be within 0..=90 degrees
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    /// File system paths
    #[serde(default)]
    pub paths: PathConfig,
    /// Layout engine constants
    #[serde(default)]
    pub layout: LayoutTuning,
    /// Snapshot framing settings
    #[serde(default)]
    pub framing: FramingSettings,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the config directory path.
    ///
    /// - Linux: `~/.config/KandiLayout/`
    /// - macOS: `~/Library/Application Support/KandiLayout/`
    /// - Windows: `%APPDATA%\KandiLayout\`
    pub fn config_dir() -> Result<PathBuf> {
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV).filter(|v| !v.is_empty()) {
            return Ok(PathBuf::from(dir));
        }

        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join(APP_CONFIG_DIR_NAME);

        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Loads configuration from the config file.
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_file_path()?;

        if !config_path.exists() {
            return Ok(Self::new());
        }

        let content = fs::read_to_string(&config_path).context(format!(
            "Failed to read config file: {}",
            config_path.display()
        ))?;

        let config: Self = toml::from_str(&content).context(format!(
            "Failed to parse config file: {}",
            config_path.display()
        ))?;

        config.validate().context(format!(
            "Invalid config file: {}",
            config_path.display()
        ))?;

        Ok(config)
    }

    /// Saves configuration to the config file using atomic write.
    ///
    /// Uses temp file + rename pattern for atomic writes.
    pub fn save(&self) -> Result<()> {
        self.validate()?;

        let config_dir = Self::config_dir()?;
        fs::create_dir_all(&config_dir).context(format!(
            "Failed to create config directory: {}",
            config_dir.display()
        ))?;

        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;

        let config_path = Self::config_file_path()?;
        let temp_path = config_path.with_extension("toml.tmp");

        fs::write(&temp_path, content).context(format!(
            "Failed to write temp config file: {}",
            temp_path.display()
        ))?;

        fs::rename(&temp_path, &config_path).context(format!(
            "Failed to rename temp config file to: {}",
            config_path.display()
        ))?;

        Ok(())
    }

    /// Validates configuration values.
    pub fn validate(&self) -> Result<()> {
        if let Some(catalog_path) = &self.paths.catalog {
            if !catalog_path.is_file() {
                anyhow::bail!("Catalog file does not exist: {}", catalog_path.display());
            }
        }

        self.layout.validate()?;
        self.framing.validate()?;

        Ok(())
    }

    /// Loads the configured catalog, or the embedded one when none is set.
    pub fn catalog(&self) -> Result<BeadCatalog> {
        match &self.paths.catalog {
            Some(path) => BeadCatalog::from_path(path),
            None => BeadCatalog::load(),
        }
    }

    /// Builds a layout engine from the configured catalog and tuning.
    pub fn engine(&self) -> Result<LayoutEngine> {
        Ok(LayoutEngine::with_catalog(self.catalog()?).with_tuning(self.layout.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_config_new() {
        let config = Config::new();
        assert_eq!(config.paths.catalog, None);
        assert_eq!(config.layout, LayoutTuning::default());
        assert_eq!(config.framing.settle_ms, 300);
    }

    #[test]
    fn test_config_validate() {
        let config = Config::new();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validate_catalog_path() {
        let temp_dir = TempDir::new().unwrap();
        let catalog_path = temp_dir.path().join("catalog.json");

        let mut config = Config::new();
        config.paths.catalog = Some(catalog_path.clone());
        assert!(config.validate().is_err());

        fs::write(&catalog_path, "{}").unwrap();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validate_layout_and_framing() {
        let mut config = Config::new();
        config.layout.row_spacing = -1.0;
        assert!(config.validate().is_err());

        let mut config = Config::new();
        config.framing.elevation_deg = 95.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");

        let mut config = Config::new();
        config.framing.settle_ms = 120;
        config.layout.jitter_amplitude = 0.0;

        let content = toml::to_string_pretty(&config).unwrap();
        fs::write(&config_file, content).unwrap();

        let content = fs::read_to_string(&config_file).unwrap();
        let loaded: Config = toml::from_str(&content).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let loaded: Config = toml::from_str("[framing]\nsettle_ms = 50\n").unwrap();
        assert_eq!(loaded.framing.settle_ms, 50);
        assert_eq!(loaded.layout, LayoutTuning::default());
        assert_eq!(loaded.paths, PathConfig::default());
    }

    #[test]
    fn test_engine_uses_custom_catalog() {
        let temp_dir = TempDir::new().unwrap();
        let catalog_path = temp_dir.path().join("catalog.json");
        fs::write(
            &catalog_path,
            r##"{
                "default_width": 2.0,
                "types": {},
                "colors": { "white": { "hex": "#FFFFFF" } }
            }"##,
        )
        .unwrap();

        let mut config = Config::new();
        config.paths.catalog = Some(catalog_path);
        let engine = config.engine().unwrap();
        assert!(engine.catalog().has_color("white"));
        assert!(!engine.catalog().has_color("pink"));
    }
}

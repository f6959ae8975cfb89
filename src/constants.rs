//! Application-wide constants.
//!
//! This module defines constants used throughout the application,
//! including the application name and configuration locations.

/// The display name of the application (human-readable, with proper capitalization).
pub const APP_NAME: &str = "Kandi Layout";

/// The binary name of the application (used in command examples, lowercase with hyphens).
pub const APP_BINARY_NAME: &str = "kandi-layout";

/// Directory name under the platform config directory.
pub const APP_CONFIG_DIR_NAME: &str = "KandiLayout";

/// Environment variable that replaces the config directory.
pub const CONFIG_DIR_ENV: &str = "KANDI_LAYOUT_CONFIG_DIR";

//! CLI command handlers for Kandi Layout.
//!
//! This module provides headless, scriptable access to the layout engine and
//! snapshot framing for automation, testing, and storefront build pipelines.

pub mod catalog;
pub mod common;
pub mod config;
pub mod layout;
pub mod snapshot;
pub mod validate;

// Re-export types used by main.rs and tests
pub use catalog::CatalogArgs;
pub use common::{CliError, CliResult, ExitCode};
pub use config::ConfigArgs;
pub use layout::LayoutArgs;
pub use snapshot::SnapshotArgs;
pub use validate::ValidateArgs;

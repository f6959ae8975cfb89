//! Validation command for design files.

use crate::cli::common::{print_json, CliError, CliResult};
use crate::config::Config;
use crate::layout::{audit_document, NoJitter, QualityWarning, WarningKind};
use crate::models::Design;
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

/// Validate a design file for errors and warnings
#[derive(Debug, Clone, Args)]
pub struct ValidateArgs {
    /// Path to design JSON file
    #[arg(short, long, value_name = "FILE")]
    pub design: PathBuf,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,

    /// Treat warnings as errors (exit non-zero)
    #[arg(long)]
    pub strict: bool,
}

/// Validation report printed by the command.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationResponse {
    /// Whether the design lays out at all
    pub valid: bool,
    /// Resolved stitch
    pub stitch: String,
    /// Effective row count
    pub rows: usize,
    /// Beads the layout would place
    pub bead_count: usize,
    /// Data-quality findings
    pub warnings: Vec<QualityWarning>,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> CliResult<()> {
        let design = Design::load(&self.design)
            .map_err(|e| CliError::io(format!("Failed to load design: {e:#}")))?;

        let engine = Config::load()
            .and_then(|config| config.engine())
            .map_err(|e| CliError::io(format!("Failed to load configuration: {e:#}")))?;

        let config = design.to_layout_config();
        let warnings = audit_document(&design, engine.catalog());
        let result = engine.compute(&config, &mut NoJitter);

        let response = ValidationResponse {
            valid: !warnings.iter().any(|w| w.kind == WarningKind::EmptyDesign),
            stitch: config.stitch.to_string(),
            rows: config.effective_rows(),
            bead_count: result.beads.len(),
            warnings,
        };

        if self.json {
            print_json(&response)?;
        } else {
            print_human_readable(&response);
        }

        // Exit code
        if !response.valid {
            return Err(CliError::validation("Validation failed"));
        }

        if self.strict && !response.warnings.is_empty() {
            return Err(CliError::validation("Warnings found in strict mode"));
        }

        Ok(())
    }
}

fn print_human_readable(response: &ValidationResponse) {
    if response.valid {
        println!("✓ Validation passed");
    } else {
        println!("✗ Validation failed");
    }

    println!("\nLayout:");
    println!("  Stitch: {}", response.stitch);
    println!("  Rows:   {}", response.rows);
    println!("  Beads:  {}", response.bead_count);

    if !response.warnings.is_empty() {
        println!("\nIssues:");
        for warning in &response.warnings {
            let prefix = if warning.kind == WarningKind::EmptyDesign {
                "  ✗"
            } else {
                "  ⚠"
            };
            println!("{} {}", prefix, warning.message);
        }
    }
}

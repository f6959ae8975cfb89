//! Configuration management CLI commands.

use crate::cli::common::{print_json, CliError, CliResult};
use crate::config::Config;
use crate::constants::APP_NAME;
use crate::models::BeadCatalog;
use clap::{Args, Subcommand};
use std::path::PathBuf;

/// Configuration management commands
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Display current configuration
    Show(ConfigShowArgs),
    /// Set configuration values
    Set(ConfigSetArgs),
}

/// Display current configuration
#[derive(Args, Debug)]
pub struct ConfigShowArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Set configuration values
#[derive(Args, Debug)]
pub struct ConfigSetArgs {
    /// Bead catalog JSON file replacing the built-in catalog
    #[arg(long, value_name = "FILE", conflicts_with = "builtin_catalog")]
    catalog: Option<PathBuf>,

    /// Go back to the built-in catalog
    #[arg(long)]
    builtin_catalog: bool,

    /// Snapshot settle delay in milliseconds
    #[arg(long, value_name = "MS")]
    settle_ms: Option<u64>,

    /// Bead jitter amplitude in radians (0 disables jitter)
    #[arg(long, value_name = "RADIANS")]
    jitter: Option<f32>,
}

impl ConfigArgs {
    /// Execute config subcommand
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            ConfigCommand::Show(args) => args.execute(),
            ConfigCommand::Set(args) => args.execute(),
        }
    }
}

impl ConfigShowArgs {
    /// Execute show command
    pub fn execute(&self) -> CliResult<()> {
        let config = Config::load()
            .map_err(|e| CliError::validation(format!("Failed to load configuration: {e:#}")))?;

        if self.json {
            print_json(&config)?;
        } else {
            output_human_readable(&config);
        }

        Ok(())
    }
}

impl ConfigSetArgs {
    /// Execute set command
    pub fn execute(&self) -> CliResult<()> {
        // At least one argument must be provided
        if self.catalog.is_none()
            && !self.builtin_catalog
            && self.settle_ms.is_none()
            && self.jitter.is_none()
        {
            return Err(CliError::validation(
                "At least one configuration option must be specified: --catalog, --builtin-catalog, --settle-ms, or --jitter",
            ));
        }

        let mut config = Config::load()
            .map_err(|e| CliError::validation(format!("Failed to load configuration: {e:#}")))?;

        if let Some(path) = &self.catalog {
            BeadCatalog::from_path(path)
                .map_err(|e| CliError::validation(format!("Invalid bead catalog: {e:#}")))?;
            let path = path.canonicalize().unwrap_or_else(|_| path.clone());
            config.paths.catalog = Some(path);
        }

        if self.builtin_catalog {
            config.paths.catalog = None;
        }

        if let Some(settle_ms) = self.settle_ms {
            config.framing.settle_ms = settle_ms;
        }

        if let Some(jitter) = self.jitter {
            if !(jitter.is_finite() && jitter >= 0.0) {
                return Err(CliError::validation(format!(
                    "Jitter amplitude must be zero or positive, got {jitter}"
                )));
            }
            config.layout.jitter_amplitude = jitter;
        }

        config
            .validate()
            .map_err(|e| CliError::validation(format!("Invalid configuration: {e:#}")))?;

        config
            .save()
            .map_err(|e| CliError::io(format!("Failed to save configuration: {e:#}")))?;

        println!("Configuration updated successfully.");

        Ok(())
    }
}

/// Output configuration in human-readable format
fn output_human_readable(config: &Config) {
    println!("{APP_NAME} Configuration");
    println!("====================");
    println!();

    println!("Paths:");
    if let Some(catalog) = &config.paths.catalog {
        println!("  Catalog: {}", catalog.display());
    } else {
        println!("  Catalog: (built-in)");
    }
    println!();

    println!("Layout:");
    println!("  Min sequence length: {}", config.layout.min_sequence_len);
    println!("  Bead gap:            {}", config.layout.bead_gap);
    println!("  Jitter amplitude:    {}", config.layout.jitter_amplitude);
    println!();

    println!("Framing:");
    println!("  Settle delay: {} ms", config.framing.settle_ms);
    println!("  Elevation:    {} deg", config.framing.elevation_deg);
    println!("  Distance:     {}", config.framing.distance);
    println!();
}

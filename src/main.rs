//! Kandi Layout - bead bracelet layout engine
//!
//! Computes bracelet layouts from design files or command-line beads,
//! validates designs, and simulates snapshot framing.

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use kandi_layout::cli::{
    CatalogArgs, CliError, ConfigArgs, ExitCode, LayoutArgs, SnapshotArgs, ValidateArgs,
};
use kandi_layout::constants::APP_BINARY_NAME;

/// Kandi Layout - procedural bead bracelet layout engine
#[derive(Parser, Debug)]
#[command(name = APP_BINARY_NAME, author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Compute a bracelet layout
    Layout(LayoutArgs),
    /// Validate a design file
    Validate(ValidateArgs),
    /// List bead types and colors
    Catalog(CatalogArgs),
    /// Frame a design for a snapshot
    Snapshot(SnapshotArgs),
    /// Manage configuration
    Config(ConfigArgs),
}

impl Commands {
    fn execute(&self) -> Result<(), CliError> {
        match self {
            Self::Layout(args) => args.execute(),
            Self::Validate(args) => args.execute(),
            Self::Catalog(args) => args.execute(),
            Self::Snapshot(args) => args.execute(),
            Self::Config(args) => args.execute(),
        }
    }
}

fn main() {
    let cli = Cli::parse();

    // Initialize tracing; stdout carries command output
    let filter = if cli.verbose { "info" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let code = match cli.command.execute() {
        Ok(()) => ExitCode::Success,
        Err(err) => {
            eprintln!("Error: {err}");
            err.exit_code()
        }
    };

    std::process::exit(code.code());
}

//! Layout command: computes a bracelet layout and writes it as JSON.

use crate::cli::common::{CliError, CliResult};
use crate::config::Config;
use crate::layout::{JitterSource, NoJitter, RandomJitter};
use crate::models::{Bead, BeadType, Design, LayoutConfig, LayoutResult, StitchStyle};
use clap::Args;
use std::fs;
use std::path::PathBuf;
use tracing::info;

/// Compute a bracelet layout
#[derive(Debug, Clone, Args)]
pub struct LayoutArgs {
    /// Path to design JSON file
    #[arg(short, long, value_name = "FILE", conflicts_with = "beads")]
    pub design: Option<PathBuf>,

    /// Pattern bead as TYPE:COLOR, or letter:X (repeatable)
    #[arg(short, long = "bead", value_name = "TYPE:COLOR")]
    pub beads: Vec<String>,

    /// Word spelled in letter beads ahead of the pattern
    #[arg(short, long)]
    pub word: Option<String>,

    /// Stitch option text (e.g. "ladder", "Brick Stitch", "x-base")
    #[arg(short, long, value_name = "TEXT")]
    pub stitch: Option<String>,

    /// Row count
    #[arg(short, long, allow_negative_numbers = true)]
    pub rows: Option<i32>,

    /// Seed for reproducible bead jitter
    #[arg(long, conflicts_with = "no_jitter")]
    pub seed: Option<u64>,

    /// Disable bead jitter
    #[arg(long)]
    pub no_jitter: bool,

    /// Output path, or - for stdout (defaults to [stitch]_layout_[date].json)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

impl LayoutArgs {
    /// Execute the layout command
    pub fn execute(&self) -> CliResult<()> {
        let config = self.layout_config()?;

        let settings = Config::load()
            .map_err(|e| CliError::io(format!("Failed to load configuration: {e:#}")))?;
        let engine = settings
            .engine()
            .map_err(|e| CliError::io(format!("Failed to load bead catalog: {e:#}")))?;

        let mut jitter: Box<dyn JitterSource> = match (self.no_jitter, self.seed) {
            (true, _) => Box::new(NoJitter),
            (false, Some(seed)) => Box::new(RandomJitter::seeded(seed)),
            (false, None) => Box::new(RandomJitter::from_entropy()),
        };

        let result = engine.compute(&config, jitter.as_mut());
        info!(
            stitch = %config.stitch,
            beads = result.beads.len(),
            "layout computed"
        );

        let json = serde_json::to_string_pretty(&result)
            .map_err(|e| CliError::io(format!("Failed to serialize layout: {e}")))?;

        let output_path = self.get_output_path(config.stitch);
        if output_path.as_os_str() == "-" {
            println!("{json}");
            return Ok(());
        }

        fs::write(&output_path, json)
            .map_err(|e| CliError::io(format!("Failed to write output file: {e}")))?;

        println!("{}", summary(&config, &result));
        println!("✓ Wrote layout to: {}", output_path.display());

        Ok(())
    }

    /// Builds the engine request from the design file and flag overrides.
    fn layout_config(&self) -> CliResult<LayoutConfig> {
        let mut design = match &self.design {
            Some(path) => Design::load(path)
                .map_err(|e| CliError::io(format!("Failed to load design: {e:#}")))?,
            None => Design {
                pattern: Vec::new(),
                word: None,
                stitch: StitchStyle::Ladder.name().to_string(),
                rows: 1,
            },
        };

        if !self.beads.is_empty() {
            design.pattern = self
                .beads
                .iter()
                .map(|spec| parse_bead(spec))
                .collect::<CliResult<_>>()?;
        }
        if let Some(word) = &self.word {
            design.word = Some(word.clone());
        }
        if let Some(stitch) = &self.stitch {
            design.stitch.clone_from(stitch);
        }
        if let Some(rows) = self.rows {
            design.rows = rows;
        }

        Ok(design.to_layout_config())
    }

    /// Get the output file path (either user-specified or auto-generated)
    fn get_output_path(&self, stitch: StitchStyle) -> PathBuf {
        if let Some(ref path) = self.output {
            return path.clone();
        }

        // Auto-generate filename: [stitch]_layout_[date].json
        let date = chrono::Local::now().format("%Y-%m-%d");
        let stitch_name = stitch.name().replace('-', "_");

        PathBuf::from(format!("{}_layout_{}.json", stitch_name, date))
    }
}

/// Parses a `TYPE:COLOR` or `letter:X` bead argument.
pub fn parse_bead(spec: &str) -> CliResult<Bead> {
    let (kind, value) = spec.split_once(':').ok_or_else(|| {
        CliError::validation(format!(
            "Invalid bead '{spec}': expected TYPE:COLOR or letter:X"
        ))
    })?;

    let kind: BeadType = kind
        .trim()
        .parse()
        .map_err(|e| CliError::validation(format!("Invalid bead '{spec}': {e}")))?;
    let value = value.trim();

    if kind == BeadType::Letter {
        let mut chars = value.chars();
        return match (chars.next(), chars.next()) {
            (Some(letter), None) => Ok(Bead::letter(letter)),
            _ => Err(CliError::validation(format!(
                "Invalid bead '{spec}': letter beads take exactly one character"
            ))),
        };
    }

    if value.is_empty() {
        return Err(CliError::validation(format!(
            "Invalid bead '{spec}': missing color"
        )));
    }

    Ok(Bead::new(kind, value))
}

fn summary(config: &LayoutConfig, result: &LayoutResult) -> String {
    format!(
        "{} stitch, {} row(s): {} beads on radius {:.2}",
        config.stitch,
        config.effective_rows(),
        result.beads.len(),
        result.radius
    )
}

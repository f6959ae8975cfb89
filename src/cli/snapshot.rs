//! Snapshot command: runs snapshot framing headlessly and reports the camera
//! commands a renderer would receive.

use crate::cli::common::{print_json, CliError, CliResult};
use crate::config::Config;
use crate::framing::{CameraEvent, FramingController, RecordingCamera};
use crate::layout::NoJitter;
use crate::models::{Bounds, Design};
use clap::Args;
use serde::Serialize;
use std::cell::Cell;
use std::path::PathBuf;
use std::rc::Rc;
use std::time::Duration;
use tracing::info;

/// Simulated frame interval.
const FRAME_STEP: Duration = Duration::from_millis(16);

/// Frame a design for a snapshot and report the camera commands
#[derive(Debug, Clone, Args)]
pub struct SnapshotArgs {
    /// Path to design JSON file
    #[arg(short, long, value_name = "FILE")]
    pub design: PathBuf,

    /// Change the row count after framing starts
    #[arg(long, value_name = "N", allow_negative_numbers = true)]
    pub rerows: Option<i32>,

    /// Return to viewing once the frame is stable
    #[arg(long)]
    pub exit: bool,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct SnapshotResponse {
    stitch: String,
    bead_count: usize,
    settled_after_ms: u128,
    stable_bounds: Bounds,
    camera: Vec<CameraEvent>,
}

impl SnapshotArgs {
    /// Execute the snapshot command
    pub fn execute(&self) -> CliResult<()> {
        let design = Design::load(&self.design)
            .map_err(|e| CliError::io(format!("Failed to load design: {e:#}")))?;
        let settings = Config::load()
            .map_err(|e| CliError::io(format!("Failed to load configuration: {e:#}")))?;
        let engine = settings
            .engine()
            .map_err(|e| CliError::io(format!("Failed to load bead catalog: {e:#}")))?;

        let mut config = design.to_layout_config();
        let mut result = engine.compute(&config, &mut NoJitter);

        let mut controller = FramingController::new(
            RecordingCamera::new(),
            settings.framing.clone(),
            Bounds::from_layout(&result),
        );
        let stable: Rc<Cell<Option<Bounds>>> = Rc::new(Cell::new(None));
        let sink = Rc::clone(&stable);
        controller.on_stable(move |bounds| sink.set(Some(*bounds)));

        controller.enter_framing();

        if let Some(rows) = self.rerows {
            config.rows = rows;
            result = engine.compute(&config, &mut NoJitter);
            controller.layout_changed(Bounds::from_layout(&result));
        }

        let mut elapsed = Duration::ZERO;
        while !controller.advance(FRAME_STEP) {
            elapsed += FRAME_STEP;
        }
        elapsed += FRAME_STEP;

        let stable_bounds = stable
            .get()
            .ok_or_else(|| CliError::io("Framing never reported a stable frame"))?;
        info!(elapsed_ms = elapsed.as_millis(), "framing settled");

        if self.exit {
            controller.exit_framing();
        }

        let response = SnapshotResponse {
            stitch: config.stitch.to_string(),
            bead_count: result.beads.len(),
            settled_after_ms: elapsed.as_millis(),
            stable_bounds,
            camera: controller.into_camera().events,
        };

        if self.json {
            print_json(&response)?;
        } else {
            print_human_readable(&response);
        }

        Ok(())
    }
}

fn print_human_readable(response: &SnapshotResponse) {
    let size = response.stable_bounds.size();
    let center = response.stable_bounds.center();

    println!(
        "✓ Framed {} beads ({} stitch) after {} ms",
        response.bead_count, response.stitch, response.settled_after_ms
    );
    println!(
        "  Center: ({:.2}, {:.2}, {:.2})",
        center.x, center.y, center.z
    );
    println!("  Size:   {:.2} x {:.2} x {:.2}", size.x, size.y, size.z);

    println!("\nCamera commands:");
    for event in &response.camera {
        match event {
            CameraEvent::Pose { pose } => println!(
                "  pose     eye ({:.2}, {:.2}, {:.2})",
                pose.position.x, pose.position.y, pose.position.z
            ),
            CameraEvent::AmbientMotion { enabled } => {
                println!("  motion   {}", if *enabled { "on" } else { "off" });
            }
            CameraEvent::Fit { bounds, purpose } => {
                let size = bounds.size();
                println!(
                    "  fit      {:?} {:.2} x {:.2} x {:.2}",
                    purpose, size.x, size.y, size.z
                );
            }
        }
    }
}

//! Camera abstraction driven by the framing controller.

use serde::{Deserialize, Serialize};

use crate::models::{Bounds, Vec3};

/// Observer placement.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewPose {
    /// Eye position
    pub position: Vec3,
    /// Point the camera looks at
    pub target: Vec3,
}

impl ViewPose {
    /// Pose looking at `target` from `distance` away, raised `elevation_deg`
    /// above the ring plane.
    #[must_use]
    pub fn looking_at(target: Vec3, elevation_deg: f32, distance: f32) -> Self {
        let elevation = elevation_deg.to_radians();
        let position = Vec3::new(
            target.x,
            target.y - distance * elevation.cos(),
            target.z + distance * elevation.sin(),
        );
        Self { position, target }
    }
}

/// Why a bounds fit was requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FitPurpose {
    /// Tight canonical framing for a captured image
    Snapshot,
    /// Regular interactive framing
    Viewing,
}

/// Commands a host renderer accepts from the framing controller.
pub trait CameraControl {
    /// Moves the camera to `pose`.
    fn set_pose(&mut self, pose: ViewPose);

    /// Enables or suspends idle float and auto-rotation.
    fn set_ambient_motion(&mut self, enabled: bool);

    /// Zooms so `bounds` fill the frame.
    fn fit_to_bounds(&mut self, bounds: &Bounds, purpose: FitPurpose);
}

/// A command received by a [`RecordingCamera`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum CameraEvent {
    /// `set_pose`
    Pose {
        /// Requested pose
        pose: ViewPose,
    },
    /// `set_ambient_motion`
    AmbientMotion {
        /// Whether motion was enabled
        enabled: bool,
    },
    /// `fit_to_bounds`
    Fit {
        /// Bounds to fit
        bounds: Bounds,
        /// Fit purpose
        purpose: FitPurpose,
    },
}

/// Camera that records every command, for headless runs and tests.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecordingCamera {
    /// Commands in the order received
    pub events: Vec<CameraEvent>,
}

impl RecordingCamera {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recent fit request.
    #[must_use]
    pub fn last_fit(&self) -> Option<(&Bounds, FitPurpose)> {
        self.events.iter().rev().find_map(|event| match event {
            CameraEvent::Fit { bounds, purpose } => Some((bounds, *purpose)),
            _ => None,
        })
    }

    /// Number of fit requests with `purpose`.
    #[must_use]
    pub fn fit_count(&self, purpose: FitPurpose) -> usize {
        self.events
            .iter()
            .filter(|event| matches!(event, CameraEvent::Fit { purpose: p, .. } if *p == purpose))
            .count()
    }
}

impl CameraControl for RecordingCamera {
    fn set_pose(&mut self, pose: ViewPose) {
        self.events.push(CameraEvent::Pose { pose });
    }

    fn set_ambient_motion(&mut self, enabled: bool) {
        self.events.push(CameraEvent::AmbientMotion { enabled });
    }

    fn fit_to_bounds(&mut self, bounds: &Bounds, purpose: FitPurpose) {
        self.events.push(CameraEvent::Fit {
            bounds: *bounds,
            purpose,
        });
    }
}

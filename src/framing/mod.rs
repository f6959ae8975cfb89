//! Snapshot framing controller.
//!
//! A two-state machine that puts the host camera into a fixed canonical pose
//! for capturing a preview image, and reports once the frame has settled. The
//! controller owns no timers; the host drives it with [`FramingController::advance`].

pub mod camera;
pub mod settings;

pub use camera::{CameraControl, CameraEvent, FitPurpose, RecordingCamera, ViewPose};
pub use settings::{FramingSettings, MAX_SETTLE_MS};

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;
use tracing::debug;

use crate::models::Bounds;

/// Framing state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FramingState {
    /// Interactive viewing with ambient motion
    #[default]
    Idle,
    /// Canonical snapshot pose
    Framing,
}

type StableCallback = Box<dyn FnMut(&Bounds)>;

/// Drives a [`CameraControl`] between interactive viewing and snapshot framing.
pub struct FramingController<C: CameraControl> {
    camera: C,
    settings: FramingSettings,
    state: FramingState,
    bounds: Bounds,
    since_fit: Duration,
    settling: bool,
    on_stable: Option<StableCallback>,
}

impl<C: CameraControl> fmt::Debug for FramingController<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FramingController")
            .field("state", &self.state)
            .field("bounds", &self.bounds)
            .field("since_fit", &self.since_fit)
            .field("settling", &self.settling)
            .finish_non_exhaustive()
    }
}

impl<C: CameraControl> FramingController<C> {
    /// Creates an idle controller for a layout with `bounds`.
    pub fn new(camera: C, settings: FramingSettings, bounds: Bounds) -> Self {
        Self {
            camera,
            settings,
            state: FramingState::Idle,
            bounds,
            since_fit: Duration::ZERO,
            settling: false,
            on_stable: None,
        }
    }

    /// Registers the callback invoked once per settled snapshot fit.
    pub fn on_stable(&mut self, callback: impl FnMut(&Bounds) + 'static) {
        self.on_stable = Some(Box::new(callback));
    }

    /// Enters snapshot framing. While already framing, re-runs the fit.
    pub fn enter_framing(&mut self) {
        if self.state == FramingState::Idle {
            self.camera.set_ambient_motion(false);
            self.state = FramingState::Framing;
        }
        self.fit_snapshot();
    }

    /// Returns to interactive viewing. No-op when idle.
    pub fn exit_framing(&mut self) {
        if self.state == FramingState::Idle {
            return;
        }
        self.state = FramingState::Idle;
        self.settling = false;
        self.camera.set_ambient_motion(true);
        self.camera.fit_to_bounds(&self.bounds, FitPurpose::Viewing);
        debug!("exited framing");
    }

    /// Records new layout geometry; while framing, re-runs the fit with it.
    pub fn layout_changed(&mut self, bounds: Bounds) {
        self.bounds = bounds;
        if self.state == FramingState::Framing {
            self.fit_snapshot();
        }
    }

    /// Advances the settle timer. Returns `true` when the frame became stable
    /// during this call.
    pub fn advance(&mut self, elapsed: Duration) -> bool {
        if !self.settling {
            return false;
        }

        self.since_fit = self.since_fit.saturating_add(elapsed);
        if self.since_fit < self.settings.settle_delay() {
            return false;
        }

        self.settling = false;
        debug!(bounds = ?self.bounds, "framing stable");
        if let Some(callback) = self.on_stable.as_mut() {
            callback(&self.bounds);
        }
        true
    }

    /// Current state.
    pub const fn state(&self) -> FramingState {
        self.state
    }

    /// Whether the controller is framing and the last fit has settled.
    pub const fn is_stable(&self) -> bool {
        matches!(self.state, FramingState::Framing) && !self.settling
    }

    /// Bounds of the current layout.
    pub const fn bounds(&self) -> &Bounds {
        &self.bounds
    }

    /// The driven camera.
    pub const fn camera(&self) -> &C {
        &self.camera
    }

    /// Releases the camera.
    pub fn into_camera(self) -> C {
        self.camera
    }

    fn fit_snapshot(&mut self) {
        let pose = ViewPose::looking_at(
            self.bounds.center(),
            self.settings.elevation_deg,
            self.settings.distance,
        );
        self.camera.set_pose(pose);
        self.camera.fit_to_bounds(&self.bounds, FitPurpose::Snapshot);
        self.since_fit = Duration::ZERO;
        self.settling = true;
        debug!(bounds = ?self.bounds, "snapshot fit requested");
    }
}

//! Snapshot framing parameters.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Longest settle delay a snapshot may wait for.
pub const MAX_SETTLE_MS: u64 = 60_000;

/// Canonical snapshot view and settle delay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FramingSettings {
    /// Delay after the last fit before the frame counts as stable
    pub settle_ms: u64,
    /// Camera elevation above the ring plane, in degrees
    pub elevation_deg: f32,
    /// Camera distance from the layout center
    pub distance: f32,
}

impl Default for FramingSettings {
    fn default() -> Self {
        Self {
            settle_ms: 300,
            elevation_deg: 35.0,
            distance: 12.0,
        }
    }
}

impl FramingSettings {
    /// Settle delay as a duration.
    #[must_use]
    pub const fn settle_delay(&self) -> Duration {
        Duration::from_millis(self.settle_ms)
    }

    /// Rejects poses the camera cannot take and unbounded settle delays.
    pub fn validate(&self) -> Result<()> {
        if self.settle_ms > MAX_SETTLE_MS {
            anyhow::bail!(
                "framing.settle_ms must be at most {MAX_SETTLE_MS}, got {}",
                self.settle_ms
            );
        }
        if !(0.0..=90.0).contains(&self.elevation_deg) {
            anyhow::bail!(
                "framing.elevation_deg must be between 0 and 90, got {}",
                self.elevation_deg
            );
        }
        if !(self.distance.is_finite() && self.distance > 0.0) {
            anyhow::bail!("framing.distance must be positive, got {}", self.distance);
        }
        Ok(())
    }
}

//! Procedural bracelet layout engine.
//!
//! [`LayoutEngine::compute`] turns a [`LayoutConfig`] into a [`LayoutResult`]:
//!
//! 1. the pattern and word are normalized into a circular sequence
//! 2. the ring radius is solved from bead widths and the stitch multiplier,
//!    or from the column count for flower bands
//! 3. the stitch strategy places every bead on the ring
//!
//! Computation is pure apart from the caller-supplied [`JitterSource`].

pub mod audit;
pub mod jitter;
pub mod normalizer;
pub mod radius;
pub mod stitches;
pub mod tuning;

pub use audit::{audit_design, audit_document, QualityWarning, WarningKind};
pub use jitter::{JitterSource, NoJitter, RandomJitter};
pub use tuning::{LayoutTuning, StitchMultipliers};

use tracing::{debug, warn};

use crate::models::{BeadCatalog, LayoutConfig, LayoutResult};
use stitches::StrategyInput;

/// Computes bracelet layouts against a bead catalog and tuning table.
#[derive(Debug, Clone, Default)]
pub struct LayoutEngine {
    catalog: BeadCatalog,
    tuning: LayoutTuning,
}

impl LayoutEngine {
    /// Engine with the embedded catalog and default tuning.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Engine with a custom catalog and default tuning.
    #[must_use]
    pub fn with_catalog(catalog: BeadCatalog) -> Self {
        Self {
            catalog,
            tuning: LayoutTuning::default(),
        }
    }

    /// Replaces the tuning table.
    #[must_use]
    pub fn with_tuning(mut self, tuning: LayoutTuning) -> Self {
        self.tuning = tuning;
        self
    }

    /// The catalog in use.
    #[must_use]
    pub const fn catalog(&self) -> &BeadCatalog {
        &self.catalog
    }

    /// The tuning table in use.
    #[must_use]
    pub const fn tuning(&self) -> &LayoutTuning {
        &self.tuning
    }

    /// Lays out `config`.
    ///
    /// Never fails: unknown colors render with the fallback color, malformed
    /// letter beads render blank, and row counts below 1 behave as 1. Each such
    /// substitution is logged as a warning.
    pub fn compute(&self, config: &LayoutConfig, jitter: &mut dyn JitterSource) -> LayoutResult {
        for warning in audit_design(config, &self.catalog) {
            if warning.kind.is_fallback() {
                warn!(kind = %warning.kind, "{}", warning.message);
            }
        }

        let sequence = normalizer::normalize(
            &config.pattern,
            config.word(),
            self.tuning.min_sequence_len,
        );
        if sequence.is_empty() {
            debug!("empty design, returning empty layout");
            return LayoutResult::empty(self.tuning.empty_radius);
        }

        let input = StrategyInput {
            sequence: &sequence,
            rows: config.effective_rows(),
            radius: radius::ring_radius(&sequence, config.stitch, &self.catalog, &self.tuning),
            catalog: &self.catalog,
            tuning: &self.tuning,
        };
        let output = stitches::run(config.stitch, &input, jitter);

        debug!(
            stitch = %config.stitch,
            sequence_len = sequence.len(),
            rows = input.rows,
            beads = output.beads.len(),
            radius = output.radius,
            "computed layout"
        );

        LayoutResult {
            beads: output.beads,
            radius: output.radius,
            strings: output.strings,
        }
    }
}

/// Lays out `config` with the embedded catalog, default tuning and entropy jitter.
#[must_use]
pub fn compute_layout(config: &LayoutConfig) -> LayoutResult {
    LayoutEngine::new().compute(config, &mut RandomJitter::from_entropy())
}

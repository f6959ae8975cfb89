//! Data models for beads, designs, catalogs and layout output.
//!
//! Models are plain values with no layout logic; the engine in
//! [`crate::layout`] consumes and produces them.

pub mod bead;
pub mod catalog;
pub mod design;
pub mod placed;
pub mod rgb;
pub mod stitch;

// Re-export all model types
pub use bead::{Bead, BeadType, GeometryClass, NEUTRAL_COLOR};
pub use catalog::{BeadCatalog, ColorEntry, TypeEntry};
pub use design::{Design, LayoutConfig};
pub use placed::{BeadRole, Bounds, LayoutResult, PlacedBead, StringGuide, Vec3};
pub use rgb::RgbColor;
pub use stitch::StitchStyle;

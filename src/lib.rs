//! Kandi Layout - procedural bead bracelet layout engine
//!
//! Turns a bead pattern, stitch style and row count into a 3D arrangement of
//! beads for rendering and fabrication guidance, and drives the snapshot
//! framing of a rendered bracelet.
//!
//! ```
//! use kandi_layout::layout::{LayoutEngine, NoJitter};
//! use kandi_layout::models::{Bead, LayoutConfig, StitchStyle};
//!
//! let config = LayoutConfig::new(vec![Bead::pony("pink")], StitchStyle::Ladder, 1);
//! let layout = LayoutEngine::new().compute(&config, &mut NoJitter);
//! assert_eq!(layout.beads.len(), 18);
//! ```

pub mod cli;
pub mod config;
pub mod constants;
pub mod framing;
pub mod layout;
pub mod models;

pub use layout::{compute_layout, LayoutEngine};

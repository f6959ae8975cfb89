//! Layout output: placed beads, string guides and the ring bounds.

use serde::{Deserialize, Serialize};

use super::{Bead, BeadType, RgbColor};

/// Point or rotation triple in layout space (ring axis along Z).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vec3 {
    /// X component
    pub x: f32,
    /// Y component
    pub y: f32,
    /// Z component
    pub z: f32,
}

impl Vec3 {
    /// The zero vector.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    /// Creates a new vector.
    #[must_use]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Point on a ring of `radius` at `angle` radians and height `z`.
    #[must_use]
    pub fn on_ring(radius: f32, angle: f32, z: f32) -> Self {
        Self::new(angle.cos() * radius, angle.sin() * radius, z)
    }

    /// Component-wise minimum.
    #[must_use]
    pub fn min(self, other: Self) -> Self {
        Self::new(self.x.min(other.x), self.y.min(other.y), self.z.min(other.z))
    }

    /// Component-wise maximum.
    #[must_use]
    pub fn max(self, other: Self) -> Self {
        Self::new(self.x.max(other.x), self.y.max(other.y), self.z.max(other.z))
    }
}

/// Structural role of a placed bead within its unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BeadRole {
    /// Carries a bead from the normalized sequence
    Pattern,
    /// X-Base corner bead around a pattern bead
    Frame,
    /// X-Base bead bridging two neighbouring units
    Connector,
    /// X-Base bead closing the top or bottom edge
    Rim,
    /// Neutral flower bead around the colored center
    Petal,
}

/// One bead positioned in 3D space, ready for a renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedBead {
    /// Bead shape
    #[serde(rename = "type")]
    pub kind: BeadType,
    /// Color token as authored
    pub color: String,
    /// Letter glyph, only on letter beads
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub letter: Option<char>,
    /// Catalog display color for `color`
    pub display_color: RgbColor,
    /// Emissive rendering hint from the catalog
    pub luminous: bool,
    /// Structural role
    pub role: BeadRole,
    /// Index of the unit this bead belongs to (row-major over the sequence)
    pub group: usize,
    /// Bead center
    pub position: Vec3,
    /// Rotation about the ring axis, in radians
    pub rotation_z: f32,
    /// Cosmetic rotation noise, in radians per axis
    pub jitter: Vec3,
    /// Thread-hole tilt, in radians
    pub tilt: f32,
}

impl PlacedBead {
    /// Whether this bead shows `source`'s color and glyph.
    #[must_use]
    pub fn shows(&self, source: &Bead) -> bool {
        self.kind == source.kind && self.color == source.color && self.letter == source.glyph()
    }
}

/// Physical connecting thread of a single-strand row.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StringGuide {
    /// Row height
    pub z: f32,
    /// Ring radius the thread follows
    pub radius: f32,
}

/// Complete layout of one bracelet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutResult {
    /// Every placed bead
    pub beads: Vec<PlacedBead>,
    /// Ring radius
    pub radius: f32,
    /// Thread guides (single stitch only)
    pub strings: Vec<StringGuide>,
}

impl LayoutResult {
    /// Layout with no beads and the given fallback radius.
    #[must_use]
    pub const fn empty(radius: f32) -> Self {
        Self {
            beads: Vec::new(),
            radius,
            strings: Vec::new(),
        }
    }
}

/// Axis-aligned box around a layout.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    /// Minimum corner
    pub min: Vec3,
    /// Maximum corner
    pub max: Vec3,
}

impl Bounds {
    /// Bounds of all bead centers; a bead-less layout covers its ring in the XY plane.
    #[must_use]
    pub fn from_layout(layout: &LayoutResult) -> Self {
        let mut positions = layout.beads.iter().map(|b| b.position);
        let Some(first) = positions.next() else {
            let r = layout.radius;
            return Self {
                min: Vec3::new(-r, -r, 0.0),
                max: Vec3::new(r, r, 0.0),
            };
        };

        let (min, max) = positions.fold((first, first), |(lo, hi), p| (lo.min(p), hi.max(p)));
        Self { min, max }
    }

    /// Geometric center of the box.
    #[must_use]
    pub fn center(&self) -> Vec3 {
        Vec3::new(
            (self.min.x + self.max.x) / 2.0,
            (self.min.y + self.max.y) / 2.0,
            (self.min.z + self.max.z) / 2.0,
        )
    }

    /// Edge lengths of the box.
    #[must_use]
    pub fn size(&self) -> Vec3 {
        Vec3::new(
            self.max.x - self.min.x,
            self.max.y - self.min.y,
            self.max.z - self.min.z,
        )
    }
}

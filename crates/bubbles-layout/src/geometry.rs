//! Axis-aligned boxes for bubbles and the overlap test between them.

use serde::{Deserialize, Serialize};

/// Square box a bubble occupies, derived from its top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub width: f64,
    pub height: f64,
}

impl BoundingBox {
    pub fn center(&self) -> (f64, f64) {
        (
            self.left + self.width / 2.0,
            self.top + self.height / 2.0,
        )
    }

    pub fn intersects(&self, other: &BoundingBox) -> bool {
        intersects(self, other)
    }
}

/// Box of a bubble of `size` whose top-left corner sits at `(x, y)`.
pub fn bounding_box_of(x: f64, y: f64, size: f64) -> BoundingBox {
    BoundingBox {
        left: x,
        top: y,
        right: x + size,
        bottom: y + size,
        width: size,
        height: size,
    }
}

/// Strict interior overlap. Boxes sharing only an edge do not intersect, so
/// bubbles packed flush against each other are not flagged.
pub fn intersects(a: &BoundingBox, b: &BoundingBox) -> bool {
    !(a.right <= b.left || a.left >= b.right || a.bottom <= b.top || a.top >= b.bottom)
}

use bubbles_common::BubbleId;
use serde::{Deserialize, Serialize};

use crate::geometry::{bounding_box_of, BoundingBox};

/// Position and interaction state of one bubble.
///
/// The host owns these records and sets `is_dragging`; the engine writes
/// `x`, `y`, `is_colliding` and the `prev_*` snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BubbleRecord {
    pub id: BubbleId,
    /// Top-left corner in container-local pixels.
    pub x: f64,
    pub y: f64,
    #[serde(default)]
    pub is_dragging: bool,
    #[serde(default)]
    pub is_colliding: bool,
    /// Position before the most recent resolution.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prev_x: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prev_y: Option<f64>,
}

impl BubbleRecord {
    pub fn new(id: BubbleId, x: f64, y: f64) -> Self {
        Self {
            id,
            x,
            y,
            is_dragging: false,
            is_colliding: false,
            prev_x: None,
            prev_y: None,
        }
    }

    pub fn bounding_box(&self, item_size: f64) -> BoundingBox {
        bounding_box_of(self.x, self.y, item_size)
    }

    /// Weight this bubble carries when a collision is split between two
    /// bubbles. A dragged bubble never yields.
    pub(crate) fn move_weight(&self) -> f64 {
        if self.is_dragging {
            0.0
        } else {
            1.0
        }
    }
}

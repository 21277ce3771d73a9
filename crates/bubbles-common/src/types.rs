use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable identity of a bubble. Opaque to the layout engine; the host binds
/// it to whatever group or friend the bubble represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BubbleId(pub u32);

impl fmt::Display for BubbleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "bubble-{}", self.0)
    }
}

/// Size of the canvas bubbles are placed in, in container-local pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContainerSize {
    pub width: f64,
    pub height: f64,
}

impl ContainerSize {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

impl Default for ContainerSize {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 800.0,
        }
    }
}

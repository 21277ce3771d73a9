//! Container and bubble size configuration types.

use bubbles_common::ContainerSize;
use serde::{Deserialize, Serialize};

/// Canvas the bubbles live in.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ContainerConfig {
    /// Width in pixels (valid range: 1-10000).
    pub width: f64,
    /// Height in pixels (valid range: 1-10000).
    pub height: f64,
}

impl ContainerConfig {
    pub fn size(&self) -> ContainerSize {
        ContainerSize::new(self.width, self.height)
    }
}

impl Default for ContainerConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 800.0,
        }
    }
}

/// Bubble appearance settings that affect layout.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BubbleConfig {
    /// Side of each bubble's square box in pixels (valid range: 1-1000).
    pub size: f64,
}

impl Default for BubbleConfig {
    fn default() -> Self {
        Self { size: 100.0 }
    }
}

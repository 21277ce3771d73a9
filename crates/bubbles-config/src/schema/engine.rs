//! Layout engine limits and interaction timing.

use serde::{Deserialize, Serialize};

/// Limits on the work the layout engine does per call.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Collision resolution passes per call (valid range: 1-100).
    pub max_iterations: u32,
    /// Random candidates tried when inserting a bubble (valid range: 1-10000).
    pub max_placement_attempts: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_iterations: 15,
            max_placement_attempts: 100,
        }
    }
}

/// Pointer interaction settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InteractionConfig {
    /// Presses held at most this long count as clicks even if the bubble
    /// moved (valid range: 0-2000).
    pub click_threshold_ms: u32,
}

impl Default for InteractionConfig {
    fn default() -> Self {
        Self {
            click_threshold_ms: 150,
        }
    }
}

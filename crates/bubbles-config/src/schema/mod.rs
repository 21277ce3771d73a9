//! Configuration schema types for Bubbles.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod container;
mod engine;
mod system;

pub use container::*;
pub use engine::*;
pub use system::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration for Bubbles.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BubblesConfig {
    pub container: ContainerConfig,
    pub bubble: BubbleConfig,
    pub engine: EngineConfig,
    pub interaction: InteractionConfig,
    pub logging: LoggingConfig,
}

// =============================================================================
// Tests
// =============================================================================

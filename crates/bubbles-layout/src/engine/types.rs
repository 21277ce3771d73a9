//! Core type and constructors for BubbleLayoutEngine.

use bubbles_common::ContainerSize;

use crate::placement::DEFAULT_MAX_ATTEMPTS;

/// Layout settings for one bubble container.
///
/// The engine keeps no bubble state of its own. Hosts pass their bubble list
/// into each call and the engine edits it in place.
#[derive(Debug, Clone, PartialEq)]
pub struct BubbleLayoutEngine {
    /// Bounds bubbles are clamped into.
    pub container: ContainerSize,
    /// Side length of every bubble's square box.
    pub item_size: f64,
    /// Cap on resolution passes per call.
    pub max_iterations: u32,
    /// Candidates tried before an insertion accepts an overlap.
    pub max_placement_attempts: u32,
}

impl BubbleLayoutEngine {
    pub const DEFAULT_ITEM_SIZE: f64 = 100.0;
    pub const DEFAULT_MAX_ITERATIONS: u32 = 15;

    pub fn new(container: ContainerSize, item_size: f64) -> Self {
        Self {
            container,
            item_size,
            ..Self::default()
        }
    }

    /// Override the resolution and placement caps.
    pub fn with_limits(mut self, max_iterations: u32, max_placement_attempts: u32) -> Self {
        self.max_iterations = max_iterations;
        self.max_placement_attempts = max_placement_attempts;
        self
    }

    pub fn container(&self) -> ContainerSize {
        self.container
    }

    /// Replace the container bounds (called when the host view resizes).
    pub fn set_container(&mut self, container: ContainerSize) {
        self.container = container;
    }
}

impl Default for BubbleLayoutEngine {
    fn default() -> Self {
        Self {
            container: ContainerSize::default(),
            item_size: Self::DEFAULT_ITEM_SIZE,
            max_iterations: Self::DEFAULT_MAX_ITERATIONS,
            max_placement_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

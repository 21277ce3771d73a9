//! Pointer helpers for hosts that drive bubbles with a mouse or touch.
//!
//! The host captures pointer events; these functions turn them into the
//! proposed positions the engine expects and tell a tap apart from a drag,
//! so that a bubble opens its group on a click but not after being moved.

use std::time::{Duration, Instant};

// =============================================================================
// POSITION
// =============================================================================

/// Proposed top-left for a bubble centered under the pointer.
///
/// `origin` is the container's top-left in the same coordinate space as the
/// pointer. The result is not clamped; the engine clamps on move.
pub fn pointer_to_proposed(pointer: (f64, f64), origin: (f64, f64), item_size: f64) -> (f64, f64) {
    let half = item_size / 2.0;
    (pointer.0 - origin.0 - half, pointer.1 - origin.1 - half)
}

// =============================================================================
// PRESS CLASSIFICATION
// =============================================================================

/// What a completed press turned out to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PressOutcome {
    Click,
    Drag,
}

/// Tracks a single press from pointer-down to pointer-up.
#[derive(Debug, Clone)]
pub struct PressTracker {
    threshold: Duration,
    pressed_at: Option<Instant>,
    dragged: bool,
}

impl PressTracker {
    pub const DEFAULT_CLICK_THRESHOLD: Duration = Duration::from_millis(150);

    pub fn new(threshold: Duration) -> Self {
        Self {
            threshold,
            pressed_at: None,
            dragged: false,
        }
    }

    pub fn threshold(&self) -> Duration {
        self.threshold
    }

    pub fn press(&mut self, at: Instant) {
        self.pressed_at = Some(at);
        self.dragged = false;
    }

    pub fn drag_started(&mut self) {
        self.dragged = true;
    }

    /// Finish the press. A press that moved the bubble and was held longer
    /// than the threshold is a drag; anything else is a click. Returns
    /// `None` when no press was recorded.
    pub fn release(&mut self, at: Instant) -> Option<PressOutcome> {
        let pressed_at = self.pressed_at.take()?;
        let held = at.saturating_duration_since(pressed_at);
        let dragged = std::mem::take(&mut self.dragged);

        if dragged && held > self.threshold {
            Some(PressOutcome::Drag)
        } else {
            Some(PressOutcome::Click)
        }
    }
}

impl Default for PressTracker {
    fn default() -> Self {
        Self::new(Self::DEFAULT_CLICK_THRESHOLD)
    }
}

// =============================================================================
// TESTS
// =============================================================================

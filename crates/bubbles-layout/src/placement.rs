//! Random placement of newly added bubbles.

use bubbles_common::ContainerSize;
use rand::Rng;
use tracing::{debug, trace};

use crate::bubble::BubbleRecord;
use crate::geometry::{bounding_box_of, intersects, BoundingBox};

/// Default number of candidates sampled before giving up on a free slot.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 100;

/// Pick a top-left position for a new bubble that overlaps no existing one.
///
/// Candidates are drawn uniformly from the placement region. When every
/// attempt collides the last candidate is returned anyway; the overlap is
/// left for the next collision resolution.
pub fn place_new_item<R: Rng + ?Sized>(
    existing: &[BubbleRecord],
    container: ContainerSize,
    item_size: f64,
    max_attempts: u32,
    rng: &mut R,
) -> (f64, f64) {
    let span_x = (container.width - item_size).max(0.0);
    let span_y = (container.height - item_size).max(0.0);
    let occupied: Vec<BoundingBox> = existing.iter().map(|b| b.bounding_box(item_size)).collect();

    let mut candidate = (0.0, 0.0);
    for attempt in 0..max_attempts {
        candidate = (rng.gen::<f64>() * span_x, rng.gen::<f64>() * span_y);
        let probe = bounding_box_of(candidate.0, candidate.1, item_size);
        if !occupied.iter().any(|o| intersects(o, &probe)) {
            trace!(attempt, x = candidate.0, y = candidate.1, "placement accepted");
            return candidate;
        }
    }

    debug!(
        max_attempts,
        existing = existing.len(),
        "no free slot found, placing over existing bubbles"
    );
    candidate
}

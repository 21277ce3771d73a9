//! Iterative overlap resolution.
//!
//! Each pass checks every pair of bubbles once, in ascending index order, and
//! pushes colliding pairs apart along the line between their centers. Pairs
//! resolved earlier in a pass change the positions later pairs move from, so
//! the order is part of the result. Passes repeat until one finds no
//! collision or the iteration cap is reached; a dense packing may still
//! overlap when the cap runs out.


use bubbles_common::ContainerSize;
use tracing::debug;

use crate::bubble::BubbleRecord;
use crate::clamp::clamp;
use crate::geometry::{intersects, BoundingBox};

/// Distance, in pixels, a pinned pair is nudged apart when neither side can
/// take its share of the overlap.
const FALLBACK_NUDGE: f64 = 1.0;

/// Outcome of one `resolve_collisions` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    /// Passes run, including the final collision-free one.
    pub passes: u32,
    /// Whether a pass completed without any collision.
    pub settled: bool,
}

/// Separate overlapping bubbles in place.
///
/// Records are first snapshotted into `prev_x`/`prev_y` and clamped into the
/// container. `is_colliding` reflects the last pass that ran: after a settled
/// call every flag is `false`.
pub fn resolve_collisions(
    items: &mut [BubbleRecord],
    container: ContainerSize,
    item_size: f64,
    max_iterations: u32,
) -> Resolution {
    for item in items.iter_mut() {
        item.prev_x = Some(item.x);
        item.prev_y = Some(item.y);
        item.is_colliding = false;
        let (x, y) = clamp(item.x, item.y, container, item_size);
        item.x = x;
        item.y = y;
    }

    if items.len() < 2 {
        return Resolution {
            passes: 0,
            settled: true,
        };
    }

    let mut passes = 0;
    while passes < max_iterations {
        passes += 1;
        if !resolve_pass(items, container, item_size) {
            return Resolution {
                passes,
                settled: true,
            };
        }
    }

    debug!(
        bubbles = items.len(),
        passes,
        "collision resolution hit the iteration cap"
    );
    Resolution {
        passes,
        settled: false,
    }
}

/// One sweep over all pairs. Returns `true` if any pair collided.
fn resolve_pass(items: &mut [BubbleRecord], container: ContainerSize, item_size: f64) -> bool {
    for item in items.iter_mut() {
        item.is_colliding = false;
    }

    // Boxes are taken once per pass; moves within the pass apply to the
    // live positions.
    let boxes: Vec<BoundingBox> = items.iter().map(|b| b.bounding_box(item_size)).collect();
    let mut any_collision = false;

    for i in 0..items.len() {
        for j in (i + 1)..items.len() {
            if !intersects(&boxes[i], &boxes[j]) {
                continue;
            }
            any_collision = true;

            let (head, tail) = items.split_at_mut(j);
            separate_pair(
                &mut head[i],
                &mut tail[0],
                &boxes[i],
                &boxes[j],
                container,
                item_size,
            );
        }
    }

    any_collision
}

fn separate_pair(
    a: &mut BubbleRecord,
    b: &mut BubbleRecord,
    box_a: &BoundingBox,
    box_b: &BoundingBox,
    container: ContainerSize,
    item_size: f64,
) {
    a.is_colliding = true;
    b.is_colliding = true;

    let (ax, ay) = box_a.center();
    let (bx, by) = box_b.center();
    let dx = bx - ax;
    let dy = by - ay;
    let length = dx.hypot(dy);

    // Coincident centers have no direction; split them along x.
    let (distance, nx, ny) = if length == 0.0 {
        (1.0, 1.0, 0.0)
    } else {
        (length, dx / length, dy / length)
    };

    // Diagonal pairs can overlap as boxes while their centers are already
    // `item_size` apart; those fall through to the nudge.
    let overlap = (item_size - distance).max(0.0);

    let weight_a = a.move_weight();
    let weight_b = b.move_weight();
    let total = match weight_a + weight_b {
        w if w == 0.0 => 1.0,
        w => w,
    };
    let share_a = overlap * weight_a / total;
    let share_b = overlap * weight_b / total;

    let a_moved = try_shift(a, -nx * share_a, -ny * share_a, container, item_size);
    let b_moved = try_shift(b, nx * share_b, ny * share_b, container, item_size);

    if !a_moved && !b_moved {
        try_shift(
            a,
            -nx * FALLBACK_NUDGE,
            -ny * FALLBACK_NUDGE,
            container,
            item_size,
        );
        try_shift(
            b,
            nx * FALLBACK_NUDGE,
            ny * FALLBACK_NUDGE,
            container,
            item_size,
        );
    }
}

/// Move `item` by `(dx, dy)` unless the clamp keeps it where it is.
fn try_shift(
    item: &mut BubbleRecord,
    dx: f64,
    dy: f64,
    container: ContainerSize,
    item_size: f64,
) -> bool {
    let (x, y) = clamp(item.x + dx, item.y + dy, container, item_size);
    if x == item.x && y == item.y {
        return false;
    }
    item.x = x;
    item.y = y;
    true
}

//! Move, drag, and insert operations on a host's bubble list.

use std::collections::HashSet;

use bubbles_common::{BubbleId, ContainerSize};
use rand::Rng;
use tracing::{debug, warn};

use crate::bubble::BubbleRecord;
use crate::clamp::clamp;
use crate::geometry::BoundingBox;
use crate::placement::place_new_item;
use crate::resolver::{resolve_collisions, Resolution};

use super::BubbleLayoutEngine;

impl BubbleLayoutEngine {
    /// Clamp a position into this engine's container.
    pub fn clamp(&self, x: f64, y: f64) -> (f64, f64) {
        clamp(x, y, self.container, self.item_size)
    }

    /// Run collision resolution over the whole list.
    pub fn resolve(&self, items: &mut [BubbleRecord]) -> Resolution {
        resolve_collisions(items, self.container, self.item_size, self.max_iterations)
    }

    /// Apply a proposed position for the bubble at `index`, then resolve.
    /// Returns `false` (and changes nothing) if `index` is out of range.
    pub fn on_item_moved(
        &self,
        items: &mut [BubbleRecord],
        index: usize,
        proposed_x: f64,
        proposed_y: f64,
    ) -> bool {
        let (x, y) = self.clamp(proposed_x, proposed_y);
        let Some(item) = items.get_mut(index) else {
            warn!(index, len = items.len(), "move ignored: no bubble at index");
            return false;
        };
        item.x = x;
        item.y = y;
        self.resolve(items);
        true
    }

    /// Record a drag start or end for the bubble at `index`, then resolve.
    pub fn on_drag_state_changed(
        &self,
        items: &mut [BubbleRecord],
        index: usize,
        is_dragging: bool,
    ) -> bool {
        let Some(item) = items.get_mut(index) else {
            warn!(index, len = items.len(), "drag state ignored: no bubble at index");
            return false;
        };
        item.is_dragging = is_dragging;
        self.resolve(items);
        true
    }

    /// Append a new bubble at a free random position using the thread RNG.
    pub fn on_item_inserted(
        &self,
        items: &mut Vec<BubbleRecord>,
        container: ContainerSize,
    ) -> BubbleId {
        self.on_item_inserted_with(items, container, &mut rand::thread_rng())
    }

    /// Append a new bubble at a free random position.
    ///
    /// The new bubble's id is one past the largest id in the list. An
    /// insertion into a crowded container may overlap; no resolution runs
    /// here.
    pub fn on_item_inserted_with<R: Rng + ?Sized>(
        &self,
        items: &mut Vec<BubbleRecord>,
        container: ContainerSize,
        rng: &mut R,
    ) -> BubbleId {
        let (x, y) = place_new_item(
            items,
            container,
            self.item_size,
            self.max_placement_attempts,
            rng,
        );
        let id = next_id(items);
        items.push(BubbleRecord::new(id, x, y));
        debug!(%id, x, y, "bubble inserted");
        id
    }

    /// Boxes for every bubble, in list order.
    pub fn bounding_boxes(&self, items: &[BubbleRecord]) -> Vec<BoundingBox> {
        items.iter().map(|b| b.bounding_box(self.item_size)).collect()
    }
}

/// One past the largest id in use, or the smallest free id once `u32::MAX`
/// is taken.
fn next_id(items: &[BubbleRecord]) -> BubbleId {
    let Some(max) = items.iter().map(|b| b.id.0).max() else {
        return BubbleId(1);
    };
    match max.checked_add(1) {
        Some(next) => BubbleId(next),
        None => smallest_unused_id(items),
    }
}

fn smallest_unused_id(items: &[BubbleRecord]) -> BubbleId {
    let taken: HashSet<u32> = items.iter().map(|b| b.id.0).collect();
    let free = (1..=u32::MAX)
        .chain(std::iter::once(0))
        .find(|id| !taken.contains(id))
        .unwrap_or(0);
    BubbleId(free)
}

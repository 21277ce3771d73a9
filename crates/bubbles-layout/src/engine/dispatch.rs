//! Command dispatch for BubbleLayoutEngine.

use bubbles_common::ContainerSize;
use rand::Rng;

use crate::bubble::BubbleRecord;
use crate::commands::LayoutCommand;
use crate::gesture::pointer_to_proposed;

use super::BubbleLayoutEngine;

impl BubbleLayoutEngine {
    /// Execute a layout command. Returns `true` if the command was handled.
    pub fn execute<R: Rng + ?Sized>(
        &mut self,
        cmd: LayoutCommand,
        items: &mut Vec<BubbleRecord>,
        rng: &mut R,
    ) -> bool {
        match cmd {
            LayoutCommand::Insert => {
                self.on_item_inserted_with(items, self.container, rng);
                true
            }
            LayoutCommand::Move { index, x, y } => self.on_item_moved(items, index, x, y),
            LayoutCommand::PointerMove { index, x, y } => {
                let (px, py) = pointer_to_proposed((x, y), (0.0, 0.0), self.item_size);
                self.on_item_moved(items, index, px, py)
            }
            LayoutCommand::DragStart { index } => self.on_drag_state_changed(items, index, true),
            LayoutCommand::DragEnd { index } => self.on_drag_state_changed(items, index, false),
            LayoutCommand::Resize { width, height } => {
                self.set_container(ContainerSize::new(width, height));
                // Pull everything back inside the new bounds.
                self.resolve(items);
                true
            }
        }
    }
}

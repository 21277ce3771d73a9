//! Collision-resolving layout for draggable bubbles in a bounded canvas.

pub mod bubble;
pub mod clamp;
pub mod commands;
pub mod engine;
pub mod geometry;
pub mod gesture;
pub mod placement;
pub mod resolver;

pub use bubble::BubbleRecord;
pub use commands::LayoutCommand;
pub use engine::BubbleLayoutEngine;
pub use geometry::BoundingBox;
pub use resolver::Resolution;

use bubbles_common::ContainerSize;

/// Keep a bubble's whole box inside the container.
///
/// A container smaller than the bubble has an empty placement region; the
/// result is then pinned to 0 on that axis.
pub fn clamp(x: f64, y: f64, container: ContainerSize, item_size: f64) -> (f64, f64) {
    let max_x = (container.width - item_size).max(0.0);
    let max_y = (container.height - item_size).max(0.0);
    (x.max(0.0).min(max_x), y.max(0.0).min(max_y))
}

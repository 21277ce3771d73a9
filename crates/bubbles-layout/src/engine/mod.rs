//! The BubbleLayoutEngine is the surface a host view calls on every move,
//! drag transition, and insertion.

mod dispatch;
mod operations;
mod types;

pub use types::*;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bubble::BubbleRecord;
    use crate::commands::LayoutCommand;
    use crate::geometry::intersects;
    use bubbles_common::{BubbleId, ContainerSize};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn engine() -> BubbleLayoutEngine {
        BubbleLayoutEngine::new(ContainerSize::new(800.0, 800.0), 100.0)
    }

    fn assert_contained(engine: &BubbleLayoutEngine, items: &[BubbleRecord]) {
        let max_x = engine.container.width - engine.item_size;
        let max_y = engine.container.height - engine.item_size;
        for b in items {
            assert!(b.x >= 0.0 && b.x <= max_x, "{} x = {}", b.id, b.x);
            assert!(b.y >= 0.0 && b.y <= max_y, "{} y = {}", b.id, b.y);
        }
    }

    #[test]
    fn default_engine_settings() {
        let engine = BubbleLayoutEngine::default();
        assert_eq!(engine.container, ContainerSize::new(800.0, 800.0));
        assert!((engine.item_size - 100.0).abs() < f64::EPSILON);
        assert_eq!(engine.max_iterations, 15);
        assert_eq!(engine.max_placement_attempts, 100);
    }

    #[test]
    fn with_limits_overrides_caps() {
        let engine = engine().with_limits(5, 20);
        assert_eq!(engine.max_iterations, 5);
        assert_eq!(engine.max_placement_attempts, 20);
    }

    #[test]
    fn move_clamps_proposal() {
        let engine = engine();
        let mut items = vec![BubbleRecord::new(BubbleId(1), 0.0, 0.0)];
        assert!(engine.on_item_moved(&mut items, 0, 950.0, -30.0));
        assert_eq!((items[0].x, items[0].y), (700.0, 0.0));
        assert_contained(&engine, &items);
    }

    #[test]
    fn move_onto_neighbour_pushes_it_away() {
        let engine = engine();
        let mut items = vec![
            BubbleRecord::new(BubbleId(1), 0.0, 0.0),
            BubbleRecord::new(BubbleId(2), 300.0, 100.0),
        ];
        items[0].is_dragging = true;

        assert!(engine.on_item_moved(&mut items, 0, 250.0, 100.0));

        assert_eq!((items[0].x, items[0].y), (250.0, 100.0));
        assert_eq!((items[1].x, items[1].y), (350.0, 100.0));
        assert!(!intersects(
            &items[0].bounding_box(100.0),
            &items[1].bounding_box(100.0)
        ));
    }

    #[test]
    fn move_out_of_range_is_ignored() {
        let engine = engine();
        let mut items = vec![BubbleRecord::new(BubbleId(1), 10.0, 10.0)];
        assert!(!engine.on_item_moved(&mut items, 3, 100.0, 100.0));
        assert_eq!((items[0].x, items[0].y), (10.0, 10.0));
        assert_eq!(items[0].prev_x, None);
    }

    #[test]
    fn drag_end_lets_released_bubble_yield() {
        let engine = engine();
        let mut items = vec![
            BubbleRecord::new(BubbleId(1), 100.0, 100.0),
            BubbleRecord::new(BubbleId(2), 150.0, 100.0),
        ];
        items[0].is_dragging = true;
        items[1].is_dragging = true;

        // Both dragging: only nudged.
        engine.resolve(&mut items);
        let first_x = items[0].x;

        assert!(engine.on_drag_state_changed(&mut items, 0, false));
        assert!(!items[0].is_dragging);
        assert!(items[0].x < first_x);
        assert!(!intersects(
            &items[0].bounding_box(100.0),
            &items[1].bounding_box(100.0)
        ));
    }

    #[test]
    fn drag_state_out_of_range_is_ignored() {
        let engine = engine();
        let mut items: Vec<BubbleRecord> = Vec::new();
        assert!(!engine.on_drag_state_changed(&mut items, 0, true));
    }

    #[test]
    fn insert_assigns_increasing_ids() {
        let engine = engine();
        let mut rng = StdRng::seed_from_u64(11);
        let mut items = vec![BubbleRecord::new(BubbleId(7), 0.0, 0.0)];

        let id = engine.on_item_inserted_with(&mut items, engine.container, &mut rng);
        assert_eq!(id, BubbleId(8));
        assert_eq!(items.len(), 2);
        assert!(!items[1].is_dragging);
        assert!(!items[1].is_colliding);
    }

    #[test]
    fn insert_after_max_id_reuses_smallest_free_id() {
        let engine = engine();
        let mut rng = StdRng::seed_from_u64(4);
        let mut items = vec![BubbleRecord::new(BubbleId(u32::MAX), 0.0, 0.0)];

        let first = engine.on_item_inserted_with(&mut items, ContainerSize::default(), &mut rng);
        assert_eq!(first, BubbleId(1));

        let second = engine.on_item_inserted_with(&mut items, ContainerSize::default(), &mut rng);
        assert_eq!(second, BubbleId(2));

        let mut ids: Vec<u32> = items.iter().map(|b| b.id.0).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 3);
    }

    #[test]
    fn first_insert_gets_id_one() {
        let engine = engine();
        let mut items = Vec::new();
        let id = engine.on_item_inserted(&mut items, engine.container);
        assert_eq!(id, BubbleId(1));
        assert_contained(&engine, &items);
    }

    #[test]
    fn three_insertions_never_overlap() {
        let engine = engine();
        for seed in 0..10 {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut items = Vec::new();
            for _ in 0..3 {
                engine.on_item_inserted_with(&mut items, ContainerSize::new(800.0, 800.0), &mut rng);
            }
            assert_eq!(items.len(), 3);
            let boxes = engine.bounding_boxes(&items);
            for i in 0..boxes.len() {
                for j in (i + 1)..boxes.len() {
                    assert!(!intersects(&boxes[i], &boxes[j]), "seed {seed}: {i} and {j}");
                }
            }
            assert_contained(&engine, &items);
        }
    }

    #[test]
    fn moves_keep_every_bubble_contained() {
        let engine = engine();
        let mut rng = StdRng::seed_from_u64(5);
        let mut items = Vec::new();
        for _ in 0..6 {
            engine.on_item_inserted_with(&mut items, engine.container, &mut rng);
        }

        let proposals = [(-200.0, 50.0), (790.0, 790.0), (400.0, 400.0), (0.0, 1e5)];
        for (step, &(x, y)) in proposals.iter().enumerate() {
            let index = step % items.len();
            engine.on_item_moved(&mut items, index, x, y);
            assert_contained(&engine, &items);
        }
    }

    #[test]
    fn execute_replays_commands() {
        let mut engine = engine();
        let mut rng = StdRng::seed_from_u64(21);
        let mut items = Vec::new();

        assert!(engine.execute(LayoutCommand::Insert, &mut items, &mut rng));
        assert!(engine.execute(LayoutCommand::DragStart { index: 0 }, &mut items, &mut rng));
        assert!(items[0].is_dragging);
        assert!(engine.execute(
            LayoutCommand::Move {
                index: 0,
                x: 20.0,
                y: 30.0
            },
            &mut items,
            &mut rng
        ));
        assert_eq!((items[0].x, items[0].y), (20.0, 30.0));
        assert!(engine.execute(LayoutCommand::DragEnd { index: 0 }, &mut items, &mut rng));
        assert!(!items[0].is_dragging);
        assert!(!engine.execute(LayoutCommand::DragEnd { index: 4 }, &mut items, &mut rng));
    }

    #[test]
    fn pointer_move_centers_bubble_under_pointer() {
        let mut engine = engine();
        let mut rng = StdRng::seed_from_u64(2);
        let mut items = vec![BubbleRecord::new(BubbleId(1), 0.0, 0.0)];

        assert!(engine.execute(
            LayoutCommand::PointerMove {
                index: 0,
                x: 400.0,
                y: 20.0
            },
            &mut items,
            &mut rng
        ));
        // Centered at (400, 20), then clamped off the top edge.
        assert_eq!((items[0].x, items[0].y), (350.0, 0.0));
    }

    #[test]
    fn resize_pulls_bubbles_inside() {
        let mut engine = engine();
        let mut rng = StdRng::seed_from_u64(0);
        let mut items = vec![BubbleRecord::new(BubbleId(1), 650.0, 650.0)];

        assert!(engine.execute(
            LayoutCommand::Resize {
                width: 400.0,
                height: 300.0
            },
            &mut items,
            &mut rng
        ));
        assert_eq!(engine.container(), ContainerSize::new(400.0, 300.0));
        assert_eq!((items[0].x, items[0].y), (300.0, 200.0));
    }

    #[test]
    fn bounding_boxes_follow_list_order() {
        let engine = engine();
        let items = vec![
            BubbleRecord::new(BubbleId(1), 0.0, 0.0),
            BubbleRecord::new(BubbleId(2), 300.0, 40.0),
        ];
        let boxes = engine.bounding_boxes(&items);
        assert_eq!(boxes.len(), 2);
        assert_eq!((boxes[1].left, boxes[1].bottom), (300.0, 140.0));
    }
}

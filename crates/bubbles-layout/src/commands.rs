use serde::{Deserialize, Serialize};

/// A host interaction the engine can replay against a bubble list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LayoutCommand {
    Insert,
    Move { index: usize, x: f64, y: f64 },
    /// Center the bubble under a container-local pointer position.
    PointerMove { index: usize, x: f64, y: f64 },
    DragStart { index: usize },
    DragEnd { index: usize },
    Resize { width: f64, height: f64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commands_parse_from_tagged_json() {
        let json = r#"[
            {"type": "insert"},
            {"type": "drag_start", "index": 0},
            {"type": "move", "index": 0, "x": 12.5, "y": 40.0},
            {"type": "pointer_move", "index": 0, "x": 300.0, "y": 200.0},
            {"type": "drag_end", "index": 0},
            {"type": "resize", "width": 640.0, "height": 480.0}
        ]"#;
        let cmds: Vec<LayoutCommand> = serde_json::from_str(json).unwrap();
        assert_eq!(
            cmds,
            vec![
                LayoutCommand::Insert,
                LayoutCommand::DragStart { index: 0 },
                LayoutCommand::Move {
                    index: 0,
                    x: 12.5,
                    y: 40.0
                },
                LayoutCommand::PointerMove {
                    index: 0,
                    x: 300.0,
                    y: 200.0
                },
                LayoutCommand::DragEnd { index: 0 },
                LayoutCommand::Resize {
                    width: 640.0,
                    height: 480.0
                },
            ]
        );
    }

    #[test]
    fn unknown_command_is_rejected() {
        let result = serde_json::from_str::<LayoutCommand>(r#"{"type": "explode"}"#);
        assert!(result.is_err());
    }
}

//! Headless host for the layout engine: owns the bubble list the way a view
//! would and feeds it through the engine.

use bubbles_common::{BubbleId, ContainerSize};
use bubbles_config::BubblesConfig;
use bubbles_layout::{BubbleLayoutEngine, BubbleRecord, LayoutCommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;

/// JSON shape printed by the CLI.
#[derive(Debug, Serialize)]
pub struct BoardSnapshot<'a> {
    pub container: ContainerSize,
    pub item_size: f64,
    pub bubbles: &'a [BubbleRecord],
}

pub struct Board {
    engine: BubbleLayoutEngine,
    bubbles: Vec<BubbleRecord>,
    rng: StdRng,
}

impl Board {
    pub fn from_config(config: &BubblesConfig, seed: Option<u64>) -> Self {
        let engine = BubbleLayoutEngine::new(config.container.size(), config.bubble.size)
            .with_limits(
                config.engine.max_iterations,
                config.engine.max_placement_attempts,
            );
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            engine,
            bubbles: Vec::new(),
            rng,
        }
    }

    pub fn insert(&mut self) -> BubbleId {
        let container = self.engine.container();
        self.engine
            .on_item_inserted_with(&mut self.bubbles, container, &mut self.rng)
    }

    /// Apply one command. Returns `false` if the engine ignored it.
    pub fn apply(&mut self, cmd: LayoutCommand) -> bool {
        self.engine.execute(cmd, &mut self.bubbles, &mut self.rng)
    }

    pub fn bubbles(&self) -> &[BubbleRecord] {
        &self.bubbles
    }

    pub fn snapshot(&self) -> BoardSnapshot<'_> {
        BoardSnapshot {
            container: self.engine.container(),
            item_size: self.engine.item_size,
            bubbles: &self.bubbles,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.snapshot())
    }
}

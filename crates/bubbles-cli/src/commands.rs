//! Subcommand handlers. Each returns the text to print on success.

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use bubbles_common::{BubblesError, Result};
use bubbles_config::toml_loader::create_default_config;
use bubbles_config::{save_config, save_config_to_path, BubblesConfig};
use bubbles_layout::gesture::{PressOutcome, PressTracker};
use bubbles_layout::LayoutCommand;
use tracing::{info, warn};

use crate::board::Board;

/// Insert `count` bubbles and render the board.
pub fn place(config: &BubblesConfig, count: u32, seed: Option<u64>) -> Result<String> {
    let mut board = Board::from_config(config, seed);
    for _ in 0..count {
        board.insert();
    }
    info!(bubbles = board.bubbles().len(), "placement finished");
    Ok(board.to_json()?)
}

/// Replay a JSON command script from `script` and render the board.
pub fn replay(config: &BubblesConfig, script: &Path, seed: Option<u64>) -> Result<String> {
    let content = std::fs::read_to_string(script)?;
    let commands = parse_script(&content)?;

    let mut board = Board::from_config(config, seed);
    let mut skipped = 0usize;
    for (step, cmd) in commands.into_iter().enumerate() {
        if !board.apply(cmd.clone()) {
            warn!(step, ?cmd, "command skipped");
            skipped += 1;
        }
    }

    info!(bubbles = board.bubbles().len(), skipped, "replay finished");
    Ok(board.to_json()?)
}

fn parse_script(content: &str) -> Result<Vec<LayoutCommand>> {
    let value: serde_json::Value = serde_json::from_str(content)?;
    if !value.is_array() {
        return Err(BubblesError::Script(
            "expected a JSON array of commands".into(),
        ));
    }
    Ok(serde_json::from_value(value)?)
}

/// Report whether a press held for `held_ms` counts as a click or a drag
/// under the configured threshold.
pub fn classify_press(config: &BubblesConfig, held_ms: u64, dragged: bool) -> &'static str {
    let mut tracker = PressTracker::new(Duration::from_millis(u64::from(
        config.interaction.click_threshold_ms,
    )));
    let start = Instant::now();
    tracker.press(start);
    if dragged {
        tracker.drag_started();
    }
    match tracker.release(start + Duration::from_millis(held_ms)) {
        Some(PressOutcome::Drag) => "drag",
        _ => "click",
    }
}

/// Render the effective config as JSON. With `write`, the config is
/// validated and saved as TOML to `path`, or to the platform path when none
/// was given.
pub fn show_config(config: &BubblesConfig, path: Option<&Path>, write: bool) -> Result<String> {
    if write {
        bubbles_config::validation::validate(config)?;
        match path {
            Some(path) => save_config_to_path(config, path)?,
            None => save_config(config)?,
        }
        info!("effective config written");
    }
    Ok(bubbles_config::config_to_json(config))
}

/// Write the commented default config to the platform path.
pub fn init_config(force: bool) -> Result<PathBuf> {
    let path = bubbles_config::default_config_path()?;
    init_config_at(&path, force)?;
    Ok(path)
}

pub fn init_config_at(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(BubblesError::Other(format!(
            "config already exists at {} (use --force to overwrite)",
            path.display()
        )));
    }
    create_default_config(path)?;
    Ok(())
}

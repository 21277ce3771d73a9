use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Bubbles: collision-resolving layout for draggable bubbles.
#[derive(Parser, Debug)]
#[command(name = "bubbles", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log level override (debug, info, warn, error).
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Insert bubbles at free random positions and print the board as JSON.
    Place {
        /// Number of bubbles to insert.
        #[arg(short = 'n', long, default_value_t = 5)]
        count: u32,

        /// Seed for reproducible placement.
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Apply a JSON array of layout commands and print the resulting board.
    Replay {
        /// Path to the command script.
        script: PathBuf,

        /// Seed for reproducible insertions.
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Classify a bubble press as a click or a drag.
    ClassifyPress {
        /// How long the pointer was held, in milliseconds.
        #[arg(long)]
        held_ms: u64,

        /// Whether the bubble moved during the press.
        #[arg(long)]
        dragged: bool,
    },

    /// Print the effective config as JSON.
    ShowConfig {
        /// Also write the effective config back to the config file as TOML.
        #[arg(long)]
        write: bool,
    },

    /// Write the default config file.
    InitConfig {
        /// Overwrite an existing config.
        #[arg(long)]
        force: bool,
    },
}

pub fn parse() -> Args {
    Args::parse()
}

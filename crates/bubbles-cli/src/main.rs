mod board;
mod cli;
mod commands;

use std::process::ExitCode;

use bubbles_common::ConfigError;
use bubbles_config::BubblesConfig;
use tracing_subscriber::EnvFilter;

use cli::{Args, Command};

/// Load the config named on the command line, or the platform default.
fn load_config(args: &Args) -> Result<BubblesConfig, ConfigError> {
    match (&args.config, &args.command) {
        (Some(path), _) => bubbles_config::load_from_path(path),
        // Loading the default path would create the file init-config writes.
        (None, Command::InitConfig { .. }) => Ok(BubblesConfig::default()),
        (None, _) => bubbles_config::load_config(),
    }
}

fn init_logging(directive: &str) {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(
                directive
                    .parse()
                    .unwrap_or_else(|_| tracing_subscriber::filter::LevelFilter::INFO.into()),
            ),
        )
        .init();
}

fn run(args: Args, config: BubblesConfig) -> bubbles_common::Result<()> {
    match args.command {
        Command::Place { count, seed } => {
            println!("{}", commands::place(&config, count, seed)?);
        }
        Command::Replay { script, seed } => {
            println!("{}", commands::replay(&config, &script, seed)?);
        }
        Command::ClassifyPress { held_ms, dragged } => {
            println!("{}", commands::classify_press(&config, held_ms, dragged));
        }
        Command::ShowConfig { write } => {
            println!(
                "{}",
                commands::show_config(&config, args.config.as_deref(), write)?
            );
        }
        Command::InitConfig { force } => {
            let path = commands::init_config(force)?;
            println!("wrote {}", path.display());
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let args = cli::parse();

    // Config is read before logging starts so its level can seed the filter.
    let loaded = load_config(&args);
    let directive = match (&args.log_level, &loaded) {
        (Some(level), _) => level.clone(),
        (None, Ok(config)) => config.logging.level.as_directive().to_string(),
        (None, Err(_)) => "info".to_string(),
    };
    init_logging(&directive);

    tracing::info!("bubbles v{} starting", env!("CARGO_PKG_VERSION"));

    let config = loaded.unwrap_or_else(|e| {
        tracing::warn!("Config load failed, using defaults: {e}");
        BubblesConfig::default()
    });

    match run(args, config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

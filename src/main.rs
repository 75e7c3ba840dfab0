// keyscope - terminal keyboard visualizer
//
// Draws a virtual keyboard in the terminal, permanently highlights every key
// that gets pressed and keeps a scrolling log of key events underneath.
// Pressing Esc, Enter or Space five times ends the session.
//
// Architecture:
// - Keyboard: fixed key geometry, built once
// - Classifier: crossterm key event -> label, modifiers, exit effect
// - Session: pressed keys, rolling log, exit counters
// - TUI (ratatui): blocking event loop and full-frame renderer

mod classifier;
mod cli;
mod config;
mod keyboard;
mod logging;
mod session;
mod tui;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use config::Config;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Handle CLI commands first (config --show, --reset, --edit, --update)
    if cli::handle_command(&cli)? {
        return Ok(());
    }

    // Ensure config template exists (helps users discover options)
    Config::ensure_config_exists();

    // Precedence: CLI flag > env var > config file > default
    let mut config = Config::from_env();
    if let Some(theme) = cli.theme {
        config.theme = theme;
    }

    // The guard must be kept alive for the duration of the program to ensure logs flush
    let _file_guard = logging::init(&config.logging);

    tracing::info!(theme = config.theme.name(), "Starting keyboard view");

    let app = tui::run_tui(&config)?;

    match app.exit {
        Some(key) => tracing::info!(
            key = key.name(),
            pressed = app.session.pressed().len(),
            "Shutdown complete"
        ),
        None => tracing::info!("Input closed, shutdown complete"),
    }

    Ok(())
}

// CLI module - command-line argument parsing and handlers
//
// Without a subcommand the visualizer runs. Subcommands manage the config file:
// - config --show: Display effective configuration
// - config --reset: Regenerate config file with defaults
// - config --edit: Open config file in $EDITOR
// - config --update: Rewrite config with the current template, keeping values
// - config --path: Print the config file location

use crate::config::{Config, VERSION};
use crate::tui::theme::ThemeKind;
use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::io::Write;
use std::process::Command;

/// keyscope - watch your keyboard light up in the terminal
#[derive(Parser)]
#[command(name = "keyscope")]
#[command(version = VERSION)]
#[command(
    about = "Terminal keyboard visualizer",
    long_about = "Draws a virtual keyboard, highlights every key you press and logs each event.\n\
                  Press Esc, Enter or Space five times to quit."
)]
pub struct Cli {
    /// Theme override (dark, light, mono, nord)
    #[arg(long, value_parser = parse_theme)]
    pub theme: Option<ThemeKind>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Manage configuration
    Config {
        /// Show effective configuration
        #[arg(long)]
        show: bool,

        /// Reset config file to defaults
        #[arg(long)]
        reset: bool,

        /// Open config file in $EDITOR
        #[arg(long)]
        edit: bool,

        /// Update config with new defaults (preserves user values)
        #[arg(long)]
        update: bool,

        /// Show config file path
        #[arg(long)]
        path: bool,
    },
}

fn parse_theme(name: &str) -> Result<ThemeKind, String> {
    ThemeKind::from_name(name).ok_or_else(|| {
        let known: Vec<&str> = ThemeKind::all().iter().map(ThemeKind::name).collect();
        format!("unknown theme '{}' (expected one of: {})", name, known.join(", "))
    })
}

/// Handle CLI subcommands. Returns true if a command was handled (exit after).
pub fn handle_command(cli: &Cli) -> Result<bool> {
    match cli.command {
        Some(Commands::Config {
            show,
            reset,
            edit,
            update,
            path,
        }) => {
            if path {
                handle_config_path()?;
            } else if show {
                handle_config_show();
            } else if reset {
                handle_config_reset()?;
            } else if edit {
                handle_config_edit()?;
            } else if update {
                handle_config_update()?;
            } else {
                // No flag provided, show help
                println!("Usage: keyscope config [--show|--reset|--edit|--update|--path]");
                println!();
                println!("Options:");
                println!("  --show    Display effective configuration");
                println!("  --reset   Reset config file to defaults");
                println!("  --edit    Open config file in $EDITOR");
                println!("  --update  Update config with new defaults (preserves user values)");
                println!("  --path    Show config file path");
            }
            Ok(true)
        }
        None => Ok(false), // No subcommand, run the visualizer
    }
}

fn config_path() -> Result<std::path::PathBuf> {
    Config::config_path().context("Could not determine config path")
}

fn handle_config_path() -> Result<()> {
    println!("{}", config_path()?.display());
    Ok(())
}

fn handle_config_show() {
    let config = Config::from_env();

    println!("# Effective configuration (env > file > defaults)");
    println!();
    println!("theme = {:?}", config.theme.name());
    println!();
    println!("[logging]");
    println!("level = {:?}", config.logging.level);
    println!("file_enabled = {}", config.logging.file_enabled);
    println!(
        "file_dir = {:?}",
        config.logging.file_dir.display().to_string()
    );
    println!("file_rotation = {:?}", config.logging.file_rotation.as_str());
    println!("file_prefix = {:?}", config.logging.file_prefix);

    // Show source info
    println!();
    if let Some(path) = Config::config_path() {
        if path.exists() {
            println!("# Source: {}", path.display());
        } else {
            println!("# Source: defaults (no config file)");
        }
    }
}

fn handle_config_reset() -> Result<()> {
    let path = config_path()?;

    // Confirm if file exists
    if path.exists() {
        eprint!(
            "Config file exists at {}. Overwrite? [y/N] ",
            path.display()
        );
        std::io::stderr().flush()?;

        let mut input = String::new();
        std::io::stdin()
            .read_line(&mut input)
            .context("Failed to read confirmation")?;

        if !input.trim().eq_ignore_ascii_case("y") {
            println!("Aborted.");
            return Ok(());
        }
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Error creating directory {}", parent.display()))?;
    }

    std::fs::write(&path, Config::default().to_toml())
        .with_context(|| format!("Error writing config {}", path.display()))?;

    println!("Config reset to defaults: {}", path.display());
    Ok(())
}

fn handle_config_edit() -> Result<()> {
    let path = config_path()?;

    if !path.exists() {
        Config::ensure_config_exists();
        println!("Created new config file: {}", path.display());
    }

    let editor = std::env::var("EDITOR")
        .or_else(|_| std::env::var("VISUAL"))
        .unwrap_or_else(|_| {
            // Platform-specific fallback
            if cfg!(windows) {
                "notepad".to_string()
            } else {
                "nano".to_string()
            }
        });

    println!("Opening {} with {}", path.display(), editor);

    let status = Command::new(&editor).arg(&path).status().with_context(|| {
        format!(
            "Failed to launch editor '{}'. Set $EDITOR to your preferred editor",
            editor
        )
    })?;

    if !status.success() {
        bail!("Editor exited with status: {}", status);
    }
    Ok(())
}

fn handle_config_update() -> Result<()> {
    let path = config_path()?;

    if !path.exists() {
        Config::ensure_config_exists();
        println!("Created new config file: {}", path.display());
        return Ok(());
    }

    // Regenerate from the effective config so user values survive
    let updated = Config::from_env().to_toml();

    let backup_path = path.with_extension("toml.bak");
    match std::fs::copy(&path, &backup_path) {
        Ok(_) => println!("Backup created: {}", backup_path.display()),
        Err(e) => eprintln!("Warning: Could not create backup: {}", e),
    }

    std::fs::write(&path, updated)
        .with_context(|| format!("Error writing config {}", path.display()))?;

    println!("Config updated with latest structure: {}", path.display());
    println!("Your values have been preserved.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_arguments_runs_visualizer() {
        let cli = Cli::try_parse_from(["keyscope"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.theme.is_none());
        assert!(!handle_command(&cli).unwrap());
    }

    #[test]
    fn theme_flag_is_validated() {
        let cli = Cli::try_parse_from(["keyscope", "--theme", "Nord"]).unwrap();
        assert_eq!(cli.theme, Some(ThemeKind::Nord));

        assert!(Cli::try_parse_from(["keyscope", "--theme", "plaid"]).is_err());
    }

    #[test]
    fn config_subcommand_parses_flags() {
        let cli = Cli::try_parse_from(["keyscope", "config", "--path"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Config { path: true, show: false, .. })
        ));
    }
}

//! CLI entry and dispatch.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use termfolio_core::Theme;
use termfolio_core::config;

mod commands;

#[derive(Parser)]
#[command(name = "termfolio")]
#[command(version)]
#[command(about = "Portfolio site as an interactive terminal")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Theme to start with: dark or light (overrides config)
    #[arg(long, global = true, value_name = "THEME")]
    theme: Option<Theme>,

    /// Directory with projects.json, contact.json and profile.json overrides
    #[arg(long, global = true, value_name = "DIR")]
    data_dir: Option<PathBuf>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Runs one command line and prints its output as plain text
    Exec {
        /// The command line, e.g. `project Terminal Portfolio`
        #[arg(
            value_name = "COMMAND",
            required = true,
            num_args = 1..,
            trailing_var_arg = true,
            allow_hyphen_values = true
        )]
        command: Vec<String>,
    },
    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(clap::Subcommand)]
enum ConfigCommands {
    /// Prints the config file path
    Path,
    /// Writes a commented default config file
    Init,
    /// Prints the default config as TOML
    Generate,
}

pub fn run() -> Result<()> {
    let Cli {
        command,
        theme,
        data_dir,
    } = Cli::parse();

    match command {
        // Config commands must work even when the config file is broken.
        Some(Commands::Config { command }) => match command {
            ConfigCommands::Path => {
                commands::config::path();
                Ok(())
            }
            ConfigCommands::Init => commands::config::init(),
            ConfigCommands::Generate => commands::config::generate(),
        },
        Some(Commands::Exec { command }) => {
            let config = load_config(theme, data_dir)?;
            commands::exec::run(&config, &command.join(" "))
        }
        // default to the interactive terminal
        None => {
            let config = load_config(theme, data_dir)?;
            commands::interactive::run(&config)
        }
    }
}

/// Loads the config file and applies command-line overrides.
fn load_config(theme: Option<Theme>, data_dir: Option<PathBuf>) -> Result<config::Config> {
    let mut config = config::Config::load().context("load config")?;
    if let Some(theme) = theme {
        config.theme = theme;
    }
    if data_dir.is_some() {
        config.data_dir = data_dir;
    }
    Ok(config)
}

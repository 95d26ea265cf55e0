//! Command-line interface for the demo
//!
//! Without a subcommand the demo window opens; the subcommands inspect the
//! built-in states and the configuration without starting the GUI.

mod commands;
mod output;

use clap::{Parser, Subcommand};
use statelayout::StateKind;
use std::path::{Path, PathBuf};

pub use output::OutputFormat;

use crate::ui::theme::ThemePreset;

/// statelayout - multi-state page layout demo
#[derive(Parser, Debug)]
#[command(name = "statelayout")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Use this configuration file instead of the default one
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// State to show on startup (loading, empty, error, custom, content)
    #[arg(long, value_name = "KIND")]
    pub state: Option<StateKind>,

    /// Theme for this session
    #[arg(long, value_enum)]
    pub theme: Option<ThemePreset>,

    /// Output in JSON format (for machine parsing)
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    pub fn format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }

    /// Whether this run writes to the terminal instead of opening the window
    pub fn needs_console(&self) -> bool {
        self.command.is_some()
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the built-in tip of every page state
    States,

    /// Configuration management
    Config {
        #[command(subcommand)]
        command: commands::config::ConfigCommands,
    },
}

/// Run a subcommand
pub fn run(command: Commands, config_path: &Path, format: OutputFormat) -> anyhow::Result<()> {
    match command {
        Commands::States => commands::states::run(format),
        Commands::Config { command } => commands::config::run(command, config_path, format),
    }
}

//! Configuration management commands

use anyhow::Result;
use clap::Subcommand;
use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::cli::output::{OutputFormat, print_formatted};
use crate::config::Config;
use crate::ui::theme::ThemePreset;

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,

    /// Get a specific config value
    Get {
        /// Config key (e.g., "appearance.theme", "demo.error_text")
        key: String,
    },

    /// Set a config value
    Set {
        /// Config key (e.g., "appearance.theme", "demo.error_text")
        key: String,

        /// Value to set
        value: String,
    },

    /// Show config file path
    Path,

    /// Overwrite the config file with defaults
    Reset,
}

#[derive(Serialize)]
struct ConfigPathResult {
    path: PathBuf,
    exists: bool,
}

pub fn run(command: ConfigCommands, path: &Path, format: OutputFormat) -> Result<()> {
    match command {
        ConfigCommands::Show => show(path, format),
        ConfigCommands::Get { key } => {
            let value = get_config_value(&Config::load_from(path)?, &key)?;
            print_formatted(&value, format, |v| v.clone())
        }
        ConfigCommands::Set { key, value } => {
            let mut config = Config::load_from(path)?;
            set_config_value(&mut config, &key, &value)?;
            config.save_to(path)?;
            println!("Set {} = {}", key, value);
            Ok(())
        }
        ConfigCommands::Path => {
            let result = ConfigPathResult {
                path: path.to_path_buf(),
                exists: path.exists(),
            };
            print_formatted(&result, format, |r| r.path.display().to_string())
        }
        ConfigCommands::Reset => {
            Config::default().save_to(path)?;
            println!("Reset configuration at {}", path.display());
            Ok(())
        }
    }
}

fn show(path: &Path, format: OutputFormat) -> Result<()> {
    let config = Config::load_from(path)?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&config)?),
        OutputFormat::Text => println!("{}", toml::to_string_pretty(&config)?),
    }
    Ok(())
}

fn get_config_value(config: &Config, key: &str) -> Result<String> {
    let parts: Vec<&str> = key.split('.').collect();

    match parts.as_slice() {
        ["appearance", "theme"] => Ok(config.appearance.theme.name().to_lowercase()),
        ["appearance", "cjk_font"] => Ok(config
            .appearance
            .cjk_font
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "<not set>".to_string())),
        ["demo", "initial_state"] => Ok(config.demo.initial_state.name().to_lowercase()),
        ["demo", "loading_text"] => Ok(config.demo.loading_text.clone()),
        ["demo", "error_text"] => Ok(config.demo.error_text.clone()),
        ["demo", "content_text"] => Ok(config.demo.content_text.clone()),
        ["demo", "custom_text"] => Ok(config.demo.custom_text.clone()),
        ["demo", "reload_delay_ms"] => Ok(config.demo.reload_delay_ms.to_string()),
        ["window", "width"] => Ok(config.window.width.to_string()),
        ["window", "height"] => Ok(config.window.height.to_string()),
        _ => anyhow::bail!("Unknown config key: {}", key),
    }
}

fn set_config_value(config: &mut Config, key: &str, value: &str) -> Result<()> {
    let parts: Vec<&str> = key.split('.').collect();

    match parts.as_slice() {
        ["appearance", "theme"] => {
            config.appearance.theme = <ThemePreset as clap::ValueEnum>::from_str(value, true)
                .map_err(|_| anyhow::anyhow!("Invalid theme: {}", value))?;
        }
        ["appearance", "cjk_font"] => {
            config.appearance.cjk_font = if value.is_empty() {
                None
            } else {
                Some(PathBuf::from(value))
            };
        }
        ["demo", "initial_state"] => config.demo.initial_state = value.parse()?,
        ["demo", "loading_text"] => config.demo.loading_text = value.to_string(),
        ["demo", "error_text"] => config.demo.error_text = value.to_string(),
        ["demo", "content_text"] => config.demo.content_text = value.to_string(),
        ["demo", "custom_text"] => config.demo.custom_text = value.to_string(),
        ["demo", "reload_delay_ms"] => config.demo.reload_delay_ms = value.parse()?,
        ["window", "width"] => config.window.width = value.parse()?,
        ["window", "height"] => config.window.height = value.parse()?,
        _ => anyhow::bail!("Unknown config key: {}", key),
    }
    Ok(())
}

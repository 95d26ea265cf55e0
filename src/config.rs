use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use statelayout::StateKind;
use std::path::{Path, PathBuf};

use crate::ui::theme::ThemePreset;

/// Demo application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub appearance: AppearanceConfig,
    #[serde(default)]
    pub demo: DemoConfig,
    #[serde(default)]
    pub window: WindowConfig,
}

/// Look and feel
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppearanceConfig {
    /// Color theme
    #[serde(default)]
    pub theme: ThemePreset,
    /// Font file with CJK glyphs, used as a fallback for tip text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cjk_font: Option<PathBuf>,
}

/// Texts and behavior of the demo page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemoConfig {
    /// State shown on startup
    #[serde(default)]
    pub initial_state: StateKind,
    /// Tip text used by the Loading button
    #[serde(default = "default_loading_text")]
    pub loading_text: String,
    /// Tip text used by the Error button
    #[serde(default = "default_error_text")]
    pub error_text: String,
    /// Heading of the content page
    #[serde(default = "default_content_text")]
    pub content_text: String,
    /// Heading of the custom page
    #[serde(default = "default_custom_text")]
    pub custom_text: String,
    /// Delay before a reload resolves to the content page (0 = stay loading)
    #[serde(default = "default_reload_delay")]
    pub reload_delay_ms: u64,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            initial_state: StateKind::default(),
            loading_text: default_loading_text(),
            error_text: default_error_text(),
            content_text: default_content_text(),
            custom_text: default_custom_text(),
            reload_delay_ms: default_reload_delay(),
        }
    }
}

fn default_loading_text() -> String {
    "加载中,请稍后....".to_string()
}

fn default_error_text() -> String {
    "哎呀,出错了".to_string()
}

fn default_content_text() -> String {
    "内容页面".to_string()
}

fn default_custom_text() -> String {
    "自定义页面".to_string()
}

fn default_reload_delay() -> u64 {
    1500
}

/// Initial window size
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowConfig {
    #[serde(default = "default_width")]
    pub width: f32,
    #[serde(default = "default_height")]
    pub height: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
        }
    }
}

fn default_width() -> f32 {
    720.0
}

fn default_height() -> f32 {
    640.0
}

impl Config {
    /// Get the default configuration file path
    pub fn config_path() -> Result<PathBuf> {
        let dirs = directories::ProjectDirs::from("com", "statelayout", "StateLayout")
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Load configuration from `path`, falling back to defaults if it does not exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            let config: Config = toml::from_str(&content)
                .with_context(|| format!("Invalid configuration in {}", path.display()))?;
            tracing::info!("Loaded configuration from {:?}", path);
            Ok(config)
        } else {
            tracing::info!("No configuration file found, using defaults");
            Ok(Self::default())
        }
    }

    /// Save configuration to `path`, creating its directory if needed
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        tracing::info!("Saved configuration to {:?}", path);
        Ok(())
    }
}

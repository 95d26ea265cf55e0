// Hide console window in release builds (Windows GUI app).
// Subcommands reattach to the console they were started from.
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod cli;
mod config;
mod task;
mod ui;

use anyhow::Result;
use clap::Parser;
use statelayout::{AssetId, assets};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::Cli;
use crate::config::Config;

/// Use the default tip image as the window icon
fn load_icon() -> Option<egui::IconData> {
    let bytes = assets::builtin(&AssetId::TIP)?;
    let image = image::load_from_memory(bytes).ok()?.into_rgba8();
    let (width, height) = image.dimensions();
    Some(egui::IconData {
        rgba: image.into_raw(),
        width,
        height,
    })
}

/// Send stdout and stderr to the parent process's console, if there is one.
///
/// Release builds on Windows use the GUI subsystem and start without a
/// console, so CLI output would otherwise be lost.
#[cfg(windows)]
fn attach_parent_console() {
    use windows::Win32::System::Console::{ATTACH_PARENT_PROCESS, AttachConsole};

    // Fails when started from Explorer or already attached; both are fine
    unsafe {
        let _ = AttachConsole(ATTACH_PARENT_PROCESS);
    }
}

#[cfg(not(windows))]
fn attach_parent_console() {}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "statelayout=debug,info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help, --version and usage errors
            attach_parent_console();
            e.exit();
        }
    };
    if cli.needs_console() {
        attach_parent_console();
    }

    let config_path = match &cli.config {
        Some(path) => path.clone(),
        None => Config::config_path()?,
    };

    let format = cli.format();
    if let Some(command) = cli.command {
        return cli::run(command, &config_path, format);
    }

    tracing::info!("Starting statelayout demo");

    let mut config = match Config::load_from(&config_path) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("{:#}; using default configuration", e);
            Config::default()
        }
    };
    if let Some(theme) = cli.theme {
        config.appearance.theme = theme;
    }
    let initial_state = cli.state;

    let viewport = egui::ViewportBuilder::default()
        .with_inner_size([config.window.width, config.window.height])
        .with_min_inner_size([480.0, 400.0])
        .with_title("Multi-State Layout");

    let viewport = if let Some(icon) = load_icon() {
        viewport.with_icon(Arc::new(icon))
    } else {
        tracing::warn!("Failed to load application icon");
        viewport
    };

    let native_options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        "statelayout",
        native_options,
        Box::new(move |cc| {
            Ok(Box::new(app::DemoApp::new(
                cc,
                config,
                config_path,
                initial_state,
            )))
        }),
    )
    .map_err(|e| anyhow::anyhow!("Failed to run application: {}", e))?;

    Ok(())
}

use eframe::egui;
use statelayout::{AssetId, PageState, StateKind};
use std::path::PathBuf;
use std::time::Duration;

use crate::config::Config;
use crate::task::{BackgroundTask, TaskPoll};
use crate::ui::theme::ThemePreset;
use crate::ui::{self, UiState};

/// Demo application state
pub struct DemoApp {
    /// Application configuration
    pub(crate) config: Config,
    /// Where the configuration is saved
    config_path: PathBuf,
    /// State currently shown by the layout
    pub(crate) page_state: PageState,
    /// Simulated reload in flight
    reload_task: Option<BackgroundTask<PageState>>,
    /// Theme and other UI-only state
    pub(crate) ui: UiState,
}

impl DemoApp {
    /// Create a new application instance
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        config: Config,
        config_path: PathBuf,
        initial_state: Option<StateKind>,
    ) -> Self {
        let cjk_font = config.appearance.cjk_font.as_deref();
        if let Err(e) = ui::fonts::install_cjk_fallback(&cc.egui_ctx, cjk_font) {
            tracing::warn!("Failed to install CJK font: {:#}", e);
        }
        Self::with_config(config, config_path, initial_state)
    }

    /// Create the application without a window, e.g. for tests
    pub fn with_config(
        config: Config,
        config_path: PathBuf,
        initial_state: Option<StateKind>,
    ) -> Self {
        let theme = config.appearance.theme.theme();
        let initial = initial_state.unwrap_or(config.demo.initial_state);

        let mut app = Self {
            config,
            config_path,
            page_state: PageState::content(),
            reload_task: None,
            ui: UiState::new(theme),
        };
        app.select_state(initial);
        app
    }

    /// Switch to `kind`, the way the demo's buttons do.
    ///
    /// Loading and Error get the texts from the config; the others keep their
    /// built-in tips. Any pending reload is cancelled.
    pub(crate) fn select_state(&mut self, kind: StateKind) {
        self.cancel_reload();
        self.page_state = match kind {
            StateKind::Loading => PageState::loading().with_text(&self.config.demo.loading_text),
            StateKind::Error => PageState::error()
                .with_text(&self.config.demo.error_text)
                .with_image(Some(AssetId::TIP)),
            other => PageState::of(other),
        };
        tracing::debug!("Page state set to {}", kind);
    }

    /// Handle a reload request from the Empty or Error page
    pub(crate) fn reload(&mut self) {
        self.cancel_reload();
        self.page_state = PageState::loading();
        tracing::info!("Reloading page");

        let delay = self.config.demo.reload_delay_ms;
        if delay > 0 {
            self.reload_task = Some(BackgroundTask::spawn("reload", async move {
                tokio::time::sleep(Duration::from_millis(delay)).await;
                PageState::content()
            }));
        }
    }

    pub(crate) fn is_reloading(&self) -> bool {
        self.reload_task.is_some()
    }

    fn cancel_reload(&mut self) {
        if let Some(task) = self.reload_task.take() {
            task.abort();
        }
    }

    /// Apply a finished reload; returns true while one is still running
    fn poll_reload_task(&mut self) -> bool {
        match BackgroundTask::poll(&mut self.reload_task) {
            TaskPoll::Done(Ok(state)) => {
                tracing::info!("Reload finished: {}", state.kind());
                self.page_state = state;
                false
            }
            TaskPoll::Done(Err(e)) => {
                tracing::error!("Reload task failed: {}", e);
                self.page_state = PageState::error().with_text(format!("Reload failed: {}", e));
                false
            }
            TaskPoll::Pending => true,
            TaskPoll::Idle => false,
        }
    }

    /// Change the theme and persist it
    pub(crate) fn set_theme(&mut self, preset: ThemePreset) {
        self.config.appearance.theme = preset;
        self.ui.current_theme = preset.theme();
        self.ui.theme_dirty = true;

        if let Err(e) = self.config.save_to(&self.config_path) {
            tracing::error!("Failed to save config: {:#}", e);
        }
    }
}

impl eframe::App for DemoApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.ui.theme_dirty {
            self.ui.current_theme.apply(ctx);
            self.ui.theme_dirty = false;
        }

        if self.poll_reload_task() {
            ctx.request_repaint_after(Duration::from_millis(50));
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ui::render_demo_page(self, ui);
        });
    }
}

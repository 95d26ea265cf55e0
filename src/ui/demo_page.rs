//! The demo screen: state buttons on top, the multi-state layout below

use eframe::egui;
use statelayout::{MultiStateLayout, StateKind};
use std::cell::Cell;

use super::components::{page_heading, state_button, status_line};
use crate::app::DemoApp;
use crate::ui::theme::ThemePreset;

/// Render the whole demo page
pub fn render_demo_page(app: &mut DemoApp, ui: &mut egui::Ui) {
    let theme = app.ui.current_theme.clone();

    // State switcher
    ui.add_space(10.0);
    ui.horizontal(|ui| {
        let current = app.page_state.kind();
        for kind in StateKind::all() {
            if state_button(ui, &theme, *kind, current == *kind) {
                app.select_state(*kind);
            }
            ui.add_space(6.0);
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            render_theme_picker(app, ui);
        });
    });
    status_line(ui, &theme, app.page_state.kind(), app.is_reloading());
    ui.separator();

    // The layout borrows the state, so a reload is applied after it is drawn
    let reload_requested = Cell::new(false);
    let content_text = app.config.demo.content_text.clone();
    let custom_text = app.config.demo.custom_text.clone();

    MultiStateLayout::with_default_templates(&app.page_state)
        .on_reload(|| reload_requested.set(true))
        .content(|ui| page_heading(ui, &content_text))
        .custom(|ui, _| page_heading(ui, &custom_text))
        .show(ui);

    if reload_requested.get() {
        app.reload();
    }
}

fn render_theme_picker(app: &mut DemoApp, ui: &mut egui::Ui) {
    let mut selected = app.config.appearance.theme;
    egui::ComboBox::from_id_salt("theme_select")
        .selected_text(selected.name())
        .show_ui(ui, |ui| {
            for preset in ThemePreset::all() {
                ui.selectable_value(&mut selected, *preset, preset.name());
            }
        });

    if selected != app.config.appearance.theme {
        app.set_theme(selected);
    }
}

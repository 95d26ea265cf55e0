//! Shared UI components for the demo

use eframe::egui::{self, RichText, TextStyle, Vec2};
use statelayout::StateKind;

use super::theme::Theme;

/// Button that switches the page to `kind`; returns true when clicked
pub fn state_button(ui: &mut egui::Ui, theme: &Theme, kind: StateKind, active: bool) -> bool {
    let text = RichText::new(kind.name()).text_style(TextStyle::Small);
    let text = if active { text.strong() } else { text };

    let mut button = egui::Button::new(text)
        .corner_radius(4.0)
        .min_size(Vec2::new(72.0, 28.0));
    if active {
        button = button.stroke(egui::Stroke::new(2.0, theme.text_primary));
    }

    ui.add(button).clicked()
}

/// Large heading centered in the remaining space
pub fn page_heading(ui: &mut egui::Ui, text: &str) {
    ui.centered_and_justified(|ui| {
        ui.heading(text);
    });
}

/// One-line status below the state buttons
pub fn status_line(ui: &mut egui::Ui, theme: &Theme, kind: StateKind, reloading: bool) {
    let status = if reloading {
        format!("State: {} (reloading...)", kind)
    } else {
        format!("State: {}", kind)
    };
    ui.label(RichText::new(status).color(theme.text_muted).size(11.0));
}

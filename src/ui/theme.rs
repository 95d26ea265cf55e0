use eframe::egui::{self, Color32, Stroke, Visuals};
use serde::{Deserialize, Serialize};

/// Available theme presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreset {
    #[default]
    Light,
    Dark,
    Amber,
}

impl ThemePreset {
    /// Get all available presets
    pub fn all() -> &'static [ThemePreset] {
        &[ThemePreset::Light, ThemePreset::Dark, ThemePreset::Amber]
    }

    /// Get display name for the preset
    pub fn name(&self) -> &'static str {
        match self {
            ThemePreset::Light => "Light",
            ThemePreset::Dark => "Dark",
            ThemePreset::Amber => "Amber",
        }
    }

    /// Get the theme colors for this preset
    pub fn theme(&self) -> Theme {
        match self {
            ThemePreset::Light => Theme::light(),
            ThemePreset::Dark => Theme::dark(),
            ThemePreset::Amber => Theme::amber(),
        }
    }
}

/// Theme color definitions
#[derive(Debug, Clone)]
pub struct Theme {
    pub dark_mode: bool,

    // Backgrounds
    pub background: Color32,
    pub surface: Color32,

    // Text
    pub text_primary: Color32,
    pub text_muted: Color32,

    // Accent (buttons, links, selection)
    pub accent: Color32,
    pub accent_hover: Color32,
    pub on_accent: Color32,

    pub border: Color32,
}

impl Theme {
    /// Light theme with a purple accent
    pub fn light() -> Self {
        Self {
            dark_mode: false,
            background: Color32::from_rgb(250, 250, 250),
            surface: Color32::from_rgb(255, 255, 255),

            text_primary: Color32::from_rgb(33, 33, 33),
            text_muted: Color32::from_rgb(117, 117, 117),

            accent: Color32::from_rgb(98, 0, 238),
            accent_hover: Color32::from_rgb(55, 0, 179),
            on_accent: Color32::WHITE,

            border: Color32::from_rgb(224, 224, 224),
        }
    }

    /// Dark theme with a lavender accent
    pub fn dark() -> Self {
        Self {
            dark_mode: true,
            background: Color32::from_rgb(18, 18, 18),
            surface: Color32::from_rgb(30, 30, 30),

            text_primary: Color32::from_rgb(236, 236, 236),
            text_muted: Color32::from_rgb(160, 160, 160),

            accent: Color32::from_rgb(187, 134, 252),
            accent_hover: Color32::from_rgb(206, 166, 255),
            on_accent: Color32::from_rgb(18, 18, 18),

            border: Color32::from_rgb(60, 60, 60),
        }
    }

    /// Dark theme with an amber accent
    pub fn amber() -> Self {
        Self {
            dark_mode: true,
            background: Color32::from_rgb(24, 24, 27),
            surface: Color32::from_rgb(32, 32, 36),

            text_primary: Color32::from_rgb(250, 250, 250),
            text_muted: Color32::from_rgb(140, 140, 140),

            accent: Color32::from_rgb(245, 158, 11),
            accent_hover: Color32::from_rgb(251, 191, 36),
            on_accent: Color32::from_rgb(24, 24, 27),

            border: Color32::from_rgb(63, 63, 70),
        }
    }

    /// Apply this theme to egui's visuals
    pub fn apply(&self, ctx: &egui::Context) {
        let mut visuals = if self.dark_mode {
            Visuals::dark()
        } else {
            Visuals::light()
        };

        visuals.window_fill = self.surface;
        visuals.panel_fill = self.background;
        visuals.extreme_bg_color = self.surface;

        // Labels, including the tip text of the templates
        visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, self.text_primary);
        visuals.widgets.noninteractive.bg_stroke = Stroke::new(1.0, self.border);

        // Buttons are filled with the accent color
        visuals.widgets.inactive.weak_bg_fill = self.accent;
        visuals.widgets.inactive.bg_fill = self.accent;
        visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, self.on_accent);
        visuals.widgets.hovered.weak_bg_fill = self.accent_hover;
        visuals.widgets.hovered.bg_fill = self.accent_hover;
        visuals.widgets.hovered.fg_stroke = Stroke::new(1.0, self.on_accent);
        visuals.widgets.active.weak_bg_fill = self.accent_hover;
        visuals.widgets.active.bg_fill = self.accent_hover;
        visuals.widgets.active.fg_stroke = Stroke::new(1.0, self.on_accent);

        visuals.selection.bg_fill = self.accent.gamma_multiply(0.3);
        visuals.selection.stroke = Stroke::new(1.0, self.accent);
        visuals.hyperlink_color = self.accent;

        ctx.set_visuals(visuals);
    }
}

//! UI modules for the demo application

mod components;
mod demo_page;
pub mod fonts;
pub mod theme;

pub use demo_page::render_demo_page;

use theme::Theme;

/// UI-related state
pub struct UiState {
    /// Current theme
    pub current_theme: Theme,
    /// Whether theme needs to be applied
    pub theme_dirty: bool,
}

impl UiState {
    /// Create a new UiState with the given theme
    pub fn new(theme: Theme) -> Self {
        Self {
            current_theme: theme,
            theme_dirty: true, // Apply theme on first frame
        }
    }
}

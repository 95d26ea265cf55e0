//! Multi-state page layout for egui
//!
//! A page is always in exactly one [`PageState`]: Loading, Empty, Error,
//! Custom or Content. [`StateLayout`] holds one render callback per state and
//! draws only the one matching the current state. [`MultiStateLayout`] is the
//! egui flavour, and [`MultiStateLayout::with_default_templates`] fills in
//! ready-made Loading, Empty and Error screens.
//!
//! ```ignore
//! let reload_clicked = std::cell::Cell::new(false);
//! MultiStateLayout::with_default_templates(&self.page_state)
//!     .on_reload(|| reload_clicked.set(true))
//!     .content(|ui| {
//!         ui.heading("Hello");
//!     })
//!     .show(ui);
//! if reload_clicked.get() {
//!     self.page_state = PageState::loading();
//! }
//! ```

pub mod assets;
pub mod layout;
pub mod page_state;
pub mod templates;

pub use assets::AssetError;
pub use layout::{MultiStateLayout, RenderPayload, StateLayout};
pub use page_state::{AssetId, PageState, StateKind, Tip};

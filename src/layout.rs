//! State dispatcher: picks the one render callback matching the current state

use std::fmt;

use crate::page_state::{PageState, StateKind};
use crate::templates;

/// Render callback for the Loading, Empty, Error and Custom states
pub type StateRenderer<'a, T> = Box<dyn FnOnce(&mut T, RenderPayload<'_>) + 'a>;

/// Render callback for the Content state, which takes no payload
pub type ContentRenderer<'a, T> = Box<dyn FnOnce(&mut T) + 'a>;

/// Everything a state renderer gets to see: the state and the reload hook.
///
/// Built fresh for every dispatch.
#[derive(Clone, Copy)]
pub struct RenderPayload<'a> {
    state: &'a PageState,
    reload: &'a dyn Fn(),
}

impl<'a> RenderPayload<'a> {
    pub fn new(state: &'a PageState, reload: &'a dyn Fn()) -> Self {
        Self { state, reload }
    }

    pub fn state(&self) -> &'a PageState {
        self.state
    }

    /// Ask the caller to reload the page
    pub fn reload(&self) {
        tracing::debug!(state = %self.state.kind(), "Reload requested");
        (self.reload)();
    }
}

impl fmt::Debug for RenderPayload<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RenderPayload")
            .field("state", self.state)
            .finish_non_exhaustive()
    }
}

/// Multi-state layout over any render target `T`.
///
/// Every callback starts out blank, so a state without a renderer simply
/// draws nothing. [`render`](Self::render) invokes exactly one callback.
pub struct StateLayout<'a, T> {
    state: &'a PageState,
    on_reload: Box<dyn Fn() + 'a>,
    loading: StateRenderer<'a, T>,
    empty: StateRenderer<'a, T>,
    error: StateRenderer<'a, T>,
    custom: StateRenderer<'a, T>,
    content: ContentRenderer<'a, T>,
}

/// The layout as used inside egui
pub type MultiStateLayout<'a> = StateLayout<'a, egui::Ui>;

fn blank<'a, T: 'a>() -> StateRenderer<'a, T> {
    Box::new(|_: &mut T, _: RenderPayload<'_>| {})
}

impl<'a, T: 'a> StateLayout<'a, T> {
    pub fn new(state: &'a PageState) -> Self {
        Self {
            state,
            on_reload: Box::new(|| {}),
            loading: blank(),
            empty: blank(),
            error: blank(),
            custom: blank(),
            content: Box::new(|_: &mut T| {}),
        }
    }

    pub fn on_reload(mut self, on_reload: impl Fn() + 'a) -> Self {
        self.on_reload = Box::new(on_reload);
        self
    }

    pub fn loading(mut self, render: impl FnOnce(&mut T, RenderPayload<'_>) + 'a) -> Self {
        self.loading = Box::new(render);
        self
    }

    pub fn empty(mut self, render: impl FnOnce(&mut T, RenderPayload<'_>) + 'a) -> Self {
        self.empty = Box::new(render);
        self
    }

    pub fn error(mut self, render: impl FnOnce(&mut T, RenderPayload<'_>) + 'a) -> Self {
        self.error = Box::new(render);
        self
    }

    pub fn custom(mut self, render: impl FnOnce(&mut T, RenderPayload<'_>) + 'a) -> Self {
        self.custom = Box::new(render);
        self
    }

    pub fn content(mut self, render: impl FnOnce(&mut T) + 'a) -> Self {
        self.content = Box::new(render);
        self
    }

    pub fn state_kind(&self) -> StateKind {
        self.state.kind()
    }

    /// Render the branch for the current state into `target`
    pub fn render(self, target: &mut T) {
        let Self {
            state,
            on_reload,
            loading,
            empty,
            error,
            custom,
            content,
        } = self;

        let payload = RenderPayload::new(state, &*on_reload);
        tracing::trace!(state = %state.kind(), "Rendering page state");

        match state {
            PageState::Loading(_) => loading(target, payload),
            PageState::Empty(_) => empty(target, payload),
            PageState::Error(_) => error(target, payload),
            PageState::Custom(_) => custom(target, payload),
            PageState::Content(_) => content(target),
        }
    }
}

impl<'a> StateLayout<'a, egui::Ui> {
    /// Layout with the built-in Loading, Empty and Error templates.
    ///
    /// Custom and Content are left to the caller; any template can still be
    /// replaced with the matching builder method.
    pub fn with_default_templates(state: &'a PageState) -> Self {
        Self::new(state)
            .loading(|ui, payload| {
                templates::loading(ui, &payload);
            })
            .empty(|ui, payload| {
                templates::empty(ui, &payload);
            })
            .error(|ui, payload| {
                templates::error(ui, &payload);
            })
    }

    /// Render inside a child scope of `ui`
    pub fn show(self, ui: &mut egui::Ui) -> egui::Response {
        ui.scope(|ui| self.render(ui)).response
    }
}

impl<T> fmt::Debug for StateLayout<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StateLayout")
            .field("state", self.state)
            .finish_non_exhaustive()
    }
}

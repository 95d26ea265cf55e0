//! Built-in egui templates for the Loading, Empty and Error states
//!
//! Each template fills the available area and centers a small block in it:
//! a spinner or tip image on top, the tip text below. The Empty and Error
//! blocks are clickable and forward the click to [`RenderPayload::reload`].

use egui::{
    Align, CursorIcon, Label, Layout, Rect, Response, RichText, Sense, Spinner, TextStyle,
    Ui, UiBuilder, Vec2, load::SizedTexture,
};

use crate::assets;
use crate::layout::RenderPayload;
use crate::page_state::AssetId;

/// Edge length of the tip image
pub const TIP_IMAGE_SIZE: f32 = 200.0;
/// Gap between the spinner or image and the tip text
pub const TIP_TEXT_SPACING: f32 = 16.0;
const SPINNER_SIZE: f32 = 36.0;

/// Spinner above the tip text. Not interactive.
pub fn loading(ui: &mut Ui, payload: &RenderPayload<'_>) -> Response {
    centered_block(ui, "statelayout.loading", |ui| {
        ui.add(Spinner::new().size(SPINNER_SIZE));
        ui.add_space(TIP_TEXT_SPACING);
        tip_label(ui, payload.state().text());
    })
}

/// Tip image above the tip text; clicking the block reloads
pub fn empty(ui: &mut Ui, payload: &RenderPayload<'_>) -> Response {
    reloadable_block(ui, "statelayout.empty", payload, TIP_TEXT_SPACING)
}

/// Same layout as [`empty`], with the text right under the image
pub fn error(ui: &mut Ui, payload: &RenderPayload<'_>) -> Response {
    reloadable_block(ui, "statelayout.error", payload, 0.0)
}

fn reloadable_block(
    ui: &mut Ui,
    id_salt: &'static str,
    payload: &RenderPayload<'_>,
    text_spacing: f32,
) -> Response {
    let block = centered_block(ui, id_salt, |ui| {
        tip_image(ui, payload.state().image());
        ui.add_space(text_spacing);
        tip_label(ui, payload.state().text());
    });

    // Registered after the children so it sits on top for hit testing
    let response = ui
        .interact(block.rect, ui.id().with(id_salt).with("reload"), Sense::click())
        .on_hover_cursor(CursorIcon::PointingHand);

    if response.clicked() {
        payload.reload();
    }
    response
}

/// Lay out `add_contents` top-down, centered in the remaining space.
///
/// The block height is only known after drawing, so the size from the last
/// frame is kept in egui memory and used to position this one.
fn centered_block(
    ui: &mut Ui,
    id_salt: &'static str,
    add_contents: impl FnOnce(&mut Ui),
) -> Response {
    let id = ui.id().with(id_salt);
    let available = ui.available_rect_before_wrap();
    let last_size: Option<Vec2> = ui.ctx().data(|d| d.get_temp(id));

    let block_height = last_size.map_or(0.0, |size| size.y);
    let top = ((available.height() - block_height) / 2.0).max(0.0);
    let max_rect = Rect::from_min_max(available.min + Vec2::new(0.0, top), available.max);

    let response = ui
        .scope_builder(
            UiBuilder::new()
                .max_rect(max_rect)
                .layout(Layout::top_down(Align::Center)),
            add_contents,
        )
        .response;

    let size = response.rect.size();
    if last_size != Some(size) {
        ui.ctx().data_mut(|d| d.insert_temp(id, size));
        ui.ctx().request_discard("statelayout: centering block");
    }

    // Claim the whole area, like a full-size container would
    ui.advance_cursor_after_rect(available);
    response
}

fn tip_image(ui: &mut Ui, image: Option<&AssetId>) {
    let size = Vec2::splat(TIP_IMAGE_SIZE);
    match image.and_then(|id| assets::texture(ui.ctx(), id)) {
        Some(texture) => {
            ui.add(
                egui::Image::from_texture(SizedTexture::from_handle(&texture))
                    .fit_to_exact_size(size),
            );
        }
        // Keep the slot so the text does not jump when an image is missing
        None => {
            ui.allocate_space(size);
        }
    }
}

fn tip_label(ui: &mut Ui, text: &str) {
    ui.add(Label::new(RichText::new(text).text_style(TextStyle::Body)).selectable(false));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::MultiStateLayout;
    use crate::page_state::{PageState, StateKind};
    use egui::{
        CentralPanel, Context, Event, FullOutput, Modifiers, PointerButton, Pos2, RawInput, Shape,
        epaint::ClippedShape,
    };
    use std::cell::{Cell, RefCell};

    fn run_frame(ctx: &Context, events: Vec<Event>, mut add: impl FnMut(&mut Ui)) -> FullOutput {
        let input = RawInput {
            screen_rect: Some(Rect::from_min_size(Pos2::ZERO, Vec2::new(800.0, 600.0))),
            events,
            ..Default::default()
        };
        ctx.run(input, |ctx| {
            CentralPanel::default().show(ctx, |ui| add(ui));
        })
    }

    fn painted_text(output: &FullOutput) -> Vec<String> {
        fn collect(shape: &Shape, out: &mut Vec<String>) {
            match shape {
                Shape::Text(text) => out.push(text.galley.text().to_string()),
                Shape::Vec(shapes) => shapes.iter().for_each(|s| collect(s, out)),
                _ => {}
            }
        }
        let mut out = Vec::new();
        for ClippedShape { shape, .. } in &output.shapes {
            collect(shape, &mut out);
        }
        out
    }

    fn click_events(pos: Pos2, pressed: bool) -> Vec<Event> {
        let button = Event::PointerButton {
            pos,
            button: PointerButton::Primary,
            pressed,
            modifiers: Modifiers::default(),
        };
        if pressed {
            vec![Event::PointerMoved(pos), button]
        } else {
            vec![button]
        }
    }

    /// Render `template` for a few frames, click the center of its block and
    /// return how many times reload fired.
    fn click_template(
        state: PageState,
        template: fn(&mut Ui, &RenderPayload<'_>) -> Response,
    ) -> usize {
        let ctx = Context::default();
        let reloads = Cell::new(0);
        let reload = || reloads.set(reloads.get() + 1);
        let block = Cell::new(Rect::NOTHING);

        let mut draw = |ui: &mut Ui| {
            let payload = RenderPayload::new(&state, &reload);
            block.set(template(ui, &payload).rect);
        };

        run_frame(&ctx, vec![], &mut draw);
        run_frame(&ctx, vec![], &mut draw);
        assert_eq!(reloads.get(), 0);

        let center = block.get().center();
        run_frame(&ctx, click_events(center, true), &mut draw);
        run_frame(&ctx, click_events(center, false), &mut draw);
        run_frame(&ctx, vec![], &mut draw);
        reloads.get()
    }

    /// Show `initial` through the default wrapper, click the middle of the page
    /// and reset to Loading from the reload handler, the way a host does.
    /// Returns the reload count, the final state and the last frame's text.
    fn click_default_wrapper(initial: PageState) -> (usize, PageState, Vec<String>) {
        let ctx = Context::default();
        let state = RefCell::new(initial);
        let reloads = Cell::new(0);
        let panel = Cell::new(Rect::NOTHING);

        let mut draw = |ui: &mut Ui| {
            panel.set(ui.available_rect_before_wrap());
            let current = state.borrow().clone();
            let requested = Cell::new(false);
            MultiStateLayout::with_default_templates(&current)
                .on_reload(|| {
                    reloads.set(reloads.get() + 1);
                    requested.set(true);
                })
                .show(ui);
            if requested.get() {
                *state.borrow_mut() = PageState::loading();
            }
        };

        run_frame(&ctx, vec![], &mut draw);
        run_frame(&ctx, vec![], &mut draw);
        let center = panel.get().center();
        run_frame(&ctx, click_events(center, true), &mut draw);
        run_frame(&ctx, click_events(center, false), &mut draw);
        let output = run_frame(&ctx, vec![], &mut draw);

        let text = painted_text(&output);
        (reloads.get(), state.into_inner(), text)
    }

    #[test]
    fn test_default_wrapper_empty_click_resets_to_loading() {
        let (reloads, state, text) = click_default_wrapper(PageState::empty());
        assert_eq!(reloads, 1);
        assert_eq!(state, PageState::loading());
        assert!(text.iter().any(|t| t == "加载中"));
        assert!(!text.iter().any(|t| t == "数据为空"));
    }

    #[test]
    fn test_default_wrapper_error_click_resets_to_loading() {
        let (reloads, state, text) =
            click_default_wrapper(PageState::error().with_text("哎呀,出错了"));
        assert_eq!(reloads, 1);
        assert_eq!(state.kind(), StateKind::Loading);
        assert_eq!(state.text(), "加载中");
        assert!(text.iter().any(|t| t == "加载中"));
    }

    #[test]
    fn test_loading_template_shows_tip_text() {
        let ctx = Context::default();
        let state = PageState::loading();
        let output = run_frame(&ctx, vec![], |ui| {
            MultiStateLayout::with_default_templates(&state).show(ui);
        });
        assert!(painted_text(&output).iter().any(|t| t == "加载中"));
    }

    #[test]
    fn test_error_template_shows_custom_text() {
        let ctx = Context::default();
        let state = PageState::error().with_text("哎呀,出错了");
        let output = run_frame(&ctx, vec![], |ui| {
            MultiStateLayout::with_default_templates(&state).show(ui);
        });
        let text = painted_text(&output);
        assert!(text.iter().any(|t| t == "哎呀,出错了"));
        assert!(!text.iter().any(|t| t == crate::page_state::DEFAULT_ERROR_TEXT));
    }

    #[test]
    fn test_empty_click_reloads_once() {
        assert_eq!(click_template(PageState::empty(), empty), 1);
    }

    #[test]
    fn test_error_click_reloads_once() {
        assert_eq!(click_template(PageState::error(), error), 1);
    }

    #[test]
    fn test_loading_click_does_not_reload() {
        assert_eq!(click_template(PageState::loading(), loading), 0);
    }

    #[test]
    fn test_missing_image_keeps_layout() {
        let ctx = Context::default();
        let state = PageState::empty().with_image(Some(AssetId::from_static("missing")));
        let block = Cell::new(Rect::NOTHING);
        let noop = || {};
        run_frame(&ctx, vec![], |ui| {
            let payload = RenderPayload::new(&state, &noop);
            block.set(empty(ui, &payload).rect);
        });
        assert!(block.get().height() >= TIP_IMAGE_SIZE);
    }

    #[test]
    fn test_block_is_centered_after_first_frame() {
        let ctx = Context::default();
        let state = PageState::empty();
        let block = Cell::new(Rect::NOTHING);
        let panel = Cell::new(Rect::NOTHING);
        let noop = || {};
        let mut draw = |ui: &mut Ui| {
            panel.set(ui.available_rect_before_wrap());
            let payload = RenderPayload::new(&state, &noop);
            block.set(empty(ui, &payload).rect);
        };
        run_frame(&ctx, vec![], &mut draw);
        run_frame(&ctx, vec![], &mut draw);

        let offset = (block.get().center().y - panel.get().center().y).abs();
        assert!(offset < 1.0, "block is {offset} px off center");
    }

    #[test]
    fn test_content_state_skips_templates() {
        let ctx = Context::default();
        let state = PageState::content();
        let output = run_frame(&ctx, vec![], |ui| {
            MultiStateLayout::with_default_templates(&state)
                .content(|ui| {
                    ui.label("内容页面");
                })
                .show(ui);
        });
        let text = painted_text(&output);
        assert_eq!(text, vec!["内容页面".to_string()]);
    }
}

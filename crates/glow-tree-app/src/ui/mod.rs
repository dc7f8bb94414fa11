//! Scene drawing
//!
//! Depths from front to back: HUD text, cursor, decorations, hand overlay,
//! tree.

mod cursor;
mod hand;
mod sidebar;
mod status;
mod tree;

use glow_tree_core::DecorationKind;

use crate::renderer::{Color, RenderBackend};
use crate::state::AppState;

pub(crate) const CURSOR_DEPTH: f32 = 0.1;
pub(crate) const DECORATION_DEPTH: f32 = 0.4;
pub(crate) const OVERLAY_DEPTH: f32 = 0.6;
pub(crate) const TREE_DEPTH: f32 = 0.8;

/// Render the whole scene for one frame
pub fn render_scene(state: &AppState, backend: &mut dyn RenderBackend) {
    backend.clear(Color::NIGHT);
    let scene = state.controller.snapshot();

    tree::draw_tree(state, &scene, backend);
    hand::draw_hand(&state.detection, &state.viewport, backend);
    sidebar::draw_sidebar(&scene, &state.controller.config().interaction, backend);
    cursor::draw_cursor(&scene, &state.viewport, backend);
    status::draw_status(state, &scene, backend);
}

pub(crate) fn decoration_symbol(kind: DecorationKind) -> char {
    match kind {
        DecorationKind::Ball => '●',
        DecorationKind::Star => '★',
        DecorationKind::Gift => '■',
    }
}

pub(crate) fn decoration_color(hex: &str) -> Color {
    Color::from_hex(hex).unwrap_or(Color::White)
}

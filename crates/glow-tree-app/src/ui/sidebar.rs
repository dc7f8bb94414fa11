//! Decoration catalog along the right edge
//!
//! The camera view is mirrored, so the band the fingertip hovers on the left
//! of the camera image is drawn on the right of the display.

use glow_tree_core::{DwellTarget, InteractionConfig, SceneSnapshot, ScreenPoint};

use super::{decoration_color, decoration_symbol};
use crate::renderer::{Color, RenderBackend, RenderGlyph};

pub fn draw_sidebar(
    scene: &SceneSnapshot<'_>,
    config: &InteractionConfig,
    backend: &mut dyn RenderBackend,
) {
    let edge = 1.0 - config.catalog_band_x;
    let (step_x, _) = backend.cell_step();
    backend.draw_line(
        ScreenPoint::new(edge, config.catalog_top),
        ScreenPoint::new(edge, config.catalog_top + config.catalog_height),
        Color::OVERLAY,
        0.5,
    );

    let count = scene.catalog.len();
    if count == 0 {
        return;
    }
    let slot_height = config.catalog_height / count as f32;

    for (slot, template) in scene.catalog.iter().enumerate() {
        let y = config.catalog_top + slot_height * (slot as f32 + 0.5);
        let hovered = scene.hover_index == Some(slot);
        let x = edge + step_x * 2.0;

        backend.draw_glyph(
            &RenderGlyph::new(decoration_symbol(template.kind), ScreenPoint::new(x, y))
                .with_color(decoration_color(&template.color))
                .with_depth(0.0),
        );

        let mut label = template.label.clone();
        if hovered && scene.dwell_target == Some(DwellTarget::Sidebar(slot)) {
            label.push_str(&format!(" {:>3.0}%", scene.dwell_progress * 100.0));
        }
        let color = if hovered { Color::HIGHLIGHT } else { Color::HUD };
        if hovered {
            backend.draw_text(x - step_x * 2.0, y, "▶", Color::HIGHLIGHT);
        }
        backend.draw_text(x + step_x * 2.0, y, &label, color);
    }
}

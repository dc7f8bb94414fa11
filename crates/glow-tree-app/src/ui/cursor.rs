//! Fingertip cursor and dwell ring

use glow_tree_core::{SceneSnapshot, ScreenPoint};

use super::{decoration_color, decoration_symbol, CURSOR_DEPTH};
use crate::renderer::{Color, RenderBackend, RenderGlyph, Viewport};

/// Ring cells around the cursor, clockwise from the top, in cell offsets
const RING: [(f32, f32); 8] = [
    (0.0, -1.0),
    (1.0, -1.0),
    (2.0, 0.0),
    (1.0, 1.0),
    (0.0, 1.0),
    (-1.0, 1.0),
    (-2.0, 0.0),
    (-1.0, -1.0),
];

pub fn draw_cursor(scene: &SceneSnapshot<'_>, view: &Viewport, backend: &mut dyn RenderBackend) {
    let Some(gesture) = scene.gesture else {
        return;
    };
    let center = view.world_to_display(gesture.world_index_pos);

    let glyph = match scene.held {
        Some(template) => RenderGlyph::new(decoration_symbol(template.kind), center)
            .with_color(decoration_color(&template.color)),
        None => RenderGlyph::new('+', center).with_color(Color::White),
    };
    backend.draw_glyph(&glyph.with_depth(CURSOR_DEPTH));

    if scene.dwell_progress <= 0.0 {
        return;
    }
    let lit = (scene.dwell_progress * RING.len() as f32).ceil() as usize;
    let (step_x, step_y) = backend.cell_step();
    for (i, (dx, dy)) in RING.iter().enumerate() {
        let position = ScreenPoint::new(center.x + dx * step_x, center.y + dy * step_y);
        let (symbol, color) = if i < lit {
            ('●', Color::HIGHLIGHT)
        } else {
            ('·', Color::OVERLAY)
        };
        backend.draw_glyph(
            &RenderGlyph::new(symbol, position)
                .with_color(color)
                .with_depth(CURSOR_DEPTH),
        );
    }
}

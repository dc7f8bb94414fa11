//! The tree: foliage, trunk, star and attached decorations

use glow_tree_core::interaction::tree_volume;
use glow_tree_core::{Point3D, SceneSnapshot, ScreenPoint};

use super::{decoration_color, decoration_symbol, DECORATION_DEPTH, TREE_DEPTH};
use crate::renderer::{Color, RenderBackend, RenderGlyph};
use crate::state::AppState;

/// Trunk size relative to the tree height at scale 1.0
const TRUNK_HEIGHT: f32 = 0.6;
const TRUNK_HALF_WIDTH: f32 = 0.3;

pub fn draw_tree(state: &AppState, scene: &SceneSnapshot<'_>, backend: &mut dyn RenderBackend) {
    let view = &state.viewport;
    let cone = tree_volume(scene.scale, &state.controller.config().interaction);
    let glow = state.relight_glow();
    let foliage = Color::from_rgb(state.edition.foliage()).blend(&Color::SNOW, glow * 0.8);
    let lights = Color::HIGHLIGHT.blend(&Color::SNOW, glow);

    let (cols, rows) = backend.size();
    let trunk_half = view.display_width(TRUNK_HALF_WIDTH * scene.scale);
    let trunk_bottom = cone.base_y - TRUNK_HEIGHT * scene.scale;

    for row in 0..rows {
        let dy = (row as f32 + 0.5) / rows as f32;
        let wy = view.display_to_world_y(dy);

        let (half, is_trunk) = match cone.radius_at(wy) {
            Some(radius) => (view.display_width(radius), false),
            None if wy < cone.base_y && wy >= trunk_bottom => (trunk_half, true),
            None => continue,
        };

        for col in 0..cols {
            let dx = (col as f32 + 0.5) / cols as f32;
            if (dx - 0.5).abs() > half {
                continue;
            }
            let glyph = if is_trunk {
                RenderGlyph::new('█', ScreenPoint::new(dx, dy)).with_color(Color::TRUNK)
            } else if (row as usize * 3 + col as usize) % 11 == 0 {
                RenderGlyph::new('*', ScreenPoint::new(dx, dy)).with_color(lights)
            } else {
                RenderGlyph::new('^', ScreenPoint::new(dx, dy)).with_color(foliage)
            };
            backend.draw_glyph(&glyph.with_depth(TREE_DEPTH));
        }
    }

    let star = Color::from_rgb(state.edition.star()).blend(&Color::White, glow);
    let apex = view.world_to_display(Point3D::new(0.0, cone.top_y, 0.0));
    backend.draw_glyph(
        &RenderGlyph::new('★', apex)
            .with_color(star)
            .with_depth(DECORATION_DEPTH),
    );

    for item in scene.decorations {
        let position = view.world_to_display(item.rendered_position(scene.scale));
        backend.draw_glyph(
            &RenderGlyph::new(decoration_symbol(item.kind), position)
                .with_color(decoration_color(&item.color))
                .with_depth(DECORATION_DEPTH),
        );
    }
}

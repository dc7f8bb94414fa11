//! Hand skeleton overlay

use glow_tree_core::input::{index, HAND_CONNECTIONS};
use glow_tree_core::Detection;

use super::OVERLAY_DEPTH;
use crate::renderer::{Color, RenderBackend, RenderGlyph, Viewport};

const FINGERTIPS: [usize; 5] = [
    index::THUMB_TIP,
    index::INDEX_TIP,
    index::MIDDLE_TIP,
    index::RING_TIP,
    index::PINKY_TIP,
];

pub fn draw_hand(detection: &Detection, view: &Viewport, backend: &mut dyn RenderBackend) {
    let Some(hand) = detection.hand() else {
        return;
    };
    let point = |i: usize| view.camera_to_display(hand.landmarks[i].screen());

    for (a, b) in HAND_CONNECTIONS {
        backend.draw_line(point(a), point(b), Color::OVERLAY, OVERLAY_DEPTH);
    }
    for i in 0..hand.landmarks.len() {
        let color = if FINGERTIPS.contains(&i) {
            Color::HUD
        } else {
            Color::OVERLAY
        };
        backend.draw_glyph(
            &RenderGlyph::new('•', point(i))
                .with_color(color)
                .with_depth(OVERLAY_DEPTH - 0.01),
        );
    }
}

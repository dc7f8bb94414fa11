//! Status and help lines

use glow_tree_core::{LandmarkSource, SceneSnapshot};

use crate::renderer::{Color, RenderBackend};
use crate::state::AppState;

const HELP: &str = "arrows move  +/- palm  h heart  v peace  f fist  o open  z push  space hide  r reset  e edition  q quit";

pub fn draw_status(state: &AppState, scene: &SceneSnapshot<'_>, backend: &mut dyn RenderBackend) {
    let (_, step_y) = backend.cell_step();
    let row = |n: f32| step_y * (n + 0.5);
    let bottom = |n: f32| 1.0 - step_y * (n + 0.5);

    let holding = scene
        .held
        .map(|t| format!("  holding {}", t.label))
        .unwrap_or_default();
    let title = format!(
        " glow-tree  {} edition  scale {:.2}  {} on tree{}  [{}]",
        state.edition.label(),
        scene.scale,
        scene.decorations.len(),
        holding,
        state.source.name(),
    );
    backend.draw_text(0.0, row(0.0), &title, Color::HUD);
    backend.draw_text(0.0, row(1.0), &gesture_line(scene, state.detection.is_hand()), Color::OVERLAY);

    if let Some(message) = &state.status_message {
        backend.draw_text(0.0, bottom(1.0), &format!(" {message}"), Color::HIGHLIGHT);
    }
    backend.draw_text(0.0, bottom(0.0), &format!(" {HELP}"), Color::DarkGrey);
}

fn gesture_line(scene: &SceneSnapshot<'_>, hand_visible: bool) -> String {
    let Some(g) = scene.gesture.filter(|_| hand_visible) else {
        return " no hand".to_string();
    };
    let mut parts = vec![format!(" palm {:>3.0}%", g.palm_openness * 100.0)];
    let flags = [
        (g.is_heart, "heart"),
        (g.is_pinching, "pinch"),
        (g.is_peace, "peace"),
        (g.is_fist, "fist"),
        (g.is_dragging, "push"),
    ];
    parts.extend(flags.iter().filter(|(on, _)| *on).map(|(_, name)| name.to_string()));
    if scene.is_relighting {
        parts.push("relighting".to_string());
    }
    parts.join("  ")
}

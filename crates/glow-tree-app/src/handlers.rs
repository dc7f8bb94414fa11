//! Keyboard handling

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use glow_tree_core::LandmarkSource;

use crate::source::command_for_key;
use crate::state::AppState;

/// Handle a key press; returns false to quit
pub fn handle_key(key: KeyEvent, state: &mut AppState) -> bool {
    if key.kind != KeyEventKind::Press {
        return true;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char('q') | KeyCode::Char('c'))
    {
        return false;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => return false,
        KeyCode::Char('r') => state.reset_scene(),
        KeyCode::Char('e') => state.cycle_edition(),
        _ => {
            if let Some(command) = command_for_key(&key) {
                if !state.source.steer(command) {
                    state.status_message =
                        Some(format!("{} ignores hand controls", state.source.name()));
                }
            }
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    use glow_tree_core::{Catalog, GlowConfig, InteractionController, NullHapticBackend, TreeEdition};

    use crate::source::{ReplaySource, SimulatedHand};

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn app(source: Box<dyn crate::source::FrameSource>) -> AppState {
        AppState::new(
            InteractionController::new(GlowConfig::default(), Catalog::default()),
            source,
            Box::new(NullHapticBackend),
            TreeEdition::Classic,
        )
    }

    #[test]
    fn test_quit_keys() {
        let mut state = app(Box::new(SimulatedHand::seeded(1)));
        assert!(!handle_key(press(KeyCode::Char('q')), &mut state));
        assert!(!handle_key(press(KeyCode::Esc), &mut state));
        assert!(!handle_key(
            KeyEvent::new(KeyCode::Char('q'), KeyModifiers::CONTROL),
            &mut state
        ));
        assert!(handle_key(press(KeyCode::Char('x')), &mut state));
    }

    #[test]
    fn test_keys_steer_simulator() {
        let mut state = app(Box::new(SimulatedHand::seeded(1)));
        assert!(handle_key(press(KeyCode::Char(' ')), &mut state));
        state.step(Instant::now());
        assert!(!state.detection.is_hand());
    }

    #[test]
    fn test_replay_reports_ignored_controls() {
        let replay = ReplaySource::from_reader(std::io::Cursor::new("null\n"), false).unwrap();
        let mut state = app(Box::new(replay));
        handle_key(press(KeyCode::Char('h')), &mut state);
        assert_eq!(
            state.status_message.as_deref(),
            Some("replay ignores hand controls")
        );
    }

    #[test]
    fn test_reset_key() {
        let mut state = app(Box::new(SimulatedHand::seeded(1)));
        state.controller.hold(0);
        handle_key(press(KeyCode::Char('r')), &mut state);
        assert!(state.controller.held().is_none());
        assert_eq!(state.status_message.as_deref(), Some("Tree cleared"));
    }
}

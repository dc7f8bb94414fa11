//! Vibration patterns for interaction events

use std::time::Duration;

use crate::interaction::InteractionEvent;

/// Vibration patterns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HapticPattern {
    /// Catalog item picked up
    PickUp,
    /// Decoration placed on the tree
    Place,
    /// Scene reset
    Reset,
    /// Relight animation started
    Relight,
}

impl HapticPattern {
    /// Alternating on/off segments, starting with "on"
    pub fn segments(&self) -> &'static [Duration] {
        const PICK_UP: [Duration; 1] = [Duration::from_millis(30)];
        const PLACE: [Duration; 3] = [
            Duration::from_millis(40),
            Duration::from_millis(30),
            Duration::from_millis(40),
        ];
        const RESET: [Duration; 1] = [Duration::from_millis(20)];
        const RELIGHT: [Duration; 1] = [Duration::from_millis(50)];

        match self {
            Self::PickUp => &PICK_UP,
            Self::Place => &PLACE,
            Self::Reset => &RESET,
            Self::Relight => &RELIGHT,
        }
    }

    /// Total pattern length
    pub fn total(&self) -> Duration {
        self.segments().iter().sum()
    }

    /// Pattern for an interaction event
    pub fn for_event(event: &InteractionEvent) -> Self {
        match event {
            InteractionEvent::DecorationPicked { .. } => Self::PickUp,
            InteractionEvent::DecorationPlaced(_) => Self::Place,
            InteractionEvent::SceneReset => Self::Reset,
            InteractionEvent::RelightStarted => Self::Relight,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_place_pattern() {
        assert_eq!(HapticPattern::Place.segments().len(), 3);
        assert_eq!(HapticPattern::Place.total(), Duration::from_millis(110));
    }

    #[test]
    fn test_event_mapping() {
        assert_eq!(
            HapticPattern::for_event(&InteractionEvent::SceneReset),
            HapticPattern::Reset
        );
        assert_eq!(
            HapticPattern::for_event(&InteractionEvent::RelightStarted),
            HapticPattern::Relight
        );
    }
}

//! Application state for the terminal host

use std::time::{Duration, Instant};

use glow_tree_core::{
    Detection, Easing, HapticBackend, HapticPattern, InteractionController, InteractionEvent,
    LandmarkSource, TreeEdition, Tween,
};
use tracing::{info, warn};

use crate::renderer::Viewport;
use crate::source::FrameSource;

/// Length of the relight glow
pub const RELIGHT_DURATION: Duration = Duration::from_millis(830);

/// Everything the host loop owns between frames
pub struct AppState {
    pub controller: InteractionController,
    pub source: Box<dyn FrameSource>,
    pub haptics: Box<dyn HapticBackend>,
    pub edition: TreeEdition,
    pub viewport: Viewport,
    /// Detection from the latest frame, for the hand overlay
    pub detection: Detection,
    /// Running relight glow
    pub relight: Option<Tween>,
    pub status_message: Option<String>,
    pub tick: u64,
    last_frame: Option<Instant>,
}

impl AppState {
    pub fn new(
        controller: InteractionController,
        source: Box<dyn FrameSource>,
        haptics: Box<dyn HapticBackend>,
        edition: TreeEdition,
    ) -> Self {
        let viewport = Viewport::new(&controller.config().gesture);
        Self {
            controller,
            source,
            haptics,
            edition,
            viewport,
            detection: Detection::NoHand,
            relight: None,
            status_message: None,
            tick: 0,
            last_frame: None,
        }
    }

    /// Run one frame: advance animations, poll the source, update the scene
    pub fn step(&mut self, now: Instant) -> Vec<InteractionEvent> {
        let dt = self
            .last_frame
            .map(|last| now.saturating_duration_since(last))
            .unwrap_or_default();
        self.last_frame = Some(now);
        self.advance_relight(dt);

        let detection = match self.source.detect() {
            Ok(detection) => detection,
            Err(e) => {
                warn!("Landmark source {} failed: {}", self.source.name(), e);
                self.status_message = Some(format!("Input error: {e}"));
                Detection::NoHand
            }
        };

        let events = self.controller.update(&detection, now);
        self.detection = detection;
        for event in &events {
            self.apply_event(event);
        }
        events
    }

    fn apply_event(&mut self, event: &InteractionEvent) {
        self.haptics.pulse(HapticPattern::for_event(event));
        match event {
            InteractionEvent::DecorationPicked { template, .. } => {
                self.status_message = Some(format!("Holding {}", template.label));
            }
            InteractionEvent::DecorationPlaced(_) => {
                self.status_message = Some(format!(
                    "Placed! {} on the tree",
                    self.controller.decorations().len()
                ));
            }
            InteractionEvent::SceneReset => {
                self.status_message = Some("Tree cleared".to_string());
            }
            InteractionEvent::RelightStarted => {
                self.relight =
                    Some(Tween::new(0.0, 1.0, RELIGHT_DURATION).with_easing(Easing::Flash));
            }
        }
    }

    fn advance_relight(&mut self, dt: Duration) {
        let finished = self
            .relight
            .as_mut()
            .map(|tween| tween.advance(dt))
            .unwrap_or(false);
        if finished {
            self.relight = None;
            self.controller.finish_relight();
        }
    }

    /// Relight glow intensity (0-1)
    pub fn relight_glow(&self) -> f32 {
        self.relight.as_ref().map(Tween::value).unwrap_or(0.0)
    }

    /// Clear the tree on request
    pub fn reset_scene(&mut self) {
        self.controller.reset();
        self.status_message = Some("Tree cleared".to_string());
        info!("Scene reset from keyboard");
    }

    pub fn cycle_edition(&mut self) {
        self.edition = self.edition.next();
        self.status_message = Some(format!("{} edition", self.edition.label()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::VecDeque;
    use std::rc::Rc;

    use glow_tree_core::{
        Catalog, GlowConfig, HandShape, LandmarkSource, ScreenPoint, SyntheticHand,
    };

    /// Plays a fixed list of detections, then no hand
    struct Scripted(VecDeque<Detection>);

    impl LandmarkSource for Scripted {
        fn detect(&mut self) -> glow_tree_core::Result<Detection> {
            Ok(self.0.pop_front().unwrap_or(Detection::NoHand))
        }

        fn name(&self) -> &str {
            "scripted"
        }
    }

    impl FrameSource for Scripted {}

    #[derive(Clone, Default)]
    struct Recorded(Rc<RefCell<Vec<HapticPattern>>>);

    impl HapticBackend for Recorded {
        fn pulse(&mut self, pattern: HapticPattern) {
            self.0.borrow_mut().push(pattern);
        }

        fn is_available(&self) -> bool {
            true
        }
    }

    fn state(frames: Vec<Detection>, haptics: Recorded) -> AppState {
        AppState::new(
            InteractionController::new(GlowConfig::default(), Catalog::default()),
            Box::new(Scripted(frames.into())),
            Box::new(haptics),
            TreeEdition::default(),
        )
    }

    fn heart() -> Detection {
        Detection::OneHand(
            SyntheticHand::palm_at(ScreenPoint::CENTER)
                .with_shape(HandShape::Heart)
                .build(),
        )
    }

    #[test]
    fn test_relight_runs_and_finishes() {
        let haptics = Recorded::default();
        // The hand is gone by the time the glow ends, so it does not restart
        let mut app = state(vec![heart(), heart()], haptics.clone());
        let t0 = Instant::now();

        assert_eq!(app.step(t0), vec![InteractionEvent::RelightStarted]);
        assert!(app.relight.is_some());
        assert!(app.controller.is_relighting());

        app.step(t0 + Duration::from_millis(400));
        assert!(app.relight_glow() > 0.5);
        assert!(app.controller.is_relighting());

        app.step(t0 + Duration::from_millis(900));
        assert!(app.relight.is_none());
        assert!(!app.controller.is_relighting());
        assert_eq!(*haptics.0.borrow(), vec![HapticPattern::Relight]);
    }

    #[test]
    fn test_pick_up_sets_status_and_pulses() {
        let haptics = Recorded::default();
        let point = || Detection::OneHand(SyntheticHand::pointing_at(ScreenPoint::new(0.1, 0.45)).build());
        let mut app = state(vec![point(), point(), point()], haptics.clone());
        let t0 = Instant::now();

        app.step(t0);
        app.step(t0 + Duration::from_millis(50));
        assert!(haptics.0.borrow().is_empty());
        app.step(t0 + Duration::from_millis(650));
        assert_eq!(app.status_message.as_deref(), Some("Holding Pink"));
        assert_eq!(*haptics.0.borrow(), vec![HapticPattern::PickUp]);
    }

    #[test]
    fn test_keeps_last_detection() {
        let mut app = state(vec![heart()], Recorded::default());
        let t0 = Instant::now();
        app.step(t0);
        assert!(app.detection.is_hand());
        app.step(t0 + Duration::from_millis(16));
        assert_eq!(app.detection, Detection::NoHand);
    }

    #[test]
    fn test_reset_and_edition() {
        let mut app = state(Vec::new(), Recorded::default());
        app.controller.hold(0);
        app.controller.place_decoration(glow_tree_core::Point3D::ORIGIN);
        app.reset_scene();
        assert!(app.controller.decorations().is_empty());

        app.cycle_edition();
        assert_eq!(app.edition, TreeEdition::Pink);
    }
}

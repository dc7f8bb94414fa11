//! Dwell tracking
//!
//! A target is selected by hovering over it continuously. The tracker holds
//! the target seen on the previous frame and when hovering over it began.
//! The clock starts on the second consecutive frame over a target; progress
//! is the elapsed time since then over the target's threshold.

use std::fmt;
use std::time::{Duration, Instant};

/// Something the fingertip can dwell on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DwellTarget {
    /// Catalog slot by index
    Sidebar(usize),
    /// The tree silhouette, only while an item is held
    Tree,
}

impl fmt::Display for DwellTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sidebar(slot) => write!(f, "sidebar-{slot}"),
            Self::Tree => write!(f, "tree"),
        }
    }
}

/// Dwell progress toward the current target
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DwellTracker {
    last_target: Option<DwellTarget>,
    started_at: Option<Instant>,
    progress: f32,
}

impl DwellTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed this frame's target.
    ///
    /// Staying on the same target advances progress toward `threshold`;
    /// anything else restarts tracking at zero with no start time.
    pub fn update(&mut self, target: Option<DwellTarget>, now: Instant, threshold: Duration) -> f32 {
        match target {
            Some(t) if self.last_target == Some(t) => {
                let started = *self.started_at.get_or_insert(now);
                let elapsed = now.saturating_duration_since(started);
                self.progress = if threshold.is_zero() {
                    1.0
                } else {
                    (elapsed.as_secs_f32() / threshold.as_secs_f32()).min(1.0)
                };
            }
            _ => {
                self.started_at = None;
                self.progress = 0.0;
                self.last_target = target;
            }
        }
        self.progress
    }

    /// Forget the current target entirely
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn progress(&self) -> f32 {
        self.progress
    }

    pub fn target(&self) -> Option<DwellTarget> {
        self.last_target
    }

    pub fn started_at(&self) -> Option<Instant> {
        self.started_at
    }

    pub fn is_complete(&self) -> bool {
        self.last_target.is_some() && self.progress >= 1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const THRESHOLD: Duration = Duration::from_millis(600);

    #[test]
    fn test_progress_accumulates_on_same_target() {
        let t0 = Instant::now();
        let mut dwell = DwellTracker::new();
        assert_eq!(dwell.update(Some(DwellTarget::Sidebar(2)), t0, THRESHOLD), 0.0);
        assert_eq!(dwell.started_at(), None);

        // Second frame on the target starts the clock
        let t1 = t0 + Duration::from_millis(100);
        assert_eq!(dwell.update(Some(DwellTarget::Sidebar(2)), t1, THRESHOLD), 0.0);
        assert_eq!(dwell.started_at(), Some(t1));

        let p = dwell.update(Some(DwellTarget::Sidebar(2)), t1 + Duration::from_millis(300), THRESHOLD);
        assert!((p - 0.5).abs() < 1e-4);
        assert!(!dwell.is_complete());

        dwell.update(Some(DwellTarget::Sidebar(2)), t1 + Duration::from_millis(599), THRESHOLD);
        assert!(!dwell.is_complete());
        dwell.update(Some(DwellTarget::Sidebar(2)), t1 + Duration::from_millis(600), THRESHOLD);
        assert!(dwell.is_complete());
    }

    #[test]
    fn test_progress_is_capped() {
        let t0 = Instant::now();
        let mut dwell = DwellTracker::new();
        dwell.update(Some(DwellTarget::Tree), t0, THRESHOLD);
        let p = dwell.update(Some(DwellTarget::Tree), t0 + Duration::from_secs(5), THRESHOLD);
        assert_eq!(p, 1.0);
    }

    #[test]
    fn test_target_change_restarts() {
        let t0 = Instant::now();
        let mut dwell = DwellTracker::new();
        dwell.update(Some(DwellTarget::Sidebar(1)), t0, THRESHOLD);
        dwell.update(Some(DwellTarget::Sidebar(1)), t0 + Duration::from_millis(400), THRESHOLD);

        let later = t0 + Duration::from_millis(500);
        assert_eq!(dwell.update(Some(DwellTarget::Sidebar(2)), later, THRESHOLD), 0.0);
        assert_eq!(dwell.started_at(), None);
        assert_eq!(dwell.target(), Some(DwellTarget::Sidebar(2)));

        let next = later + Duration::from_millis(50);
        dwell.update(Some(DwellTarget::Sidebar(2)), next, THRESHOLD);
        assert_eq!(dwell.started_at(), Some(next));
    }

    #[test]
    fn test_no_target_clears_start() {
        let t0 = Instant::now();
        let mut dwell = DwellTracker::new();
        dwell.update(Some(DwellTarget::Tree), t0, THRESHOLD);
        dwell.update(None, t0 + Duration::from_millis(10), THRESHOLD);
        assert_eq!(dwell.started_at(), None);
        assert_eq!(dwell.target(), None);
        assert_eq!(dwell.progress(), 0.0);
        assert!(!dwell.is_complete());
    }

    #[test]
    fn test_display() {
        assert_eq!(DwellTarget::Sidebar(3).to_string(), "sidebar-3");
        assert_eq!(DwellTarget::Tree.to_string(), "tree");
    }
}

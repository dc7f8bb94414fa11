//! Tree scale driven by palm openness

use crate::config::ScaleConfig;
use crate::input::GestureState;

/// Smoothed tree scale.
///
/// The palm must be near the screen center for openness to count, so
/// reaching for the catalog with a closed hand does not shrink the tree.
#[derive(Debug, Clone, PartialEq)]
pub struct ScaleController {
    value: f32,
    config: ScaleConfig,
}

impl ScaleController {
    pub fn new(config: ScaleConfig) -> Self {
        Self {
            value: config.initial,
            config,
        }
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    /// Scale the given openness maps to
    pub fn target_for(&self, openness: f32) -> f32 {
        let span = self.config.max - self.config.min;
        self.config.min + openness.clamp(0.0, 1.0) * span
    }

    /// Whether the palm is inside the dead zone box
    pub fn is_active(&self, gesture: &GestureState) -> bool {
        gesture
            .hand_center_pos
            .within(self.config.dead_zone_min, self.config.dead_zone_max)
    }

    /// Ease toward the openness target; returns false when the palm is outside
    /// the dead zone and nothing changed
    pub fn apply(&mut self, gesture: &GestureState) -> bool {
        if !self.is_active(gesture) {
            return false;
        }
        let target = self.target_for(gesture.palm_openness);
        let k = self.config.smoothing;
        self.value = (self.value * (1.0 - k) + target * k).clamp(self.config.min, self.config.max);
        true
    }

    /// Back to the initial scale
    pub fn reset(&mut self) {
        self.value = self.config.initial;
    }
}

impl Default for ScaleController {
    fn default() -> Self {
        Self::new(ScaleConfig::default())
    }
}

//! Easing curves

use std::f32::consts::PI;

/// Easing curve applied to tween progress
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    #[default]
    Linear,
    /// Rises to 1.0 at the midpoint and falls back to 0.0
    Flash,
}

impl Easing {
    /// Apply easing function to progress value (0-1)
    pub fn apply(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);

        match self {
            Easing::Linear => t,
            Easing::Flash => (PI * t).sin(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear() {
        assert_eq!(Easing::Linear.apply(0.0), 0.0);
        assert_eq!(Easing::Linear.apply(0.5), 0.5);
        assert_eq!(Easing::Linear.apply(1.0), 1.0);
    }

    #[test]
    fn test_flash_peaks_mid_way() {
        let e = Easing::Flash;
        assert!(e.apply(0.0).abs() < 1e-6);
        assert!((e.apply(0.5) - 1.0).abs() < 1e-6);
        assert!(e.apply(1.0).abs() < 1e-6);
    }
}

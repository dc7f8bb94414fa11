//! Normalized screen-space positions

use serde::{Deserialize, Serialize};

/// A point in normalized camera space (0-1 on both axes, y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ScreenPoint {
    pub x: f32,
    pub y: f32,
}

impl ScreenPoint {
    /// Screen center
    pub const CENTER: Self = Self { x: 0.5, y: 0.5 };

    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Check whether the point lies strictly inside the centered box `(lo, hi)` on both axes
    pub fn within(&self, lo: f32, hi: f32) -> bool {
        self.x > lo && self.x < hi && self.y > lo && self.y < hi
    }

    /// Horizontally mirrored position, as shown on a selfie-style display
    pub fn mirrored(&self) -> Self {
        Self::new(1.0 - self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_within_is_exclusive() {
        assert!(ScreenPoint::CENTER.within(0.3, 0.7));
        assert!(!ScreenPoint::new(0.3, 0.5).within(0.3, 0.7));
        assert!(!ScreenPoint::new(0.5, 0.7).within(0.3, 0.7));
    }

    #[test]
    fn test_mirrored() {
        let p = ScreenPoint::new(0.1, 0.4).mirrored();
        assert!((p.x - 0.9).abs() < 1e-6);
        assert_eq!(p.y, 0.4);
    }
}

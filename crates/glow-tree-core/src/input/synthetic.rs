//! Synthetic hand poses
//!
//! Builds anatomically plausible landmark sets from a handful of parameters,
//! for keyboard simulators and tests that need a hand without a camera.

use super::landmark::{index::*, HandLandmarks, Landmark, LANDMARK_COUNT};
use crate::spatial::ScreenPoint;

/// Distance from the wrist to the finger knuckles
const KNUCKLE_RISE: f32 = 0.10;
/// Knuckle to PIP joint
const PIP_RISE: f32 = 0.03;
/// Tip height above the knuckle for a curled finger
const CURLED_TIP_RISE: f32 = 0.01;
/// Horizontal offsets of the four finger columns from the wrist
const COLUMNS: [(usize, f32, f32); 4] = [
    // (mcp, x offset, length relative to the middle finger)
    (INDEX_MCP, 0.03, 0.9),
    (MIDDLE_MCP, 0.0, 1.0),
    (RING_MCP, -0.03, 0.9),
    (PINKY_MCP, -0.06, 0.75),
];

/// Overall hand shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HandShape {
    /// All fingers extended
    #[default]
    Open,
    /// Index and middle extended, ring and pinky curled
    Peace,
    /// All fingers curled
    Fist,
    /// Fingers extended, thumb tip touching the index tip
    Heart,
}

impl HandShape {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Peace => "peace",
            Self::Fist => "fist",
            Self::Heart => "heart",
        }
    }

    fn extended(&self, mcp: usize) -> bool {
        match self {
            Self::Open | Self::Heart => true,
            Self::Fist => false,
            Self::Peace => mcp == INDEX_MCP || mcp == MIDDLE_MCP,
        }
    }
}

/// Which landmark the synthetic hand is positioned by
#[derive(Debug, Clone, Copy, PartialEq)]
enum Anchor {
    IndexTip(ScreenPoint),
    PalmCenter(ScreenPoint),
}

/// Builder for a synthetic upright hand
#[derive(Debug, Clone, PartialEq)]
pub struct SyntheticHand {
    anchor: Anchor,
    /// Palm openness the built landmarks should classify as (0-1)
    pub openness: f32,
    pub shape: HandShape,
    /// Depth of the index fingertip
    pub index_depth: f32,
}

impl SyntheticHand {
    /// Hand positioned so the index fingertip is at `tip`
    pub fn pointing_at(tip: ScreenPoint) -> Self {
        Self {
            anchor: Anchor::IndexTip(tip),
            openness: 0.5,
            shape: HandShape::Open,
            index_depth: 0.0,
        }
    }

    /// Hand positioned so the palm center (middle knuckle) is at `center`
    pub fn palm_at(center: ScreenPoint) -> Self {
        Self {
            anchor: Anchor::PalmCenter(center),
            ..Self::pointing_at(center)
        }
    }

    pub fn with_openness(mut self, openness: f32) -> Self {
        self.openness = openness.clamp(0.0, 1.0);
        self
    }

    pub fn with_shape(mut self, shape: HandShape) -> Self {
        self.shape = shape;
        self
    }

    pub fn with_index_depth(mut self, depth: f32) -> Self {
        self.index_depth = depth;
        self
    }

    /// Move the anchor point
    pub fn move_to(&mut self, point: ScreenPoint) {
        self.anchor = match self.anchor {
            Anchor::IndexTip(_) => Anchor::IndexTip(point),
            Anchor::PalmCenter(_) => Anchor::PalmCenter(point),
        };
    }

    /// Current anchor position
    pub fn position(&self) -> ScreenPoint {
        match self.anchor {
            Anchor::IndexTip(p) | Anchor::PalmCenter(p) => p,
        }
    }

    /// Generate the landmark set
    pub fn build(&self) -> HandLandmarks {
        let rel = self.relative_pose();
        let origin = match self.anchor {
            Anchor::IndexTip(p) => offset(p, rel[INDEX_TIP]),
            Anchor::PalmCenter(p) => offset(p, rel[MIDDLE_MCP]),
        };

        let mut screen = [Landmark::default(); LANDMARK_COUNT];
        for (dst, src) in screen.iter_mut().zip(rel.iter()) {
            *dst = Landmark::new(origin.x + src.x, origin.y + src.y, src.z);
        }
        HandLandmarks::new(screen, rel)
    }

    /// Landmarks relative to the wrist at the origin (y up is negative)
    fn relative_pose(&self) -> [Landmark; LANDMARK_COUNT] {
        let mut p = [Landmark::default(); LANDMARK_COUNT];

        // Middle fingertip distance from the wrist sets the openness ratio
        let palm_base = (COLUMNS[0].1.powi(2) + KNUCKLE_RISE.powi(2)).sqrt();
        let ratio = 1.5 + self.openness * 1.5;
        let middle_len = ratio * palm_base - KNUCKLE_RISE;

        for &(mcp, dx, rel_len) in &COLUMNS {
            let mcp_y = -KNUCKLE_RISE;
            let pip_y = mcp_y - PIP_RISE;
            let tip_y = if self.shape.extended(mcp) {
                mcp_y - middle_len * rel_len
            } else {
                mcp_y - CURLED_TIP_RISE
            };
            p[mcp] = Landmark::new(dx, mcp_y, 0.0);
            p[mcp + 1] = Landmark::new(dx, pip_y, 0.0);
            p[mcp + 2] = Landmark::new(dx, (pip_y + tip_y) / 2.0, 0.0);
            p[mcp + 3] = Landmark::new(dx, tip_y, 0.0);
        }

        p[THUMB_CMC] = Landmark::new(0.05, -0.02, 0.0);
        p[THUMB_MCP] = Landmark::new(0.07, -0.04, 0.0);
        p[THUMB_IP] = Landmark::new(0.08, -0.06, 0.0);
        p[THUMB_TIP] = Landmark::new(0.09, -0.08, 0.0);

        p[INDEX_TIP].z = self.index_depth;
        if self.shape == HandShape::Heart {
            p[THUMB_TIP] = p[INDEX_TIP];
        }
        p
    }
}

fn offset(target: ScreenPoint, rel: Landmark) -> ScreenPoint {
    ScreenPoint::new(target.x - rel.x, target.y - rel.y)
}

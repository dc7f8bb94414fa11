//! Hand landmark types
//!
//! Follows the 21-point hand model used by common landmark detectors: one
//! wrist point plus four joints per finger, each finger ordered from knuckle
//! to tip.

use serde::{Deserialize, Serialize};

use crate::error::{GlowError, Result};
use crate::spatial::{Point3D, ScreenPoint};

/// Number of landmarks per detected hand
pub const LANDMARK_COUNT: usize = 21;

/// Anatomical landmark indices
pub mod index {
    pub const WRIST: usize = 0;
    pub const THUMB_CMC: usize = 1;
    pub const THUMB_MCP: usize = 2;
    pub const THUMB_IP: usize = 3;
    pub const THUMB_TIP: usize = 4;
    pub const INDEX_MCP: usize = 5;
    pub const INDEX_PIP: usize = 6;
    pub const INDEX_DIP: usize = 7;
    pub const INDEX_TIP: usize = 8;
    pub const MIDDLE_MCP: usize = 9;
    pub const MIDDLE_PIP: usize = 10;
    pub const MIDDLE_DIP: usize = 11;
    pub const MIDDLE_TIP: usize = 12;
    pub const RING_MCP: usize = 13;
    pub const RING_PIP: usize = 14;
    pub const RING_DIP: usize = 15;
    pub const RING_TIP: usize = 16;
    pub const PINKY_MCP: usize = 17;
    pub const PINKY_PIP: usize = 18;
    pub const PINKY_DIP: usize = 19;
    pub const PINKY_TIP: usize = 20;
}

use index::*;

/// Bone connections for drawing a hand skeleton overlay
pub const HAND_CONNECTIONS: [(usize, usize); 23] = [
    (WRIST, THUMB_CMC), (THUMB_CMC, THUMB_MCP), (THUMB_MCP, THUMB_IP), (THUMB_IP, THUMB_TIP),
    (WRIST, INDEX_MCP), (INDEX_MCP, INDEX_PIP), (INDEX_PIP, INDEX_DIP), (INDEX_DIP, INDEX_TIP),
    (WRIST, MIDDLE_MCP), (MIDDLE_MCP, MIDDLE_PIP), (MIDDLE_PIP, MIDDLE_DIP), (MIDDLE_DIP, MIDDLE_TIP),
    (WRIST, RING_MCP), (RING_MCP, RING_PIP), (RING_PIP, RING_DIP), (RING_DIP, RING_TIP),
    (WRIST, PINKY_MCP), (PINKY_MCP, PINKY_PIP), (PINKY_PIP, PINKY_DIP), (PINKY_DIP, PINKY_TIP),
    (INDEX_MCP, MIDDLE_MCP), (MIDDLE_MCP, RING_MCP), (RING_MCP, PINKY_MCP),
];

/// Fingertip / PIP joint pairs for the four non-thumb fingers
pub const FINGER_TIP_PIP: [(usize, usize); 4] = [
    (INDEX_TIP, INDEX_PIP),
    (MIDDLE_TIP, MIDDLE_PIP),
    (RING_TIP, RING_PIP),
    (PINKY_TIP, PINKY_PIP),
];

/// A single tracked point on the hand
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Landmark {
    /// Normalized horizontal position (0-1, camera image space)
    pub x: f32,
    /// Normalized vertical position (0-1, grows downward)
    pub y: f32,
    /// Relative depth; more negative is closer to the camera
    pub z: f32,
}

impl Landmark {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub fn position(&self) -> Point3D {
        Point3D::new(self.x, self.y, self.z)
    }

    pub fn screen(&self) -> ScreenPoint {
        ScreenPoint::new(self.x, self.y)
    }

    /// Euclidean 3D distance to another landmark
    pub fn distance(&self, other: &Landmark) -> f32 {
        self.position().distance(&other.position())
    }
}

impl From<[f32; 3]> for Landmark {
    fn from(v: [f32; 3]) -> Self {
        Landmark::new(v[0], v[1], v[2])
    }
}

/// One hand's landmarks for a single frame
#[derive(Debug, Clone, PartialEq)]
pub struct HandLandmarks {
    /// Normalized image-space landmarks
    pub landmarks: [Landmark; LANDMARK_COUNT],
    /// Metric world-space landmarks, parallel to `landmarks`
    pub world_landmarks: [Landmark; LANDMARK_COUNT],
}

impl HandLandmarks {
    pub fn new(
        landmarks: [Landmark; LANDMARK_COUNT],
        world_landmarks: [Landmark; LANDMARK_COUNT],
    ) -> Self {
        Self {
            landmarks,
            world_landmarks,
        }
    }

    /// Build from variable-length lists, as delivered by external detectors.
    ///
    /// An empty world list is accepted and mirrors the screen landmarks.
    pub fn from_slices(landmarks: &[Landmark], world_landmarks: &[Landmark]) -> Result<Self> {
        let screen = to_array(landmarks)?;
        let world = if world_landmarks.is_empty() {
            screen
        } else {
            to_array(world_landmarks)?
        };
        Ok(Self::new(screen, world))
    }

    /// Screen-space landmark by anatomical index
    pub fn get(&self, idx: usize) -> &Landmark {
        &self.landmarks[idx]
    }

    /// 3D distance between two screen-space landmarks
    pub fn distance(&self, a: usize, b: usize) -> f32 {
        self.landmarks[a].distance(&self.landmarks[b])
    }

    /// Whether a fingertip sits above its PIP joint (smaller y)
    pub fn tip_above_pip(&self, tip: usize, pip: usize) -> bool {
        self.landmarks[tip].y < self.landmarks[pip].y
    }

    /// Whether a fingertip sits below its PIP joint (larger y)
    pub fn tip_below_pip(&self, tip: usize, pip: usize) -> bool {
        self.landmarks[tip].y > self.landmarks[pip].y
    }
}

fn to_array(points: &[Landmark]) -> Result<[Landmark; LANDMARK_COUNT]> {
    points
        .try_into()
        .map_err(|_| GlowError::InvalidLandmarkCount {
            expected: LANDMARK_COUNT,
            actual: points.len(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_slices_rejects_short_hand() {
        let short = vec![Landmark::default(); 20];
        let err = HandLandmarks::from_slices(&short, &[]).unwrap_err();
        assert!(matches!(
            err,
            GlowError::InvalidLandmarkCount {
                expected: 21,
                actual: 20
            }
        ));
    }

    #[test]
    fn test_from_slices_defaults_world_to_screen() {
        let mut points = vec![Landmark::default(); LANDMARK_COUNT];
        points[INDEX_TIP] = Landmark::new(0.25, 0.75, -0.1);
        let hand = HandLandmarks::from_slices(&points, &[]).unwrap();
        assert_eq!(hand.world_landmarks[INDEX_TIP], hand.landmarks[INDEX_TIP]);
    }

    #[test]
    fn test_connections_reference_valid_indices() {
        for (a, b) in HAND_CONNECTIONS {
            assert!(a < LANDMARK_COUNT && b < LANDMARK_COUNT);
        }
    }

    #[test]
    fn test_tip_relations() {
        let mut points = [Landmark::default(); LANDMARK_COUNT];
        points[INDEX_TIP].y = 0.2;
        points[INDEX_PIP].y = 0.3;
        let hand = HandLandmarks::new(points, points);
        assert!(hand.tip_above_pip(INDEX_TIP, INDEX_PIP));
        assert!(!hand.tip_below_pip(INDEX_TIP, INDEX_PIP));
    }
}

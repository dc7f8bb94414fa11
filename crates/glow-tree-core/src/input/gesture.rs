//! Hand gesture classification
//!
//! Turns one frame of landmarks into a [`GestureState`]. Classification is a
//! pure function of the current landmarks and the previous state; the only
//! continuity carried between frames is the smoothed world cursor.

use serde::{Deserialize, Serialize};

use super::landmark::{index::*, HandLandmarks, FINGER_TIP_PIP};
use crate::config::GestureConfig;
use crate::spatial::{Point3D, ScreenPoint};

/// Gesture snapshot for a single frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GestureState {
    /// How open the palm is (0.0 = closed, 1.0 = fully open)
    pub palm_openness: f32,
    /// Thumb and index tips close together (loose)
    pub is_heart: bool,
    /// Index and middle extended, ring and pinky curled
    pub is_peace: bool,
    /// All four fingers curled
    pub is_fist: bool,
    /// Thumb and index tips touching (tight)
    pub is_pinching: bool,
    /// Index tip pushed toward the camera
    pub is_dragging: bool,
    /// Index fingertip in screen space
    pub index_finger_pos: ScreenPoint,
    /// Palm center (middle finger knuckle) in screen space
    pub hand_center_pos: ScreenPoint,
    /// Smoothed world-space cursor on the z = 0 interaction plane
    pub world_index_pos: Point3D,
}

impl Default for GestureState {
    fn default() -> Self {
        Self {
            palm_openness: 0.0,
            is_heart: false,
            is_peace: false,
            is_fist: false,
            is_pinching: false,
            is_dragging: false,
            index_finger_pos: ScreenPoint::CENTER,
            hand_center_pos: ScreenPoint::CENTER,
            world_index_pos: Point3D::ORIGIN,
        }
    }
}

/// Classify one hand's landmarks.
///
/// `previous` is the state produced for the prior processed frame, if any; it
/// only feeds cursor smoothing.
pub fn classify(
    hand: &HandLandmarks,
    previous: Option<&GestureState>,
    config: &GestureConfig,
) -> GestureState {
    let palm_openness = palm_openness(hand, config);

    let is_peace = hand.tip_above_pip(INDEX_TIP, INDEX_PIP)
        && hand.tip_above_pip(MIDDLE_TIP, MIDDLE_PIP)
        && hand.tip_below_pip(RING_TIP, RING_PIP)
        && hand.tip_below_pip(PINKY_TIP, PINKY_PIP);

    let is_fist = FINGER_TIP_PIP
        .iter()
        .all(|&(tip, pip)| hand.tip_below_pip(tip, pip));

    let index_thumb = hand.distance(THUMB_TIP, INDEX_TIP);
    let is_heart = index_thumb < config.heart_threshold;
    let is_pinching = index_thumb < config.pinch_threshold;

    let index_tip = hand.get(INDEX_TIP);
    let is_dragging = index_tip.z < config.drag_depth_threshold;

    let raw_world = screen_to_world(index_tip.screen(), config);
    let world_index_pos = match previous {
        Some(prev) => prev.world_index_pos.lerp(&raw_world, config.cursor_smoothing),
        None => raw_world,
    };

    GestureState {
        palm_openness,
        is_heart,
        is_peace,
        is_fist,
        is_pinching,
        is_dragging,
        index_finger_pos: index_tip.screen(),
        hand_center_pos: hand.get(MIDDLE_MCP).screen(),
        world_index_pos,
    }
}

/// Ratio of wrist-to-middle-tip over wrist-to-index-knuckle, remapped to 0-1.
///
/// Being a ratio of two lengths on the same hand, it does not depend on how far
/// the hand is from the camera.
fn palm_openness(hand: &HandLandmarks, config: &GestureConfig) -> f32 {
    let palm_base = hand.distance(WRIST, INDEX_MCP);
    if palm_base <= f32::EPSILON {
        return 0.0;
    }
    let ratio = hand.distance(WRIST, MIDDLE_TIP) / palm_base;
    let span = config.openness_ratio_max - config.openness_ratio_min;
    ((ratio - config.openness_ratio_min) / span).clamp(0.0, 1.0)
}

/// Map a screen position onto the world interaction plane.
///
/// X is mirrored so the cursor follows the hand in a selfie-style view.
pub fn screen_to_world(screen: ScreenPoint, config: &GestureConfig) -> Point3D {
    Point3D::new(
        (0.5 - screen.x) * config.world_range_x,
        (0.5 - screen.y) * config.world_range_y,
        0.0,
    )
}

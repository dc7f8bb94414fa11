//! Hand input for the interaction pipeline
//!
//! Provides:
//! - Landmark types and anatomical indices for the 21-point hand model
//! - Detection results and the [`LandmarkSource`] trait hosts implement
//! - Gesture classification into a per-frame [`GestureState`]
//! - Synthetic hand poses for simulators and tests

mod landmark;
mod detection;
mod gesture;
mod synthetic;

pub use landmark::{index, HandLandmarks, Landmark, FINGER_TIP_PIP, HAND_CONNECTIONS, LANDMARK_COUNT};
pub use detection::{Detection, HandRecord, LandmarkSource};
pub use gesture::{classify, screen_to_world, GestureState};
pub use synthetic::{HandShape, SyntheticHand};

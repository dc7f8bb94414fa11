//! glow-tree-core: gesture-driven interaction for a decorable tree
//!
//! This crate provides the frame pipeline between a hand-landmark detector and
//! a scene renderer:
//! - Hand landmark types and the landmark source abstraction
//! - Per-frame gesture classification with cursor smoothing
//! - Dwell-to-select interaction controller (pick up, place, reset, relight)
//! - Scale smoothing and tree-local placement mapping
//! - Decoration catalog and placed decoration types
//! - Haptic feedback patterns and tweening for renderer-owned animations

pub mod spatial;
pub mod input;
pub mod interaction;
pub mod scene;
pub mod feedback;
pub mod animation;
pub mod config;
pub mod error;

// Re-export commonly used types
pub use spatial::{Point3D, ScreenPoint, Cone};
pub use input::{
    classify, Detection, GestureState, HandLandmarks, HandShape, Landmark, LandmarkSource,
    SyntheticHand, LANDMARK_COUNT,
};
pub use interaction::{
    DwellTarget, InteractionController, InteractionEvent, InteractionState, SceneSnapshot,
    ScaleController,
};
pub use scene::{Catalog, DecorationItem, DecorationKind, DecorationTemplate, TreeEdition};
pub use feedback::{HapticBackend, HapticPattern, NullHapticBackend};
pub use animation::{Easing, Tween};
pub use config::{GestureConfig, GlowConfig, InteractionConfig, ScaleConfig};
pub use error::{GlowError, Result};

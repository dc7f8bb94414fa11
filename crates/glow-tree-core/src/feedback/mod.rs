//! Haptic feedback at interaction boundaries
//!
//! Vibration is a best-effort notification; backends are free to ignore it.

mod backend;
mod pattern;

pub use backend::{HapticBackend, NullHapticBackend};
pub use pattern::HapticPattern;

//! Tweening for renderer-owned effects such as the relight glow

mod tween;
mod easing;

pub use tween::Tween;
pub use easing::Easing;

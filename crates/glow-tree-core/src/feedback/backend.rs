//! Haptic backend trait

use super::HapticPattern;

/// Device that can play vibration patterns
pub trait HapticBackend {
    /// Play a pattern; failures are swallowed by the backend
    fn pulse(&mut self, pattern: HapticPattern);

    /// Check if haptics are available
    fn is_available(&self) -> bool;
}

/// Null haptic backend (no-op)
pub struct NullHapticBackend;

impl HapticBackend for NullHapticBackend {
    fn pulse(&mut self, _pattern: HapticPattern) {}

    fn is_available(&self) -> bool {
        false
    }
}

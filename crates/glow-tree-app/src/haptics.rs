//! Terminal bell as a stand-in vibration motor

use std::io::{self, Write};
use std::time::{Duration, Instant};

use glow_tree_core::{HapticBackend, HapticPattern, NullHapticBackend};
use tracing::debug;

/// Rings the terminal bell once per pattern.
///
/// Patterns arriving within `min_gap` of the last ring are dropped, so a
/// gesture that fires every frame does not turn into a continuous buzz.
pub struct TerminalBell {
    last_ring: Option<Instant>,
    min_gap: Duration,
}

impl TerminalBell {
    pub fn new() -> Self {
        Self {
            last_ring: None,
            min_gap: Duration::from_millis(250),
        }
    }

    fn should_ring(&self, now: Instant) -> bool {
        self.last_ring
            .map(|last| now.saturating_duration_since(last) >= self.min_gap)
            .unwrap_or(true)
    }
}

impl Default for TerminalBell {
    fn default() -> Self {
        Self::new()
    }
}

impl HapticBackend for TerminalBell {
    fn pulse(&mut self, pattern: HapticPattern) {
        let now = Instant::now();
        if !self.should_ring(now) {
            return;
        }
        self.last_ring = Some(now);
        debug!(?pattern, total_ms = pattern.total().as_millis() as u64, "Haptic pulse");

        let mut stdout = io::stdout();
        // Best effort; a missed bell is not worth interrupting the frame
        let _ = stdout.write_all(b"\x07").and_then(|_| stdout.flush());
    }

    fn is_available(&self) -> bool {
        true
    }
}

/// Haptic backend for the command line choice
pub fn backend(enabled: bool) -> Box<dyn HapticBackend> {
    if enabled {
        Box::new(TerminalBell::new())
    } else {
        Box::new(NullHapticBackend)
    }
}

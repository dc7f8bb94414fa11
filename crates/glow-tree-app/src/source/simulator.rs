//! Keyboard-steered hand simulator
//!
//! Stands in for a camera and landmark detector during development. Keys
//! move and reshape a synthetic hand; each frame it reports that hand with a
//! little positional noise, or no hand at all when hidden.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};
use glow_tree_core::{
    Detection, HandShape, Landmark, LandmarkSource, ScreenPoint, SyntheticHand,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use super::FrameSource;

/// Index tip depth while the finger is pushed toward the camera
const PUSHED_DEPTH: f32 = -0.1;

/// A change to the simulated hand
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HandCommand {
    /// Move the fingertip in camera space
    Move { dx: f32, dy: f32 },
    /// Open (positive) or close (negative) the palm
    Open(f32),
    Shape(HandShape),
    /// Push the index finger toward the camera or pull it back
    TogglePush,
    /// Take the hand out of view or bring it back
    TogglePresence,
}

/// Keyboard binding for the simulator.
///
/// The view is mirrored, so moving the hand right on screen means moving it
/// left in camera space.
pub fn command_for_key(key: &KeyEvent) -> Option<HandCommand> {
    const STEP: f32 = 0.02;

    if key.kind != KeyEventKind::Press {
        return None;
    }
    let command = match key.code {
        KeyCode::Up => HandCommand::Move { dx: 0.0, dy: -STEP },
        KeyCode::Down => HandCommand::Move { dx: 0.0, dy: STEP },
        KeyCode::Left => HandCommand::Move { dx: STEP, dy: 0.0 },
        KeyCode::Right => HandCommand::Move { dx: -STEP, dy: 0.0 },
        KeyCode::Char('+') | KeyCode::Char('=') => HandCommand::Open(0.1),
        KeyCode::Char('-') | KeyCode::Char('_') => HandCommand::Open(-0.1),
        KeyCode::Char('h') => HandCommand::Shape(HandShape::Heart),
        KeyCode::Char('v') => HandCommand::Shape(HandShape::Peace),
        KeyCode::Char('f') => HandCommand::Shape(HandShape::Fist),
        KeyCode::Char('o') => HandCommand::Shape(HandShape::Open),
        KeyCode::Char('z') => HandCommand::TogglePush,
        KeyCode::Char(' ') => HandCommand::TogglePresence,
        _ => return None,
    };
    Some(command)
}

/// Simulated hand driven by [`HandCommand`]s
pub struct SimulatedHand {
    pose: SyntheticHand,
    present: bool,
    /// Maximum per-landmark noise in normalized units
    jitter: f32,
    rng: StdRng,
}

impl SimulatedHand {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Deterministic noise, for tests
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            // Palm ends up just below center, inside the resize box
            pose: SyntheticHand::pointing_at(ScreenPoint::new(0.5, 0.4)),
            present: true,
            jitter: 0.0015,
            rng,
        }
    }

    pub fn with_jitter(mut self, jitter: f32) -> Self {
        self.jitter = jitter.max(0.0);
        self
    }

    pub fn pose(&self) -> &SyntheticHand {
        &self.pose
    }

    pub fn is_present(&self) -> bool {
        self.present
    }

    pub fn apply(&mut self, command: HandCommand) {
        match command {
            HandCommand::Move { dx, dy } => {
                let p = self.pose.position();
                self.pose.move_to(ScreenPoint::new(
                    (p.x + dx).clamp(0.0, 1.0),
                    (p.y + dy).clamp(0.0, 1.0),
                ));
            }
            HandCommand::Open(delta) => {
                self.pose.openness = (self.pose.openness + delta).clamp(0.0, 1.0);
            }
            HandCommand::Shape(shape) => self.pose.shape = shape,
            HandCommand::TogglePush => {
                self.pose.index_depth = if self.pose.index_depth < 0.0 {
                    0.0
                } else {
                    PUSHED_DEPTH
                };
            }
            HandCommand::TogglePresence => self.present = !self.present,
        }
        debug!(?command, "Simulated hand updated");
    }

    fn noise(&mut self) -> f32 {
        if self.jitter > 0.0 {
            self.rng.gen_range(-self.jitter..=self.jitter)
        } else {
            0.0
        }
    }
}

impl Default for SimulatedHand {
    fn default() -> Self {
        Self::new()
    }
}

impl LandmarkSource for SimulatedHand {
    fn detect(&mut self) -> glow_tree_core::Result<Detection> {
        if !self.present {
            return Ok(Detection::NoHand);
        }
        let mut hand = self.pose.build();
        for point in hand.landmarks.iter_mut() {
            let (nx, ny) = (self.noise(), self.noise());
            *point = Landmark::new(point.x + nx, point.y + ny, point.z);
        }
        Ok(Detection::OneHand(hand))
    }

    fn name(&self) -> &str {
        "simulator"
    }
}

impl FrameSource for SimulatedHand {
    fn steer(&mut self, command: HandCommand) -> bool {
        self.apply(command);
        true
    }
}

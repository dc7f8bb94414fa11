//! Landmark sources available to the terminal host
//!
//! - [`SimulatedHand`] synthesizes a hand steered from the keyboard
//! - [`ReplaySource`] plays back a JSON-lines recording
//! - [`Recorder`] wraps another source and records what it produces

mod simulator;
mod replay;
mod recorder;

use std::path::Path;

use glow_tree_core::LandmarkSource;

pub use simulator::{command_for_key, HandCommand, SimulatedHand};
pub use replay::ReplaySource;
pub use recorder::Recorder;

/// A landmark source the host can also steer from the keyboard
pub trait FrameSource: LandmarkSource {
    /// Apply a hand command; returns false when the source cannot be steered
    fn steer(&mut self, _command: HandCommand) -> bool {
        false
    }
}

/// Open the source selected on the command line
pub fn open(
    replay: Option<&Path>,
    looping: bool,
    record: Option<&Path>,
) -> glow_tree_core::Result<Box<dyn FrameSource>> {
    let source: Box<dyn FrameSource> = match replay {
        Some(path) => Box::new(ReplaySource::open(path, looping)?),
        None => Box::new(SimulatedHand::new()),
    };
    match record {
        Some(path) => Ok(Box::new(Recorder::create(path, source)?)),
        None => Ok(source),
    }
}

//! Dwell-to-select interaction
//!
//! Consumes one [`Detection`](crate::input::Detection) per frame and drives
//! the scene state: catalog pick-up, placement on the tree, scale, reset and
//! relight. Everything here is synchronous and deterministic given the frame
//! timestamps passed in.

mod event;
mod dwell;
mod hover;
mod scale;
mod placement;
mod controller;

pub use event::InteractionEvent;
pub use dwell::{DwellTarget, DwellTracker};
pub use hover::{resolve_hover, Hover};
pub use scale::ScaleController;
pub use placement::{to_local, to_world, tree_volume};
pub use controller::{InteractionController, InteractionState, SceneSnapshot};

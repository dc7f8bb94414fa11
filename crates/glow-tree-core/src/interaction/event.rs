//! Interaction events

use crate::scene::{DecorationItem, DecorationTemplate};

/// Things that happened during a frame, for feedback and logging
#[derive(Debug, Clone, PartialEq)]
pub enum InteractionEvent {
    /// A catalog item was picked up after dwelling on its slot
    DecorationPicked {
        slot: usize,
        template: DecorationTemplate,
    },
    /// The held item was attached to the tree
    DecorationPlaced(DecorationItem),
    /// The peace gesture cleared the tree
    SceneReset,
    /// The heart gesture started the relight effect
    RelightStarted,
}

impl InteractionEvent {
    /// Short name for logs and status lines
    pub fn name(&self) -> &'static str {
        match self {
            Self::DecorationPicked { .. } => "picked",
            Self::DecorationPlaced(_) => "placed",
            Self::SceneReset => "reset",
            Self::RelightStarted => "relight",
        }
    }
}

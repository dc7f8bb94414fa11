//! Frame-by-frame interaction controller

use std::time::{Duration, Instant};

use tracing::{debug, info};

use super::dwell::{DwellTarget, DwellTracker};
use super::event::InteractionEvent;
use super::hover::resolve_hover;
use super::placement::to_local;
use super::scale::ScaleController;
use crate::config::GlowConfig;
use crate::input::{classify, Detection, GestureState};
use crate::scene::{Catalog, DecorationItem, DecorationTemplate};
use crate::spatial::Point3D;

/// Mutable interaction state
#[derive(Debug, Clone)]
pub struct InteractionState {
    /// Gesture from the last frame that had a hand
    pub gesture: Option<GestureState>,
    pub dwell: DwellTracker,
    /// Catalog slot under the fingertip
    pub hover_index: Option<usize>,
    /// Template picked up and waiting to be placed
    pub held: Option<DecorationTemplate>,
    /// Decorations on the tree, in placement order
    pub decorations: Vec<DecorationItem>,
    pub scale: ScaleController,
    pub is_relighting: bool,
}

impl InteractionState {
    fn new(config: &GlowConfig) -> Self {
        Self {
            gesture: None,
            dwell: DwellTracker::new(),
            hover_index: None,
            held: None,
            decorations: Vec::new(),
            scale: ScaleController::new(config.scale.clone()),
            is_relighting: false,
        }
    }
}

/// Read-only view of the scene for renderers
#[derive(Debug, Clone, Copy)]
pub struct SceneSnapshot<'a> {
    pub gesture: Option<&'a GestureState>,
    pub dwell_target: Option<DwellTarget>,
    pub dwell_progress: f32,
    pub hover_index: Option<usize>,
    pub held: Option<&'a DecorationTemplate>,
    pub decorations: &'a [DecorationItem],
    pub scale: f32,
    pub is_relighting: bool,
    pub catalog: &'a Catalog,
}

/// Drives the scene from hand detections
#[derive(Debug, Clone)]
pub struct InteractionController {
    config: GlowConfig,
    catalog: Catalog,
    state: InteractionState,
}

impl InteractionController {
    pub fn new(config: GlowConfig, catalog: Catalog) -> Self {
        let state = InteractionState::new(&config);
        Self {
            config,
            catalog,
            state,
        }
    }

    /// Process one frame.
    ///
    /// Frames without a hand change nothing: the last gesture, dwell and
    /// scale are kept as they were.
    pub fn update(&mut self, detection: &Detection, now: Instant) -> Vec<InteractionEvent> {
        let Some(hand) = detection.hand() else {
            return Vec::new();
        };

        let gesture = classify(hand, self.state.gesture.as_ref(), &self.config.gesture);
        self.state.gesture = Some(gesture);
        let mut events = Vec::new();

        self.state.scale.apply(&gesture);

        if gesture.is_heart && !self.state.is_relighting {
            self.state.is_relighting = true;
            info!("Relight started");
            events.push(InteractionEvent::RelightStarted);
        }

        if gesture.is_peace {
            self.reset();
            events.push(InteractionEvent::SceneReset);
        }

        let hover = resolve_hover(
            &gesture,
            self.state.held.is_some(),
            self.state.scale.value(),
            self.catalog.len(),
            &self.config.interaction,
        );
        self.state.hover_index = hover.slot;

        let threshold = self.dwell_threshold(hover.target);
        self.state.dwell.update(hover.target, now, threshold);

        if self.state.dwell.is_complete() {
            match hover.target {
                Some(DwellTarget::Sidebar(slot)) => {
                    if let Some(template) = self.catalog.get(slot).cloned() {
                        info!("Picked up {} from slot {}", template.label, slot);
                        self.state.held = Some(template.clone());
                        self.state.dwell.clear();
                        events.push(InteractionEvent::DecorationPicked { slot, template });
                    }
                }
                Some(DwellTarget::Tree) => {
                    if let Some(item) = self.place_decoration(gesture.world_index_pos) {
                        events.push(InteractionEvent::DecorationPlaced(item));
                    }
                }
                None => {}
            }
        }

        events
    }

    /// Attach the held item at a world position; no-op without a held item
    pub fn place_decoration(&mut self, world: Point3D) -> Option<DecorationItem> {
        let template = self.state.held.take()?;
        let scale = self.state.scale.value();
        let item = DecorationItem::from_template(&template, to_local(world, scale));
        info!(
            "Placed {} at ({:.2}, {:.2}) scale {:.2}",
            template.label, item.position.x, item.position.y, scale
        );
        self.state.decorations.push(item.clone());
        self.state.dwell.clear();
        Some(item)
    }

    /// Clear decorations and the held item, and return to the initial scale
    pub fn reset(&mut self) {
        debug!(
            "Scene reset ({} decorations cleared)",
            self.state.decorations.len()
        );
        self.state.scale.reset();
        self.state.decorations.clear();
        self.state.held = None;
    }

    /// Called by the renderer when the relight animation ends
    pub fn finish_relight(&mut self) {
        if self.state.is_relighting {
            debug!("Relight finished");
        }
        self.state.is_relighting = false;
    }

    /// Hold a catalog item directly, bypassing the dwell
    pub fn hold(&mut self, slot: usize) -> Option<&DecorationTemplate> {
        let template = self.catalog.get(slot)?.clone();
        self.state.held = Some(template);
        self.state.held.as_ref()
    }

    /// Drop the held item without placing it
    pub fn release(&mut self) -> Option<DecorationTemplate> {
        self.state.dwell.clear();
        self.state.held.take()
    }

    fn dwell_threshold(&self, target: Option<DwellTarget>) -> Duration {
        match target {
            Some(DwellTarget::Tree) => self.config.interaction.tree_dwell(),
            _ => self.config.interaction.slot_dwell(),
        }
    }

    pub fn state(&self) -> &InteractionState {
        &self.state
    }

    pub fn config(&self) -> &GlowConfig {
        &self.config
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn scale(&self) -> f32 {
        self.state.scale.value()
    }

    pub fn decorations(&self) -> &[DecorationItem] {
        &self.state.decorations
    }

    pub fn held(&self) -> Option<&DecorationTemplate> {
        self.state.held.as_ref()
    }

    pub fn dwell_progress(&self) -> f32 {
        self.state.dwell.progress()
    }

    pub fn is_relighting(&self) -> bool {
        self.state.is_relighting
    }

    pub fn snapshot(&self) -> SceneSnapshot<'_> {
        SceneSnapshot {
            gesture: self.state.gesture.as_ref(),
            dwell_target: self.state.dwell.target(),
            dwell_progress: self.state.dwell.progress(),
            hover_index: self.state.hover_index,
            held: self.state.held.as_ref(),
            decorations: &self.state.decorations,
            scale: self.state.scale.value(),
            is_relighting: self.state.is_relighting,
            catalog: &self.catalog,
        }
    }
}

impl Default for InteractionController {
    fn default() -> Self {
        Self::new(GlowConfig::default(), Catalog::default())
    }
}

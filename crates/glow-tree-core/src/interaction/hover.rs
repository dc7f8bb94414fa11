//! Hover resolution: which dwell target the fingertip is over

use super::dwell::DwellTarget;
use super::placement::tree_volume;
use crate::config::InteractionConfig;
use crate::input::GestureState;

const SLOT_EPSILON: f32 = 1e-4;

/// Hover result for a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Hover {
    pub target: Option<DwellTarget>,
    /// Highlighted catalog slot
    pub slot: Option<usize>,
}

/// Resolve the hover target.
///
/// The catalog band takes priority: a fingertip inside the band but outside
/// every slot hovers nothing, even if it also overlaps the tree. The tree is
/// only a target while an item is held.
pub fn resolve_hover(
    gesture: &GestureState,
    holding: bool,
    scale: f32,
    catalog_len: usize,
    config: &InteractionConfig,
) -> Hover {
    let finger = gesture.index_finger_pos;

    if finger.x < config.catalog_band_x {
        let band = (finger.y - config.catalog_top) / config.catalog_height;
        // Slot boundaries land a rounding error short of whole numbers in f32
        let slot = (band * catalog_len as f32 + SLOT_EPSILON).floor();
        if slot >= 0.0 && slot < catalog_len as f32 {
            let slot = slot as usize;
            return Hover {
                target: Some(DwellTarget::Sidebar(slot)),
                slot: Some(slot),
            };
        }
        return Hover::default();
    }

    if holding && tree_volume(scale, config).contains(gesture.world_index_pos) {
        return Hover {
            target: Some(DwellTarget::Tree),
            slot: None,
        };
    }

    Hover::default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spatial::{Point3D, ScreenPoint};

    fn at(x: f32, y: f32, world: Point3D) -> GestureState {
        GestureState {
            index_finger_pos: ScreenPoint::new(x, y),
            world_index_pos: world,
            ..Default::default()
        }
    }

    #[test]
    fn test_slot_from_band_position() {
        let config = InteractionConfig::default();
        // Slot 3 of 8 spans y in [0.4, 0.5)
        let hover = resolve_hover(&at(0.1, 0.45, Point3D::ORIGIN), false, 1.0, 8, &config);
        assert_eq!(hover.target, Some(DwellTarget::Sidebar(3)));
        assert_eq!(hover.slot, Some(3));

        let first = resolve_hover(&at(0.05, 0.1, Point3D::ORIGIN), false, 1.0, 8, &config);
        assert_eq!(first.slot, Some(0));
    }

    #[test]
    fn test_band_outside_slots_hovers_nothing() {
        let config = InteractionConfig::default();
        for y in [0.05, 0.9, 0.95] {
            let hover = resolve_hover(&at(0.1, y, Point3D::ORIGIN), true, 1.0, 8, &config);
            assert_eq!(hover, Hover::default(), "y = {y}");
        }
    }

    #[test]
    fn test_slot_edges() {
        let config = InteractionConfig::default();
        let last = resolve_hover(&at(0.1, 0.899, Point3D::ORIGIN), false, 1.0, 8, &config);
        assert_eq!(last.slot, Some(7));
        let edge = resolve_hover(&at(0.1, 0.9, Point3D::ORIGIN), false, 1.0, 8, &config);
        assert_eq!(edge.target, None);
        assert_eq!(edge.slot, None);

        // Interior boundaries belong to the lower edge of the next slot
        for (y, slot) in [(0.1, 0), (0.2, 1), (0.5, 4), (0.8, 7)] {
            let hover = resolve_hover(&at(0.1, y, Point3D::ORIGIN), false, 1.0, 8, &config);
            assert_eq!(hover.slot, Some(slot), "y = {y}");
        }
    }

    #[test]
    fn test_empty_catalog() {
        let config = InteractionConfig::default();
        let hover = resolve_hover(&at(0.1, 0.5, Point3D::ORIGIN), false, 1.0, 0, &config);
        assert_eq!(hover.target, None);
    }

    #[test]
    fn test_tree_requires_held_item() {
        let config = InteractionConfig::default();
        let g = at(0.5, 0.5, Point3D::new(0.5, 0.0, 0.0));
        assert_eq!(resolve_hover(&g, false, 1.0, 8, &config).target, None);
        assert_eq!(resolve_hover(&g, true, 1.0, 8, &config).target, Some(DwellTarget::Tree));
    }

    #[test]
    fn test_tree_bounds_follow_scale() {
        let config = InteractionConfig::default();
        // Above the apex at scale 1.0 but inside at 2.0
        let g = at(0.5, 0.2, Point3D::new(0.0, 3.0, 0.0));
        assert_eq!(resolve_hover(&g, true, 1.0, 8, &config).target, None);
        assert_eq!(resolve_hover(&g, true, 2.0, 8, &config).target, Some(DwellTarget::Tree));
    }
}

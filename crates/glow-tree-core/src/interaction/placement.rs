//! Mapping between world space and tree-local space
//!
//! Decorations are stored relative to the tree at scale 1.0 so they stay
//! attached as the tree grows or shrinks.

use crate::config::InteractionConfig;
use crate::spatial::{Cone, Point3D};

/// World position to tree-local position at the given scale
pub fn to_local(world: Point3D, scale: f32) -> Point3D {
    world / scale
}

/// Tree-local position back to world space
pub fn to_world(local: Point3D, scale: f32) -> Point3D {
    local * scale
}

/// Hit volume of the tree at the given scale
pub fn tree_volume(scale: f32, config: &InteractionConfig) -> Cone {
    Cone::centered(config.tree_half_height, config.tree_base_radius, scale)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_world_inverse() {
        let world = Point3D::new(1.2, -0.6, 0.0);
        let local = to_local(world, 1.5);
        assert!((local.x - 0.8).abs() < 1e-6);
        assert!((local.y + 0.4).abs() < 1e-6);
        let back = to_world(local, 1.5);
        assert!(back.distance(&world) < 1e-5);
    }

    #[test]
    fn test_tree_volume_scales() {
        let config = InteractionConfig::default();
        let cone = tree_volume(2.0, &config);
        assert_eq!(cone.base_y, -5.0);
        assert_eq!(cone.top_y, 5.0);
        assert!((cone.base_radius - 5.6).abs() < 1e-6);
    }
}

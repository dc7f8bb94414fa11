//! Orthographic mapping from world and camera space to display space

use glow_tree_core::{GestureConfig, Point3D, ScreenPoint};

/// Maps the z = 0 interaction plane onto the display.
///
/// Uses the same extents as the gesture cursor mapping, so the cursor drawn
/// from the world position lands on the fingertip drawn from the landmarks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub range_x: f32,
    pub range_y: f32,
}

impl Viewport {
    pub fn new(config: &GestureConfig) -> Self {
        Self {
            range_x: config.world_range_x,
            range_y: config.world_range_y,
        }
    }

    pub fn world_to_display(&self, world: Point3D) -> ScreenPoint {
        ScreenPoint::new(0.5 + world.x / self.range_x, 0.5 - world.y / self.range_y)
    }

    /// World height shown at a display row
    pub fn display_to_world_y(&self, y: f32) -> f32 {
        (0.5 - y) * self.range_y
    }

    /// Display width of a world-space length
    pub fn display_width(&self, world_len: f32) -> f32 {
        world_len / self.range_x
    }

    /// Camera landmarks are shown mirrored
    pub fn camera_to_display(&self, camera: ScreenPoint) -> ScreenPoint {
        camera.mirrored()
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(&GestureConfig::default())
    }
}

//! Spatial primitives for the interaction plane
//!
//! Two coordinate spaces are in play:
//! - Screen space: normalized camera coordinates, origin top-left, x right, y down
//! - World space: scene units centered on the tree, x right, y up, z toward viewer

mod point3d;
mod screen;
mod cone;

pub use point3d::Point3D;
pub use screen::ScreenPoint;
pub use cone::Cone;

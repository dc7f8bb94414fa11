//! Upright cone volume for hit testing against the tree silhouette

use super::Point3D;

/// Vertical cone, widest at `base_y` and narrowing linearly to a point at `top_y`.
///
/// Hit testing happens on the interaction plane, so only `x` and `y` of a probe
/// point are considered.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cone {
    /// Height of the base
    pub base_y: f32,
    /// Height of the apex
    pub top_y: f32,
    /// Radius at the base
    pub base_radius: f32,
}

impl Cone {
    pub fn new(base_y: f32, top_y: f32, base_radius: f32) -> Self {
        Self {
            base_y,
            top_y,
            base_radius,
        }
    }

    /// Cone centered on the origin spanning `[-half_height, half_height]`, scaled uniformly
    pub fn centered(half_height: f32, base_radius: f32, scale: f32) -> Self {
        Self::new(-half_height * scale, half_height * scale, base_radius * scale)
    }

    /// Allowed radius at height `y`, or `None` when `y` is outside the cone's span
    pub fn radius_at(&self, y: f32) -> Option<f32> {
        if y < self.base_y || y > self.top_y {
            return None;
        }
        let span = self.top_y - self.base_y;
        if span <= 0.0 {
            return None;
        }
        let h_norm = (y - self.base_y) / span;
        Some((1.0 - h_norm) * self.base_radius)
    }

    /// Check if a point is inside the cone silhouette
    pub fn contains(&self, point: Point3D) -> bool {
        self.radius_at(point.y)
            .map(|r| point.x.abs() <= r)
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_radius_shrinks_to_apex() {
        let cone = Cone::centered(2.5, 2.8, 1.0);
        assert!((cone.radius_at(-2.5).unwrap() - 2.8).abs() < 1e-6);
        assert!((cone.radius_at(0.0).unwrap() - 1.4).abs() < 1e-6);
        assert!(cone.radius_at(2.5).unwrap().abs() < 1e-6);
        assert!(cone.radius_at(2.6).is_none());
    }

    #[test]
    fn test_contains() {
        let cone = Cone::centered(2.5, 2.8, 1.0);
        assert!(cone.contains(Point3D::new(0.0, 0.0, 0.0)));
        assert!(cone.contains(Point3D::new(-1.3, 0.0, 0.0)));
        assert!(!cone.contains(Point3D::new(1.5, 0.0, 0.0)));
        assert!(!cone.contains(Point3D::new(0.0, -3.0, 0.0)));
    }

    #[test]
    fn test_scaled_cone_grows() {
        let small = Cone::centered(2.5, 2.8, 0.8);
        let large = Cone::centered(2.5, 2.8, 2.8);
        let probe = Point3D::new(0.0, 3.0, 0.0);
        assert!(!small.contains(probe));
        assert!(large.contains(probe));
    }
}

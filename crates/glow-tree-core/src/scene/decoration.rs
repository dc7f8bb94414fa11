//! Decorations placed on the tree

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{DecorationKind, DecorationTemplate};
use crate::spatial::Point3D;

/// A decoration attached to the tree.
///
/// `position` is tree-local: the world position at placement divided by the
/// tree scale at that moment. Multiply by the current scale to render it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecorationItem {
    /// Time-ordered unique id
    pub id: Uuid,
    pub kind: DecorationKind,
    pub color: String,
    pub position: Point3D,
    pub placed_at: DateTime<Utc>,
}

impl DecorationItem {
    /// Instantiate a template at a tree-local position
    pub fn from_template(template: &DecorationTemplate, position: Point3D) -> Self {
        Self {
            id: Uuid::now_v7(),
            kind: template.kind,
            color: template.color.clone(),
            position,
            placed_at: Utc::now(),
        }
    }

    /// World position at the given tree scale
    pub fn rendered_position(&self, scale: f32) -> Point3D {
        self.position * scale
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::Catalog;

    #[test]
    fn test_ids_are_unique() {
        let catalog = Catalog::default();
        let template = catalog.get(0).unwrap();
        let a = DecorationItem::from_template(template, Point3D::ORIGIN);
        let b = DecorationItem::from_template(template, Point3D::ORIGIN);
        assert_ne!(a.id, b.id);
        assert_eq!(a.id.get_version_num(), 7);
    }

    #[test]
    fn test_rendered_position_tracks_scale() {
        let catalog = Catalog::default();
        let item = DecorationItem::from_template(catalog.get(2).unwrap(), Point3D::new(0.5, -1.0, 0.0));
        assert_eq!(item.rendered_position(2.0), Point3D::new(1.0, -2.0, 0.0));
        assert_eq!(item.color, "#1a75ff");
    }
}

//! The fixed set of decorations a user can pick up

use serde::{Deserialize, Serialize};

/// Shape of a decoration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DecorationKind {
    Ball,
    Star,
    Gift,
}

impl DecorationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ball => "ball",
            Self::Star => "star",
            Self::Gift => "gift",
        }
    }
}

/// A catalog entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecorationTemplate {
    pub id: String,
    pub kind: DecorationKind,
    /// `#rrggbb` hex color
    pub color: String,
    pub label: String,
}

impl DecorationTemplate {
    pub fn new(
        id: impl Into<String>,
        kind: DecorationKind,
        color: impl Into<String>,
        label: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            kind,
            color: color.into(),
            label: label.into(),
        }
    }

    /// Color as an RGB triple, if the hex string is well formed
    pub fn rgb(&self) -> Option<(u8, u8, u8)> {
        let hex = self.color.strip_prefix('#')?;
        if hex.len() != 6 {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok();
        Some((channel(0)?, channel(2)?, channel(4)?))
    }
}

/// Ordered list of templates, addressed by slot index
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    items: Vec<DecorationTemplate>,
}

impl Catalog {
    pub fn new(items: Vec<DecorationTemplate>) -> Self {
        Self { items }
    }

    pub fn get(&self, slot: usize) -> Option<&DecorationTemplate> {
        self.items.get(slot)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &DecorationTemplate> {
        self.items.iter()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        use DecorationKind::*;
        Self::new(vec![
            DecorationTemplate::new("1", Ball, "#ff1a1a", "Crimson"),
            DecorationTemplate::new("2", Ball, "#ffd700", "Gold"),
            DecorationTemplate::new("3", Ball, "#1a75ff", "Azure"),
            DecorationTemplate::new("4", Ball, "#ff66cc", "Pink"),
            DecorationTemplate::new("5", Star, "#ffffff", "White Star"),
            DecorationTemplate::new("6", Star, "#ffeb3b", "Yellow Star"),
            DecorationTemplate::new("7", Gift, "#00ff00", "Green Gift"),
            DecorationTemplate::new("8", Gift, "#a366ff", "Purple Gift"),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalog() {
        let catalog = Catalog::default();
        assert_eq!(catalog.len(), 8);
        assert_eq!(catalog.get(3).unwrap().label, "Pink");
        assert_eq!(catalog.get(4).unwrap().kind, DecorationKind::Star);
        assert!(catalog.get(8).is_none());
    }

    #[test]
    fn test_rgb() {
        let catalog = Catalog::default();
        assert_eq!(catalog.get(0).unwrap().rgb(), Some((0xff, 0x1a, 0x1a)));

        let bad = DecorationTemplate::new("x", DecorationKind::Ball, "red", "Red");
        assert_eq!(bad.rgb(), None);
    }
}

//! Tree color editions

use serde::{Deserialize, Serialize};

/// Visual edition of the tree; only renderers care about it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TreeEdition {
    #[default]
    Classic,
    Pink,
    Silver,
}

impl TreeEdition {
    pub fn all() -> [TreeEdition; 3] {
        [Self::Classic, Self::Pink, Self::Silver]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Classic => "Classic",
            Self::Pink => "Pink",
            Self::Silver => "Silver",
        }
    }

    /// Foliage color as RGB
    pub fn foliage(&self) -> (u8, u8, u8) {
        match self {
            Self::Classic => (34, 139, 34),
            Self::Pink => (255, 105, 180),
            Self::Silver => (192, 200, 210),
        }
    }

    /// Tree-top star color as RGB
    pub fn star(&self) -> (u8, u8, u8) {
        match self {
            Self::Classic => (255, 215, 0),
            Self::Pink => (255, 240, 245),
            Self::Silver => (230, 240, 255),
        }
    }

    /// Next edition in display order
    pub fn next(&self) -> Self {
        match self {
            Self::Classic => Self::Pink,
            Self::Pink => Self::Silver,
            Self::Silver => Self::Classic,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_returns_to_start() {
        let mut edition = TreeEdition::default();
        for _ in 0..TreeEdition::all().len() {
            edition = edition.next();
        }
        assert_eq!(edition, TreeEdition::Classic);
    }
}

//! Scene data: the decoration catalog, placed decorations and tree editions

mod catalog;
mod decoration;
mod edition;

pub use catalog::{Catalog, DecorationKind, DecorationTemplate};
pub use decoration::DecorationItem;
pub use edition::TreeEdition;

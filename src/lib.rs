//! glow-tree: hand-gesture driven tree decorating
//!
//! Re-exports the interaction pipeline from `glow-tree-core`. The terminal
//! host lives in the `glow-tree-app` crate (binary `glow-tree`).

pub use glow_tree_core::*;

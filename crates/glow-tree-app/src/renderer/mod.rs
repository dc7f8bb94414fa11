//! Rendering backend abstraction
//!
//! Everything is drawn in normalized display space: `(0, 0)` is the top-left
//! corner of the view and `(1, 1)` the bottom-right, already mirrored the way
//! the user sees it. Backends:
//! - [`TerminalBackend`] draws to the terminal with diff rendering
//! - [`CellBuffer`] keeps the frame in memory, for tests and headless runs

mod backend;
mod buffer;
mod surface;
mod terminal;
mod viewport;

pub use backend::{RenderBackend, RenderError, RenderGlyph};
pub use buffer::{Cell, CellBuffer};
pub use surface::Color;
pub use terminal::TerminalBackend;
pub use viewport::Viewport;

//! Render backend trait definition

use std::io;

use glow_tree_core::ScreenPoint;
use thiserror::Error;

use super::surface::Color;

/// Depth used for HUD text, always in front of scene glyphs
pub const HUD_DEPTH: f32 = 0.0;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to initialize terminal: {0}")]
    Init(#[source] io::Error),
    #[error("failed to draw frame: {0}")]
    Frame(#[from] io::Error),
}

/// A single character drawn at a display position
#[derive(Debug, Clone, PartialEq)]
pub struct RenderGlyph {
    pub symbol: char,
    pub position: ScreenPoint,
    pub color: Color,
    /// Smaller is nearer; nearer glyphs win a cell
    pub depth: f32,
}

impl RenderGlyph {
    pub fn new(symbol: char, position: ScreenPoint) -> Self {
        Self {
            symbol,
            position,
            color: Color::White,
            depth: 1.0,
        }
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn with_depth(mut self, depth: f32) -> Self {
        self.depth = depth;
        self
    }
}

/// Drawing surface for the scene
pub trait RenderBackend {
    /// Surface size in cells (columns, rows)
    fn size(&self) -> (u16, u16);

    /// Begin a new render frame
    fn begin_frame(&mut self) -> Result<(), RenderError>;

    /// End frame and present to display
    fn end_frame(&mut self) -> Result<(), RenderError>;

    /// Clear the render surface with a background color
    fn clear(&mut self, color: Color);

    fn draw_glyph(&mut self, glyph: &RenderGlyph);

    /// Straight line between two display points
    fn draw_line(&mut self, from: ScreenPoint, to: ScreenPoint, color: Color, depth: f32);

    /// Left-aligned text starting at a display point, on top of everything
    fn draw_text(&mut self, x: f32, y: f32, text: &str, color: Color);

    /// Size of one cell in display units
    fn cell_step(&self) -> (f32, f32) {
        let (w, h) = self.size();
        (1.0 / w.max(1) as f32, 1.0 / h.max(1) as f32)
    }
}

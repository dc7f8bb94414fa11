//! Terminal backend implementation

use std::io::{self, Write};

use crossterm::{
    cursor, queue,
    style::{Print, SetBackgroundColor, SetForegroundColor},
    terminal::{self, ClearType},
};
use glow_tree_core::ScreenPoint;

use super::backend::{RenderBackend, RenderError, RenderGlyph};
use super::buffer::CellBuffer;
use super::surface::Color;

/// Terminal rendering backend; only cells that changed since the last frame
/// are written
pub struct TerminalBackend {
    current: CellBuffer,
    previous: CellBuffer,
    clear_color: Color,
    /// Forces a full redraw on the next frame
    dirty: bool,
}

impl TerminalBackend {
    pub fn new() -> Result<Self, RenderError> {
        let (width, height) = terminal::size().map_err(RenderError::Init)?;
        Ok(Self {
            current: CellBuffer::new(width, height),
            previous: CellBuffer::new(width, height),
            clear_color: Color::NIGHT,
            dirty: true,
        })
    }

    fn refresh_size(&mut self) -> Result<(), RenderError> {
        let (width, height) = terminal::size()?;
        if (width, height) != self.current.size() {
            self.current.resize(width, height);
            self.previous.resize(width, height);
            self.dirty = true;
        }
        Ok(())
    }
}

impl RenderBackend for TerminalBackend {
    fn size(&self) -> (u16, u16) {
        self.current.size()
    }

    fn begin_frame(&mut self) -> Result<(), RenderError> {
        self.refresh_size()?;
        std::mem::swap(&mut self.current, &mut self.previous);
        self.current.clear(self.clear_color);
        Ok(())
    }

    fn end_frame(&mut self) -> Result<(), RenderError> {
        let mut stdout = io::stdout();
        queue!(stdout, cursor::Hide)?;

        if self.dirty {
            queue!(stdout, terminal::Clear(ClearType::All))?;
            // A blank previous frame makes every cell count as changed
            self.previous.resize(self.current.size().0, self.current.size().1);
            self.dirty = false;
        }

        for (x, y, cell) in self.current.changes(&self.previous) {
            queue!(
                stdout,
                cursor::MoveTo(x, y),
                SetForegroundColor(cell.fg.to_crossterm()),
                SetBackgroundColor(cell.bg.to_crossterm()),
                Print(cell.symbol)
            )?;
        }

        stdout.flush()?;
        Ok(())
    }

    fn clear(&mut self, color: Color) {
        self.clear_color = color;
        self.current.clear(color);
    }

    fn draw_glyph(&mut self, glyph: &RenderGlyph) {
        self.current.draw_glyph(glyph);
    }

    fn draw_line(&mut self, from: ScreenPoint, to: ScreenPoint, color: Color, depth: f32) {
        self.current.draw_line(from, to, color, depth);
    }

    fn draw_text(&mut self, x: f32, y: f32, text: &str, color: Color) {
        self.current.draw_text(x, y, text, color);
    }
}

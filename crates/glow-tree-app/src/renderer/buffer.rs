//! In-memory cell buffer with a depth test

use glow_tree_core::ScreenPoint;

use super::backend::{RenderBackend, RenderError, RenderGlyph, HUD_DEPTH};
use super::surface::Color;

/// One character cell
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    pub symbol: char,
    pub fg: Color,
    pub bg: Color,
    depth: f32,
}

impl Cell {
    fn blank(bg: Color) -> Self {
        Self {
            symbol: ' ',
            fg: Color::White,
            bg,
            depth: f32::MAX,
        }
    }

    /// Whether two cells would look the same on screen
    pub fn same_look(&self, other: &Cell) -> bool {
        self.symbol == other.symbol && self.fg == other.fg && self.bg == other.bg
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::blank(Color::Reset)
    }
}

/// Frame buffer addressed in cells
#[derive(Debug, Clone)]
pub struct CellBuffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
    clear_color: Color,
}

impl CellBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::default(); width as usize * height as usize],
            clear_color: Color::Reset,
        }
    }

    /// Resize and blank every cell
    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        self.cells = vec![Cell::default(); width as usize * height as usize];
    }

    fn index(&self, x: u16, y: u16) -> Option<usize> {
        if x < self.width && y < self.height {
            Some(y as usize * self.width as usize + x as usize)
        } else {
            None
        }
    }

    pub fn cell(&self, x: u16, y: u16) -> Option<&Cell> {
        self.index(x, y).map(|i| &self.cells[i])
    }

    /// Cell containing a display point, if it is on the surface
    pub fn locate(&self, point: ScreenPoint) -> Option<(u16, u16)> {
        if !(0.0..1.0).contains(&point.x) || !(0.0..1.0).contains(&point.y) {
            return None;
        }
        let x = (point.x * self.width as f32) as u16;
        let y = (point.y * self.height as f32) as u16;
        Some((x.min(self.width.saturating_sub(1)), y.min(self.height.saturating_sub(1))))
    }

    /// Write a cell if `depth` is not behind what is already there
    fn set(&mut self, x: u16, y: u16, symbol: char, fg: Color, depth: f32) {
        if let Some(idx) = self.index(x, y) {
            let cell = &mut self.cells[idx];
            if depth <= cell.depth {
                cell.symbol = symbol;
                cell.fg = fg;
                cell.depth = depth;
            }
        }
    }

    /// Text of one row, for tests and debugging
    pub fn row_text(&self, y: u16) -> String {
        (0..self.width)
            .filter_map(|x| self.cell(x, y).map(|c| c.symbol))
            .collect()
    }

    /// Whether any cell holds `symbol`
    pub fn contains_symbol(&self, symbol: char) -> bool {
        self.cells.iter().any(|c| c.symbol == symbol)
    }

    /// Cells that differ from `previous`, with their coordinates
    pub fn changes<'a>(
        &'a self,
        previous: &'a CellBuffer,
    ) -> impl Iterator<Item = (u16, u16, &'a Cell)> + 'a {
        let same_size = self.width == previous.width && self.height == previous.height;
        self.cells.iter().enumerate().filter_map(move |(i, cell)| {
            if same_size && cell.same_look(&previous.cells[i]) {
                return None;
            }
            let x = (i % self.width as usize) as u16;
            let y = (i / self.width as usize) as u16;
            Some((x, y, cell))
        })
    }
}

impl RenderBackend for CellBuffer {
    fn size(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    fn begin_frame(&mut self) -> Result<(), RenderError> {
        let bg = self.clear_color;
        self.clear(bg);
        Ok(())
    }

    fn end_frame(&mut self) -> Result<(), RenderError> {
        Ok(())
    }

    fn clear(&mut self, color: Color) {
        self.clear_color = color;
        for cell in &mut self.cells {
            *cell = Cell::blank(color);
        }
    }

    fn draw_glyph(&mut self, glyph: &RenderGlyph) {
        if let Some((x, y)) = self.locate(glyph.position) {
            self.set(x, y, glyph.symbol, glyph.color, glyph.depth);
        }
    }

    fn draw_line(&mut self, from: ScreenPoint, to: ScreenPoint, color: Color, depth: f32) {
        let (Some((x1, y1)), Some((x2, y2))) = (self.locate(from), self.locate(to)) else {
            return;
        };

        // Bresenham
        let (x1, y1, x2, y2) = (x1 as i32, y1 as i32, x2 as i32, y2 as i32);
        let dx = (x2 - x1).abs();
        let dy = -(y2 - y1).abs();
        let sx = if x1 < x2 { 1 } else { -1 };
        let sy = if y1 < y2 { 1 } else { -1 };
        let symbol = if dx > -dy * 2 {
            '─'
        } else if -dy > dx * 2 {
            '│'
        } else if (sx > 0) == (sy > 0) {
            '╲'
        } else {
            '╱'
        };

        let mut err = dx + dy;
        let (mut x, mut y) = (x1, y1);
        loop {
            self.set(x as u16, y as u16, symbol, color, depth);
            if x == x2 && y == y2 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }

    fn draw_text(&mut self, x: f32, y: f32, text: &str, color: Color) {
        let Some((sx, sy)) = self.locate(ScreenPoint::new(x.clamp(0.0, 0.999), y)) else {
            return;
        };
        for (i, ch) in text.chars().enumerate() {
            let cx = sx as usize + i;
            if cx >= self.width as usize {
                break;
            }
            self.set(cx as u16, sy, ch, color, HUD_DEPTH);
        }
    }
}

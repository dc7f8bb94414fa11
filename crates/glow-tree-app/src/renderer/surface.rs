//! Color types

/// Terminal color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Color {
    /// Reset to default
    #[default]
    Reset,
    Black,
    DarkGrey,
    Grey,
    White,
    Red,
    Green,
    Yellow,
    /// True color RGB
    Rgb(u8, u8, u8),
}

impl Color {
    pub const NIGHT: Self = Color::Rgb(6, 8, 20);
    pub const TRUNK: Self = Color::Rgb(110, 70, 35);
    pub const SNOW: Self = Color::Rgb(235, 240, 255);
    pub const HUD: Self = Color::Rgb(150, 190, 220);
    pub const HIGHLIGHT: Self = Color::Rgb(255, 230, 120);
    pub const OVERLAY: Self = Color::Rgb(70, 90, 110);

    pub fn from_rgb((r, g, b): (u8, u8, u8)) -> Self {
        Color::Rgb(r, g, b)
    }

    /// Parse a `#rrggbb` string
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#')?;
        if hex.len() != 6 {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok();
        Some(Color::Rgb(channel(0)?, channel(2)?, channel(4)?))
    }

    /// Convert to crossterm color
    pub fn to_crossterm(&self) -> crossterm::style::Color {
        use crossterm::style::Color as C;
        match self {
            Color::Reset => C::Reset,
            Color::Black => C::Black,
            Color::DarkGrey => C::DarkGrey,
            Color::Grey => C::Grey,
            Color::White => C::White,
            Color::Red => C::Red,
            Color::Green => C::Green,
            Color::Yellow => C::Yellow,
            Color::Rgb(r, g, b) => C::Rgb {
                r: *r,
                g: *g,
                b: *b,
            },
        }
    }

    /// Blend two colors (0.0 = self, 1.0 = other)
    pub fn blend(&self, other: &Color, alpha: f32) -> Color {
        let alpha = alpha.clamp(0.0, 1.0);
        match (self.to_rgb(), other.to_rgb()) {
            (Some((r1, g1, b1)), Some((r2, g2, b2))) => {
                let mix = |a: u8, b: u8| (a as f32 * (1.0 - alpha) + b as f32 * alpha).round() as u8;
                Color::Rgb(mix(r1, r2), mix(g1, g2), mix(b1, b2))
            }
            _ => {
                if alpha > 0.5 {
                    *other
                } else {
                    *self
                }
            }
        }
    }

    /// Convert to RGB tuple if possible
    pub fn to_rgb(&self) -> Option<(u8, u8, u8)> {
        match self {
            Color::Rgb(r, g, b) => Some((*r, *g, *b)),
            Color::Black => Some((0, 0, 0)),
            Color::DarkGrey => Some((64, 64, 64)),
            Color::Grey => Some((128, 128, 128)),
            Color::White => Some((255, 255, 255)),
            Color::Red => Some((255, 0, 0)),
            Color::Green => Some((0, 255, 0)),
            Color::Yellow => Some((255, 255, 0)),
            Color::Reset => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex() {
        assert_eq!(Color::from_hex("#ff66cc"), Some(Color::Rgb(255, 102, 204)));
        assert_eq!(Color::from_hex("ff66cc"), None);
        assert_eq!(Color::from_hex("#ff66c"), None);
    }

    #[test]
    fn test_blend() {
        let mid = Color::Black.blend(&Color::White, 0.5);
        assert_eq!(mid, Color::Rgb(128, 128, 128));
        assert_eq!(Color::Reset.blend(&Color::White, 0.2), Color::Reset);
    }
}

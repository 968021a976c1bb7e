//! Color utility functions for the particle field.

use ratatui::style::Color;

/// An opaque RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const WHITE: Rgb = Rgb(255, 255, 255);
}

impl From<Rgb> for Color {
    fn from(c: Rgb) -> Self {
        Color::Rgb(c.0, c.1, c.2)
    }
}

/// Composite `over` onto `under` with the given opacity (0.0-1.0).
pub fn blend(under: Rgb, over: Rgb, alpha: f32) -> Rgb {
    let alpha = alpha.clamp(0.0, 1.0);
    let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * alpha).round() as u8;
    Rgb(mix(under.0, over.0), mix(under.1, over.1), mix(under.2, over.2))
}

/// Backdrop color for a row: a dark violet gradient, lightest at mid height.
pub fn backdrop(row: u16, rows: u16) -> Rgb {
    const EDGE: Rgb = Rgb(11, 6, 16);
    const MIDDLE: Rgb = Rgb(17, 8, 31);

    if rows <= 1 {
        return MIDDLE;
    }
    let t = row as f32 / (rows - 1) as f32;
    // 0 at the edges, 1 in the middle
    let toward_middle = 1.0 - (2.0 * t - 1.0).abs();
    blend(EDGE, MIDDLE, toward_middle)
}

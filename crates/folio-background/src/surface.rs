//! Drawing surfaces for the particle field.

use ratatui::{
    style::Style,
    text::{Line, Span},
};

use crate::chars::{LINK_CHARS, PARTICLE_CHARS};
use crate::color::{Rgb, backdrop, blend};

/// Width of one terminal cell in surface units.
pub const CELL_WIDTH: f32 = 8.0;
/// Height of one terminal cell in surface units.
pub const CELL_HEIGHT: f32 = 16.0;

/// A 2D surface the particle field draws onto, in surface units.
pub trait Surface {
    fn width(&self) -> f32;
    fn height(&self) -> f32;
    /// Erase everything drawn since the last clear.
    fn clear(&mut self);
    /// Fill a circle centered on `(x, y)`.
    fn fill_circle(&mut self, x: f32, y: f32, radius: f32, color: Rgb, opacity: f32);
    /// Stroke a straight line between two points.
    fn stroke_line(
        &mut self,
        from: (f32, f32),
        to: (f32, f32),
        width: f32,
        color: Rgb,
        opacity: f32,
    );
}

/// What occupies a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layer {
    Empty,
    Link,
    Particle,
}

/// One rasterized terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub symbol: char,
    pub fg: Rgb,
    pub bg: Rgb,
    pub layer: Layer,
}

impl Cell {
    fn blank(bg: Rgb) -> Self {
        Self {
            symbol: ' ',
            fg: bg,
            bg,
            layer: Layer::Empty,
        }
    }
}

/// Surface backed by a grid of terminal cells.
///
/// Each cell covers [`CELL_WIDTH`] x [`CELL_HEIGHT`] units. Shapes smaller
/// than a cell, including line widths, are drawn one cell wide; colors are
/// composited over a backdrop gradient.
#[derive(Debug, Clone)]
pub struct CellSurface {
    cols: u16,
    rows: u16,
    cells: Vec<Cell>,
}

impl CellSurface {
    pub fn new(cols: u16, rows: u16) -> Self {
        let mut surface = Self {
            cols: 0,
            rows: 0,
            cells: Vec::new(),
        };
        surface.resize(cols, rows);
        surface
    }

    /// Resize to a new cell grid. Drawn content is discarded.
    pub fn resize(&mut self, cols: u16, rows: u16) {
        self.cols = cols;
        self.rows = rows;
        self.cells = Vec::with_capacity(cols as usize * rows as usize);
        for row in 0..rows {
            let bg = backdrop(row, rows);
            self.cells
                .extend(std::iter::repeat_n(Cell::blank(bg), cols as usize));
        }
    }

    pub fn cols(&self) -> u16 {
        self.cols
    }

    pub fn rows(&self) -> u16 {
        self.rows
    }

    pub fn cell(&self, col: u16, row: u16) -> Option<&Cell> {
        if col >= self.cols || row >= self.rows {
            return None;
        }
        self.cells.get(row as usize * self.cols as usize + col as usize)
    }

    /// Convert the grid into styled lines, one per row.
    pub fn lines(&self) -> Vec<Line<'static>> {
        if self.cols == 0 {
            return Vec::new();
        }
        self.cells
            .chunks(self.cols as usize)
            .map(|row| {
                let spans: Vec<Span> = row
                    .iter()
                    .map(|cell| match cell.layer {
                        Layer::Empty => Span::styled(" ", Style::new().bg(cell.bg.into())),
                        _ => Span::styled(
                            cell.symbol.to_string(),
                            Style::new().fg(cell.fg.into()).bg(cell.bg.into()),
                        ),
                    })
                    .collect();
                Line::from(spans)
            })
            .collect()
    }

    /// Index of the cell containing a point, if the point is on the surface.
    fn locate(&self, x: f32, y: f32) -> Option<usize> {
        if self.cells.is_empty()
            || !(0.0..=self.width()).contains(&x)
            || !(0.0..=self.height()).contains(&y)
        {
            return None;
        }
        let col = ((x / CELL_WIDTH) as usize).min(self.cols as usize - 1);
        let row = ((y / CELL_HEIGHT) as usize).min(self.rows as usize - 1);
        Some(row * self.cols as usize + col)
    }
}

impl Surface for CellSurface {
    fn width(&self) -> f32 {
        self.cols as f32 * CELL_WIDTH
    }

    fn height(&self) -> f32 {
        self.rows as f32 * CELL_HEIGHT
    }

    fn clear(&mut self) {
        for cell in &mut self.cells {
            *cell = Cell::blank(cell.bg);
        }
    }

    fn fill_circle(&mut self, x: f32, y: f32, radius: f32, color: Rgb, opacity: f32) {
        let Some(idx) = self.locate(x, y) else {
            return;
        };
        let glyph = particle_glyph(radius);
        let cell = &mut self.cells[idx];

        if cell.layer == Layer::Particle {
            cell.fg = blend(cell.fg, color, opacity);
            cell.symbol = larger_glyph(cell.symbol, glyph);
        } else {
            cell.fg = blend(cell.bg, color, opacity);
            cell.symbol = glyph;
            cell.layer = Layer::Particle;
        }
    }

    fn stroke_line(
        &mut self,
        from: (f32, f32),
        to: (f32, f32),
        _width: f32,
        color: Rgb,
        opacity: f32,
    ) {
        let dx = (to.0 - from.0) / CELL_WIDTH;
        let dy = (to.1 - from.1) / CELL_HEIGHT;
        let glyph = link_glyph(dx, dy);
        let steps = dx.abs().max(dy.abs()).ceil().max(1.0) as usize;

        let mut last = None;
        for step in 0..=steps {
            let t = step as f32 / steps as f32;
            let x = from.0 + (to.0 - from.0) * t;
            let y = from.1 + (to.1 - from.1) * t;
            let Some(idx) = self.locate(x, y) else {
                continue;
            };
            if last == Some(idx) {
                continue;
            }
            last = Some(idx);

            let cell = &mut self.cells[idx];
            match cell.layer {
                // Particles stay on top of the links passing through them
                Layer::Particle => {}
                Layer::Link => cell.fg = blend(cell.fg, color, opacity),
                Layer::Empty => {
                    cell.fg = blend(cell.bg, color, opacity);
                    cell.symbol = glyph;
                    cell.layer = Layer::Link;
                }
            }
        }
    }
}

fn particle_glyph(radius: f32) -> char {
    if radius < 1.75 {
        PARTICLE_CHARS[0]
    } else if radius < 2.25 {
        PARTICLE_CHARS[1]
    } else {
        PARTICLE_CHARS[2]
    }
}

fn larger_glyph(a: char, b: char) -> char {
    let rank = |c| PARTICLE_CHARS.iter().position(|p| *p == c).unwrap_or(0);
    if rank(b) > rank(a) { b } else { a }
}

/// Pick a line glyph from the direction in cell units (y grows downward).
fn link_glyph(dx: f32, dy: f32) -> char {
    if dy.abs() < 0.4 * dx.abs() {
        LINK_CHARS[0]
    } else if dx.abs() < 0.4 * dy.abs() {
        LINK_CHARS[2]
    } else if dx * dy > 0.0 {
        LINK_CHARS[3]
    } else {
        LINK_CHARS[1]
    }
}

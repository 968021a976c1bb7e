//! Background animation state management.

use log::{debug, info};
use rand::{SeedableRng, rngs::StdRng};
use ratatui::{Frame, widgets::Paragraph};

use crate::particle::ParticleField;
use crate::surface::{CELL_HEIGHT, CELL_WIDTH, CellSurface, Surface};

/// Particle background bound to the terminal frame.
#[derive(Debug)]
pub struct BackgroundState {
    /// Running simulation, if started.
    field: Option<ParticleField>,
    /// Cell raster the field draws onto.
    surface: CellSurface,
    /// Whether the background should run at all.
    enabled: bool,
    /// Upper bound on particle count.
    particle_cap: usize,
    /// Last pointer cell, replayed into a freshly started field.
    pointer: Option<(u16, u16)>,
    /// Source of particle randomness.
    rng: StdRng,
}

impl BackgroundState {
    /// Create a new background state. Nothing is simulated until the first render.
    pub fn new(enabled: bool, particle_cap: usize) -> Self {
        Self::with_rng(enabled, particle_cap, StdRng::from_entropy())
    }

    /// Create a background state with a caller supplied random source.
    pub fn with_rng(enabled: bool, particle_cap: usize, rng: StdRng) -> Self {
        Self {
            field: None,
            surface: CellSurface::new(0, 0),
            enabled,
            particle_cap,
            pointer: None,
            rng,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Whether a simulation is currently running.
    pub fn is_running(&self) -> bool {
        self.field.is_some()
    }

    pub fn field(&self) -> Option<&ParticleField> {
        self.field.as_ref()
    }

    pub fn surface(&self) -> &CellSurface {
        &self.surface
    }

    /// Turn the background on or off. Turning it off drops the simulation.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        if !enabled {
            self.stop();
        }
    }

    /// Size the surface and populate a field, unless one is already running.
    ///
    /// A zero-sized terminal leaves the background stopped.
    pub fn start(&mut self, cols: u16, rows: u16) {
        if self.field.is_some() {
            return;
        }
        if (cols, rows) != (self.surface.cols(), self.surface.rows()) {
            self.surface.resize(cols, rows);
        }

        self.field = ParticleField::start(&self.surface, self.particle_cap, &mut self.rng);
        if let Some(field) = &mut self.field {
            if let Some((col, row)) = self.pointer {
                let (x, y) = cell_center(col, row);
                field.pointer_moved(x, y);
            }
            info!(
                "particle field started: {} particles on {cols}x{rows}",
                field.particles().len()
            );
        }
    }

    /// Drop the running simulation, if any.
    pub fn stop(&mut self) {
        if self.field.take().is_some() {
            info!("particle field stopped");
        }
    }

    /// Resize the surface without reseeding the particles.
    pub fn resize(&mut self, cols: u16, rows: u16) {
        if (cols, rows) == (self.surface.cols(), self.surface.rows()) {
            return;
        }
        debug!("background surface resized to {cols}x{rows}");
        self.surface.resize(cols, rows);
    }

    /// Pointer moved to a terminal cell.
    pub fn pointer_moved(&mut self, col: u16, row: u16) {
        self.pointer = Some((col, row));
        if let Some(field) = &mut self.field {
            let (x, y) = cell_center(col, row);
            field.pointer_moved(x, y);
        }
    }

    /// Pointer left the terminal.
    pub fn pointer_left(&mut self) {
        self.pointer = None;
        if let Some(field) = &mut self.field {
            field.pointer_left();
        }
    }

    /// Advance the simulation one frame and render it to the frame.
    pub fn render(&mut self, frame: &mut Frame) {
        self.render_frame(frame, true);
    }

    /// Render the field, advancing the simulation only when `advance` is set.
    ///
    /// Redraws between animation frames keep the particles where they are.
    pub fn render_frame(&mut self, frame: &mut Frame, advance: bool) {
        if !self.enabled {
            return;
        }

        let area = frame.area();
        if self.field.is_none() {
            self.start(area.width, area.height);
        } else {
            self.resize(area.width, area.height);
        }

        let Some(field) = &mut self.field else {
            return;
        };
        if advance {
            field.frame(&mut self.surface);
        } else {
            self.surface.clear();
            field.draw(&mut self.surface);
        }

        frame.render_widget(Paragraph::new(self.surface.lines()), area);
    }
}

/// Center of a terminal cell in surface units.
fn cell_center(col: u16, row: u16) -> (f32, f32) {
    (
        (col as f32 + 0.5) * CELL_WIDTH,
        (row as f32 + 0.5) * CELL_HEIGHT,
    )
}

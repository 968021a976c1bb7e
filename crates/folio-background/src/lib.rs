//! Particle field background for the folio portfolio.
//!
//! A set of depth-shaded particles drifts across a viewport-sized surface,
//! bounces off its edges, shies away from the pointer and links up with
//! nearby neighbours through faint lines. Simulation state lives in
//! [`ParticleField`]; [`CellSurface`] rasterizes it into terminal cells and
//! [`BackgroundState`] ties both to the ratatui frame.

mod chars;
mod color;
mod particle;
mod state;
mod surface;

pub use color::{Rgb, backdrop, blend};
pub use particle::{
    CONNECTION_DISTANCE, Hue, MAX_DEPTH, MAX_PARTICLES, MIN_DEPTH, Particle, ParticleField,
    REPULSION_RADIUS, link_opacity, particle_count,
};
pub use state::BackgroundState;
pub use surface::{CELL_HEIGHT, CELL_WIDTH, Cell, CellSurface, Layer, Surface};

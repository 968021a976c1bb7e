//! Text and pointer micro-animations for the folio portfolio.
//!
//! Both effects are plain state machines driven by the host: the typewriter
//! by elapsed milliseconds, the tilt by pointer samples. Neither owns a timer
//! or an event registration, so dropping one releases everything it holds.

mod tilt;
mod typewriter;

pub use tilt::{Bounds, MAX_TILT_DEG, Tilt};
pub use typewriter::{
    CARET_BLINK_MS, DELETE_DELAY_MS, Direction, HOLD_DELAY_MS, MAX_JITTER_MS, TYPE_DELAY_MS,
    Typewriter,
};

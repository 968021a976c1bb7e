//! Mouse and focus reporting for the lifetime of the UI.

use std::io::stdout;

use crossterm::{
    event::{DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture},
    execute,
};

/// Enables pointer tracking and focus events; disables them again on drop.
#[derive(Debug)]
pub struct InputCapture;

impl InputCapture {
    pub fn enable() -> std::io::Result<Self> {
        execute!(stdout(), EnableMouseCapture, EnableFocusChange)?;
        Ok(Self)
    }
}

impl Drop for InputCapture {
    fn drop(&mut self) {
        if let Err(err) = execute!(stdout(), DisableFocusChange, DisableMouseCapture) {
            log::warn!("failed to release mouse capture: {err}");
        }
    }
}

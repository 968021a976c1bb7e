//! Pointer-driven tilt for card elements.

/// Maximum rotation on either axis, in degrees.
pub const MAX_TILT_DEG: f32 = 15.0;

/// Axis-aligned element bounds in host coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Whether the point lies inside the bounds (right and bottom edges inclusive).
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.left
            && y >= self.top
            && x <= self.left + self.width
            && y <= self.top + self.height
    }
}

/// Rotation and highlight origin of one tilted element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tilt {
    /// Rotation about the horizontal axis, driven by vertical pointer offset.
    rotate_x: f32,
    /// Rotation about the vertical axis, driven by horizontal pointer offset.
    rotate_y: f32,
    /// Highlight origin as percentages of the element size.
    highlight: (f32, f32),
    /// Whether the pointer is over the element.
    hovered: bool,
}

impl Default for Tilt {
    fn default() -> Self {
        Self {
            rotate_x: 0.0,
            rotate_y: 0.0,
            highlight: (50.0, 50.0),
            hovered: false,
        }
    }
}

impl Tilt {
    pub fn new() -> Self {
        Self::default()
    }

    /// `(rotate_x, rotate_y)` in degrees.
    pub fn rotation(&self) -> (f32, f32) {
        (self.rotate_x, self.rotate_y)
    }

    /// Highlight origin in percent of element width and height.
    pub fn highlight(&self) -> (f32, f32) {
        self.highlight
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    /// Recompute rotation and highlight from a pointer sample inside `bounds`.
    ///
    /// Zero-sized bounds leave the state untouched.
    pub fn on_pointer_move(&mut self, bounds: Bounds, px: f32, py: f32) {
        if bounds.width <= 0.0 || bounds.height <= 0.0 {
            return;
        }

        let x = px - bounds.left;
        let y = py - bounds.top;
        let cx = bounds.width / 2.0;
        let cy = bounds.height / 2.0;

        self.rotate_x = -MAX_TILT_DEG * (y - cy) / cy;
        self.rotate_y = MAX_TILT_DEG * (x - cx) / cx;
        self.highlight = (x / bounds.width * 100.0, y / bounds.height * 100.0);
        self.hovered = true;
    }

    /// Snap rotation back to neutral. The highlight keeps its last origin.
    pub fn on_pointer_leave(&mut self) {
        self.rotate_x = 0.0;
        self.rotate_y = 0.0;
        self.hovered = false;
    }

    /// Feed the latest pointer position, dispatching to move or leave.
    pub fn track(&mut self, bounds: Bounds, pointer: Option<(f32, f32)>) {
        match pointer {
            Some((x, y)) if bounds.contains(x, y) => self.on_pointer_move(bounds, x, y),
            _ if self.hovered => self.on_pointer_leave(),
            _ => {}
        }
    }
}

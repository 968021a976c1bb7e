//! Character constants for the particle field.

/// Particle glyphs from smallest to largest radius.
pub const PARTICLE_CHARS: &[char] = &['·', '•', '●'];

/// Link glyphs indexed by direction: horizontal, rising, vertical, falling.
pub const LINK_CHARS: &[char] = &['─', '╱', '│', '╲'];

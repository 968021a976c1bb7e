//! Core types shared across the folio crates.

use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// A page of the portfolio, in navigation order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Section {
    #[default]
    Home,
    Skills,
    Journey,
    Projects,
    Certs,
    Contact,
}

impl Section {
    /// All sections in navigation order.
    pub const ALL: [Section; 6] = [
        Section::Home,
        Section::Skills,
        Section::Journey,
        Section::Projects,
        Section::Certs,
        Section::Contact,
    ];

    /// Label shown in the navigation bar.
    pub fn title(self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::Skills => "Skills",
            Section::Journey => "Journey",
            Section::Projects => "Projects",
            Section::Certs => "Certs",
            Section::Contact => "Contact",
        }
    }

    /// Heading and small caps subtitle rendered at the top of the section.
    pub fn heading(self) -> (&'static str, &'static str) {
        match self {
            Section::Home => ("Home", "WELCOME"),
            Section::Skills => ("Technical Arsenal", "SKILLS & TOOLS"),
            Section::Journey => ("The Journey", "TIMELINE"),
            Section::Projects => ("Featured Projects", "WORK & LABS"),
            Section::Certs => ("Certifications", "ACHIEVEMENTS"),
            Section::Contact => ("Get In Touch", "CONNECT"),
        }
    }

    /// Position of the section in [`Section::ALL`].
    pub fn index(self) -> usize {
        Self::ALL
            .iter()
            .position(|s| *s == self)
            .unwrap_or_default()
    }

    /// Cycle to the next section, wrapping around.
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Cycle to the previous section, wrapping around.
    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// Section bound to a number key (`'1'` is Home).
    pub fn from_digit(c: char) -> Option<Self> {
        let n = c.to_digit(10)? as usize;
        n.checked_sub(1).and_then(|i| Self::ALL.get(i).copied())
    }
}

/// Accent palette used for headings, highlights and borders.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorTheme {
    /// Cyan and purple.
    #[default]
    Neon,
    /// Green and emerald.
    Matrix,
    /// Orange and pink.
    Sunset,
    /// White and gray.
    Mono,
}

impl ColorTheme {
    /// Cycle to the next color theme.
    pub fn next(self) -> Self {
        match self {
            ColorTheme::Neon => ColorTheme::Matrix,
            ColorTheme::Matrix => ColorTheme::Sunset,
            ColorTheme::Sunset => ColorTheme::Mono,
            ColorTheme::Mono => ColorTheme::Neon,
        }
    }

    /// Primary accent color.
    pub fn accent(self) -> Color {
        match self {
            ColorTheme::Neon => Color::Rgb(34, 211, 238),
            ColorTheme::Matrix => Color::Rgb(34, 197, 94),
            ColorTheme::Sunset => Color::Rgb(249, 115, 22),
            ColorTheme::Mono => Color::Rgb(229, 231, 235),
        }
    }

    /// Secondary accent, used for badges and bullets.
    pub fn secondary(self) -> Color {
        match self {
            ColorTheme::Neon => Color::Rgb(168, 85, 247),
            ColorTheme::Matrix => Color::Rgb(16, 185, 129),
            ColorTheme::Sunset => Color::Rgb(236, 72, 153),
            ColorTheme::Mono => Color::Rgb(156, 163, 175),
        }
    }
}

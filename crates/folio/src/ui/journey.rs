//! Timeline of milestones.

use folio_config::TimelineEntry;
use folio_core::ColorTheme;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Stylize},
    text::Line,
    widgets::{Paragraph, Wrap},
};

use super::centered;

const MAX_WIDTH: u16 = 80;

/// Timeline lines: a dot and year per entry, the title, then the text.
pub fn lines(entries: &[TimelineEntry], theme: ColorTheme) -> Vec<Line<'static>> {
    let mut lines = Vec::with_capacity(entries.len() * 4);
    for (i, entry) in entries.iter().enumerate() {
        lines.push(Line::from(vec![
            "◉ ".fg(theme.accent()),
            entry.year.clone().bold().fg(theme.secondary()),
        ]));
        lines.push(Line::from(vec![
            "│ ".fg(Color::DarkGray),
            entry.title.clone().bold().white(),
        ]));
        lines.push(Line::from(vec![
            "│ ".fg(Color::DarkGray),
            entry.text.clone().gray(),
        ]));
        if i + 1 < entries.len() {
            lines.push(Line::from("│".fg(Color::DarkGray)));
        }
    }
    lines
}

pub fn render(frame: &mut Frame, area: Rect, entries: &[TimelineEntry], theme: ColorTheme) {
    let lines = lines(entries, theme);
    let body = centered(area, MAX_WIDTH, area.height);
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), body);
}

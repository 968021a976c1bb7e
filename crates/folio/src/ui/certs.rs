//! Certificate grid. Plain panels, no tilt.

use folio_config::Certificate;
use folio_core::ColorTheme;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style, Stylize},
    text::Line,
    widgets::{Block, BorderType, Paragraph, Wrap},
};

use super::grid;

pub fn columns(width: u16) -> usize {
    match width {
        w if w >= 120 => 3,
        w if w >= 70 => 2,
        _ => 1,
    }
}

pub fn render(frame: &mut Frame, area: Rect, certificates: &[Certificate], theme: ColorTheme) {
    let slots = grid(area, certificates.len(), columns(area.width));
    for (cert, slot) in certificates.iter().zip(slots) {
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::new().fg(Color::DarkGray))
            .title(Line::from(format!(" {} ", cert.title).bold().white()))
            .title_bottom(
                Line::from(format!(" {} ", cert.date).fg(theme.secondary())).right_aligned(),
            );
        let lines = vec![
            Line::from(cert.issuer.clone().fg(theme.accent())),
            Line::from(cert.description.clone().gray()),
            Line::from(cert.link.clone().dark_gray()),
        ];
        frame.render_widget(
            Paragraph::new(lines).wrap(Wrap { trim: true }).block(block),
            slot,
        );
    }
}

//! Contact block.

use folio_config::Contact;
use folio_core::ColorTheme;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Stylize},
    text::Line,
    widgets::{Paragraph, Wrap},
};

use super::centered;

const MAX_WIDTH: u16 = 70;

pub fn lines(contact: &Contact, theme: ColorTheme) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(contact.pitch.clone().gray()),
        Line::default(),
        Line::from(vec!["✉ ".fg(theme.accent()), contact.email.clone().bold().white()]),
        Line::from(contact.mail_link.clone().fg(Color::DarkGray)),
        Line::default(),
    ];
    lines.extend(contact.links.iter().map(|link| {
        Line::from(vec![
            format!("{} ", link.label).fg(theme.secondary()),
            link.url.clone().underlined(),
        ])
    }));
    lines
}

pub fn render(frame: &mut Frame, area: Rect, contact: &Contact, theme: ColorTheme) {
    let body = centered(area, MAX_WIDTH, area.height);
    frame.render_widget(
        Paragraph::new(lines(contact, theme))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        body,
    );
}

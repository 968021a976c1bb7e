//! Project cards.

use folio_config::Project;
use folio_core::ColorTheme;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Stylize},
    text::Line,
};

use super::card::{TiltDeck, render_card};
use super::grid;

/// Two cards per row on wide screens.
pub fn columns(width: u16) -> usize {
    if width >= 100 { 2 } else { 1 }
}

/// Card body: tag, description, then the image or accent and the link.
pub fn body(project: &Project, theme: ColorTheme) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(
            format!(" {} ", project.tag)
                .bold()
                .fg(Color::Black)
                .bg(theme.secondary()),
        ),
        Line::default(),
        Line::from(project.description.clone().gray()),
        Line::default(),
    ];
    match &project.image {
        Some(image) => lines.push(Line::from(vec![
            "▣ ".fg(theme.accent()),
            image.clone().dark_gray(),
        ])),
        None => lines.push(Line::from(vec![
            "▤ ".fg(theme.accent()),
            project.accent.clone().dark_gray(),
        ])),
    }
    if let Some(link) = &project.link {
        lines.push(Line::from(vec!["↗ ".fg(theme.accent()), link.clone().underlined()]));
    }
    lines
}

pub fn render(
    frame: &mut Frame,
    area: Rect,
    projects: &[Project],
    deck: &mut TiltDeck,
    theme: ColorTheme,
) {
    let slots = grid(area, projects.len(), columns(area.width));
    deck.set_areas(&slots);

    for (i, (project, slot)) in projects.iter().zip(&slots).enumerate() {
        let title = Line::from(format!(" {} ", project.title).bold().white());
        render_card(frame, *slot, &deck.tilt(i), theme, title, body(project, theme));
    }
}

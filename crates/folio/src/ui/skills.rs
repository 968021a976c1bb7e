//! Skills grid of tilt cards.

use folio_config::SkillCategory;
use folio_core::ColorTheme;
use ratatui::{
    Frame,
    layout::Rect,
    style::Stylize,
    text::Line,
};

use super::card::{TiltDeck, render_card};
use super::grid;

/// Cards per row for a given width: four on wide screens, then two, then one.
pub fn columns(width: u16) -> usize {
    match width {
        w if w >= 120 => 4,
        w if w >= 60 => 2,
        _ => 1,
    }
}

pub fn render(
    frame: &mut Frame,
    area: Rect,
    skills: &[SkillCategory],
    deck: &mut TiltDeck,
    theme: ColorTheme,
) {
    let slots = grid(area, skills.len(), columns(area.width));
    deck.set_areas(&slots);

    for (i, (category, slot)) in skills.iter().zip(&slots).enumerate() {
        let title = Line::from(vec![
            format!(" {} ", category.icon).fg(theme.accent()),
            format!("{} ", category.title).bold().white(),
        ]);
        let body = category
            .items
            .iter()
            .map(|item| Line::from(vec!["› ".fg(theme.secondary()), item.clone().gray()]))
            .collect();
        render_card(frame, *slot, &deck.tilt(i), theme, title, body);
    }
}

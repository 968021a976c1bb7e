//! Hero section: typewriter headline, bio and the profile card.

use folio_config::Profile;
use folio_core::ColorTheme;
use folio_effects::Typewriter;
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Stylize},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use super::card::{TiltDeck, render_card};
use super::{centered, initials};

/// Below this width the profile card is hidden.
const CARD_MIN_WIDTH: u16 = 90;
const CARD_WIDTH: u16 = 40;
const CARD_HEIGHT: u16 = 14;

/// Caret drawn after the typed text.
pub const CARET: &str = "|";

/// The headline: typed text plus a blinking caret.
pub fn headline(typewriter: &Typewriter, theme: ColorTheme) -> Line<'static> {
    let caret = if typewriter.caret_visible() {
        Span::from(CARET).fg(theme.secondary())
    } else {
        Span::from(" ")
    };
    Line::from(vec![
        typewriter.text().to_string().bold().fg(theme.accent()),
        caret,
    ])
}

pub fn render(
    frame: &mut Frame,
    area: Rect,
    profile: &Profile,
    typewriter: &Typewriter,
    deck: &mut TiltDeck,
    theme: ColorTheme,
) {
    let show_card = area.width >= CARD_MIN_WIDTH;
    let [text_area, card_area] = if show_card {
        Layout::horizontal([Constraint::Fill(1), Constraint::Length(CARD_WIDTH + 4)]).areas(area)
    } else {
        [area, Rect::default()]
    };

    let mut lines = vec![
        Line::from(vec![
            "● ".fg(Color::Green),
            profile.status.to_uppercase().fg(Color::Green),
        ]),
        Line::default(),
        Line::from(profile.greeting.clone().white()),
        headline(typewriter, theme),
        Line::default(),
    ];
    lines.push(Line::from(profile.bio.clone().gray()));
    lines.push(Line::default());
    lines.push(Line::from(
        profile
            .highlights
            .iter()
            .flat_map(|label| {
                [
                    Span::from("◆ ").fg(theme.secondary()),
                    Span::from(format!("{label}   ")).gray(),
                ]
            })
            .collect::<Vec<_>>(),
    ));
    lines.push(Line::default());
    lines.push(Line::from(vec![
        " 4 ".bold().fg(Color::Black).bg(theme.accent()),
        " View Projects   ".white(),
        " 6 ".bold().fg(Color::Black).bg(theme.secondary()),
        " Contact Me".white(),
    ]));

    let text_box = centered(text_area, text_area.width.saturating_sub(4), lines.len() as u16 + 8);
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), text_box);

    if show_card {
        let slot = centered(card_area, CARD_WIDTH + 4, CARD_HEIGHT + 2);
        deck.set_areas(&[slot]);
        render_card(
            frame,
            slot,
            &deck.tilt(0),
            theme,
            Line::from(format!(" {} ", profile.card_id)).fg(Color::DarkGray),
            profile_card_body(profile, theme),
        );
    } else {
        deck.set_areas(&[]);
    }
}

fn profile_card_body(profile: &Profile, theme: ColorTheme) -> Vec<Line<'static>> {
    let mut body = vec![
        Line::from(vec![
            format!(" {} ", initials(&profile.name)).bold().fg(Color::Black).bg(theme.accent()),
            "  ".into(),
            format!(" {} ", profile.badge).bold().fg(theme.secondary()),
        ]),
        Line::default(),
        Line::from(profile.name.clone().bold().white()),
        Line::from(profile.handle.clone().fg(theme.accent())),
        Line::default(),
    ];
    for stat in &profile.stats {
        body.push(Line::from(vec![
            format!("{:>5} ", stat.value).bold().white(),
            stat.label.clone().dark_gray(),
        ]));
    }
    body
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};
    use ratatui::{Terminal, backend::TestBackend};

    use super::*;

    fn screen(width: u16, height: u16, typewriter: &Typewriter, deck: &mut TiltDeck) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal
            .draw(|frame| {
                render(
                    frame,
                    frame.area(),
                    &Profile::default(),
                    typewriter,
                    deck,
                    ColorTheme::Neon,
                );
            })
            .unwrap();
        let buffer = terminal.backend().buffer();
        (0..height)
            .map(|y| (0..width).map(|x| buffer[(x, y)].symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_headline_shows_typed_text_and_caret() {
        let mut typewriter = Typewriter::with_rng(vec!["Hi".into()], StdRng::seed_from_u64(1));
        typewriter.tick();
        let line = headline(&typewriter, ColorTheme::Neon);
        assert_eq!(line.to_string(), "H|");

        typewriter.update(500);
        assert!(!typewriter.caret_visible());
        assert_eq!(headline(&typewriter, ColorTheme::Neon).to_string(), "Hi ");
    }

    #[test]
    fn test_wide_screen_shows_profile_card() {
        let typewriter = Typewriter::with_rng(Vec::new(), StdRng::seed_from_u64(1));
        let mut deck = TiltDeck::new();
        let text = screen(120, 30, &typewriter, &mut deck);
        assert_eq!(deck.len(), 1);
        assert!(text.contains("@CyberAnalyst"));
        assert!(text.contains("SYSTEM ONLINE"));
    }

    #[test]
    fn test_narrow_screen_hides_profile_card() {
        let typewriter = Typewriter::with_rng(Vec::new(), StdRng::seed_from_u64(1));
        let mut deck = TiltDeck::new();
        let text = screen(60, 30, &typewriter, &mut deck);
        assert_eq!(deck.len(), 0);
        assert!(!text.contains("@CyberAnalyst"));
    }
}

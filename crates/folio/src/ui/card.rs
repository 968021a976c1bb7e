//! Tilt cards: bordered panels that lean toward the pointer.
//!
//! A terminal cannot rotate a panel, so the tilt shows up as a drop shadow
//! pushed away from the pointer and a soft violet glow centred on it.

use folio_background::{Rgb, blend};
use folio_core::ColorTheme;
use folio_effects::{Bounds, MAX_TILT_DEG, Tilt};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::Line,
    widgets::{Block, BorderType, Paragraph, Wrap},
};

/// Card fill color.
pub const CARD_BG: Rgb = Rgb(17, 14, 26);
/// Shadow fill color.
const SHADOW_BG: Rgb = Rgb(4, 2, 6);
/// Glow color at the highlight origin.
const GLOW: Rgb = Rgb(139, 92, 246);
/// Glow opacity at its center.
const GLOW_ALPHA: f32 = 0.2;
/// Glow fades out at this fraction of the card size.
const GLOW_RADIUS: f32 = 0.7;

/// Tilt state for every card on screen, indexed by draw order.
#[derive(Debug, Default)]
pub struct TiltDeck {
    tilts: Vec<Tilt>,
    areas: Vec<Rect>,
    pointer: Option<(u16, u16)>,
}

impl TiltDeck {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget all cards, e.g. when switching sections.
    pub fn reset(&mut self) {
        self.tilts.clear();
        self.areas.clear();
    }

    /// Record the slots the cards are drawn in this frame.
    pub fn set_areas(&mut self, slots: &[Rect]) {
        self.tilts.resize(slots.len(), Tilt::default());
        self.areas = slots.iter().copied().map(card_rect).collect();
        self.track();
    }

    pub fn tilt(&self, index: usize) -> Tilt {
        self.tilts.get(index).copied().unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.tilts.len()
    }

    pub fn pointer_moved(&mut self, col: u16, row: u16) {
        self.pointer = Some((col, row));
        self.track();
    }

    pub fn pointer_left(&mut self) {
        self.pointer = None;
        for tilt in &mut self.tilts {
            tilt.on_pointer_leave();
        }
    }

    fn track(&mut self) {
        let pointer = self
            .pointer
            .map(|(col, row)| (col as f32 + 0.5, row as f32 + 0.5));
        for (tilt, area) in self.tilts.iter_mut().zip(&self.areas) {
            tilt.track(bounds(*area), pointer);
        }
    }
}

fn bounds(area: Rect) -> Bounds {
    Bounds::new(
        area.x as f32,
        area.y as f32,
        area.width as f32,
        area.height as f32,
    )
}

/// Card rectangle inside a slot, leaving room for the shadow.
pub fn card_rect(slot: Rect) -> Rect {
    Rect {
        x: slot.x.saturating_add(1),
        y: slot.y,
        width: slot.width.saturating_sub(4),
        height: slot.height.saturating_sub(2),
    }
}

/// Shadow offset in cells: down-right at rest, pushed away from the pointer.
pub fn shadow_offset(tilt: &Tilt) -> (i16, i16) {
    let (rotate_x, rotate_y) = tilt.rotation();
    let dx = 1 - (rotate_y / MAX_TILT_DEG * 2.0).round() as i16;
    let dy = 1 + (rotate_x / MAX_TILT_DEG).round() as i16;
    (dx, dy)
}

/// Glow opacity at `(u, v)`, given in percent of the card size.
pub fn glow_alpha(tilt: &Tilt, u: f32, v: f32) -> f32 {
    if !tilt.is_hovered() {
        return 0.0;
    }
    let (hx, hy) = tilt.highlight();
    let distance = ((u - hx).powi(2) + (v - hy).powi(2)).sqrt() / 100.0;
    GLOW_ALPHA * (1.0 - distance / GLOW_RADIUS).max(0.0)
}

/// Draw a tilt card in `slot`.
pub fn render_card(
    frame: &mut Frame,
    slot: Rect,
    tilt: &Tilt,
    theme: ColorTheme,
    title: Line<'static>,
    body: Vec<Line<'static>>,
) {
    let card = card_rect(slot);
    if card.width < 3 || card.height < 3 {
        return;
    }

    let (dx, dy) = shadow_offset(tilt);
    let shadow = Rect {
        x: (card.x as i32 + dx as i32).max(0) as u16,
        y: (card.y as i32 + dy as i32).max(0) as u16,
        ..card
    }
    .intersection(slot);
    frame.render_widget(
        Block::new().style(Style::new().bg(SHADOW_BG.into())),
        shadow,
    );

    let border = if tilt.is_hovered() {
        theme.accent()
    } else {
        Color::DarkGray
    };
    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(Style::new().fg(border))
        .style(Style::new().bg(CARD_BG.into()))
        .title(title);
    let inner = block.inner(card);
    frame.render_widget(block, card);
    frame.render_widget(Paragraph::new(body).wrap(Wrap { trim: true }), inner);

    if tilt.is_hovered() {
        apply_glow(frame, card, tilt);
    }
}

fn apply_glow(frame: &mut Frame, card: Rect, tilt: &Tilt) {
    let area = card.intersection(frame.area());
    let buf = frame.buffer_mut();
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            let u = (x - card.x) as f32 / card.width as f32 * 100.0;
            let v = (y - card.y) as f32 / card.height as f32 * 100.0;
            let alpha = glow_alpha(tilt, u, v);
            if alpha <= 0.0 {
                continue;
            }
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.set_bg(blend(CARD_BG, GLOW, alpha).into());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use ratatui::{Terminal, backend::TestBackend};

    use super::*;

    #[test]
    fn test_shadow_at_rest_and_tilted() {
        let mut tilt = Tilt::new();
        assert_eq!(shadow_offset(&tilt), (1, 1));

        let card = Bounds::new(0.0, 0.0, 20.0, 10.0);
        tilt.on_pointer_move(card, 0.0, 0.0);
        assert_eq!(shadow_offset(&tilt), (3, 2));
        tilt.on_pointer_move(card, 20.0, 10.0);
        assert_eq!(shadow_offset(&tilt), (-1, 0));
        tilt.on_pointer_leave();
        assert_eq!(shadow_offset(&tilt), (1, 1));
    }

    #[test]
    fn test_glow_peaks_at_highlight() {
        let mut tilt = Tilt::new();
        assert_eq!(glow_alpha(&tilt, 50.0, 50.0), 0.0);

        tilt.on_pointer_move(Bounds::new(0.0, 0.0, 10.0, 10.0), 2.5, 2.5);
        assert_eq!(glow_alpha(&tilt, 25.0, 25.0), GLOW_ALPHA);
        assert!(glow_alpha(&tilt, 50.0, 50.0) < GLOW_ALPHA);
        assert_eq!(glow_alpha(&tilt, 100.0, 100.0), 0.0);
    }

    #[test]
    fn test_deck_tracks_pointer_over_cards() {
        let mut deck = TiltDeck::new();
        let left = Rect::new(0, 0, 10, 6);
        let right = Rect::new(10, 0, 10, 6);
        deck.set_areas(&[left, right]);
        assert_eq!(deck.len(), 2);

        deck.pointer_moved(12, 1);
        assert!(!deck.tilt(0).is_hovered());
        assert!(deck.tilt(1).is_hovered());

        deck.pointer_moved(3, 3);
        assert!(deck.tilt(0).is_hovered());
        assert!(!deck.tilt(1).is_hovered());
        assert_eq!(deck.tilt(1).rotation(), (0.0, 0.0));

        deck.pointer_left();
        assert!(!deck.tilt(0).is_hovered());
    }

    #[test]
    fn test_deck_applies_pointer_to_new_layout() {
        let mut deck = TiltDeck::new();
        deck.pointer_moved(5, 2);
        deck.set_areas(&[Rect::new(0, 0, 10, 6)]);
        assert!(deck.tilt(0).is_hovered());

        deck.reset();
        assert_eq!(deck.len(), 0);
        assert_eq!(deck.tilt(0), Tilt::default());
    }

    #[test]
    fn test_render_card_draws_border_and_body() {
        let mut terminal = Terminal::new(TestBackend::new(30, 10)).unwrap();
        terminal
            .draw(|frame| {
                render_card(
                    frame,
                    Rect::new(0, 0, 30, 10),
                    &Tilt::new(),
                    ColorTheme::Neon,
                    Line::from("Title"),
                    vec![Line::from("body text")],
                );
            })
            .unwrap();
        let buffer = terminal.backend().buffer();
        assert_eq!(buffer[(1, 0)].symbol(), "╭");
        let row: String = (0..30u16).map(|x| buffer[(x, 1)].symbol()).collect();
        assert!(row.contains("body text"), "{row}");
    }
}

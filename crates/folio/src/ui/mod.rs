//! Screen layout: navigation bar, section bodies and footer.

pub mod card;
pub mod certs;
pub mod contact;
pub mod home;
pub mod journey;
pub mod projects;
pub mod skills;

use chrono::{Datelike, Local};
use folio_core::{ColorTheme, Section};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
};

/// Logo text built from the first two initials of `name`, e.g. `K.V`.
pub fn initials(name: &str) -> String {
    let letters: Vec<String> = name
        .split_whitespace()
        .take(2)
        .filter_map(|word| word.chars().next())
        .map(|c| c.to_uppercase().to_string())
        .collect();
    letters.join(".")
}

/// Top navigation bar with the logo and one tab per section.
pub fn render_nav(frame: &mut Frame, area: Rect, name: &str, active: Section, theme: ColorTheme) {
    let block = Block::new()
        .borders(Borders::BOTTOM)
        .border_style(Style::new().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let logo = Line::from(vec![
        " ∑ ".bold().fg(Color::Black).bg(theme.accent()),
        " ".into(),
        initials(name).bold().white(),
        ".dev".dark_gray(),
    ]);
    let logo_width = logo.width() as u16 + 2;
    let [logo_area, tabs_area] =
        Layout::horizontal([Constraint::Length(logo_width), Constraint::Fill(1)]).areas(inner);

    frame.render_widget(Paragraph::new(logo), logo_area);

    let titles: Vec<Line> = Section::ALL
        .iter()
        .enumerate()
        .map(|(i, section)| {
            Line::from(vec![
                Span::styled(format!("{} ", i + 1), Style::new().fg(Color::DarkGray)),
                Span::raw(section.title().to_uppercase()),
            ])
        })
        .collect();
    let tabs = Tabs::new(titles)
        .select(active.index())
        .style(Style::new().fg(Color::Gray))
        .highlight_style(
            Style::new()
                .fg(theme.accent())
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        )
        .divider(" ");
    frame.render_widget(tabs, tabs_area);
}

/// Section heading: subtitle chip, title with a trailing dot, underline.
///
/// Returns the area left below the heading.
pub fn render_section_title(
    frame: &mut Frame,
    area: Rect,
    section: Section,
    theme: ColorTheme,
) -> Rect {
    let (title, subtitle) = section.heading();
    let [heading, rest] =
        Layout::vertical([Constraint::Length(4), Constraint::Fill(1)]).areas(area);

    let lines = vec![
        Line::from(format!(" {subtitle} ").fg(theme.accent())),
        Line::from(vec![title.bold().white(), ".".bold().fg(theme.secondary())]),
        Line::from("━━━━━━━━━━━━".fg(theme.accent())),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), heading);
    rest
}

/// Split `area` into a grid of `count` slots with `columns` per row.
pub fn grid(area: Rect, count: usize, columns: usize) -> Vec<Rect> {
    if count == 0 || columns == 0 {
        return Vec::new();
    }
    let rows = count.div_ceil(columns);
    let row_areas = Layout::vertical(vec![Constraint::Ratio(1, rows as u32); rows]).split(area);
    row_areas
        .iter()
        .flat_map(|row| {
            Layout::horizontal(vec![Constraint::Ratio(1, columns as u32); columns])
                .split(*row)
                .to_vec()
        })
        .take(count)
        .collect()
}

/// Center a box of at most `width` x `height` inside `area`.
pub fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Footer with key help on the left and the clock on the right.
pub fn render_footer(
    frame: &mut Frame,
    area: Rect,
    name: &str,
    theme: ColorTheme,
    background: bool,
) {
    let color = theme.accent();
    let help = Line::from(vec![
        "q".bold().fg(color),
        " quit  ".dark_gray(),
        "←/→".bold().fg(color),
        " section  ".dark_gray(),
        "b".bold().fg(color),
        if background {
            " background on  ".dark_gray()
        } else {
            " background off  ".dark_gray()
        },
        "c".bold().fg(color),
        " cycle color".dark_gray(),
    ]);

    let now = Local::now();
    let stamp = Line::from(vec![
        format!("© {} {}  ", now.year(), name).dark_gray(),
        now.format("%H:%M:%S").to_string().fg(color),
    ]);

    let [left, right] = Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Length(stamp.width() as u16),
    ])
    .areas(area);
    frame.render_widget(Paragraph::new(help), left);
    frame.render_widget(Paragraph::new(stamp), right);
}

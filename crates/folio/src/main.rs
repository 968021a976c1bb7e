mod input;
mod logging;
mod ui;

use std::time::{Duration, Instant};

use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent, MouseEventKind,
};
use folio_background::BackgroundState;
use folio_config::Config;
use folio_core::{ColorTheme, Section};
use folio_effects::Typewriter;
use log::{debug, info};
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Layout},
};

use crate::input::InputCapture;
use crate::ui::card::TiltDeck;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    if let Some(path) = logging::init() {
        debug!("log file at {}", path.display());
    }
    let config = Config::load()?;

    let terminal = ratatui::init();
    let result = run(terminal, config);
    ratatui::restore();
    result
}

fn run(terminal: DefaultTerminal, config: Config) -> color_eyre::Result<()> {
    let _capture = InputCapture::enable()?;
    App::new(config).run(terminal)
}

/// The main application which holds the state and logic of the application.
#[derive(Debug)]
pub struct App {
    /// Is the application running?
    running: bool,
    /// Section on screen.
    section: Section,
    /// Current color theme.
    theme: ColorTheme,
    /// Portfolio content and animation settings.
    config: Config,
    /// Particle background.
    background: BackgroundState,
    /// Hero headline.
    typewriter: Typewriter,
    /// Tilt state of the cards in the current section.
    cards: TiltDeck,
    /// Time between frames.
    frame_interval: Duration,
    /// When the background next advances.
    next_frame: Instant,
    /// Terminal size at the last render.
    viewport: (u16, u16),
    /// Reference point for the typewriter clock.
    started: Instant,
}

impl App {
    /// Construct a new instance of [`App`].
    pub fn new(config: Config) -> Self {
        let animation = &config.animation;
        let frame_interval =
            Duration::from_secs_f64(1.0 / f64::from(animation.frame_rate.max(1)));
        let started = Instant::now();
        Self {
            running: false,
            section: Section::default(),
            theme: animation.theme,
            background: BackgroundState::new(animation.background, animation.particle_cap),
            typewriter: Typewriter::new(config.profile.phrases.clone()),
            cards: TiltDeck::new(),
            frame_interval,
            next_frame: started,
            viewport: (0, 0),
            started,
            config,
        }
    }

    /// Run the application's main loop.
    pub fn run(mut self, mut terminal: DefaultTerminal) -> color_eyre::Result<()> {
        info!(
            "starting at {:.0} fps",
            1.0 / self.frame_interval.as_secs_f64()
        );
        self.running = true;
        while self.running {
            let now = Instant::now();
            let advance = now >= self.next_frame;
            if advance {
                self.next_frame = now + self.frame_interval;
            }
            self.typewriter
                .update(self.started.elapsed().as_millis() as u64);
            terminal.draw(|frame| self.render(frame, advance))?;
            self.handle_crossterm_events(self.next_wakeup())?;
        }
        self.background.stop();
        Ok(())
    }

    /// Next background frame or typewriter change, whichever comes first.
    fn next_wakeup(&self) -> Instant {
        let typewriter = self.started + Duration::from_millis(self.typewriter.next_deadline_ms());
        self.next_frame.min(typewriter)
    }

    /// Renders the user interface. The background moves only when `advance` is set.
    fn render(&mut self, frame: &mut Frame, advance: bool) {
        self.background.render_frame(frame, advance);
        self.viewport = (frame.area().width, frame.area().height);

        let [nav, body, footer] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .areas(frame.area());

        let config = &self.config;
        ui::render_nav(frame, nav, &config.profile.name, self.section, self.theme);

        let content = match self.section {
            Section::Home => body,
            section => ui::render_section_title(frame, body, section, self.theme),
        };
        match self.section {
            Section::Home => ui::home::render(
                frame,
                content,
                &config.profile,
                &self.typewriter,
                &mut self.cards,
                self.theme,
            ),
            Section::Skills => {
                ui::skills::render(frame, content, &config.skills, &mut self.cards, self.theme)
            }
            Section::Journey => ui::journey::render(frame, content, &config.journey, self.theme),
            Section::Projects => {
                ui::projects::render(frame, content, &config.projects, &mut self.cards, self.theme)
            }
            Section::Certs => ui::certs::render(frame, content, &config.certificates, self.theme),
            Section::Contact => ui::contact::render(frame, content, &config.contact, self.theme),
        }

        ui::render_footer(
            frame,
            footer,
            &config.profile.name,
            self.theme,
            self.background.is_enabled(),
        );
    }

    /// Reads the crossterm events until `deadline`.
    fn handle_crossterm_events(&mut self, deadline: Instant) -> color_eyre::Result<()> {
        while self.running {
            let timeout = deadline.saturating_duration_since(Instant::now());
            if !event::poll(timeout)? {
                break;
            }
            self.on_event(event::read()?);
        }
        Ok(())
    }

    fn on_event(&mut self, event: Event) {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.on_key_event(key),
            Event::Mouse(mouse) => self.on_mouse_event(mouse),
            Event::FocusLost => {
                self.background.pointer_left();
                self.cards.pointer_left();
            }
            _ => {}
        }
    }

    /// Handles the key events and updates the state of [`App`].
    fn on_key_event(&mut self, key: KeyEvent) {
        match (key.modifiers, key.code) {
            (_, KeyCode::Esc | KeyCode::Char('q'))
            | (KeyModifiers::CONTROL, KeyCode::Char('c') | KeyCode::Char('C')) => self.quit(),
            (_, KeyCode::Right | KeyCode::Tab | KeyCode::Char('l')) => {
                self.select(self.section.next())
            }
            (_, KeyCode::Left | KeyCode::BackTab | KeyCode::Char('h')) => {
                self.select(self.section.prev())
            }
            (_, KeyCode::Char('b')) => self.toggle_background(),
            (_, KeyCode::Char('c')) => self.cycle_color_theme(),
            (_, KeyCode::Char(c)) => {
                if let Some(section) = Section::from_digit(c) {
                    self.select(section);
                }
            }
            _ => {}
        }
    }

    /// Terminals report no event when the mouse leaves the window, so a move
    /// onto the outermost cells counts as leaving.
    fn on_mouse_event(&mut self, mouse: MouseEvent) {
        if !matches!(mouse.kind, MouseEventKind::Moved | MouseEventKind::Drag(_)) {
            return;
        }
        if on_edge(mouse.column, mouse.row, self.viewport) {
            self.background.pointer_left();
            self.cards.pointer_left();
        } else {
            self.background.pointer_moved(mouse.column, mouse.row);
            self.cards.pointer_moved(mouse.column, mouse.row);
        }
    }

    /// Switch sections. Cards of the old section are forgotten.
    fn select(&mut self, section: Section) {
        if section != self.section {
            debug!("section {:?} -> {:?}", self.section, section);
            self.section = section;
            self.cards.reset();
        }
    }

    fn toggle_background(&mut self) {
        let enabled = !self.background.is_enabled();
        info!("background {}", if enabled { "enabled" } else { "disabled" });
        self.background.set_enabled(enabled);
    }

    /// Cycle through available color themes.
    fn cycle_color_theme(&mut self) {
        self.theme = self.theme.next();
    }

    /// Set running to false to quit the application.
    fn quit(&mut self) {
        self.running = false;
    }
}

/// Whether a cell lies on the border of a `(cols, rows)` viewport.
fn on_edge(col: u16, row: u16, (cols, rows): (u16, u16)) -> bool {
    if cols == 0 || rows == 0 {
        return false;
    }
    col == 0 || row == 0 || col + 1 >= cols || row + 1 >= rows
}

#[cfg(test)]
mod tests {
    use ratatui::{Terminal, backend::TestBackend};

    use super::*;

    fn app() -> App {
        let mut app = App::new(Config::default());
        app.running = true;
        app
    }

    fn press(app: &mut App, code: KeyCode) {
        app.on_event(Event::Key(KeyEvent::new(code, KeyModifiers::NONE)));
    }

    fn mouse_move(app: &mut App, column: u16, row: u16) {
        app.on_event(Event::Mouse(MouseEvent {
            kind: MouseEventKind::Moved,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }));
    }

    fn draw(app: &mut App, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|frame| app.render(frame, true)).unwrap();
        let buffer = terminal.backend().buffer();
        (0..height)
            .map(|y| (0..width).map(|x| buffer[(x, y)].symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_quit_keys() {
        for code in [KeyCode::Char('q'), KeyCode::Esc] {
            let mut app = app();
            press(&mut app, code);
            assert!(!app.running);
        }

        let mut app = app();
        app.on_event(Event::Key(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL,
        )));
        assert!(!app.running);
    }

    #[test]
    fn test_section_navigation() {
        let mut app = app();
        press(&mut app, KeyCode::Right);
        assert_eq!(app.section, Section::Skills);
        press(&mut app, KeyCode::Left);
        press(&mut app, KeyCode::Left);
        assert_eq!(app.section, Section::Contact);
        press(&mut app, KeyCode::Char('4'));
        assert_eq!(app.section, Section::Projects);
        press(&mut app, KeyCode::Char('9'));
        assert_eq!(app.section, Section::Projects);
    }

    #[test]
    fn test_toggles() {
        let mut app = app();
        assert!(app.background.is_enabled());
        press(&mut app, KeyCode::Char('b'));
        assert!(!app.background.is_enabled());

        press(&mut app, KeyCode::Char('c'));
        assert_eq!(app.theme, ColorTheme::Matrix);
        assert!(app.running);
    }

    #[test]
    fn test_render_starts_background_and_shows_nav() {
        let mut app = app();
        let screen = draw(&mut app, 120, 32);
        assert!(app.background.is_running());
        assert!(screen.contains("HOME"));
        assert!(screen.contains("CONTACT"));
        assert!(screen.contains("K.V.dev"));
    }

    #[test]
    fn test_section_change_resets_cards() {
        let mut app = app();
        press(&mut app, KeyCode::Char('2'));
        draw(&mut app, 120, 32);
        assert_eq!(app.cards.len(), app.config.skills.len());

        press(&mut app, KeyCode::Char('3'));
        assert_eq!(app.cards.len(), 0);
        let screen = draw(&mut app, 120, 32);
        assert!(screen.contains("The Journey"));
    }

    #[test]
    fn test_pointer_reaches_background_and_cards() {
        let mut app = app();
        press(&mut app, KeyCode::Char('2'));
        draw(&mut app, 120, 32);

        mouse_move(&mut app, 10, 10);
        let field = app.background.field().unwrap();
        assert_eq!(field.pointer(), Some((84.0, 168.0)));
        assert!((0..app.cards.len()).any(|i| app.cards.tilt(i).is_hovered()));

        app.on_event(Event::FocusLost);
        assert_eq!(app.background.field().unwrap().pointer(), None);
        assert!((0..app.cards.len()).all(|i| !app.cards.tilt(i).is_hovered()));
    }

    #[test]
    fn test_edge_cells() {
        assert!(on_edge(0, 5, (80, 24)));
        assert!(on_edge(79, 5, (80, 24)));
        assert!(on_edge(10, 23, (80, 24)));
        assert!(!on_edge(1, 1, (80, 24)));
        assert!(!on_edge(0, 0, (0, 0)));
    }

    #[test]
    fn test_pointer_on_window_edge_counts_as_leaving() {
        let mut app = app();
        press(&mut app, KeyCode::Char('2'));
        draw(&mut app, 120, 32);

        mouse_move(&mut app, 10, 10);
        assert!(app.background.field().unwrap().pointer().is_some());

        mouse_move(&mut app, 119, 10);
        assert_eq!(app.background.field().unwrap().pointer(), None);
        assert!((0..app.cards.len()).all(|i| !app.cards.tilt(i).is_hovered()));

        mouse_move(&mut app, 10, 0);
        assert_eq!(app.background.field().unwrap().pointer(), None);
    }

    #[test]
    fn test_low_frame_rate_still_wakes_for_caret() {
        let mut config = Config::default();
        config.animation.frame_rate = 1;
        let mut app = App::new(config);
        app.next_frame = app.started + app.frame_interval;

        let mut carets = Vec::new();
        for _ in 0..40 {
            let wakeup = app.next_wakeup();
            assert!(wakeup <= app.next_frame);
            if wakeup == app.next_frame {
                app.next_frame += app.frame_interval;
            }
            let elapsed = wakeup.duration_since(app.started).as_millis() as u64;
            if elapsed > 2 * 1000 {
                break;
            }
            let before = app.typewriter.caret_visible();
            app.typewriter.update(elapsed);
            if app.typewriter.caret_visible() != before {
                carets.push(app.typewriter.caret_visible());
            }
        }
        assert_eq!(carets, vec![false, true, false, true]);
    }
}

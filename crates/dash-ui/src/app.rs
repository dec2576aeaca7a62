//! Application state and TUI event loop for the sales dashboard.
//!
//! [`App`] owns the theme, the scroll position, and the session cache.  The
//! dashboard body is rebuilt from the cached canonical table on every reload;
//! scrolling only moves a viewport over the prepared lines.

use std::io;
use std::time::Duration;

use crossterm::{
    event::{self, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, text::Line, widgets::Paragraph, Frame, Terminal};

use dash_data::publisher;
use dash_runtime::SessionCache;

use crate::dashboard;
use crate::themes::Theme;

/// Rows jumped by PageUp / PageDown.
const PAGE_STEP: u16 = 10;

// ── App ───────────────────────────────────────────────────────────────────────

/// Root application state for the dashboard TUI.
pub struct App {
    /// Active colour theme.
    pub theme: Theme,
    /// Top line of the visible viewport.
    pub scroll: u16,
    /// Set to `true` to break out of the event loop on the next iteration.
    pub should_quit: bool,
    cache: SessionCache,
    body: Vec<Line<'static>>,
}

impl App {
    /// Construct the application and perform the initial load.
    pub fn new(theme_name: &str, cache: SessionCache) -> Self {
        let mut app = Self {
            theme: Theme::from_name(theme_name),
            scroll: 0,
            should_quit: false,
            cache,
            body: Vec::new(),
        };
        app.reload();
        app
    }

    /// Run the dashboard event loop until the user quits.
    ///
    /// Uses `crossterm::event::poll` with a 250 ms timeout so redraws stay
    /// responsive without spinning.  The loop exits on `q`, `Q`, or `Ctrl+C`.
    pub fn run(mut self) -> io::Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let tick_rate = Duration::from_millis(250);

        let result = loop {
            terminal.draw(|frame| self.render(frame))?;

            if event::poll(tick_rate)? {
                if let Event::Key(key) = event::read()? {
                    match key.code {
                        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                            break Ok(());
                        }
                        KeyCode::Char('q') | KeyCode::Char('Q') => break Ok(()),
                        KeyCode::Char('r') | KeyCode::Char('R') => {
                            self.cache.invalidate();
                            self.reload();
                        }
                        KeyCode::Up => self.scroll_up(1),
                        KeyCode::Down => self.scroll_down(1),
                        KeyCode::PageUp => self.scroll_up(PAGE_STEP),
                        KeyCode::PageDown => self.scroll_down(PAGE_STEP),
                        KeyCode::Home => self.scroll = 0,
                        _ => {}
                    }
                }
            }

            if self.should_quit {
                break Ok(());
            }
        };

        // Restore terminal state unconditionally.
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }

    // ── Data ─────────────────────────────────────────────────────────────────

    /// Rebuild the dashboard body from the session cache.
    ///
    /// A failed load replaces the body with an error banner; the views are
    /// never partially drawn over stale data.
    pub fn reload(&mut self) {
        self.body = match self.cache.get() {
            Ok(table) => dashboard::dashboard_lines(&publisher::publish(table), &self.theme),
            Err(err) => dashboard::error_lines(&err.to_string(), &self.theme),
        };
        self.scroll = 0;
    }

    // ── Scrolling ────────────────────────────────────────────────────────────

    pub fn scroll_up(&mut self, step: u16) {
        self.scroll = self.scroll.saturating_sub(step);
    }

    pub fn scroll_down(&mut self, step: u16) {
        let max = (self.body.len() as u16).saturating_sub(1);
        self.scroll = (self.scroll + step).min(max);
    }

    // ── Rendering ────────────────────────────────────────────────────────────

    fn render(&self, frame: &mut Frame) {
        let area = frame.area();
        let body = Paragraph::new(self.body.clone()).scroll((self.scroll, 0));
        frame.render_widget(body, area);
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

//! Application state and event loop
//!
//! One mount = one fetch. The request runs on a background thread and
//! resolves exactly once into Ready or Failed; there is no retry short
//! of relaunching.

use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::{
    buffer::Buffer, layout::Rect, style::Style, widgets::Widget, DefaultTerminal, Frame,
};

use crate::services::{GitHubClient, GridBuilder};
use crate::tui::theme::Theme;
use crate::types::{ContributionDay, GridViewModel, DAYS_PER_WEEK};

use super::widgets::{
    calendar::{CalendarView, GRID_HEIGHT},
    legend::Legend,
    spinner::Spinner,
};

const KEY_HINTS: &str = "←↓↑→ move · q quit";

/// Application state; transitions only Loading → Ready | Failed
pub enum AppState {
    /// Fetch in flight, spinner animating
    Loading { spinner_frame: usize },
    /// Grid fetched and derived
    Ready { data: Box<GridViewModel> },
    /// Fetch failed; the message is the sole content for this mount
    Failed { message: String },
}

/// Main application
pub struct App {
    state: AppState,
    should_quit: bool,
    /// Selected day as (week index, weekday index)
    cursor: (usize, usize),
    theme: Theme,
}

impl App {
    /// Create a new app in loading state
    pub fn new(theme: Theme) -> Self {
        Self {
            state: AppState::Loading { spinner_frame: 0 },
            should_quit: false,
            cursor: (0, 0),
            theme,
        }
    }

    /// Apply the single fetch result. Ignored unless still loading, so
    /// the Loading → Ready|Failed transition happens at most once.
    fn apply_fetch_result(&mut self, result: Result<Box<GridViewModel>, String>) {
        if !matches!(self.state, AppState::Loading { .. }) {
            return;
        }
        match result {
            Ok(data) => {
                self.cursor = latest_cell(&data);
                self.state = AppState::Ready { data };
            }
            Err(message) => self.state = AppState::Failed { message },
        }
    }

    /// Handle keyboard events
    pub fn handle_event(&mut self, event: Event) {
        if let Event::Key(key) = event {
            if key.kind == KeyEventKind::Press {
                match key.code {
                    KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                        self.should_quit = true;
                    }
                    KeyCode::Left | KeyCode::Char('h') => self.move_cursor(-1, 0),
                    KeyCode::Right | KeyCode::Char('l') => self.move_cursor(1, 0),
                    KeyCode::Up | KeyCode::Char('k') => self.move_cursor(0, -1),
                    KeyCode::Down | KeyCode::Char('j') => self.move_cursor(0, 1),
                    _ => {}
                }
            }
        }
    }

    /// Move the day cursor, clamped to the grid
    fn move_cursor(&mut self, week_delta: isize, day_delta: isize) {
        if let AppState::Ready { data } = &self.state {
            if data.weeks.is_empty() {
                return;
            }
            let (week, day) = self.cursor;
            let week = week
                .saturating_add_signed(week_delta)
                .min(data.weeks.len() - 1);
            let day = day.saturating_add_signed(day_delta).min(DAYS_PER_WEEK - 1);
            self.cursor = (week, day);
        }
    }

    /// Day under the cursor, if that slot is occupied
    fn selected_day(&self) -> Option<&ContributionDay> {
        match &self.state {
            AppState::Ready { data } => data
                .weeks
                .get(self.cursor.0)
                .and_then(|week| week.day(self.cursor.1)),
            _ => None,
        }
    }

    /// Update spinner animation
    pub fn tick(&mut self) {
        if let AppState::Loading { spinner_frame } = &self.state {
            self.state = AppState::Loading {
                spinner_frame: Spinner::next_frame(*spinner_frame),
            };
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Draw the application
    pub fn draw(&self, frame: &mut Frame) {
        frame.render_widget(self, frame.area());
    }
}

/// Most recent occupied cell; the cursor starts on today
fn latest_cell(model: &GridViewModel) -> (usize, usize) {
    for (week_index, week) in model.weeks.iter().enumerate().rev() {
        for weekday in (0..DAYS_PER_WEEK).rev() {
            if week.day(weekday).is_some() {
                return (week_index, weekday);
            }
        }
    }
    (0, 0)
}

impl Widget for &App {
    fn render(self, area: Rect, buf: &mut Buffer) {
        match &self.state {
            AppState::Loading { spinner_frame } => {
                Spinner::new(*spinner_frame).render(area, buf);
            }
            AppState::Ready { data } => {
                let grid_area = Rect {
                    height: GRID_HEIGHT.min(area.height),
                    ..area
                };
                CalendarView::new(data, self.theme)
                    .with_cursor(self.cursor)
                    .render(grid_area, buf);

                let legend_y = area.y + GRID_HEIGHT + 1;
                if legend_y < area.y + area.height && area.width >= Legend::width() {
                    let x = area.x + (area.width - Legend::width()) / 2;
                    Legend::new(self.theme).render(Rect::new(x, legend_y, Legend::width(), 1), buf);
                }

                let tooltip_y = legend_y + 2;
                if tooltip_y < area.y + area.height {
                    if let Some(day) = self.selected_day() {
                        let tooltip = day.tooltip();
                        let x =
                            area.x + (area.width.saturating_sub(tooltip.len() as u16)) / 2;
                        buf.set_string(
                            x,
                            tooltip_y,
                            &tooltip,
                            Style::default().fg(self.theme.text()),
                        );
                    }
                }

                let hint_y = area.y + area.height.saturating_sub(1);
                if hint_y > tooltip_y {
                    let x = area.x
                        + (area.width.saturating_sub(KEY_HINTS.chars().count() as u16)) / 2;
                    buf.set_string(x, hint_y, KEY_HINTS, Style::default().fg(self.theme.muted()));
                }
            }
            AppState::Failed { message } => {
                let y = area.y + area.height / 2;
                let x = area.x + (area.width.saturating_sub(message.len() as u16)) / 2;
                buf.set_string(x, y, message, Style::default().fg(self.theme.error()));
            }
        }
    }
}

/// Run the TUI application
pub fn run(username: String, token: Option<String>) -> anyhow::Result<()> {
    // Theme detection reads the terminal background and must happen
    // before entering raw mode
    let theme = Theme::detect();
    let mut terminal = ratatui::init();
    let result = run_app(&mut terminal, theme, username, token);
    ratatui::restore();
    result
}

fn run_app(
    terminal: &mut DefaultTerminal,
    theme: Theme,
    username: String,
    token: Option<String>,
) -> anyhow::Result<()> {
    let mut app = App::new(theme);

    // Single fetch for this mount. If the user quits first, the send
    // fails harmlessly and the result is dropped.
    let (data_tx, data_rx) = mpsc::channel();
    thread::spawn(move || {
        let builder = GridBuilder::new(GitHubClient::new(token));
        let result = builder
            .fetch_and_build(&username)
            .map(Box::new)
            .map_err(|e| e.to_string());
        let _ = data_tx.send(result);
    });

    loop {
        terminal.draw(|frame| app.draw(frame))?;

        if app.should_quit() {
            break;
        }

        // Check for fetch completion (non-blocking)
        if matches!(app.state, AppState::Loading { .. }) {
            if let Ok(result) = data_rx.try_recv() {
                app.apply_fetch_result(result);
            }
        }

        // Poll for events with 100ms timeout for spinner animation
        if event::poll(Duration::from_millis(100))? {
            app.handle_event(event::read()?);
        } else {
            app.tick();
        }
    }

    Ok(())
}

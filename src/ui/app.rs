//! Main application state and UI loop
//!
//! Contains the App struct and the key/draw loop shared by the museum tour
//! and the planner.

use crate::consts::cli_consts::{SPLASH_SECS, UI_POLL_MS};
use crate::ui::museum::{KeyOutcome, MuseumState, render_museum};
use crate::ui::planner::{PlannerState, render_planner};
use crate::ui::splash::render_splash;
use crossterm::event::{self, Event, KeyCode};
use ratatui::{Frame, Terminal, backend::Backend};
use std::time::{Duration, Instant};

/// UI configuration data grouped by concern
#[derive(Debug, Clone)]
pub struct UIConfig {
    pub with_background_color: bool,
}

impl UIConfig {
    pub fn new(with_background_color: bool) -> Self {
        Self {
            with_background_color,
        }
    }
}

/// The different screens in the application.
#[derive(Debug)]
pub enum Screen {
    /// Splash screen shown at the start of the application.
    Splash,
    /// Museum tour.
    Museum(Box<MuseumState>),
    /// Student planner dashboard.
    Planner(Box<PlannerState>),
}

/// Application state
#[derive(Debug)]
pub struct App {
    /// The current screen being displayed in the application.
    current_screen: Screen,

    /// Screen to switch to once the splash is dismissed.
    next_screen: Option<Screen>,
}

impl App {
    /// Creates an application that shows the splash, then `screen`.
    pub fn new(screen: Screen) -> Self {
        Self {
            current_screen: Screen::Splash,
            next_screen: Some(screen),
        }
    }

    fn leave_splash(&mut self) {
        if let Some(next) = self.next_screen.take() {
            self.current_screen = next;
        }
    }
}

/// Runs the application UI in a loop, handling events and rendering the appropriate screen.
pub async fn run<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> std::io::Result<()> {
    let splash_start = Instant::now();
    let splash_duration = Duration::from_secs(SPLASH_SECS);

    loop {
        if let Screen::Museum(state) = &mut app.current_screen {
            state.update();
        }
        terminal.draw(|f| render(f, &app))?;

        if matches!(app.current_screen, Screen::Splash) && splash_start.elapsed() >= splash_duration
        {
            app.leave_splash();
            continue;
        }

        if event::poll(Duration::from_millis(UI_POLL_MS))? {
            if let Event::Key(key) = event::read()? {
                // Skip events that are not KeyEventKind::Press
                if key.kind == event::KeyEventKind::Release {
                    continue;
                }

                let outcome = match &mut app.current_screen {
                    Screen::Splash => {
                        if key.code == KeyCode::Char('q') {
                            KeyOutcome::Quit
                        } else {
                            // Any other key skips the splash screen
                            app.leave_splash();
                            KeyOutcome::Continue
                        }
                    }
                    Screen::Museum(state) => state.handle_key(key.code),
                    Screen::Planner(state) => state.handle_key(key.code),
                };
                if outcome == KeyOutcome::Quit {
                    return Ok(());
                }
            }
        }
    }
}

/// Renders the current screen based on the application state.
fn render(f: &mut Frame, app: &App) {
    match &app.current_screen {
        Screen::Splash => render_splash(f, app.next_screen.as_ref()),
        Screen::Museum(state) => render_museum(f, state),
        Screen::Planner(state) => render_planner(f, state.as_ref()),
    }
}

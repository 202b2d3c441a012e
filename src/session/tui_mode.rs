//! TUI mode execution

use super::{
    SessionData,
    messages::{print_session_exit_success, print_session_shutdown},
};
use crate::desktop::SystemDesktop;
use crate::ui::museum::MuseumState;
use crate::ui::{self, App, Screen};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::{error::Error, io};

/// Runs the museum tour in TUI mode.
pub async fn run_tui_mode(session: SessionData) -> Result<(), Box<dyn Error>> {
    let state = MuseumState::new(
        session.navigator,
        Box::new(SystemDesktop::new()),
        session.ui_config,
    );
    run_screen(Screen::Museum(Box::new(state))).await?;

    print_session_shutdown();
    print_session_exit_success();
    Ok(())
}

/// Takes over the terminal, shows `screen` after the splash and restores
/// the terminal afterwards, also when the UI loop fails.
pub async fn run_screen(screen: Screen) -> Result<(), Box<dyn Error>> {
    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = ui::run(&mut terminal, App::new(screen)).await;

    // Clean up the terminal after running the application
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result?;
    Ok(())
}

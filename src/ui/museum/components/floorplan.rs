//! Museum floor plan component
//!
//! Renders the title bar and one tab per room, highlighting the current one

use super::super::state::MuseumState;

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Tabs};

/// Render the title and the floor plan tabs.
pub fn render_floorplan(f: &mut Frame, area: Rect, state: &MuseumState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Length(2)])
        .split(area);

    let sound = if state.navigator.sound_enabled() {
        "SOUND ON"
    } else {
        "MUTED"
    };
    let title = Paragraph::new(format!(
        "PORTFOLIO MUSEUM v{}  |  {}",
        env!("CARGO_PKG_VERSION"),
        sound
    ))
    .alignment(Alignment::Center)
    .style(
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )
    .block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_type(BorderType::Thick),
    );
    f.render_widget(title, chunks[0]);

    let catalog = state.navigator.catalog();
    let titles: Vec<Line> = catalog
        .rooms()
        .iter()
        .enumerate()
        .map(|(i, room)| Line::from(format!("{} {}", i + 1, room.title)))
        .collect();

    let highlighted = state
        .highlighted_room()
        .and_then(|room| catalog.room_index(room.as_str()));
    // Nothing is highlighted until a known room has been shown.
    let highlight_style = match highlighted {
        Some(_) => Style::default()
            .fg(Color::LightMagenta)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        None => Style::default().fg(Color::DarkGray),
    };
    let tabs = Tabs::new(titles)
        .style(Style::default().fg(Color::DarkGray))
        .highlight_style(highlight_style)
        .select(highlighted.unwrap_or(0))
        .divider("|");
    f.render_widget(tabs, chunks[1]);
}

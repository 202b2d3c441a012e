//! Museum main renderer

use super::components::{floorplan, footer, logs, modal, room, toast};
use super::state::MuseumState;
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::prelude::{Color, Style};
use ratatui::widgets::Block;
use std::time::Instant;

pub fn render_museum(f: &mut Frame, state: &MuseumState) {
    let now = Instant::now();
    if state.with_background_color {
        f.render_widget(
            Block::default().style(Style::default().bg(Color::Rgb(12, 16, 28))),
            f.area(),
        );
    }

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Fill(1),
            Constraint::Length(3),
            Constraint::Length(2),
        ])
        .margin(1)
        .split(f.area());

    floorplan::render_floorplan(f, main_chunks[0], state);

    let content_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
        .split(main_chunks[1]);

    room::render_room(f, content_chunks[0], state, now);
    logs::render_logs_panel(f, content_chunks[1], state);
    toast::render_toast(f, main_chunks[2], state, now);
    footer::render_footer(f, main_chunks[3], state);

    // Overlays go last so they cover the room.
    modal::render_modals(f, main_chunks[1], state);
}

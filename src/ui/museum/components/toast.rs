//! Museum toast line

use super::super::state::MuseumState;

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};
use std::time::Instant;

/// Render the current toast, dimmed while it fades out.
pub fn render_toast(f: &mut Frame, area: Rect, state: &MuseumState, now: Instant) {
    let Some(toast) = state.toast() else {
        return;
    };
    let style = if toast.is_active(now) {
        Style::default()
            .fg(Color::Black)
            .bg(Color::LightGreen)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let widget = Paragraph::new(toast.message.as_str())
        .alignment(Alignment::Center)
        .style(style)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(widget, area);
}

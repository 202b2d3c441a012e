//! Museum room component
//!
//! Renders the shown room: its title, the tagline and the frames on the wall

use super::super::state::MuseumState;
use crate::consts::cli_consts::ENTRANCE_ROOM;

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap};
use std::time::Instant;

pub fn render_room(f: &mut Frame, area: Rect, state: &MuseumState, now: Instant) {
    let spec = state
        .shown_room()
        .and_then(|room| state.navigator.catalog().room(room.as_str()));

    let Some(spec) = spec else {
        // Navigated somewhere the floor plan does not know.
        let empty = Paragraph::new(format!(
            "Nothing on display in '{}'.\nUse the floor plan to pick a room.",
            state.navigator.current_room()
        ))
        .style(Style::default().fg(Color::DarkGray))
        .block(room_block(" ".to_string()));
        f.render_widget(empty, area);
        return;
    };

    // The intro slides in character by character on the entrance.
    let tagline = if spec.id == ENTRANCE_ROOM {
        let total = spec.tagline.chars().count() as f64;
        let shown = (total * state.intro_progress(now)).ceil() as usize;
        spec.tagline.chars().take(shown).collect::<String>()
    } else {
        spec.tagline.to_string()
    };

    let mut lines = vec![
        Line::from(Span::styled(
            tagline,
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::ITALIC),
        )),
        Line::from(""),
    ];

    let revealed = state.revealed_frames(now);
    for (index, frame) in spec.frames.iter().enumerate() {
        let selected = index == state.selected_frame;
        let marker = if selected { "▶ " } else { "  " };
        let (label_style, caption_style) = if index >= revealed {
            (
                Style::default().fg(Color::Rgb(50, 56, 70)),
                Style::default().fg(Color::Rgb(50, 56, 70)),
            )
        } else if selected {
            (
                Style::default()
                    .fg(Color::LightCyan)
                    .add_modifier(Modifier::BOLD),
                Style::default().fg(Color::Gray),
            )
        } else {
            (
                Style::default().fg(Color::Cyan),
                Style::default().fg(Color::DarkGray),
            )
        };
        lines.push(Line::from(vec![
            Span::styled(marker, label_style),
            Span::styled(frame.label, label_style),
        ]));
        lines.push(Line::from(Span::styled(
            format!("    {}", frame.caption),
            caption_style,
        )));
    }

    let paragraph = Paragraph::new(lines)
        .block(room_block(spec.title.to_uppercase()))
        .wrap(Wrap { trim: false })
        .scroll((state.room_scroll(), 0));
    f.render_widget(paragraph, area);
}

fn room_block(title: String) -> Block<'static> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::uniform(1))
}

//! Museum modal overlays
//!
//! Avatar and exhibit cards drawn over the room. A modal that was just
//! closed lingers as a dim ghost until its reset runs.

use super::super::state::MuseumState;
use super::super::utils::centered_rect;
use crate::consts::cli_consts::{AVATAR_MODAL, EXHIBIT_MODAL};
use crate::museum::ModalId;

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Padding, Paragraph, Wrap};

pub fn render_modals(f: &mut Frame, area: Rect, state: &MuseumState) {
    for id in state.closing_modals() {
        render_ghost(f, area, id);
    }
    let active = state.navigator.active_modal();
    // Stacked modals are drawn with the active one on top.
    for id in state.shown_modals().iter().filter(|id| Some(*id) != active) {
        render_modal(f, area, state, id, false);
    }
    if let Some(id) = active.filter(|id| state.shown_modals().contains(*id)) {
        render_modal(f, area, state, id, true);
    }
}

fn render_modal(f: &mut Frame, area: Rect, state: &MuseumState, id: &ModalId, active: bool) {
    let (title, lines, rect) = match id.as_str() {
        AVATAR_MODAL => (" THE CURATOR ", avatar_card(), centered_rect(50, 60, area)),
        EXHIBIT_MODAL => (" EXHIBIT ", exhibit_card(state), centered_rect(70, 70, area)),
        _ => return,
    };
    let border = if active { Color::LightMagenta } else { Color::DarkGray };

    f.render_widget(Clear, rect);
    let card = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .border_style(Style::default().fg(border))
                .padding(Padding::uniform(1)),
        );
    f.render_widget(card, rect);
}

fn render_ghost(f: &mut Frame, area: Rect, id: &ModalId) {
    let rect = match id.as_str() {
        AVATAR_MODAL => centered_rect(50, 60, area),
        EXHIBIT_MODAL => centered_rect(70, 70, area),
        _ => return,
    };
    f.render_widget(Clear, rect);
    f.render_widget(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Rgb(50, 56, 70))),
        rect,
    );
}

fn avatar_card() -> Vec<Line<'static>> {
    vec![
        Line::from(Span::styled(
            "( o_o )",
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center),
        Line::from(""),
        Line::from("Full-stack developer and keeper of this museum.").alignment(Alignment::Center),
        Line::from("Every frame on these walls is something I built.").alignment(Alignment::Center),
        Line::from(""),
        hint_line("[Esc] Close"),
    ]
}

fn exhibit_card(state: &MuseumState) -> Vec<Line<'static>> {
    let selection = state.navigator.selection();
    let mut lines = vec![
        Line::from(Span::styled(
            selection.title.clone(),
            Style::default().fg(Color::LightCyan).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            selection.category.clone(),
            Style::default().fg(Color::Magenta).add_modifier(Modifier::ITALIC),
        )),
        Line::from(""),
        Line::from(selection.description.clone()),
    ];
    if !selection.technologies.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            selection.technologies.join(" · "),
            Style::default().fg(Color::Gray),
        )));
    }
    lines.push(Line::from(""));
    let link = if selection.has_link() {
        selection.link.clone()
    } else {
        "Link coming soon".to_string()
    };
    lines.push(Line::from(Span::styled(link, Style::default().fg(Color::DarkGray))));
    lines.push(Line::from(""));
    lines.push(hint_line("[V] View details  [C] Close"));
    lines
}

fn hint_line(text: &'static str) -> Line<'static> {
    Line::from(Span::styled(
        text,
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    ))
    .alignment(Alignment::Center)
}

//! Planner renderer
//!
//! Three summary cards, the inline edit prompt and a status line.

use super::state::PlannerState;
use crate::events::EventType;
use crate::planner::{Field, KeyValueStore};

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Padding, Paragraph, Wrap};
use strum::IntoEnumIterator;

struct Palette {
    bg: Color,
    fg: Color,
    accent: Color,
    muted: Color,
}

impl Palette {
    fn for_theme(dark: bool) -> Self {
        if dark {
            Self {
                bg: Color::Rgb(18, 18, 24),
                fg: Color::Gray,
                accent: Color::LightMagenta,
                muted: Color::DarkGray,
            }
        } else {
            Self {
                bg: Color::Rgb(236, 240, 245),
                fg: Color::Black,
                accent: Color::Blue,
                muted: Color::Rgb(110, 110, 120),
            }
        }
    }
}

pub fn render_planner<S: KeyValueStore>(f: &mut Frame, state: &PlannerState<S>) {
    let palette = Palette::for_theme(state.dark);
    if state.with_background_color {
        f.render_widget(
            Block::default().style(Style::default().bg(palette.bg)),
            f.area(),
        );
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(7),
            Constraint::Length(3),
            Constraint::Fill(1),
            Constraint::Length(2),
        ])
        .margin(1)
        .split(f.area());

    let header = Paragraph::new(format!(
        "{}  |  {}",
        state.language.title(),
        state.language
    ))
    .alignment(Alignment::Center)
    .style(
        Style::default()
            .fg(palette.accent)
            .add_modifier(Modifier::BOLD),
    )
    .block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_type(BorderType::Thick),
    );
    f.render_widget(header, chunks[0]);

    render_cards(f, chunks[1], state, &palette);
    render_status(f, chunks[2], state, &palette);

    let footer = Paragraph::new(
        "[↑/↓] Select | [Enter] Edit | [T] Theme | [L] Language | [R] Reload | [Q] Quit",
    )
    .alignment(Alignment::Center)
    .style(Style::default().fg(palette.accent))
    .block(
        Block::default()
            .borders(Borders::TOP)
            .border_type(BorderType::Thick),
    );
    f.render_widget(footer, chunks[4]);

    if let Some(field) = state.editing {
        render_prompt(f, chunks[3], state, field, &palette);
    }
}

fn render_cards<S: KeyValueStore>(
    f: &mut Frame,
    area: Rect,
    state: &PlannerState<S>,
    palette: &Palette,
) {
    let fields: Vec<Field> = Field::iter().collect();
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![Constraint::Ratio(1, fields.len() as u32); fields.len()])
        .split(area);

    for (field, column) in fields.into_iter().zip(columns.iter()) {
        let selected = field == state.selected;
        let value = match state.record.get(field) {
            Some(value) => Span::styled(
                value.to_string(),
                Style::default().fg(palette.fg).add_modifier(Modifier::BOLD),
            ),
            None => Span::styled(
                state.language.not_set(),
                Style::default().fg(palette.muted).add_modifier(Modifier::ITALIC),
            ),
        };
        let border = if selected { palette.accent } else { palette.muted };
        let card = Paragraph::new(vec![Line::from(""), Line::from(value)])
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .title(format!(" {} ", state.language.field_label(field)))
                    .borders(Borders::ALL)
                    .border_type(if selected {
                        BorderType::Double
                    } else {
                        BorderType::Rounded
                    })
                    .border_style(Style::default().fg(border))
                    .padding(Padding::horizontal(1)),
            );
        f.render_widget(card, *column);
    }
}

fn render_status<S: KeyValueStore>(
    f: &mut Frame,
    area: Rect,
    state: &PlannerState<S>,
    palette: &Palette,
) {
    let Some(status) = &state.status else {
        return;
    };
    let color = match status.event_type {
        EventType::Success => Color::Green,
        EventType::Error => Color::Yellow,
        _ => palette.fg,
    };
    let line = Paragraph::new(status.msg.as_str())
        .alignment(Alignment::Center)
        .style(Style::default().fg(color));
    f.render_widget(line, area);
}

fn render_prompt<S: KeyValueStore>(
    f: &mut Frame,
    area: Rect,
    state: &PlannerState<S>,
    field: Field,
    palette: &Palette,
) {
    let rect = Rect {
        height: area.height.min(6),
        ..area
    };
    f.render_widget(Clear, rect);
    let prompt = Paragraph::new(vec![
        Line::from(Span::styled(field.prompt(), Style::default().fg(palette.muted))),
        Line::from(vec![
            Span::styled("> ", Style::default().fg(palette.accent)),
            Span::styled(state.input.as_str(), Style::default().fg(palette.fg)),
            Span::styled("_", Style::default().add_modifier(Modifier::SLOW_BLINK)),
        ]),
        Line::from(Span::styled(
            "[Enter] Save  [Esc] Cancel",
            Style::default().fg(palette.muted),
        )),
    ])
    .block(
        Block::default()
            .title(format!(" {} ", state.language.field_label(field)))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(palette.accent)),
    );
    f.render_widget(prompt, rect);
}

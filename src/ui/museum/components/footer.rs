//! Museum footer component
//!
//! Key help for whatever currently has focus

use super::super::state::MuseumState;

use ratatui::Frame;
use ratatui::layout::Alignment;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

pub fn render_footer(f: &mut Frame, area: ratatui::layout::Rect, state: &MuseumState) {
    let footer_text = if state.navigator.active_modal().is_some() {
        "[V] View details | [C] Close | [Esc] Close | [M] Sound | [Q] Quit"
    } else {
        "[←/→] Rooms | [1-9] Jump | [↑/↓] Frames | [Enter] Open | [PgUp/PgDn] Scroll | [M] Sound | [Q] Quit"
    };

    let footer = Paragraph::new(footer_text)
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_type(BorderType::Thick),
        );
    f.render_widget(footer, area);
}

//! Entrance screen shown before the tour or the planner.

use crate::ui::app::Screen;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph};

pub const LOGO_NAME: &str = r#"
  ███╗   ███╗  ██╗   ██╗  ███████╗  ███████╗  ██╗   ██╗  ███╗   ███╗
  ████╗ ████║  ██║   ██║  ██╔════╝  ██╔════╝  ██║   ██║  ████╗ ████║
  ██╔████╔██║  ██║   ██║  ███████╗  █████╗    ██║   ██║  ██╔████╔██║
  ██║╚██╔╝██║  ██║   ██║  ╚════██║  ██╔══╝    ██║   ██║  ██║╚██╔╝██║
  ██║ ╚═╝ ██║  ╚██████╔╝  ███████║  ███████╗  ╚██████╔╝  ██║ ╚═╝ ██║
  ╚═╝     ╚═╝   ╚═════╝   ╚══════╝  ╚══════╝   ╚═════╝   ╚═╝     ╚═╝
"#;

/// What waits behind the entrance, one line per entry.
pub fn splash_caption(next: Option<&Screen>) -> Vec<String> {
    match next {
        Some(Screen::Museum(state)) => {
            let rooms = state.navigator.catalog().rooms();
            let frames: usize = rooms.iter().map(|room| room.frames.len()).sum();
            let names: Vec<&str> = rooms.iter().map(|room| room.title).collect();
            vec![
                format!("{} rooms, {} frames on the walls", rooms.len(), frames),
                names.join("  ·  "),
            ]
        }
        Some(Screen::Planner(state)) => vec![
            state.language.title().to_string(),
            "Enter edits a card, q leaves".to_string(),
        ],
        Some(Screen::Splash) | None => Vec::new(),
    }
}

pub fn render_splash(f: &mut Frame, next: Option<&Screen>) {
    let mut lines: Vec<Line> = LOGO_NAME
        .trim_matches('\n')
        .lines()
        .map(|line| {
            Line::from(Span::styled(
                line.to_string(),
                Style::default()
                    .fg(Color::LightMagenta)
                    .add_modifier(Modifier::BOLD),
            ))
        })
        .collect();

    lines.push(Line::raw(""));
    for caption in splash_caption(next) {
        lines.push(Line::styled(caption, Style::default().fg(Color::Gray)));
    }
    lines.push(Line::raw(""));
    lines.push(Line::styled(
        "press any key to step inside",
        Style::default()
            .fg(Color::LightBlue)
            .add_modifier(Modifier::ITALIC),
    ));

    // Lines plus borders and padding.
    let height = lines.len() as u16 + 4;
    let [area] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(f.area());

    let entrance = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .border_style(Style::default().fg(Color::Yellow))
        .title(format!(" Portfolio Museum {} ", env!("CARGO_PKG_VERSION")))
        .title_alignment(Alignment::Center)
        .padding(Padding::vertical(1));

    let logo = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(entrance);

    f.render_widget(logo, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::desktop::testing::RecordingDesktop;
    use crate::museum::Navigator;
    use crate::planner::PlannerStore;
    use crate::planner::storage::FileStore;
    use crate::ui::UIConfig;
    use crate::ui::museum::MuseumState;
    use crate::ui::planner::PlannerState;

    #[test]
    fn museum_caption_counts_the_catalog() {
        let state = MuseumState::new(
            Navigator::default(),
            Box::new(RecordingDesktop::default()),
            UIConfig::new(false),
        );
        let screen = Screen::Museum(Box::new(state));
        let caption = splash_caption(Some(&screen));

        assert!(caption[0].starts_with("5 rooms,"));
        assert!(caption[1].contains("Entrance"));
    }

    #[test]
    fn planner_caption_names_the_dashboard() {
        let dir = tempfile::tempdir().unwrap();
        let store = PlannerStore::new(FileStore::new(dir.path().join("storage.json")));
        let screen = Screen::Planner(Box::new(PlannerState::new(store, UIConfig::new(false))));

        assert_eq!(splash_caption(Some(&screen))[0], "Smart Student Planner");
        assert!(splash_caption(None).is_empty());
    }
}

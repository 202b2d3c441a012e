//! Museum key handling
//!
//! Maps key presses onto navigator operations and dispatches the resulting effects.

use super::state::MuseumState;

use crate::consts::cli_consts::{AVATAR_MODAL, EXHIBIT_MODAL};
use crate::events::{Event, Source};
use crate::museum::{Effects, FrameAction};
use crossterm::event::KeyCode;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum KeyOutcome {
    Continue,
    Quit,
}

impl MuseumState {
    pub fn handle_key(&mut self, code: KeyCode) -> KeyOutcome {
        match code {
            KeyCode::Char('q') => return KeyOutcome::Quit,
            KeyCode::Esc => {
                let effects = self.navigator.cancel();
                self.dispatch(effects);
                return KeyOutcome::Continue;
            }
            KeyCode::Char('m') => {
                self.toggle_sound();
                return KeyOutcome::Continue;
            }
            _ => {}
        }

        if let Some(active) = self.navigator.active_modal().cloned() {
            match code {
                KeyCode::Enter | KeyCode::Char('v') if active.as_str() == EXHIBIT_MODAL => {
                    let mut effects = self.navigator.click();
                    effects.extend(self.navigator.view_project_details());
                    self.dispatch(effects);
                }
                KeyCode::Char('c') | KeyCode::Backspace => {
                    let mut effects = self.navigator.click();
                    let close = match active.as_str() {
                        AVATAR_MODAL => self.navigator.close_avatar(),
                        EXHIBIT_MODAL => self.navigator.close_exhibit(),
                        other => self.navigator.close_modal(other),
                    };
                    effects.extend(close);
                    self.dispatch(effects);
                }
                _ => {}
            }
            return KeyOutcome::Continue;
        }

        match code {
            KeyCode::Left | KeyCode::Char('h') => self.step_room(-1),
            KeyCode::Right | KeyCode::Char('l') | KeyCode::Tab => self.step_room(1),
            KeyCode::Char(c @ '1'..='9') => {
                let index = c as usize - '1' as usize;
                let target = self.navigator.catalog().rooms().get(index).map(|room| room.id);
                if let Some(target) = target {
                    self.visit(target);
                }
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected_frame = self.selected_frame.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                let count = self.frame_count();
                if count > 0 {
                    self.selected_frame = (self.selected_frame + 1).min(count - 1);
                }
            }
            KeyCode::PageDown => self.scroll_by(5),
            KeyCode::PageUp => self.scroll_by(-5),
            KeyCode::Enter => self.activate_selected_frame(),
            _ => {}
        }
        KeyOutcome::Continue
    }

    fn frame_count(&self) -> usize {
        self.shown_room()
            .and_then(|room| self.navigator.catalog().room(room.as_str()))
            .map_or(0, |spec| spec.frames.len())
    }

    fn step_room(&mut self, offset: isize) {
        let target = self
            .navigator
            .catalog()
            .neighbor(self.navigator.current_room().as_str(), offset)
            .map(|room| room.id);
        if let Some(target) = target {
            self.visit(target);
        }
    }

    /// Floor plan button: click cue, then navigation.
    fn visit(&mut self, room: &str) {
        let mut effects = self.navigator.click();
        effects.extend(self.navigator.go_to_room(room));
        self.dispatch(effects);
    }

    fn scroll_by(&mut self, delta: i32) {
        if self.scroll_locked() {
            return;
        }
        if let Some(room) = self.shown_room().cloned() {
            let offset = (self.room_scroll() as i32 + delta).max(0) as u16;
            self.set_room_scroll(room, offset);
        }
    }

    fn activate_selected_frame(&mut self) {
        let action = self
            .shown_room()
            .and_then(|room| self.navigator.catalog().room(room.as_str()))
            .and_then(|spec| spec.frames.get(self.selected_frame))
            .map(|frame| frame.action.clone());
        let Some(action) = action else {
            return;
        };

        let mut effects: Effects = self.navigator.click();
        let follow = match action {
            FrameAction::OpenExhibit {
                title,
                description,
                link,
            } => self.navigator.open_exhibit(title, description, link),
            FrameAction::OpenAvatar => self.navigator.open_avatar(),
            FrameAction::CopyEmail(email) => self.navigator.copy_to_clipboard(email),
            FrameAction::DownloadResume => self.navigator.download_resume(),
            FrameAction::GoToRoom(room) => self.navigator.go_to_room(room),
        };
        effects.extend(follow);
        self.dispatch(effects);
    }

    fn toggle_sound(&mut self) {
        let enabled = !self.navigator.sound_enabled();
        self.navigator.set_sound_enabled(enabled);
        let msg = if enabled { "Sound on" } else { "Sound off" };
        self.add_to_activity_log(Event::notice(Source::Audio, msg));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::desktop::testing::RecordingDesktop;
    use crate::museum::{ModalId, Navigator, RoomId};
    use crate::ui::app::UIConfig;

    fn museum() -> MuseumState {
        MuseumState::new(
            Navigator::default(),
            Box::new(RecordingDesktop::default()),
            UIConfig::new(false),
        )
    }

    #[test]
    fn arrow_keys_walk_the_floor_plan() {
        let mut state = museum();
        state.handle_key(KeyCode::Right);
        assert_eq!(state.navigator.current_room(), &RoomId::from("about"));
        state.handle_key(KeyCode::Left);
        state.handle_key(KeyCode::Left);
        assert_eq!(state.navigator.current_room(), &RoomId::from("contact"));
        state.handle_key(KeyCode::Char('3'));
        assert_eq!(state.shown_room(), Some(&RoomId::from("projects")));
    }

    #[test]
    fn enter_on_exhibit_frame_opens_exhibit_modal() {
        let mut state = museum();
        state.handle_key(KeyCode::Char('3'));
        state.handle_key(KeyCode::Down);
        state.handle_key(KeyCode::Enter);

        assert_eq!(
            state.navigator.active_modal(),
            Some(&ModalId::from("exhibitModal"))
        );
        assert_eq!(state.navigator.selection().title, "E-Commerce Store");
        assert_eq!(state.navigator.selection().category, "Web Application");

        // Placeholder link: view details only announces it.
        state.handle_key(KeyCode::Char('v'));
        assert_eq!(
            state.toast().unwrap().message,
            "Project link will be added soon!"
        );
    }

    #[test]
    fn modal_blocks_navigation_and_scroll_until_escape() {
        let mut state = museum();
        state.handle_key(KeyCode::Enter); // Entrance first frame: avatar.
        assert!(state.scroll_locked());

        state.handle_key(KeyCode::Right);
        state.handle_key(KeyCode::PageDown);
        assert_eq!(state.navigator.current_room(), &RoomId::from("entrance"));
        assert_eq!(state.room_scroll(), 0);

        state.handle_key(KeyCode::Esc);
        assert!(state.navigator.active_modal().is_none());
        state.handle_key(KeyCode::PageDown);
        assert_eq!(state.room_scroll(), 5);
    }

    #[test]
    fn close_keys_close_avatar_and_exhibit() {
        let mut state = museum();
        state.handle_key(KeyCode::Enter);
        state.handle_key(KeyCode::Char('c'));
        assert!(state.navigator.active_modal().is_none());
        assert!(!state.scroll_locked());
        assert!(state.closing_modals().contains(&ModalId::from("avatarModal")));

        state.handle_key(KeyCode::Char('3'));
        state.handle_key(KeyCode::Down);
        state.handle_key(KeyCode::Enter);
        assert!(!state.navigator.selection().technologies.is_empty());
        state.handle_key(KeyCode::Backspace);
        assert!(state.navigator.active_modal().is_none());
        assert!(state.closing_modals().contains(&ModalId::from("exhibitModal")));
    }

    #[test]
    fn escape_without_modal_keeps_running() {
        let mut state = museum();
        assert_eq!(state.handle_key(KeyCode::Esc), KeyOutcome::Continue);
        assert_eq!(state.handle_key(KeyCode::Char('q')), KeyOutcome::Quit);
    }

    #[test]
    fn m_toggles_sound() {
        let mut state = museum();
        state.handle_key(KeyCode::Char('m'));
        assert!(!state.navigator.sound_enabled());
        state.handle_key(KeyCode::Char('m'));
        assert!(state.navigator.sound_enabled());
    }

    #[test]
    fn frame_selection_stays_in_bounds() {
        let mut state = museum();
        for _ in 0..10 {
            state.handle_key(KeyCode::Down);
        }
        assert_eq!(state.selected_frame, 3);
        state.handle_key(KeyCode::Char('2'));
        assert_eq!(state.selected_frame, 0);
    }
}

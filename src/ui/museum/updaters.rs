//! Museum state update logic
//!
//! Carries out the effects returned by the navigator, right away or once
//! their delay has elapsed.

use super::state::{FrameReveal, MuseumState, PendingEffect, Toast};

use crate::events::{Event, Source};
use crate::logging::LogLevel;
use crate::museum::{Effect, Effects};

use std::time::Instant;

impl MuseumState {
    /// Advance the tick and run every delayed effect that is due.
    pub fn update(&mut self) {
        self.update_at(Instant::now());
    }

    pub fn update_at(&mut self, now: Instant) {
        self.tick += 1;

        // Due effects run in the order they were scheduled.
        let (due, waiting): (Vec<_>, Vec<_>) =
            std::mem::take(&mut self.pending).into_iter().partition(|p| p.due <= now);
        self.pending = waiting;
        let mut due = due;
        due.sort_by_key(|p| p.due);
        for pending in due {
            self.apply(pending.effect, now);
        }

        if self.toast().is_some_and(|toast| toast.is_expired(now)) {
            self.set_toast(None);
        }
    }

    /// Run immediate effects now and queue the delayed ones.
    pub fn dispatch(&mut self, effects: Effects) {
        self.dispatch_at(effects, Instant::now());
    }

    pub fn dispatch_at(&mut self, effects: Effects, now: Instant) {
        for scheduled in effects {
            if scheduled.delay.is_zero() {
                self.apply(scheduled.effect, now);
            } else {
                self.pending.push(PendingEffect {
                    due: now + scheduled.delay,
                    effect: scheduled.effect,
                });
            }
        }
    }

    /// Number of effects still waiting for their delay.
    #[cfg(test)]
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    fn apply(&mut self, effect: Effect, now: Instant) {
        match effect {
            Effect::HideRoom(room) => {
                if self.shown_room() == Some(&room) {
                    self.set_shown_room(None);
                }
            }
            Effect::ShowRoom(room) => {
                self.add_to_activity_log(Event::transition(
                    Source::Navigator,
                    format!("Navigating to {}", room),
                ));
                self.selected_frame = 0;
                self.set_shown_room(Some(room));
            }
            Effect::ResetScroll(room) => self.set_room_scroll(room, 0),
            Effect::HighlightFloorplan(room) => self.set_highlighted_room(room),
            Effect::PlaySound(sound) => {
                if let Err(e) = self.desktop.play_sound(sound) {
                    self.add_to_activity_log(Event::error_with_level(
                        Source::Audio,
                        format!("Audio play failed: {}", e),
                        LogLevel::Warn,
                    ));
                }
            }
            Effect::ReplayIntro => self.restart_intro(now),
            Effect::AnimateFrames { room, stagger } => {
                if self.shown_room() == Some(&room) {
                    self.set_frame_reveal(FrameReveal {
                        started_at: now,
                        stagger,
                    });
                }
            }
            Effect::ShowModal(id) => {
                self.add_to_activity_log(Event::notice(Source::Modal, format!("Opened {}", id)));
                self.show_modal(id);
            }
            Effect::HideModal(id) => {
                self.add_to_activity_log(Event::notice(Source::Modal, format!("Closed {}", id)));
                self.hide_modal(id);
            }
            Effect::ResetModal(id) => self.reset_modal(&id),
            Effect::LockScroll => self.set_scroll_locked(true),
            Effect::UnlockScroll => self.set_scroll_locked(false),
            Effect::Toast { message, duration } => {
                self.add_to_activity_log(Event::notice(Source::Desktop, message.clone()));
                self.set_toast(Some(Toast {
                    message,
                    shown_at: now,
                    duration,
                }));
            }
            Effect::OpenLink(url) => match self.desktop.open_link(&url) {
                Ok(()) => {
                    self.add_to_activity_log(Event::success(
                        Source::Desktop,
                        format!("Opened {}", url),
                    ));
                }
                Err(e) => {
                    self.add_to_activity_log(Event::error_with_level(
                        Source::Desktop,
                        format!("Could not open {}: {}", url, e),
                        LogLevel::Error,
                    ));
                }
            },
            Effect::CopyToClipboard(text) => {
                let result = self
                    .desktop
                    .copy_to_clipboard(&text)
                    .map_err(|e| e.to_string());
                if let Err(e) = &result {
                    self.add_to_activity_log(Event::error_with_level(
                        Source::Desktop,
                        format!("Failed to copy: {}", e),
                        LogLevel::Error,
                    ));
                }
                let follow_up = self.navigator.clipboard_result(result);
                self.dispatch_at(follow_up, now);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::desktop::testing::RecordingDesktop;
    use crate::museum::{ModalId, Navigator, RoomId};
    use crate::ui::app::UIConfig;
    use std::time::Duration;

    fn museum_with(desktop: RecordingDesktop) -> MuseumState {
        MuseumState::new(
            Navigator::default(),
            Box::new(desktop),
            UIConfig::new(false),
        )
    }

    #[test]
    fn navigation_switches_shown_room_and_queues_animation() {
        let mut state = museum_with(RecordingDesktop::default());
        let now = Instant::now();
        let effects = state.navigator.go_to_room("projects");
        state.dispatch_at(effects, now);

        assert_eq!(state.shown_room(), Some(&RoomId::from("projects")));
        assert_eq!(state.highlighted_room(), Some(&RoomId::from("projects")));
        assert!(state.pending_count() > 0);
        assert_eq!(state.revealed_frames(now), usize::MAX);

        state.update_at(now + Duration::from_millis(150));
        assert_eq!(state.pending_count(), 0);
        assert_eq!(state.revealed_frames(now + Duration::from_millis(150)), 1);
        assert_eq!(state.revealed_frames(now + Duration::from_millis(450)), 4);
    }

    #[test]
    fn modal_lifecycle_tracks_lock_and_reset() {
        let mut state = museum_with(RecordingDesktop::default());
        let now = Instant::now();
        let avatar = ModalId::from("avatarModal");

        let effects = state.navigator.open_avatar();
        state.dispatch_at(effects, now);
        assert!(state.scroll_locked());
        assert!(state.shown_modals().contains(&avatar));

        let effects = state.navigator.cancel();
        state.dispatch_at(effects, now);
        assert!(!state.scroll_locked());
        assert!(state.closing_modals().contains(&avatar));

        state.update_at(now + Duration::from_millis(299));
        assert!(state.closing_modals().contains(&avatar));
        state.update_at(now + Duration::from_millis(300));
        assert!(state.closing_modals().is_empty());
    }

    #[test]
    fn failed_clipboard_write_shows_failure_toast() {
        let mut state = museum_with(RecordingDesktop {
            clipboard_fails: true,
            ..Default::default()
        });
        let effects = state.navigator.copy_to_clipboard("curator@example.com");
        state.dispatch(effects);

        assert_eq!(state.toast().unwrap().message, "Failed to copy email");
        assert!(
            state
                .activity_logs
                .iter()
                .any(|e| e.msg.starts_with("Failed to copy:"))
        );
    }

    #[test]
    fn failed_audio_leaves_navigation_untouched() {
        let mut state = museum_with(RecordingDesktop {
            sound_fails: true,
            ..Default::default()
        });
        let now = Instant::now();
        let effects = state.navigator.go_to_room("projects");
        state.dispatch_at(effects, now);
        let effects = state.navigator.open_avatar();
        state.dispatch_at(effects, now);
        state.update_at(now + Duration::from_secs(1));

        assert_eq!(state.navigator.current_room(), &RoomId::from("projects"));
        assert_eq!(
            state.navigator.active_modal(),
            Some(&ModalId::from("avatarModal"))
        );
        assert!(state.scroll_locked());
        assert_eq!(state.shown_room(), Some(&RoomId::from("projects")));
        assert!(state.activity_logs.iter().any(|e| {
            e.log_level == LogLevel::Warn && e.msg.starts_with("Audio play failed")
        }));
    }

    #[test]
    fn toast_expires_after_duration_and_fade() {
        let mut state = museum_with(RecordingDesktop::default());
        let now = Instant::now();
        let effects = state.navigator.download_resume();
        state.dispatch_at(effects, now);
        assert_eq!(state.toast().unwrap().message, "Resume download started...");

        state.update_at(now + Duration::from_millis(1000));
        assert_eq!(state.toast().unwrap().message, "Ask the admin for Resume!");

        state.update_at(now + Duration::from_millis(4299));
        assert!(state.toast().is_some());
        state.update_at(now + Duration::from_millis(4300));
        assert!(state.toast().is_none());
    }

    #[test]
    fn exhibit_link_is_opened() {
        let mut state = museum_with(RecordingDesktop::default());
        let effects =
            state
                .navigator
                .open_exhibit("AI Chatbot", "Answers", Some("https://example.com/bot"));
        state.dispatch(effects);
        let effects = state.navigator.view_project_details();
        state.dispatch(effects);

        assert_eq!(state.toast().unwrap().message, "Opening AI Chatbot...");
        assert!(
            state
                .activity_logs
                .iter()
                .any(|e| e.msg == "Opened https://example.com/bot")
        );
    }

    #[test]
    fn activity_log_is_bounded() {
        let mut state = museum_with(RecordingDesktop::default());
        for i in 0..(crate::consts::cli_consts::MAX_ACTIVITY_LOGS + 5) {
            state.add_to_activity_log(Event::notice(Source::Navigator, format!("event {}", i)));
        }
        assert_eq!(
            state.activity_logs.len(),
            crate::consts::cli_consts::MAX_ACTIVITY_LOGS
        );
        assert_eq!(state.activity_logs.front().unwrap().msg, "event 5");
    }
}

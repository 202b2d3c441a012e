//! Headless mode execution
//!
//! Reads tour commands from stdin and prints every effect they produce as
//! an event line. Delayed effects are printed once their delay has elapsed.

use super::{
    SessionData,
    messages::{print_session_exit_success, print_session_shutdown, print_session_starting},
    script::{HELP, TourCommand},
};
use crate::desktop::{Desktop, SystemDesktop};
use crate::events::{Event, Source};
use crate::logging::LogLevel;
use crate::museum::{Effect, Effects, Navigator};
use crate::print_cmd_warn;

use std::error::Error;
use std::time::Instant;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::broadcast;

/// What a command printed, and whether the tour should end.
#[derive(Debug, Default)]
pub struct Outcome {
    pub events: Vec<Event>,
    pub quit: bool,
}

#[derive(Debug)]
struct Delayed {
    due: Instant,
    effect: Effect,
}

/// A tour driven by text commands instead of key presses.
#[derive(Debug)]
pub struct HeadlessTour {
    navigator: Navigator,
    desktop: Box<dyn Desktop>,
    pending: Vec<Delayed>,
}

impl HeadlessTour {
    pub fn new(navigator: Navigator, desktop: Box<dyn Desktop>) -> Self {
        Self {
            navigator,
            desktop,
            pending: Vec::new(),
        }
    }

    #[cfg(test)]
    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    /// When the earliest delayed effect is due.
    pub fn next_due(&self) -> Option<Instant> {
        self.pending.iter().map(|d| d.due).min()
    }

    pub fn execute(&mut self, command: TourCommand, now: Instant) -> Outcome {
        let mut outcome = Outcome::default();
        let effects = match command {
            TourCommand::Go(room) => self.navigator.go_to_room(&room),
            TourCommand::Open(id) => self.navigator.open_modal(&id),
            TourCommand::Close(id) => self.navigator.close_modal(&id),
            TourCommand::Esc => self.navigator.cancel(),
            TourCommand::Avatar => self.navigator.open_avatar(),
            TourCommand::Exhibit {
                title,
                description,
                link,
            } => self
                .navigator
                .open_exhibit(&title, &description, link.as_deref()),
            TourCommand::View => self.navigator.view_project_details(),
            TourCommand::Copy(text) => self.navigator.copy_to_clipboard(&text),
            TourCommand::Resume => self.navigator.download_resume(),
            TourCommand::Click => self.navigator.click(),
            TourCommand::State => {
                outcome.events.push(self.describe_state());
                Effects::new()
            }
            TourCommand::Sound(enabled) => {
                self.navigator.set_sound_enabled(enabled);
                outcome.events.push(Event::notice(
                    Source::Audio,
                    if enabled { "Sound on" } else { "Sound off" },
                ));
                Effects::new()
            }
            TourCommand::Help => Effects::new(),
            TourCommand::Quit => {
                outcome.quit = true;
                Effects::new()
            }
        };
        self.dispatch(effects, now, &mut outcome.events);
        outcome
    }

    /// Runs every delayed effect due by `now`, in schedule order.
    pub fn run_due(&mut self, now: Instant) -> Vec<Event> {
        let (mut due, waiting): (Vec<_>, Vec<_>) =
            std::mem::take(&mut self.pending).into_iter().partition(|d| d.due <= now);
        self.pending = waiting;
        due.sort_by_key(|d| d.due);

        let mut events = Vec::new();
        for delayed in due {
            self.apply(delayed.effect, now, &mut events);
        }
        events
    }

    fn dispatch(&mut self, effects: Effects, now: Instant, out: &mut Vec<Event>) {
        for scheduled in effects {
            if scheduled.delay.is_zero() {
                self.apply(scheduled.effect, now, out);
            } else {
                self.pending.push(Delayed {
                    due: now + scheduled.delay,
                    effect: scheduled.effect,
                });
            }
        }
    }

    fn apply(&mut self, effect: Effect, now: Instant, out: &mut Vec<Event>) {
        let source = source_of(&effect);
        let line = effect.to_string();
        match effect {
            Effect::OpenLink(url) => match self.desktop.open_link(&url) {
                Ok(()) => out.push(Event::success(source, line)),
                Err(e) => out.push(Event::error_with_level(
                    source,
                    format!("Could not open {}: {}", url, e),
                    LogLevel::Error,
                )),
            },
            Effect::CopyToClipboard(text) => {
                out.push(Event::notice(source, line));
                let result = self
                    .desktop
                    .copy_to_clipboard(&text)
                    .map_err(|e| e.to_string());
                if let Err(e) = &result {
                    out.push(Event::error_with_level(
                        source,
                        format!("Failed to copy: {}", e),
                        LogLevel::Warn,
                    ));
                }
                let follow_up = self.navigator.clipboard_result(result);
                self.dispatch(follow_up, now, out);
            }
            Effect::ShowRoom(_) | Effect::HideRoom(_) => out.push(Event::transition(source, line)),
            // Housekeeping only shows up with RUST_LOG=debug.
            Effect::ResetScroll(_) | Effect::ResetModal(_) => out.push(Event::debug(source, line)),
            // Audio is announced, not played, without a terminal to ring.
            _ => out.push(Event::notice(source, line)),
        }
    }

    fn describe_state(&self) -> Event {
        let modal = self
            .navigator
            .active_modal()
            .map_or_else(|| "none".to_string(), |m| m.to_string());
        let visible = self
            .navigator
            .visible_room()
            .map_or_else(|| "nothing".to_string(), |r| r.to_string());
        let open: Vec<&str> = self.navigator.visible_modals().map(|m| m.as_str()).collect();
        Event::notice(
            Source::Navigator,
            format!(
                "room: {} (showing {}), active modal: {}, open: [{}], scroll: {}",
                self.navigator.current_room(),
                visible,
                modal,
                open.join(", "),
                if self.navigator.scroll_locked() { "locked" } else { "free" }
            ),
        )
    }
}

fn source_of(effect: &Effect) -> Source {
    match effect {
        Effect::PlaySound(_) => Source::Audio,
        Effect::ShowModal(_)
        | Effect::HideModal(_)
        | Effect::ResetModal(_)
        | Effect::LockScroll
        | Effect::UnlockScroll => Source::Modal,
        Effect::Toast { .. } | Effect::OpenLink(_) | Effect::CopyToClipboard(_) => Source::Desktop,
        _ => Source::Navigator,
    }
}

fn print_events(events: &[Event]) {
    for event in events.iter().filter(|e| e.should_display()) {
        println!("{}", event);
    }
}

/// Runs the application in headless mode
///
/// Commands are read until `quit`, Ctrl+C or the end of input. At the end
/// of input the tour waits for effects that are still scheduled.
pub async fn run_headless_mode(session: SessionData) -> Result<(), Box<dyn Error>> {
    print_session_starting("headless", session.navigator.current_room().as_str());

    let mut tour = HeadlessTour::new(session.navigator, Box::new(SystemDesktop::new()));

    // Trigger shutdown on Ctrl+C
    let (shutdown_sender, mut shutdown_receiver) = broadcast::channel::<()>(1);
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            let _ = shutdown_sender.send(());
        }
    });

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut input_open = true;

    loop {
        let next_due = tour.next_due();
        if !input_open && next_due.is_none() {
            break;
        }
        let wake_at = next_due
            .map(tokio::time::Instant::from_std)
            .unwrap_or_else(tokio::time::Instant::now);

        tokio::select! {
            line = lines.next_line(), if input_open => {
                let Some(line) = line? else {
                    input_open = false;
                    continue;
                };
                match TourCommand::parse_line(&line) {
                    Ok(Some(TourCommand::Help)) => println!("{}", HELP),
                    Ok(Some(command)) => {
                        let outcome = tour.execute(command, Instant::now());
                        print_events(&outcome.events);
                        if outcome.quit {
                            break;
                        }
                    }
                    Ok(None) => {}
                    Err(e) => print_cmd_warn!("Command ignored", "{}", e),
                }
            }
            _ = tokio::time::sleep_until(wake_at), if next_due.is_some() => {
                print_events(&tour.run_due(Instant::now()));
            }
            _ = shutdown_receiver.recv() => {
                break;
            }
        }
    }

    print_session_shutdown();
    print_session_exit_success();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::desktop::testing::RecordingDesktop;
    use std::time::Duration;

    fn tour() -> HeadlessTour {
        HeadlessTour::new(Navigator::default(), Box::new(RecordingDesktop::default()))
    }

    fn messages(events: &[Event]) -> Vec<&str> {
        events.iter().map(|e| e.msg.as_str()).collect()
    }

    #[test]
    fn go_prints_transition_and_schedules_followups() {
        let mut tour = tour();
        let now = Instant::now();
        let outcome = tour.execute(TourCommand::Go("projects".to_string()), now);

        let msgs = messages(&outcome.events);
        assert!(msgs.contains(&"hide room entrance"));
        assert!(msgs.contains(&"show room projects"));
        assert!(msgs.contains(&"play Transition sound"));
        assert!(!outcome.quit);
        assert_eq!(tour.next_due(), Some(now + Duration::from_millis(50)));

        let later = tour.run_due(now + Duration::from_millis(100));
        assert_eq!(
            messages(&later),
            vec![
                "scroll projects to top",
                "animate frames of projects (100ms stagger)"
            ]
        );
        assert_eq!(tour.next_due(), None);
    }

    #[test]
    fn unknown_room_only_hides_the_current_one() {
        let mut tour = tour();
        let outcome = tour.execute(TourCommand::Go("attic".to_string()), Instant::now());
        assert_eq!(
            messages(&outcome.events),
            vec!["scroll entrance to top", "hide room entrance"]
        );
        assert_eq!(tour.navigator().current_room().as_str(), "attic");
        assert_eq!(tour.next_due(), None);
    }

    #[test]
    fn copy_reports_clipboard_outcome() {
        let mut tour = tour();
        let outcome = tour.execute(
            TourCommand::Copy("curator@portfolio-museum.dev".to_string()),
            Instant::now(),
        );
        assert!(
            messages(&outcome.events).contains(&"toast \"Email copied to clipboard!\"")
        );
    }

    #[test]
    fn state_and_quit() {
        let mut tour = tour();
        tour.execute(TourCommand::Avatar, Instant::now());
        let outcome = tour.execute(TourCommand::State, Instant::now());
        assert_eq!(
            outcome.events[0].msg,
            "room: entrance (showing entrance), active modal: avatarModal, open: [avatarModal], scroll: locked"
        );
        assert!(tour.execute(TourCommand::Quit, Instant::now()).quit);
    }

    #[test]
    fn muted_tour_prints_no_sounds() {
        let mut tour = tour();
        tour.execute(TourCommand::Sound(false), Instant::now());
        let outcome = tour.execute(TourCommand::Click, Instant::now());
        assert!(outcome.events.is_empty());
    }
}

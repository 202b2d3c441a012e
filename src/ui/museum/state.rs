//! Museum screen state
//!
//! Wraps the navigator with everything the screen needs to paint itself:
//! which room and modals are shown, scroll offsets, animations in flight,
//! the toast line, delayed effects and the activity log.

use crate::consts::cli_consts::MAX_ACTIVITY_LOGS;
use crate::consts::cli_consts::timing::{TOAST_FADE_MS, ms};
use crate::desktop::Desktop;
use crate::events::Event;
use crate::museum::{Effect, ModalId, Navigator, RoomId};
use crate::ui::app::UIConfig;

use std::collections::{BTreeSet, HashMap, VecDeque};
use std::time::{Duration, Instant};

/// Frames of a room fading in one after another.
#[derive(Debug, Clone, Copy)]
pub struct FrameReveal {
    pub started_at: Instant,
    pub stagger: Duration,
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub shown_at: Instant,
    pub duration: Duration,
}

impl Toast {
    /// Fully visible.
    pub fn is_active(&self, now: Instant) -> bool {
        now.duration_since(self.shown_at) < self.duration
    }

    /// Past its duration and its fade-out.
    pub fn is_expired(&self, now: Instant) -> bool {
        now.duration_since(self.shown_at) >= self.duration + ms(TOAST_FADE_MS)
    }
}

/// An effect waiting for its delay to elapse.
#[derive(Debug, Clone)]
pub struct PendingEffect {
    pub due: Instant,
    pub effect: Effect,
}

#[derive(Debug)]
pub struct MuseumState {
    /// Navigation controller for the session.
    pub navigator: Navigator,
    /// Whether to paint a background color.
    pub with_background_color: bool,
    /// Animation tick counter
    pub tick: usize,
    /// Activity logs for display
    pub activity_logs: VecDeque<Event>,
    /// Index of the selected frame in the shown room.
    pub selected_frame: usize,

    shown_room: Option<RoomId>,
    highlighted_room: Option<RoomId>,
    shown_modals: BTreeSet<ModalId>,
    closing_modals: BTreeSet<ModalId>,
    scroll_locked: bool,
    room_scroll: HashMap<RoomId, u16>,
    frame_reveal: Option<FrameReveal>,
    intro_started_at: Option<Instant>,
    toast: Option<Toast>,
    pub(super) pending: Vec<PendingEffect>,
    pub(super) desktop: Box<dyn Desktop>,
}

impl MuseumState {
    pub fn new(navigator: Navigator, desktop: Box<dyn Desktop>, ui_config: UIConfig) -> Self {
        let now = Instant::now();
        let shown_room = navigator.visible_room().cloned();
        Self {
            with_background_color: ui_config.with_background_color,
            tick: 0,
            activity_logs: VecDeque::new(),
            selected_frame: 0,
            highlighted_room: shown_room.clone(),
            shown_room,
            shown_modals: BTreeSet::new(),
            closing_modals: BTreeSet::new(),
            scroll_locked: navigator.scroll_locked(),
            room_scroll: HashMap::new(),
            frame_reveal: None,
            intro_started_at: Some(now),
            toast: None,
            pending: Vec::new(),
            desktop,
            navigator,
        }
    }

    pub fn shown_room(&self) -> Option<&RoomId> {
        self.shown_room.as_ref()
    }

    pub fn highlighted_room(&self) -> Option<&RoomId> {
        self.highlighted_room.as_ref()
    }

    pub fn shown_modals(&self) -> &BTreeSet<ModalId> {
        &self.shown_modals
    }

    pub fn closing_modals(&self) -> &BTreeSet<ModalId> {
        &self.closing_modals
    }

    pub fn scroll_locked(&self) -> bool {
        self.scroll_locked
    }

    pub fn toast(&self) -> Option<&Toast> {
        self.toast.as_ref()
    }

    /// Scroll offset of the shown room.
    pub fn room_scroll(&self) -> u16 {
        self.shown_room
            .as_ref()
            .and_then(|room| self.room_scroll.get(room))
            .copied()
            .unwrap_or(0)
    }

    /// Number of frames of the shown room that have animated in.
    pub fn revealed_frames(&self, now: Instant) -> usize {
        match self.frame_reveal {
            None => usize::MAX,
            Some(reveal) if reveal.stagger.is_zero() => usize::MAX,
            Some(reveal) => {
                let elapsed = now.duration_since(reveal.started_at);
                (elapsed.as_millis() / reveal.stagger.as_millis()) as usize + 1
            }
        }
    }

    /// Progress of the entrance intro animation in `0.0..=1.0`.
    pub fn intro_progress(&self, now: Instant) -> f64 {
        const INTRO: Duration = Duration::from_millis(800);
        match self.intro_started_at {
            None => 1.0,
            Some(start) => (now.duration_since(start).as_secs_f64() / INTRO.as_secs_f64()).min(1.0),
        }
    }

    /// Add an event to activity logs with size limit
    pub fn add_to_activity_log(&mut self, event: Event) {
        event.emit();
        if self.activity_logs.len() >= MAX_ACTIVITY_LOGS {
            self.activity_logs.pop_front();
        }
        self.activity_logs.push_back(event);
    }

    // Setters used by the effect updaters.
    pub(super) fn set_shown_room(&mut self, room: Option<RoomId>) {
        self.shown_room = room;
    }

    pub(super) fn set_highlighted_room(&mut self, room: RoomId) {
        self.highlighted_room = Some(room);
    }

    pub(super) fn show_modal(&mut self, id: ModalId) {
        self.closing_modals.remove(&id);
        self.shown_modals.insert(id);
    }

    pub(super) fn hide_modal(&mut self, id: ModalId) {
        self.shown_modals.remove(&id);
        self.closing_modals.insert(id);
    }

    pub(super) fn reset_modal(&mut self, id: &ModalId) {
        self.closing_modals.remove(id);
    }

    pub(super) fn set_scroll_locked(&mut self, locked: bool) {
        self.scroll_locked = locked;
    }

    pub(super) fn set_room_scroll(&mut self, room: RoomId, offset: u16) {
        self.room_scroll.insert(room, offset);
    }

    pub(super) fn set_frame_reveal(&mut self, reveal: FrameReveal) {
        self.frame_reveal = Some(reveal);
    }

    pub(super) fn restart_intro(&mut self, now: Instant) {
        self.intro_started_at = Some(now);
    }

    pub(super) fn set_toast(&mut self, toast: Option<Toast>) {
        self.toast = toast;
    }
}

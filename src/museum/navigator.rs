//! Room and modal navigation
//!
//! The `Navigator` is the single owner of the session's navigation state.
//! Every operation mutates that state and returns the effects the front-end
//! has to perform, so transitions can be checked without a terminal.

use super::catalog::Catalog;
use super::effects::{Effect, Effects, Sound};
use super::exhibit::ProjectExhibitSelection;
use super::state::{ModalId, NavigationState, RoomId};
use crate::consts::cli_consts::timing::{
    FRAME_ANIMATION_MS, FRAME_STAGGER_MS, INTRO_REPLAY_MS, MODAL_RESET_MS, RESUME_FOLLOW_UP_MS,
    SCROLL_RECHECK_MS, ms,
};
use crate::consts::cli_consts::{AVATAR_MODAL, ENTRANCE_ROOM, EXHIBIT_MODAL};
use std::collections::BTreeSet;

/// How opening a modal treats a modal that is already open.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum ModalPolicy {
    /// Leave the open modal visible; only the newest one is active.
    #[default]
    Stack,
    /// Close the active modal before opening the new one.
    Exclusive,
}

#[derive(Debug, Clone)]
pub struct Navigator {
    catalog: Catalog,
    state: NavigationState,
    /// Room currently marked visible. `None` after navigating to an unknown room.
    visible_room: Option<RoomId>,
    /// Modals currently marked visible.
    visible_modals: BTreeSet<ModalId>,
    selection: ProjectExhibitSelection,
    policy: ModalPolicy,
    sound_enabled: bool,
}

impl Navigator {
    /// Creates the session controller with the entrance visible.
    pub fn new(catalog: Catalog, policy: ModalPolicy) -> Self {
        let state = NavigationState::default();
        let visible_room = catalog
            .has_room(state.current_room.as_str())
            .then(|| state.current_room.clone());
        Self {
            catalog,
            state,
            visible_room,
            visible_modals: BTreeSet::new(),
            selection: ProjectExhibitSelection::default(),
            policy,
            sound_enabled: true,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn current_room(&self) -> &RoomId {
        &self.state.current_room
    }

    pub fn active_modal(&self) -> Option<&ModalId> {
        self.state.active_modal.as_ref()
    }

    pub fn visible_room(&self) -> Option<&RoomId> {
        self.visible_room.as_ref()
    }

    pub fn visible_modals(&self) -> impl Iterator<Item = &ModalId> {
        self.visible_modals.iter()
    }

    #[cfg(test)]
    pub fn is_modal_visible(&self, id: &str) -> bool {
        self.visible_modals.contains(&ModalId::from(id))
    }

    pub fn scroll_locked(&self) -> bool {
        self.state.scroll_locked()
    }

    pub fn selection(&self) -> &ProjectExhibitSelection {
        &self.selection
    }

    pub fn policy(&self) -> ModalPolicy {
        self.policy
    }

    pub fn sound_enabled(&self) -> bool {
        self.sound_enabled
    }

    pub fn set_sound_enabled(&mut self, enabled: bool) {
        self.sound_enabled = enabled;
    }

    fn sound(&self, effects: &mut Effects, sound: Sound) {
        if self.sound_enabled {
            effects.now(Effect::PlaySound(sound));
        }
    }

    /// Navigates to `room`.
    ///
    /// The previously visible room is scrolled to the top and hidden. The
    /// current room is updated even when `room` is not on the floor plan, in
    /// which case nothing becomes visible and no transition effects run.
    /// Navigating to the current room replays the same effects.
    pub fn go_to_room(&mut self, room: &str) -> Effects {
        log::debug!("Navigating to {}", room);
        let mut effects = Effects::new();

        if let Some(previous) = self.visible_room.take() {
            effects.now(Effect::ResetScroll(previous.clone()));
            effects.now(Effect::HideRoom(previous));
        }

        let target = RoomId::from(room);
        self.state.current_room = target.clone();

        let Some(spec) = self.catalog.room(room) else {
            log::debug!("Room {} is not on the floor plan", room);
            return effects;
        };
        let has_frames = !spec.frames.is_empty();

        self.visible_room = Some(target.clone());
        effects.now(Effect::ResetScroll(target.clone()));
        effects.now(Effect::ShowRoom(target.clone()));
        effects.now(Effect::HighlightFloorplan(target.clone()));
        self.sound(&mut effects, Sound::Transition);

        if room == ENTRANCE_ROOM {
            effects.after(ms(INTRO_REPLAY_MS), Effect::ReplayIntro);
        }
        if has_frames {
            effects.after(
                ms(FRAME_ANIMATION_MS),
                Effect::AnimateFrames {
                    room: target.clone(),
                    stagger: ms(FRAME_STAGGER_MS),
                },
            );
        }
        effects.after(ms(SCROLL_RECHECK_MS), Effect::ResetScroll(target));
        effects
    }

    /// Opens the modal `id` and makes it the active one.
    ///
    /// Unknown modals are ignored. Under [`ModalPolicy::Stack`] a modal that
    /// is already open stays visible.
    pub fn open_modal(&mut self, id: &str) -> Effects {
        let mut effects = Effects::new();
        if !self.catalog.has_modal(id) {
            log::debug!("Modal {} does not exist", id);
            return effects;
        }

        if self.policy == ModalPolicy::Exclusive {
            if let Some(active) = self.state.active_modal.clone() {
                if active.as_str() != id {
                    effects.extend(self.close_modal(active.as_str()));
                }
            }
        }

        let modal = ModalId::from(id);
        self.visible_modals.insert(modal.clone());
        self.state.active_modal = Some(modal.clone());
        effects.now(Effect::ShowModal(modal));
        effects.now(Effect::LockScroll);
        self.sound(&mut effects, Sound::ModalOpen);
        effects
    }

    /// Closes the modal `id`.
    ///
    /// The active modal is only cleared when `id` is the active one. Page
    /// scroll is restored whenever no modal is active afterwards.
    pub fn close_modal(&mut self, id: &str) -> Effects {
        let mut effects = Effects::new();
        if !self.catalog.has_modal(id) {
            return effects;
        }

        let modal = ModalId::from(id);
        self.visible_modals.remove(&modal);
        effects.now(Effect::HideModal(modal.clone()));

        if self.state.active_modal.as_ref() == Some(&modal) {
            self.state.active_modal = None;
        }
        if self.state.active_modal.is_none() {
            effects.now(Effect::UnlockScroll);
        }
        self.sound(&mut effects, Sound::ModalClose);
        effects.after(ms(MODAL_RESET_MS), Effect::ResetModal(modal));
        effects
    }

    /// Closes whichever modal is active. No-op when none is.
    pub fn cancel(&mut self) -> Effects {
        match self.state.active_modal.clone() {
            Some(active) => self.close_modal(active.as_str()),
            None => Effects::new(),
        }
    }

    pub fn open_avatar(&mut self) -> Effects {
        self.open_modal(AVATAR_MODAL)
    }

    pub fn close_avatar(&mut self) -> Effects {
        self.close_modal(AVATAR_MODAL)
    }

    /// Selects an exhibit and opens the exhibit modal for it.
    pub fn open_exhibit(&mut self, title: &str, description: &str, link: Option<&str>) -> Effects {
        self.selection = ProjectExhibitSelection::new(title, description, link);
        self.open_modal(EXHIBIT_MODAL)
    }

    pub fn close_exhibit(&mut self) -> Effects {
        self.close_modal(EXHIBIT_MODAL)
    }

    /// Opens the selected exhibit's link, or announces that it is coming soon.
    pub fn view_project_details(&self) -> Effects {
        let mut effects = Effects::new();
        if self.selection.has_link() {
            effects.now(Effect::OpenLink(self.selection.link.clone()));
            effects.now(Effect::toast(format!("Opening {}...", self.selection.title)));
        } else {
            effects.now(Effect::toast("Project link will be added soon!"));
        }
        effects
    }

    /// Click cue for buttons and frames.
    pub fn click(&self) -> Effects {
        let mut effects = Effects::new();
        self.sound(&mut effects, Sound::Click);
        effects
    }

    /// Requests a clipboard write. The outcome is reported back through
    /// [`Navigator::clipboard_result`].
    pub fn copy_to_clipboard(&self, text: &str) -> Effects {
        let mut effects = Effects::new();
        effects.now(Effect::CopyToClipboard(text.to_string()));
        effects
    }

    pub fn clipboard_result(&self, result: Result<(), String>) -> Effects {
        let mut effects = Effects::new();
        match result {
            Ok(()) => effects.now(Effect::toast("Email copied to clipboard!")),
            Err(e) => {
                log::error!("Failed to copy: {}", e);
                effects.now(Effect::toast("Failed to copy email"))
            }
        };
        effects
    }

    pub fn download_resume(&self) -> Effects {
        let mut effects = Effects::new();
        effects.now(Effect::toast("Resume download started..."));
        effects.after(
            ms(RESUME_FOLLOW_UP_MS),
            Effect::toast("Ask the admin for Resume!"),
        );
        effects
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new(Catalog::portfolio(), ModalPolicy::default())
    }
}

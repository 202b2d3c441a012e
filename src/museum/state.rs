//! Navigation state and identifiers

use crate::consts::cli_consts::ENTRANCE_ROOM;
use std::fmt::{Display, Formatter};

/// Identifier of a room (full-screen view).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RoomId(String);

impl RoomId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for RoomId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl Display for RoomId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier of a modal overlay.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ModalId(String);

impl ModalId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ModalId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl Display for ModalId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Which room is current and which modal, if any, is active.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationState {
    /// Room most recently navigated to, known to the floor plan or not.
    pub current_room: RoomId,
    /// Modal that Escape would close.
    pub active_modal: Option<ModalId>,
}

impl Default for NavigationState {
    fn default() -> Self {
        Self {
            current_room: RoomId::from(ENTRANCE_ROOM),
            active_modal: None,
        }
    }
}

impl NavigationState {
    /// Background scrolling is locked exactly while a modal is active.
    pub fn scroll_locked(&self) -> bool {
        self.active_modal.is_some()
    }
}

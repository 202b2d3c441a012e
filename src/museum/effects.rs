//! Presentation effects
//!
//! State transitions never touch the screen, the speaker or the clipboard
//! directly. They return an ordered list of effects, each optionally delayed,
//! and the front-end decides how to carry them out.

use super::state::{ModalId, RoomId};
use crate::consts::cli_consts::timing::{TOAST_DURATION_MS, ms};
use std::fmt::{Display, Formatter};
use std::time::Duration;

/// Audio cues.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, strum::Display, strum::EnumIter)]
pub enum Sound {
    Click,
    Transition,
    ModalOpen,
    ModalClose,
}

impl Sound {
    /// Asset the cue was designed around.
    pub fn asset_url(&self) -> &'static str {
        match self {
            Sound::Click | Sound::ModalClose => {
                "https://assets.mixkit.co/sfx/preview/mixkit-select-click-1109.mp3"
            }
            Sound::Transition => {
                "https://assets.mixkit.co/sfx/preview/mixkit-cool-interface-click-tone-2568.mp3"
            }
            Sound::ModalOpen => {
                "https://assets.mixkit.co/sfx/preview/mixkit-modern-technology-select-3124.mp3"
            }
        }
    }

    /// Playback volume in `0.0..=1.0`.
    pub fn volume(&self) -> f32 {
        0.2
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    HideRoom(RoomId),
    ShowRoom(RoomId),
    ResetScroll(RoomId),
    HighlightFloorplan(RoomId),
    PlaySound(Sound),
    /// Restart the entrance intro animation.
    ReplayIntro,
    /// Animate the frames of a room in, one `stagger` apart.
    AnimateFrames {
        room: RoomId,
        stagger: Duration,
    },
    ShowModal(ModalId),
    HideModal(ModalId),
    /// Drop the closing marker of a modal so the next open animates again.
    ResetModal(ModalId),
    LockScroll,
    UnlockScroll,
    Toast {
        message: String,
        duration: Duration,
    },
    /// Open a link in a new browsing context.
    OpenLink(String),
    CopyToClipboard(String),
}

impl Effect {
    /// Toast with the default on-screen duration.
    pub fn toast(message: impl Into<String>) -> Self {
        Effect::Toast {
            message: message.into(),
            duration: ms(TOAST_DURATION_MS),
        }
    }
}

impl Display for Effect {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Effect::HideRoom(room) => write!(f, "hide room {}", room),
            Effect::ShowRoom(room) => write!(f, "show room {}", room),
            Effect::ResetScroll(room) => write!(f, "scroll {} to top", room),
            Effect::HighlightFloorplan(room) => write!(f, "highlight floor plan entry {}", room),
            Effect::PlaySound(sound) => write!(f, "play {} sound", sound),
            Effect::ReplayIntro => write!(f, "replay entrance intro"),
            Effect::AnimateFrames { room, stagger } => write!(
                f,
                "animate frames of {} ({}ms stagger)",
                room,
                stagger.as_millis()
            ),
            Effect::ShowModal(id) => write!(f, "show modal {}", id),
            Effect::HideModal(id) => write!(f, "hide modal {}", id),
            Effect::ResetModal(id) => write!(f, "reset modal {}", id),
            Effect::LockScroll => write!(f, "lock page scroll"),
            Effect::UnlockScroll => write!(f, "restore page scroll"),
            Effect::Toast { message, .. } => write!(f, "toast \"{}\"", message),
            Effect::OpenLink(url) => write!(f, "open {} in a new window", url),
            Effect::CopyToClipboard(text) => write!(f, "copy \"{}\" to clipboard", text),
        }
    }
}

/// An effect and how long after the transition it should run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scheduled {
    pub delay: Duration,
    pub effect: Effect,
}

impl Display for Scheduled {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.delay.is_zero() {
            write!(f, "{}", self.effect)
        } else {
            write!(f, "{} (after {}ms)", self.effect, self.delay.as_millis())
        }
    }
}

/// Ordered effects produced by one transition.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Effects(Vec<Scheduled>);

impl Effects {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue an effect to run right away.
    pub fn now(&mut self, effect: Effect) -> &mut Self {
        self.after(Duration::ZERO, effect)
    }

    /// Queue an effect to run once `delay` has elapsed.
    pub fn after(&mut self, delay: Duration, effect: Effect) -> &mut Self {
        self.0.push(Scheduled { delay, effect });
        self
    }

    pub fn extend(&mut self, other: Effects) -> &mut Self {
        self.0.extend(other.0);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Scheduled> {
        self.0.iter()
    }

    /// Whether `effect` appears anywhere in the list, delayed or not.
    pub fn contains(&self, effect: &Effect) -> bool {
        self.0.iter().any(|s| &s.effect == effect)
    }

    /// Effects to run right away, in order.
    pub fn immediate(&self) -> impl Iterator<Item = &Effect> {
        self.0
            .iter()
            .filter(|s| s.delay.is_zero())
            .map(|s| &s.effect)
    }
}

impl IntoIterator for Effects {
    type Item = Scheduled;
    type IntoIter = std::vec::IntoIter<Scheduled>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Effects {
    type Item = &'a Scheduled;
    type IntoIter = std::slice::Iter<'a, Scheduled>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

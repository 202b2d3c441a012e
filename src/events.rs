//! Event System
//!
//! Types and implementations for session events and the activity log

use crate::logging::{LogLevel, should_log_with_env};
use chrono::Local;
use std::fmt::Display;

/// Part of the application an event originates from.
#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum Source {
    /// Room navigation.
    Navigator,
    /// Modal open/close handling.
    Modal,
    /// Audio cue playback.
    Audio,
    /// Clipboard and link collaborators.
    Desktop,
    /// Dashboard persistence store.
    Planner,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum EventType {
    Success,
    Error,
    Transition,
    Notice,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub source: Source,
    pub msg: String,
    pub timestamp: String,
    pub event_type: EventType,
    pub log_level: LogLevel,
}

impl Event {
    pub fn new(source: Source, msg: String, event_type: EventType, log_level: LogLevel) -> Self {
        Self {
            source,
            msg,
            timestamp: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            event_type,
            log_level,
        }
    }

    pub fn transition(source: Source, msg: impl Into<String>) -> Self {
        Self::new(source, msg.into(), EventType::Transition, LogLevel::Info)
    }

    pub fn notice(source: Source, msg: impl Into<String>) -> Self {
        Self::new(source, msg.into(), EventType::Notice, LogLevel::Info)
    }

    pub fn success(source: Source, msg: impl Into<String>) -> Self {
        Self::new(source, msg.into(), EventType::Success, LogLevel::Info)
    }

    pub fn debug(source: Source, msg: impl Into<String>) -> Self {
        Self::new(source, msg.into(), EventType::Notice, LogLevel::Debug)
    }

    pub fn error_with_level(source: Source, msg: impl Into<String>, log_level: LogLevel) -> Self {
        Self::new(source, msg.into(), EventType::Error, log_level)
    }

    pub fn should_display(&self) -> bool {
        // Always show success events and info level events
        if self.event_type == EventType::Success || self.log_level >= LogLevel::Info {
            return true;
        }
        should_log_with_env(self.log_level)
    }

    /// Forward the event to the `log` facade.
    pub fn emit(&self) {
        log::log!(target: "museum", log::Level::from(self.log_level), "[{}] {}", self.source, self.msg);
    }
}

impl Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [{}] {}", self.event_type, self.timestamp, self.msg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_and_info_events_are_always_displayed() {
        assert!(Event::success(Source::Planner, "saved").should_display());
        assert!(Event::transition(Source::Navigator, "Navigating to skills").should_display());
        assert!(
            Event::error_with_level(Source::Audio, "no device", LogLevel::Warn).should_display()
        );
    }

    #[test]
    fn display_includes_type_and_message() {
        let event = Event::notice(Source::Modal, "Opened avatarModal");
        let rendered = event.to_string();
        assert!(rendered.starts_with("Notice ["));
        assert!(rendered.ends_with("Opened avatarModal"));
    }
}

//! Planner screen state and key handling
//!
//! Edits happen inline: Enter on a card opens a prompt, Enter again saves a
//! non-empty answer and Esc walks away without writing anything.

use crate::events::{Event, Source};
use crate::logging::LogLevel;
use crate::planner::{DashboardRecord, FileStore, Field, KeyValueStore, Language, LoadSource, PlannerStore};
use crate::ui::app::UIConfig;
use crate::ui::museum::KeyOutcome;

use crossterm::event::KeyCode;
use strum::IntoEnumIterator;

#[derive(Debug)]
pub struct PlannerState<S = FileStore> {
    store: PlannerStore<S>,
    /// Record currently on the cards.
    pub record: DashboardRecord,
    /// Why the record looks the way it does.
    pub source: LoadSource,
    pub selected: Field,
    /// Field being edited, if any.
    pub editing: Option<Field>,
    /// Text typed into the edit prompt.
    pub input: String,
    pub dark: bool,
    pub language: Language,
    /// Last thing that happened, shown under the cards.
    pub status: Option<Event>,
    pub with_background_color: bool,
}

impl<S: KeyValueStore> PlannerState<S> {
    pub fn new(store: PlannerStore<S>, ui_config: UIConfig) -> Self {
        let loaded = store.load_with_source();
        let mut state = Self {
            store,
            record: loaded.record,
            source: loaded.source,
            selected: Field::StudyHours,
            editing: None,
            input: String::new(),
            dark: false,
            language: Language::default(),
            status: None,
            with_background_color: ui_config.with_background_color,
        };
        state.report_source();
        state
    }

    #[cfg(test)]
    pub fn store(&self) -> &PlannerStore<S> {
        &self.store
    }

    pub fn handle_key(&mut self, code: KeyCode) -> KeyOutcome {
        if let Some(field) = self.editing {
            match code {
                KeyCode::Enter => self.commit(field),
                KeyCode::Esc => {
                    self.editing = None;
                    self.input.clear();
                }
                KeyCode::Backspace => {
                    self.input.pop();
                }
                KeyCode::Char(c) => self.input.push(c),
                _ => {}
            }
            return KeyOutcome::Continue;
        }

        match code {
            KeyCode::Char('q') => return KeyOutcome::Quit,
            KeyCode::Up | KeyCode::Left | KeyCode::Char('k') => self.step(-1),
            KeyCode::Down | KeyCode::Right | KeyCode::Tab | KeyCode::Char('j') => self.step(1),
            KeyCode::Enter | KeyCode::Char('e') => {
                self.editing = Some(self.selected);
                self.input.clear();
            }
            KeyCode::Char('t') => self.dark = !self.dark,
            KeyCode::Char('l') => self.language = self.language.next(),
            KeyCode::Char('r') => self.reload(),
            _ => {}
        }
        KeyOutcome::Continue
    }

    /// Reads the record back from storage.
    pub fn reload(&mut self) {
        let loaded = self.store.load_with_source();
        self.record = loaded.record;
        self.source = loaded.source;
        self.report_source();
    }

    fn step(&mut self, offset: isize) {
        let fields: Vec<Field> = Field::iter().collect();
        let current = fields.iter().position(|f| *f == self.selected).unwrap_or(0) as isize;
        let next = (current + offset).rem_euclid(fields.len() as isize) as usize;
        self.selected = fields[next];
    }

    fn commit(&mut self, field: Field) {
        let value = std::mem::take(&mut self.input);
        self.editing = None;
        let value = value.trim();
        if value.is_empty() {
            return;
        }
        match self.store.update(field, value) {
            Ok(record) => {
                self.record = record;
                self.source = LoadSource::Stored;
                self.set_status(Event::success(
                    Source::Planner,
                    format!("Saved {}", self.language.field_label(field)),
                ));
            }
            Err(e) => self.set_status(Event::error_with_level(
                Source::Planner,
                format!("Could not save: {}", e),
                LogLevel::Error,
            )),
        }
    }

    fn report_source(&mut self) {
        let status = match &self.source {
            LoadSource::Stored | LoadSource::Missing => None,
            LoadSource::Corrupt(reason) => Some(Event::error_with_level(
                Source::Planner,
                format!("Stored data was unreadable, showing defaults ({})", reason),
                LogLevel::Warn,
            )),
            LoadSource::Unreadable(reason) => Some(Event::error_with_level(
                Source::Planner,
                format!("Could not read storage, showing defaults ({})", reason),
                LogLevel::Warn,
            )),
        };
        if let Some(status) = status {
            self.set_status(status);
        }
    }

    fn set_status(&mut self, event: Event) {
        event.emit();
        self.status = Some(event);
    }
}

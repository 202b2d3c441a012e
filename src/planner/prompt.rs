//! One-line prompts for editing dashboard fields

use super::error::StorageError;
use super::record::{DashboardRecord, Field};
use super::storage::KeyValueStore;
use super::store::PlannerStore;
use std::io::{BufRead, Write};

/// Blocking "ask for one line of text" primitive.
#[cfg_attr(test, mockall::automock)]
pub trait LinePrompt {
    /// Returns the entered line, or `None` when the user cancelled.
    fn prompt(&mut self, message: &str) -> Option<String>;
}

/// Prompt reading lines from any buffered reader, echoing questions to a writer.
pub struct StreamPrompt<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> StreamPrompt<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }
}

impl StreamPrompt<std::io::StdinLock<'static>, std::io::Stdout> {
    /// Prompt bound to the terminal.
    pub fn stdio() -> Self {
        Self::new(std::io::stdin().lock(), std::io::stdout())
    }
}

impl<R: BufRead, W: Write> LinePrompt for StreamPrompt<R, W> {
    fn prompt(&mut self, message: &str) -> Option<String> {
        if write!(self.writer, "{} ", message)
            .and_then(|_| self.writer.flush())
            .is_err()
        {
            return None;
        }
        let mut line = String::new();
        match self.reader.read_line(&mut line) {
            // End of input counts as cancelling.
            Ok(0) => None,
            Ok(_) => Some(line.trim_end_matches(['\r', '\n']).to_string()),
            Err(e) => {
                log::warn!("Failed to read input: {}", e);
                None
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOutcome {
    Updated(DashboardRecord),
    /// Input was empty or cancelled; nothing was written.
    Skipped,
}

/// Asks for a new value of `field` and saves it unless the answer is empty.
pub fn edit_field<S, P>(
    store: &mut PlannerStore<S>,
    prompt: &mut P,
    field: Field,
) -> Result<EditOutcome, StorageError>
where
    S: KeyValueStore,
    P: LinePrompt + ?Sized,
{
    match prompt.prompt(field.prompt()) {
        Some(value) if !value.is_empty() => Ok(EditOutcome::Updated(store.update(field, &value)?)),
        _ => Ok(EditOutcome::Skipped),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::planner::storage::MemoryStore;
    use mockall::predicate::eq;
    use std::io::Cursor;

    #[test]
    fn edit_saves_entered_value() {
        let mut prompt = MockLinePrompt::new();
        prompt
            .expect_prompt()
            .with(eq("Enter new study hours (e.g. '20 hrs this week'):"))
            .times(1)
            .returning(|_| Some("20 hrs this week".to_string()));

        let mut store = PlannerStore::new(MemoryStore::new());
        let outcome = edit_field(&mut store, &mut prompt, Field::StudyHours).unwrap();

        assert!(matches!(outcome, EditOutcome::Updated(_)));
        assert_eq!(
            store.load().study_hours.as_deref(),
            Some("20 hrs this week")
        );
    }

    #[test]
    fn cancelled_or_empty_input_is_skipped() {
        let mut store = PlannerStore::new(MemoryStore::new());

        let mut cancelled = MockLinePrompt::new();
        cancelled.expect_prompt().returning(|_| None);
        assert_eq!(
            edit_field(&mut store, &mut cancelled, Field::TasksDue).unwrap(),
            EditOutcome::Skipped
        );

        let mut empty = MockLinePrompt::new();
        empty.expect_prompt().returning(|_| Some(String::new()));
        assert_eq!(
            edit_field(&mut store, &mut empty, Field::TasksDue).unwrap(),
            EditOutcome::Skipped
        );

        // Nothing was ever written.
        assert_eq!(store.storage().get("plannerData").unwrap(), None);
    }

    #[test]
    fn stream_prompt_strips_line_endings_and_echoes_question() {
        let mut output = Vec::new();
        {
            let mut prompt = StreamPrompt::new(Cursor::new("25 August 2025\r\n"), &mut output);
            assert_eq!(
                prompt.prompt("Exam?").as_deref(),
                Some("25 August 2025")
            );
        }
        assert_eq!(String::from_utf8(output).unwrap(), "Exam? ");
    }

    #[test]
    fn stream_prompt_treats_end_of_input_as_cancel() {
        let mut prompt = StreamPrompt::new(Cursor::new(""), Vec::new());
        assert_eq!(prompt.prompt("Anything?"), None);
    }
}

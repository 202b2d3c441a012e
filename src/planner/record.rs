//! Dashboard record and its fields

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One of the three editable dashboard fields.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, clap::ValueEnum, strum::EnumIter)]
pub enum Field {
    StudyHours,
    TasksDue,
    NextExam,
}

impl Field {
    /// Key of the field inside the stored JSON object.
    pub fn key(&self) -> &'static str {
        match self {
            Field::StudyHours => "studyHours",
            Field::TasksDue => "tasksDue",
            Field::NextExam => "nextExam",
        }
    }

    /// Question asked when the user edits the field.
    pub fn prompt(&self) -> &'static str {
        match self {
            Field::StudyHours => "Enter new study hours (e.g. '20 hrs this week'):",
            Field::TasksDue => "Enter new task count (e.g. '5 tasks left'):",
            Field::NextExam => "Enter next exam date (e.g. '25 August 2025'):",
        }
    }
}

/// The persisted planner summary.
///
/// Fields are optional so a stored object missing one is kept as it is
/// instead of being patched per field. Unknown keys survive a rewrite.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub study_hours: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tasks_due: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_exam: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Default for DashboardRecord {
    fn default() -> Self {
        Self {
            study_hours: Some("15 hrs this week".to_string()),
            tasks_due: Some("3 tasks left".to_string()),
            next_exam: Some("20 July 2025".to_string()),
            extra: Map::new(),
        }
    }
}

impl DashboardRecord {
    pub fn get(&self, field: Field) -> Option<&str> {
        match field {
            Field::StudyHours => self.study_hours.as_deref(),
            Field::TasksDue => self.tasks_due.as_deref(),
            Field::NextExam => self.next_exam.as_deref(),
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = Some(value.into());
        match field {
            Field::StudyHours => self.study_hours = value,
            Field::TasksDue => self.tasks_due = value,
            Field::NextExam => self.next_exam = value,
        }
    }
}

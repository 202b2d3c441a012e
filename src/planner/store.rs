//! Dashboard persistence
//!
//! Loading never fails: anything short of a stored JSON object falls back to
//! the default record. `load_with_source` tells the caller why.

use super::error::StorageError;
use super::record::{DashboardRecord, Field};
use super::storage::KeyValueStore;
use crate::consts::cli_consts::PLANNER_STORAGE_KEY;
use serde_json::Value;

/// Where a loaded record came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadSource {
    /// Parsed from storage.
    Stored,
    /// Nothing stored yet; defaults used.
    Missing,
    /// Stored value could not be parsed; defaults used.
    Corrupt(String),
    /// Storage itself could not be read; defaults used.
    Unreadable(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Loaded {
    pub record: DashboardRecord,
    pub source: LoadSource,
}

impl Loaded {
    pub fn used_defaults(&self) -> bool {
        self.source != LoadSource::Stored
    }

    fn defaults(source: LoadSource) -> Self {
        Self {
            record: DashboardRecord::default(),
            source,
        }
    }
}

#[derive(Debug)]
pub struct PlannerStore<S> {
    storage: S,
    key: String,
}

impl<S: KeyValueStore> PlannerStore<S> {
    pub fn new(storage: S) -> Self {
        Self::with_key(storage, PLANNER_STORAGE_KEY)
    }

    pub fn with_key(storage: S, key: &str) -> Self {
        Self {
            storage,
            key: key.to_string(),
        }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Current record, or the default record when nothing usable is stored.
    pub fn load(&self) -> DashboardRecord {
        self.load_with_source().record
    }

    /// Like [`PlannerStore::load`], also reporting why defaults were used.
    pub fn load_with_source(&self) -> Loaded {
        let raw = match self.storage.get(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Loaded::defaults(LoadSource::Missing),
            Err(e) => {
                log::warn!("Could not read planner storage: {}", e);
                return Loaded::defaults(LoadSource::Unreadable(e.to_string()));
            }
        };

        match parse_record(&raw) {
            Ok(record) => Loaded {
                record,
                source: LoadSource::Stored,
            },
            Err(reason) => {
                log::debug!("Stored planner data is corrupt: {}", reason);
                Loaded::defaults(LoadSource::Corrupt(reason))
            }
        }
    }

    /// Replaces one field and writes the whole record back.
    ///
    /// `value` is expected to be non-empty; callers skip empty or cancelled
    /// input before getting here.
    pub fn update(&mut self, field: Field, value: &str) -> Result<DashboardRecord, StorageError> {
        let mut record = self.load();
        record.set(field, value);
        let json = serde_json::to_string(&record)?;
        self.storage.set(&self.key, json)?;
        log::debug!("Saved {} = {}", field.key(), value);
        Ok(record)
    }

    /// Forgets the stored record so the next load returns defaults.
    pub fn reset(&mut self) -> Result<(), StorageError> {
        self.storage.remove(&self.key)
    }
}

fn parse_record(raw: &str) -> Result<DashboardRecord, String> {
    let value: Value = serde_json::from_str(raw).map_err(|e| e.to_string())?;
    if !value.is_object() {
        return Err("stored record is not a JSON object".to_string());
    }
    serde_json::from_value(value).map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::planner::storage::{FileStore, MemoryStore};
    use tempfile::tempdir;

    #[test]
    fn empty_storage_loads_default_record() {
        let store = PlannerStore::new(MemoryStore::new());
        let loaded = store.load_with_source();
        assert_eq!(loaded.record, DashboardRecord::default());
        assert_eq!(loaded.source, LoadSource::Missing);
        assert_eq!(
            store.load().study_hours.as_deref(),
            Some("15 hrs this week")
        );
    }

    #[test]
    fn malformed_json_loads_default_record() {
        let store = PlannerStore::new(MemoryStore::with_entry("plannerData", "{not json"));
        let loaded = store.load_with_source();
        assert_eq!(loaded.record, DashboardRecord::default());
        assert!(matches!(loaded.source, LoadSource::Corrupt(_)));
        assert!(loaded.used_defaults());
    }

    #[test]
    fn non_object_values_load_default_record() {
        for raw in ["null", "42", "\"text\"", "[1,2]"] {
            let store = PlannerStore::new(MemoryStore::with_entry("plannerData", raw));
            assert_eq!(store.load(), DashboardRecord::default(), "raw = {}", raw);
        }
    }

    #[test]
    fn stored_record_with_missing_field_is_kept_as_is() {
        let store = PlannerStore::new(MemoryStore::with_entry(
            "plannerData",
            r#"{"studyHours":"4 hrs"}"#,
        ));
        let loaded = store.load_with_source();
        assert_eq!(loaded.source, LoadSource::Stored);
        assert_eq!(loaded.record.study_hours.as_deref(), Some("4 hrs"));
        assert_eq!(loaded.record.tasks_due, None);
    }

    #[test]
    fn update_changes_one_field_and_keeps_the_others() {
        let mut store = PlannerStore::new(MemoryStore::new());
        store.update(Field::TasksDue, "5 tasks left").unwrap();
        store.update(Field::StudyHours, "20 hrs this week").unwrap();

        let record = store.load();
        assert_eq!(record.study_hours.as_deref(), Some("20 hrs this week"));
        assert_eq!(record.tasks_due.as_deref(), Some("5 tasks left"));
        assert_eq!(record.next_exam.as_deref(), Some("20 July 2025"));
    }

    #[test]
    fn update_rewrites_the_full_record() {
        let mut store = PlannerStore::new(MemoryStore::new());
        store.update(Field::NextExam, "25 August 2025").unwrap();

        let raw = store.storage().get("plannerData").unwrap().unwrap();
        let value: Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value["studyHours"], "15 hrs this week");
        assert_eq!(value["tasksDue"], "3 tasks left");
        assert_eq!(value["nextExam"], "25 August 2025");
    }

    #[test]
    fn update_over_corrupt_data_starts_from_defaults() {
        let mut store = PlannerStore::new(MemoryStore::with_entry("plannerData", "{not json"));
        let record = store.update(Field::StudyHours, "1 hr").unwrap();
        assert_eq!(record.tasks_due.as_deref(), Some("3 tasks left"));
        assert_eq!(store.load_with_source().source, LoadSource::Stored);
    }

    #[test]
    fn reset_returns_to_defaults() {
        let mut store = PlannerStore::new(MemoryStore::new());
        store.update(Field::StudyHours, "9 hrs").unwrap();
        store.reset().unwrap();
        assert_eq!(store.load_with_source().source, LoadSource::Missing);
    }

    #[test]
    fn file_backed_store_persists_across_instances() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("storage.json");

        let mut store = PlannerStore::new(FileStore::new(&path));
        store.update(Field::StudyHours, "20 hrs this week").unwrap();

        let reopened = PlannerStore::new(FileStore::new(&path));
        assert_eq!(
            reopened.load().study_hours.as_deref(),
            Some("20 hrs this week")
        );
    }

    #[test]
    fn failed_write_surfaces_io_error_and_keeps_defaults() {
        let dir = tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "a plain file").unwrap();
        let mut store = PlannerStore::new(FileStore::new(blocker.join("storage.json")));

        let result = store.update(Field::TasksDue, "5 tasks left");
        assert!(matches!(result, Err(StorageError::Io(_))));

        let loaded = store.load_with_source();
        assert_eq!(loaded.source, LoadSource::Missing);
        assert_eq!(loaded.record, DashboardRecord::default());
    }

    #[test]
    fn unreadable_storage_file_loads_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("storage.json");
        std::fs::write(&path, "not an object").unwrap();

        let loaded = PlannerStore::new(FileStore::new(&path)).load_with_source();
        assert_eq!(loaded.record, DashboardRecord::default());
        assert!(matches!(loaded.source, LoadSource::Unreadable(_)));
    }
}

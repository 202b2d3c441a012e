//! Student planner
//!
//! A three-field dashboard record kept under a single storage key.

pub mod error;
pub mod i18n;
pub mod prompt;
pub mod record;
pub mod storage;
pub mod store;

pub use i18n::Language;
pub use prompt::{EditOutcome, StreamPrompt, edit_field};
pub use record::{DashboardRecord, Field};
pub use storage::{FileStore, KeyValueStore};
pub use store::{LoadSource, PlannerStore};

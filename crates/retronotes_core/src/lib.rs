//! Core domain logic for RetroNotes.
//! This crate is the single source of truth for note, filter and export
//! invariants; UI layers stay thin on top of it.

pub mod ai;
pub mod calendar;
pub mod filter;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod store;

pub use ai::{AiError, AiResult, GeminiClient, TextAssistant};
pub use calendar::MonthCursor;
pub use filter::{active_dates, clear, filter_notes, is_within_open_range, select_date, DateRange};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::note::{Note, NoteDraft, NoteId};
pub use model::settings::AppSettings;
pub use repo::{note_repo::NoteRepository, settings_repo::SettingsRepository, RepoError};
pub use service::export_service::{
    export_to_file, render_json, ExportError, ExportSelection, EXPORT_FILE_NAME,
};
pub use service::note_service::{NoteService, NoteServiceError};
pub use store::{KvStore, MemoryKvStore, SqliteKvStore, StoreError, NOTES_KEY, SETTINGS_KEY};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}

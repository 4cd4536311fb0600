//! Note domain model.
//!
//! # Responsibility
//! - Define the canonical note record and the editor draft payload.
//!
//! # Invariants
//! - `id` is stable and never reused for another note.
//! - `updated_at >= created_at` for every persisted note.
//! - Serialized field names stay camelCase; the persisted blob format is
//!   shared with earlier builds of the app and must keep reading them.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a note.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type NoteId = Uuid;

/// Canonical note record persisted in the note collection blob.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    /// Stable global ID used for editing, deletion and export selection.
    pub id: NoteId,
    /// User-facing title. May be empty.
    pub title: String,
    /// Free-form body text.
    pub content: String,
    /// Creation time, epoch milliseconds. The only field read by the
    /// date-range filter.
    pub created_at: i64,
    /// Last modification time, epoch milliseconds.
    pub updated_at: i64,
}

/// Editor payload for creating or fully replacing a note's text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteDraft {
    pub title: String,
    pub content: String,
}

impl NoteDraft {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }
}

impl Note {
    /// Creates a new note from a draft with a generated stable ID.
    ///
    /// # Invariants
    /// - `created_at == updated_at == now_ms`.
    pub fn from_draft(draft: NoteDraft, now_ms: i64) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: draft.title,
            content: draft.content,
            created_at: now_ms,
            updated_at: now_ms,
        }
    }

    /// Replaces title and content, bumping only `updated_at`.
    pub fn apply_draft(&mut self, draft: NoteDraft, now_ms: i64) {
        self.title = draft.title;
        self.content = draft.content;
        self.updated_at = now_ms;
    }
}

#[cfg(test)]
mod tests {
    use super::{Note, NoteDraft};

    #[test]
    fn from_draft_sets_both_timestamps() {
        let note = Note::from_draft(NoteDraft::new("t", "body"), 1_700_000_000_000);
        assert_eq!(note.created_at, 1_700_000_000_000);
        assert_eq!(note.updated_at, 1_700_000_000_000);
        assert_eq!(note.title, "t");
    }

    #[test]
    fn apply_draft_keeps_created_at() {
        let mut note = Note::from_draft(NoteDraft::new("t", "body"), 1_000);
        note.apply_draft(NoteDraft::new("t2", "body2"), 2_000);
        assert_eq!(note.created_at, 1_000);
        assert_eq!(note.updated_at, 2_000);
        assert_eq!(note.content, "body2");
    }

    #[test]
    fn serde_uses_camel_case_field_names() {
        let note = Note::from_draft(NoteDraft::new("t", "b"), 42);
        let json = serde_json::to_string(&note).unwrap();
        assert!(json.contains("\"createdAt\":42"));
        assert!(json.contains("\"updatedAt\":42"));
    }
}

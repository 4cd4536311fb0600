//! Note use-case service.
//!
//! # Responsibility
//! - Provide create/update/delete/list entry points over the note collection.
//! - Persist the whole collection after every mutation.
//!
//! # Invariants
//! - New notes are prepended; the collection stays newest-first.
//! - `update` bumps `updated_at` only and keeps list position.
//! - `delete` removes the note outright; there are no tombstones.
//! - Listing never reorders; the range filter is stable.

use crate::calendar::day_key;
use crate::filter::{self, DateRange};
use crate::model::note::{Note, NoteDraft, NoteId};
use crate::repo::{note_repo::NoteRepository, RepoError};
use crate::store::KvStore;
use chrono::Utc;
use log::info;
use std::collections::BTreeSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type NoteServiceResult<T> = Result<T, NoteServiceError>;

/// Service error for note use-cases.
#[derive(Debug)]
pub enum NoteServiceError {
    /// Target note does not exist.
    NoteNotFound(NoteId),
    /// Persistence-layer failure.
    Repo(RepoError),
}

impl Display for NoteServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoteNotFound(id) => write!(f, "note not found: {id}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for NoteServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            Self::NoteNotFound(_) => None,
        }
    }
}

impl From<RepoError> for NoteServiceError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

/// Use-case service owning the in-memory collection and its repository.
///
/// Mirrors the app's single state holder: the collection is loaded once,
/// mutated in memory and written back as one blob on every change.
pub struct NoteService<S: KvStore> {
    repo: NoteRepository<S>,
    notes: Vec<Note>,
}

impl<S: KvStore> NoteService<S> {
    /// Loads the persisted collection and wraps it in a service.
    pub fn open(repo: NoteRepository<S>) -> NoteServiceResult<Self> {
        let notes = repo.load()?;
        Ok(Self { repo, notes })
    }

    /// Creates a note from a draft, prepends it and persists.
    pub fn create(&mut self, draft: NoteDraft) -> NoteServiceResult<Note> {
        let note = Note::from_draft(draft, now_ms());
        self.notes.insert(0, note.clone());
        self.repo.save(&self.notes)?;
        info!("event=note_create module=service status=ok id={}", note.id);
        Ok(note)
    }

    /// Replaces a note's title and content, bumping `updated_at`.
    pub fn update(&mut self, id: NoteId, draft: NoteDraft) -> NoteServiceResult<Note> {
        let Some(note) = self.notes.iter_mut().find(|note| note.id == id) else {
            return Err(NoteServiceError::NoteNotFound(id));
        };
        note.apply_draft(draft, now_ms());
        let updated = note.clone();
        self.repo.save(&self.notes)?;
        info!("event=note_update module=service status=ok id={id}");
        Ok(updated)
    }

    /// Removes a note from the collection and persists.
    pub fn delete(&mut self, id: NoteId) -> NoteServiceResult<()> {
        let before = self.notes.len();
        self.notes.retain(|note| note.id != id);
        if self.notes.len() == before {
            return Err(NoteServiceError::NoteNotFound(id));
        }
        self.repo.save(&self.notes)?;
        info!("event=note_delete module=service status=ok id={id}");
        Ok(())
    }

    /// Finds one note by id.
    pub fn get(&self, id: NoteId) -> Option<&Note> {
        self.notes.iter().find(|note| note.id == id)
    }

    /// The full collection in stored (newest-first) order.
    pub fn list(&self) -> &[Note] {
        &self.notes
    }

    /// The collection filtered by the selected date range; identity when the
    /// range is inactive.
    pub fn list_filtered(&self, range: DateRange) -> Vec<Note> {
        filter::filter_notes(&self.notes, range)
    }

    /// `YYYY-MM-DD` keys of days carrying at least one note; decorates the
    /// picker grid.
    pub fn active_date_keys(&self) -> BTreeSet<String> {
        filter::active_dates(&self.notes)
            .into_iter()
            .map(day_key)
            .collect()
    }
}

fn now_ms() -> i64 {
    Utc::now().timestamp_millis()
}

//! Note collection persistence.
//!
//! # Responsibility
//! - Load and save the full note collection as one JSON blob.
//!
//! # Invariants
//! - A missing blob is an empty collection, not an error.
//! - A present but undecodable blob is reported as `RepoError::Corrupt`;
//!   callers decide whether to surface or reset.
//! - Stored order is preserved verbatim (the app keeps newest first).

use super::{RepoError, RepoResult};
use crate::model::note::Note;
use crate::store::{KvStore, NOTES_KEY};
use log::debug;

/// Whole-blob note repository over an injected store.
pub struct NoteRepository<S: KvStore> {
    store: S,
}

impl<S: KvStore> NoteRepository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Loads the full collection; empty when never saved.
    pub fn load(&self) -> RepoResult<Vec<Note>> {
        let Some(blob) = self.store.load(NOTES_KEY)? else {
            return Ok(Vec::new());
        };
        let notes: Vec<Note> = serde_json::from_str(&blob).map_err(|err| RepoError::Corrupt {
            key: NOTES_KEY,
            message: err.to_string(),
        })?;
        debug!(
            "event=notes_load module=repo status=ok count={}",
            notes.len()
        );
        Ok(notes)
    }

    /// Overwrites the full collection blob.
    pub fn save(&mut self, notes: &[Note]) -> RepoResult<()> {
        let blob = serde_json::to_string(notes).map_err(|err| RepoError::Corrupt {
            key: NOTES_KEY,
            message: err.to_string(),
        })?;
        self.store.save(NOTES_KEY, &blob)?;
        debug!(
            "event=notes_save module=repo status=ok count={}",
            notes.len()
        );
        Ok(())
    }

    /// Releases the underlying store.
    pub fn into_store(self) -> S {
        self.store
    }
}

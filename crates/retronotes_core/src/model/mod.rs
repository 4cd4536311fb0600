//! Domain model for the note-taking core.
//!
//! # Responsibility
//! - Define canonical data structures shared by repos, services and filters.
//!
//! # Invariants
//! - Every note is identified by a stable `NoteId`.
//! - Timestamps are epoch milliseconds in UTC.

pub mod note;
pub mod settings;

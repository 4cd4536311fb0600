//! JSON export use-case.
//!
//! # Responsibility
//! - Track which notes are ticked for export.
//! - Render the selected notes as pretty-printed JSON and write it out.
//!
//! # Invariants
//! - Export order follows the supplied collection order, not tick order.
//! - An empty selection cannot be exported.

use crate::model::note::{Note, NoteId};
use log::info;
use std::collections::BTreeSet;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::Path;

/// Default file name offered for a saved export.
pub const EXPORT_FILE_NAME: &str = "retro-notes-export.json";

pub type ExportResult<T> = Result<T, ExportError>;

/// Export failure modes.
#[derive(Debug)]
pub enum ExportError {
    /// Nothing is ticked for export.
    EmptySelection,
    /// Destination file could not be written.
    Io(std::io::Error),
    /// Selected notes could not be serialized.
    Json(serde_json::Error),
}

impl Display for ExportError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptySelection => write!(f, "no notes selected for export"),
            Self::Io(err) => write!(f, "{err}"),
            Self::Json(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ExportError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::EmptySelection => None,
            Self::Io(err) => Some(err),
            Self::Json(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for ExportError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for ExportError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

/// Tick-state over note ids for the export dialog.
#[derive(Debug, Clone, Default)]
pub struct ExportSelection {
    selected: BTreeSet<NoteId>,
}

impl ExportSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flips one note's tick state.
    pub fn toggle(&mut self, id: NoteId) {
        if !self.selected.remove(&id) {
            self.selected.insert(id);
        }
    }

    /// Ticks every listed note (the ALL button).
    pub fn select_all(&mut self, notes: &[Note]) {
        self.selected = notes.iter().map(|note| note.id).collect();
    }

    /// Unticks everything (the NONE button).
    pub fn clear(&mut self) {
        self.selected.clear();
    }

    pub fn is_selected(&self, id: NoteId) -> bool {
        self.selected.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }
}

/// Renders the ticked subset of `notes` as pretty-printed JSON.
///
/// The subset keeps the collection's order so an export of "ALL" is
/// byte-stable regardless of tick order.
pub fn render_json(notes: &[Note], selection: &ExportSelection) -> ExportResult<String> {
    if selection.is_empty() {
        return Err(ExportError::EmptySelection);
    }
    let selected: Vec<&Note> = notes
        .iter()
        .filter(|note| selection.is_selected(note.id))
        .collect();
    Ok(serde_json::to_string_pretty(&selected)?)
}

/// Writes the rendered export payload to `path`.
pub fn export_to_file(
    notes: &[Note],
    selection: &ExportSelection,
    path: impl AsRef<Path>,
) -> ExportResult<()> {
    let payload = render_json(notes, selection)?;
    std::fs::write(path.as_ref(), payload)?;
    info!(
        "event=export_write module=service status=ok count={} path={}",
        selection.len(),
        path.as_ref().display()
    );
    Ok(())
}

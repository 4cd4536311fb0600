use retronotes_core::{
    export_to_file, render_json, ExportError, ExportSelection, Note, NoteDraft,
};

fn sample(title: &str, at: i64) -> Note {
    Note::from_draft(NoteDraft::new(title, format!("{title} body")), at)
}

#[test]
fn select_all_then_clear_mirrors_the_all_none_toggle() {
    let notes = vec![sample("a", 1_000), sample("b", 2_000), sample("c", 3_000)];
    let mut selection = ExportSelection::new();

    selection.select_all(&notes);
    assert_eq!(selection.len(), notes.len());
    assert!(notes.iter().all(|note| selection.is_selected(note.id)));

    selection.clear();
    assert!(selection.is_empty());
}

#[test]
fn rendered_payload_is_a_pretty_json_array() {
    let notes = vec![sample("a", 1_000)];
    let mut selection = ExportSelection::new();
    selection.select_all(&notes);

    let json = render_json(&notes, &selection).unwrap();
    assert!(json.starts_with("[\n"));
    assert!(json.contains("\"createdAt\": 1000"));

    let parsed: Vec<Note> = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, notes);
}

#[test]
fn partial_selection_exports_only_ticked_notes() {
    let notes = vec![sample("wanted", 1_000), sample("skipped", 2_000)];
    let mut selection = ExportSelection::new();
    selection.toggle(notes[0].id);

    let json = render_json(&notes, &selection).unwrap();
    assert!(json.contains("wanted"));
    assert!(!json.contains("skipped"));
}

#[test]
fn export_writes_the_payload_to_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("retro-notes-export.json");

    let notes = vec![sample("a", 1_000), sample("b", 2_000)];
    let mut selection = ExportSelection::new();
    selection.select_all(&notes);

    export_to_file(&notes, &selection, &path).unwrap();
    let written = std::fs::read_to_string(&path).unwrap();
    assert_eq!(written, render_json(&notes, &selection).unwrap());
}

#[test]
fn empty_selection_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("never-written.json");

    let notes = vec![sample("a", 1_000)];
    let err = export_to_file(&notes, &ExportSelection::new(), &path).unwrap_err();
    assert!(matches!(err, ExportError::EmptySelection));
    assert!(!path.exists());
}

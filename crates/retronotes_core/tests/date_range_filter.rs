use chrono::NaiveDate;
use retronotes_core::calendar::{day_end_ms, day_start_ms};
use retronotes_core::{
    active_dates, filter_notes, select_date, DateRange, Note, NoteDraft,
};

fn day(month: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, month, d).unwrap()
}

/// A note created mid-day (local time) on the given date.
fn note_on(date: NaiveDate, title: &str) -> Note {
    let noon = day_start_ms(date).unwrap() + 12 * 60 * 60 * 1000;
    Note::from_draft(NoteDraft::new(title, "body"), noon)
}

fn titles(notes: &[Note]) -> Vec<&str> {
    notes.iter().map(|note| note.title.as_str()).collect()
}

#[test]
fn select_date_starts_completes_and_resets() {
    let empty = DateRange::empty();

    let anchored = select_date(empty, day(1, 3));
    assert_eq!(anchored.start, Some(day(1, 3)));
    assert_eq!(anchored.end, None);

    let completed = select_date(anchored, day(1, 7));
    assert_eq!(completed.start, Some(day(1, 3)));
    assert_eq!(completed.end, Some(day(1, 7)));

    // A click on a completed range always starts over, never extends.
    let reset = select_date(completed, day(1, 20));
    assert_eq!(reset.start, Some(day(1, 20)));
    assert_eq!(reset.end, None);
}

#[test]
fn select_date_reanchors_on_earlier_click() {
    let anchored = select_date(DateRange::empty(), day(1, 10));
    let reanchored = select_date(anchored, day(1, 4));
    assert_eq!(reanchored.start, Some(day(1, 4)));
    assert_eq!(reanchored.end, None);
}

#[test]
fn empty_range_filters_nothing() {
    let notes = vec![note_on(day(1, 1), "a"), note_on(day(1, 5), "b")];
    let filtered = filter_notes(&notes, DateRange::empty());
    assert_eq!(filtered, notes);
}

#[test]
fn start_only_range_filters_forward_in_time() {
    let notes = vec![
        note_on(day(1, 1), "jan-01"),
        note_on(day(1, 5), "jan-05"),
        note_on(day(1, 10), "jan-10"),
    ];
    let range = DateRange {
        start: Some(day(1, 3)),
        end: None,
    };
    assert_eq!(titles(&filter_notes(&notes, range)), vec!["jan-05", "jan-10"]);
}

#[test]
fn complete_range_is_inclusive_on_both_days() {
    let notes = vec![
        note_on(day(1, 1), "jan-01"),
        note_on(day(1, 5), "jan-05"),
        note_on(day(1, 10), "jan-10"),
    ];
    let range = DateRange {
        start: Some(day(1, 3)),
        end: Some(day(1, 7)),
    };
    assert_eq!(titles(&filter_notes(&notes, range)), vec!["jan-05"]);
}

#[test]
fn single_day_range_spans_midnight_to_end_of_day() {
    let target = day(1, 10);
    let at_midnight = Note::from_draft(
        NoteDraft::new("first-instant", ""),
        day_start_ms(target).unwrap(),
    );
    let at_last_ms = Note::from_draft(
        NoteDraft::new("last-instant", ""),
        day_end_ms(target).unwrap(),
    );
    let day_before = note_on(day(1, 9), "before");
    let day_after = note_on(day(1, 11), "after");

    let notes = vec![day_before, at_midnight, at_last_ms, day_after];
    let range = DateRange {
        start: Some(target),
        end: Some(target),
    };
    assert_eq!(
        titles(&filter_notes(&notes, range)),
        vec!["first-instant", "last-instant"]
    );
}

#[test]
fn filter_is_stable_and_keeps_relative_order() {
    // Stored newest-first; filtering must not resort.
    let notes = vec![
        note_on(day(2, 9), "newest"),
        note_on(day(2, 5), "middle"),
        note_on(day(2, 1), "oldest"),
    ];
    let range = DateRange {
        start: Some(day(2, 1)),
        end: Some(day(2, 9)),
    };
    assert_eq!(
        titles(&filter_notes(&notes, range)),
        vec!["newest", "middle", "oldest"]
    );
}

#[test]
fn unrepresentable_timestamps_are_excluded_not_fatal() {
    let good = note_on(day(3, 2), "good");
    let broken = Note::from_draft(NoteDraft::new("broken", ""), i64::MAX);

    let notes = vec![good.clone(), broken];
    let range = DateRange {
        start: Some(day(3, 1)),
        end: None,
    };
    // i64::MAX is numerically >= the bound but maps to no calendar day;
    // it must be dropped from both the filter and the active-date set.
    assert_eq!(titles(&filter_notes(&notes, range)), vec!["good"]);

    let days = active_dates(&notes);
    assert_eq!(days.len(), 1);
    assert!(days.contains(&day(3, 2)));
}

#[test]
fn active_dates_collapses_same_day_notes() {
    let notes = vec![
        note_on(day(4, 1), "a"),
        note_on(day(4, 1), "b"),
        note_on(day(4, 3), "c"),
    ];
    let days = active_dates(&notes);
    assert_eq!(days.len(), 2);
    assert!(days.contains(&day(4, 1)));
    assert!(days.contains(&day(4, 3)));
}

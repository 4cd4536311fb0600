//! Date-range selection and note filtering.
//!
//! # Responsibility
//! - Interpret single-day picker clicks as a two-endpoint range.
//! - Filter a note collection by creation day against that range.
//! - Derive the set of days that carry at least one note.
//!
//! # Invariants
//! - `DateRange::end`, when present, is never earlier than `start`; only
//!   `select_date` and `clear` produce ranges.
//! - Comparison granularity is the calendar day; no time-of-day drift.
//! - Filtering is stable: surviving notes keep their relative order.
//! - Notes with timestamps outside the representable range are excluded
//!   rather than failing the whole operation.

use crate::calendar::{day_end_ms, day_start_ms, local_day_of_ms};
use crate::model::note::Note;
use chrono::NaiveDate;
use std::collections::BTreeSet;

/// User-selected inclusive day interval for filtering notes.
///
/// Held in memory only; never persisted. An absent `start` means no filter is
/// active, and an absent `end` with a present `start` means an open-ended
/// "from start onward" filter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateRange {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl DateRange {
    /// The empty range: no filter active.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Whether a start anchor exists (the filter is active).
    pub fn is_active(&self) -> bool {
        self.start.is_some()
    }

    /// Whether both endpoints are set.
    pub fn is_complete(&self) -> bool {
        self.start.is_some() && self.end.is_some()
    }
}

/// Applies one picker click to the current range.
///
/// Two-click semantics:
/// - no anchor yet, or a completed range: the click starts a fresh range
///   (a third click never extends a completed range);
/// - range in progress and the click is before the anchor: the earlier day
///   becomes the new anchor (no swap-to-end);
/// - range in progress and the click is on/after the anchor: the range
///   completes.
pub fn select_date(range: DateRange, clicked: NaiveDate) -> DateRange {
    match range.start {
        None => DateRange {
            start: Some(clicked),
            end: None,
        },
        Some(_) if range.end.is_some() => DateRange {
            start: Some(clicked),
            end: None,
        },
        Some(start) if clicked < start => DateRange {
            start: Some(clicked),
            end: None,
        },
        Some(start) => DateRange {
            start: Some(start),
            end: Some(clicked),
        },
    }
}

/// Resets the selection. Closing the picker afterwards is the caller's
/// concern.
pub fn clear() -> DateRange {
    DateRange::empty()
}

/// Filters notes by creation time against the selected range.
///
/// - inactive range: the input collection unchanged;
/// - start only: all notes created at or after local midnight of `start`;
/// - both endpoints: notes within `[start 00:00:00.000, end 23:59:59.999]`
///   local time, inclusive on both sides.
pub fn filter_notes(notes: &[Note], range: DateRange) -> Vec<Note> {
    let Some(start) = range.start else {
        return notes.to_vec();
    };
    let Some(start_bound) = day_start_ms(start) else {
        // Unresolvable start day: nothing can match deterministically.
        return Vec::new();
    };
    let end_bound = range.end.and_then(day_end_ms);

    notes
        .iter()
        .filter(|note| {
            // A timestamp with no representable local day is excluded from
            // range filtering, mirroring its exclusion from the active-date
            // set.
            if local_day_of_ms(note.created_at).is_none() {
                return false;
            }
            match end_bound {
                None => note.created_at >= start_bound,
                Some(end) => note.created_at >= start_bound && note.created_at <= end,
            }
        })
        .cloned()
        .collect()
}

/// Whether `date` lies strictly between the endpoints of a completed range.
///
/// Used to style in-between day cells; endpoints themselves are excluded and
/// incomplete ranges have no interior.
pub fn is_within_open_range(date: NaiveDate, range: DateRange) -> bool {
    match (range.start, range.end) {
        (Some(start), Some(end)) => date > start && date < end,
        _ => false,
    }
}

/// The set of local calendar days on which at least one note was created.
///
/// Recomputed from the full collection whenever it changes; decorates the
/// picker grid. Timestamps that map to no representable local day are
/// skipped.
pub fn active_dates(notes: &[Note]) -> BTreeSet<NaiveDate> {
    notes
        .iter()
        .filter_map(|note| local_day_of_ms(note.created_at))
        .collect()
}

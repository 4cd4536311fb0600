//! Calendar grid arithmetic.
//!
//! # Responsibility
//! - Supply month-shape primitives (day count, first weekday) for the picker
//!   grid.
//! - Convert calendar days to local-time epoch-millisecond bounds used by the
//!   range filter.
//!
//! # Invariants
//! - Weekday numbering is 0=Sunday..6=Saturday, locale-independent.
//! - Day bounds are inclusive: 00:00:00.000 through 23:59:59.999 local time.
//! - Out-of-range or unresolvable local instants yield `None`, never a panic.

use chrono::{Datelike, Local, NaiveDate, TimeZone};

/// A calendar month addressed by year and 1-based month number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthCursor {
    pub year: i32,
    /// 1 = January .. 12 = December.
    pub month: u32,
}

impl MonthCursor {
    /// The month containing today's local date.
    pub fn current() -> Self {
        let today = Local::now().date_naive();
        Self {
            year: today.year(),
            month: today.month(),
        }
    }

    /// Previous month, stepping the year at January.
    pub fn prev(self) -> Self {
        if self.month == 1 {
            Self {
                year: self.year - 1,
                month: 12,
            }
        } else {
            Self {
                year: self.year,
                month: self.month - 1,
            }
        }
    }

    /// Next month, stepping the year at December.
    pub fn next(self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    /// First day of this month, or `None` for years outside chrono's range.
    pub fn first_day(self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
    }

    /// Number of days in this month, accounting for leap years.
    pub fn days_in_month(self) -> Option<u32> {
        let first = self.first_day()?;
        let next_first = self.next().first_day()?;
        Some((next_first - first).num_days() as u32)
    }

    /// Weekday of the 1st of this month, 0=Sunday..6=Saturday.
    ///
    /// The picker grid uses this as the number of leading blank cells.
    pub fn first_weekday(self) -> Option<u32> {
        Some(self.first_day()?.weekday().num_days_from_sunday())
    }

    /// The date for a 1-based day number within this month, when valid.
    pub fn day(self, day: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, day)
    }
}

/// Epoch milliseconds of local midnight at the start of `date`.
///
/// Skipped or ambiguous local times (DST transitions) resolve to the earliest
/// valid instant.
pub fn day_start_ms(date: NaiveDate) -> Option<i64> {
    let midnight = date.and_hms_milli_opt(0, 0, 0, 0)?;
    Local
        .from_local_datetime(&midnight)
        .earliest()
        .map(|dt| dt.timestamp_millis())
}

/// Epoch milliseconds of 23:59:59.999 local time at the end of `date`.
pub fn day_end_ms(date: NaiveDate) -> Option<i64> {
    let end = date.and_hms_milli_opt(23, 59, 59, 999)?;
    Local
        .from_local_datetime(&end)
        .earliest()
        .map(|dt| dt.timestamp_millis())
}

/// Local calendar day containing the given epoch-millisecond instant.
///
/// Returns `None` for instants chrono cannot represent; callers treat such
/// notes as having no creation day so malformed upstream timestamps degrade
/// instead of crashing.
pub fn local_day_of_ms(epoch_ms: i64) -> Option<NaiveDate> {
    Local
        .timestamp_millis_opt(epoch_ms)
        .single()
        .map(|dt| dt.date_naive())
}

/// Formats a day as `YYYY-MM-DD` for display and active-day decoration.
pub fn day_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::{day_end_ms, day_key, day_start_ms, local_day_of_ms, MonthCursor};
    use chrono::NaiveDate;

    fn cursor(year: i32, month: u32) -> MonthCursor {
        MonthCursor { year, month }
    }

    #[test]
    fn month_lengths_cover_leap_years() {
        assert_eq!(cursor(2024, 1).days_in_month(), Some(31));
        assert_eq!(cursor(2024, 2).days_in_month(), Some(29));
        assert_eq!(cursor(2023, 2).days_in_month(), Some(28));
        assert_eq!(cursor(2024, 4).days_in_month(), Some(30));
        assert_eq!(cursor(2024, 12).days_in_month(), Some(31));
    }

    #[test]
    fn first_weekday_is_sunday_based() {
        // 2024-09-01 was a Sunday, 2024-01-01 a Monday.
        assert_eq!(cursor(2024, 9).first_weekday(), Some(0));
        assert_eq!(cursor(2024, 1).first_weekday(), Some(1));
    }

    #[test]
    fn month_paging_steps_year_boundaries() {
        assert_eq!(cursor(2024, 1).prev(), cursor(2023, 12));
        assert_eq!(cursor(2023, 12).next(), cursor(2024, 1));
        assert_eq!(cursor(2024, 6).next(), cursor(2024, 7));
    }

    #[test]
    fn day_bounds_span_the_whole_day() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
        let start = day_start_ms(date).unwrap();
        let end = day_end_ms(date).unwrap();
        assert_eq!(end - start, 24 * 60 * 60 * 1000 - 1);
        assert_eq!(local_day_of_ms(start), Some(date));
        assert_eq!(local_day_of_ms(end), Some(date));
        assert_eq!(local_day_of_ms(end + 1), date.succ_opt());
    }

    #[test]
    fn day_key_is_zero_padded() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();
        assert_eq!(day_key(date), "2024-03-07");
    }

    #[test]
    fn unrepresentable_instants_have_no_day() {
        assert_eq!(local_day_of_ms(i64::MAX), None);
        assert_eq!(local_day_of_ms(i64::MIN), None);
    }
}

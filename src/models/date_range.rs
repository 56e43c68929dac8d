//! Date range used by export and balance queries
//!
//! Ranges are half-open: the start is included and the end is excluded.
//! Both bounds always sit at the start of a day.

use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Half-open interval `[start, end)` over operation dates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl DateRange {
    /// Create a range from explicit bounds
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self { start, end }
    }

    /// Resolve optional query dates against the local calendar
    ///
    /// A missing `from` means the Unix epoch, a missing `to` means today.
    pub fn resolve(from: Option<NaiveDate>, to: Option<NaiveDate>) -> Self {
        Self::resolve_with_today(from, to, Local::now().date_naive())
    }

    /// Resolve optional query dates with an explicit "today"
    pub fn resolve_with_today(
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
        today: NaiveDate,
    ) -> Self {
        // NaiveDate's default is 1970-01-01
        let from = from.unwrap_or_default();
        let to = to.unwrap_or(today);
        Self {
            start: start_of_day(from),
            end: start_of_day(to),
        }
    }

    /// Check if a timestamp falls inside the range
    pub fn contains(&self, at: NaiveDateTime) -> bool {
        at >= self.start && at < self.end
    }

    /// Check if the range can contain anything at all
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}, {})",
            self.start.format("%Y-%m-%d"),
            self.end.format("%Y-%m-%d")
        )
    }
}

/// Midnight at the beginning of the given day
pub fn start_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_missing_from_defaults_to_epoch() {
        let range = DateRange::resolve_with_today(None, Some(ymd(2022, 1, 1)), ymd(2030, 1, 1));
        assert_eq!(range.start, start_of_day(ymd(1970, 1, 1)));
    }

    #[test]
    fn test_missing_to_defaults_to_today() {
        let today = ymd(2022, 10, 16);
        let range = DateRange::resolve_with_today(Some(ymd(2022, 1, 1)), None, today);
        assert_eq!(range.end, start_of_day(today));

        let range = DateRange::resolve(None, None);
        assert_eq!(range.end, start_of_day(Local::now().date_naive()));
    }

    #[test]
    fn test_given_dates_start_of_day() {
        let range = DateRange::resolve_with_today(
            Some(ymd(2022, 1, 1)),
            Some(ymd(2022, 12, 31)),
            ymd(2030, 1, 1),
        );
        assert_eq!(range.start.to_string(), "2022-01-01 00:00:00");
        assert_eq!(range.end.to_string(), "2022-12-31 00:00:00");
    }

    #[test]
    fn test_half_open_bounds() {
        let last_second = |date: NaiveDate| date.and_hms_opt(23, 59, 59).unwrap();
        let range = DateRange::new(
            start_of_day(ymd(2022, 1, 1)),
            start_of_day(ymd(2022, 1, 2)),
        );
        assert!(range.contains(start_of_day(ymd(2022, 1, 1))));
        assert!(range.contains(last_second(ymd(2022, 1, 1))));
        assert!(!range.contains(start_of_day(ymd(2022, 1, 2))));
        assert!(!range.contains(last_second(ymd(2021, 12, 31))));
    }

    #[test]
    fn test_same_day_range_is_empty() {
        let day = start_of_day(ymd(2022, 1, 1));
        let range = DateRange::new(day, day);
        assert!(range.is_empty());
        assert!(!range.contains(day));
    }

    #[test]
    fn test_display() {
        let range = DateRange::new(start_of_day(ymd(2022, 1, 1)), start_of_day(ymd(2022, 2, 1)));
        assert_eq!(range.to_string(), "[2022-01-01, 2022-02-01)");
    }
}

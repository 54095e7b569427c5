//! Half-open calendar date range used by the rental workflow.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::{DomainError, DomainResult};

/// Half-open date range `[start, end)`.
///
/// The end date is exclusive: a rental ending on a given day frees the
/// product for a new rental starting that same day. Time of day is ignored;
/// the workflow deals in calendar dates only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    /// Creates a range, rejecting empty or inverted bounds
    pub fn new(start: NaiveDate, end: NaiveDate) -> DomainResult<Self> {
        if start >= end {
            return Err(DomainError::validation(
                "start date must be before end date",
            ));
        }
        Ok(Self { start, end })
    }

    /// Creates a range from dates already validated elsewhere
    pub(crate) fn new_unchecked(start: NaiveDate, end: NaiveDate) -> Self {
        debug_assert!(start < end);
        Self { start, end }
    }

    /// First day of the range (inclusive)
    pub fn start(&self) -> NaiveDate {
        self.start
    }

    /// Day after the last day of the range (exclusive)
    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Number of rented days
    pub fn days(&self) -> i64 {
        (self.end - self.start).num_days()
    }

    /// Two half-open ranges `[s1, e1)` and `[s2, e2)` intersect iff
    /// `s1 < e2 && s2 < e1`.
    pub fn overlaps(&self, other: &DateRange) -> bool {
        self.start < other.end && other.start < self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 9, d).unwrap()
    }

    fn range(start: u32, end: u32) -> DateRange {
        DateRange::new(day(start), day(end)).unwrap()
    }

    #[test]
    fn test_rejects_inverted_and_empty_ranges() {
        assert!(DateRange::new(day(15), day(10)).is_err());
        assert!(DateRange::new(day(10), day(10)).is_err());
    }

    #[test]
    fn test_day_count() {
        assert_eq!(range(10, 15).days(), 5);
        assert_eq!(range(10, 11).days(), 1);
    }

    #[test]
    fn test_overlapping_ranges() {
        assert!(range(10, 15).overlaps(&range(12, 14)));
        assert!(range(12, 14).overlaps(&range(10, 15)));
        assert!(range(10, 15).overlaps(&range(14, 20)));
        assert!(range(10, 15).overlaps(&range(5, 11)));
    }

    #[test]
    fn test_touching_ranges_do_not_overlap() {
        // End date is exclusive: back-to-back bookings are allowed
        assert!(!range(10, 15).overlaps(&range(15, 20)));
        assert!(!range(15, 20).overlaps(&range(10, 15)));
        assert!(!range(5, 10).overlaps(&range(10, 15)));
    }

    #[test]
    fn test_overlap_is_symmetric() {
        let a = range(10, 15);
        let b = range(13, 22);
        assert_eq!(a.overlaps(&b), b.overlaps(&a));
    }
}

// Booking record: guest identity plus the stay's date range.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    pub guest_name: String,
    pub contact: String,
    pub room_number: u32,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
}

impl Booking {
    /// Callers must pass an ordered range (`check_in <= check_out`); the
    /// booking path validates this before construction.
    pub fn new(
        guest_name: impl Into<String>,
        contact: impl Into<String>,
        room_number: u32,
        check_in: NaiveDate,
        check_out: NaiveDate,
    ) -> Self {
        debug_assert!(check_in <= check_out, "inverted stay range");
        Self {
            guest_name: guest_name.into(),
            contact: contact.into(),
            room_number,
            check_in,
            check_out,
        }
    }

    /// Whether a candidate stay `[start, end]` overlaps this booking.
    /// Touching at a boundary date counts as non-overlapping: a stay ending
    /// on the check-in date or starting on the check-out date does not
    /// conflict.
    pub fn conflicts_with(&self, start: NaiveDate, end: NaiveDate) -> bool {
        let ends_before = end <= self.check_in;
        let starts_after = start >= self.check_out;
        !(ends_before || starts_after)
    }

    pub fn nights(&self) -> i64 {
        (self.check_out - self.check_in).num_days()
    }
}

impl fmt::Display for Booking {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "room {}: {} ({}) {} to {}",
            self.room_number, self.guest_name, self.contact, self.check_in, self.check_out
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn booking() -> Booking {
        Booking::new("Alice", "a@x.com", 5, date(2024, 1, 10), date(2024, 1, 15))
    }

    #[test]
    fn identical_range_conflicts() {
        let b = booking();
        assert!(b.conflicts_with(date(2024, 1, 10), date(2024, 1, 15)));
    }

    #[test]
    fn overlapping_range_conflicts() {
        let b = booking();
        assert!(b.conflicts_with(date(2024, 1, 12), date(2024, 1, 20)));
        assert!(b.conflicts_with(date(2024, 1, 5), date(2024, 1, 11)));
        assert!(b.conflicts_with(date(2024, 1, 5), date(2024, 1, 25)));
    }

    #[test]
    fn touching_boundaries_do_not_conflict() {
        let b = booking();
        // new stay ends on the existing check-in date
        assert!(!b.conflicts_with(date(2024, 1, 5), date(2024, 1, 10)));
        // new stay starts on the existing check-out date
        assert!(!b.conflicts_with(date(2024, 1, 15), date(2024, 1, 20)));
    }

    #[test]
    fn disjoint_ranges_do_not_conflict() {
        let b = booking();
        assert!(!b.conflicts_with(date(2024, 1, 1), date(2024, 1, 5)));
        assert!(!b.conflicts_with(date(2024, 2, 1), date(2024, 2, 5)));
    }

    #[test]
    fn counts_nights() {
        assert_eq!(booking().nights(), 5);
    }

    #[test]
    #[should_panic(expected = "inverted stay range")]
    fn construction_rejects_inverted_range_in_debug() {
        Booking::new("Alice", "a@x.com", 5, date(2024, 1, 15), date(2024, 1, 10));
    }
}

//! Rental period value object with day-granular, inclusive boundaries.

use chrono::NaiveDate;
use serde::Serialize;

use crate::errors::ValidationError;

/// Inclusive date range of a rental
///
/// Rentals occupy whole calendar days: a period where the start and end
/// dates are equal is a valid same-day rental, and the end date is part
/// of the occupied range (the car is only free again the following day).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RentalPeriod {
    start_date: NaiveDate,
    end_date: NaiveDate,
}

impl RentalPeriod {
    /// Create a period, rejecting ranges where the start is after the end
    pub fn new(start_date: NaiveDate, end_date: NaiveDate) -> Result<Self, ValidationError> {
        if start_date > end_date {
            return Err(ValidationError::InvalidPeriod {
                start_date,
                end_date,
            });
        }
        Ok(Self {
            start_date,
            end_date,
        })
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    pub fn end_date(&self) -> NaiveDate {
        self.end_date
    }

    /// Whether two periods share at least one calendar day
    ///
    /// Boundaries are inclusive: a checkout day equal to another rental's
    /// pickup day counts as overlap.
    pub fn overlaps(&self, other: &RentalPeriod) -> bool {
        self.start_date <= other.end_date && other.start_date <= self.end_date
    }

    /// Number of occupied days, counting both endpoints
    pub fn days(&self) -> i64 {
        (self.end_date - self.start_date).num_days() + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn period(start: (i32, u32, u32), end: (i32, u32, u32)) -> RentalPeriod {
        RentalPeriod::new(date(start.0, start.1, start.2), date(end.0, end.1, end.2)).unwrap()
    }

    #[test]
    fn test_rejects_inverted_range() {
        let result = RentalPeriod::new(date(2024, 1, 20), date(2024, 1, 10));
        assert!(result.is_err());
    }

    #[test]
    fn test_same_day_rental_is_valid() {
        let p = period((2024, 1, 10), (2024, 1, 10));
        assert_eq!(p.days(), 1);
    }

    #[test]
    fn test_day_count_is_inclusive() {
        let p = period((2024, 1, 10), (2024, 1, 20));
        assert_eq!(p.days(), 11);
    }

    #[test]
    fn test_disjoint_periods_do_not_overlap() {
        let a = period((2024, 1, 1), (2024, 1, 5));
        let b = period((2024, 1, 10), (2024, 1, 15));
        assert!(!a.overlaps(&b));
        assert!(!b.overlaps(&a));
    }

    #[test]
    fn test_shared_boundary_day_overlaps() {
        let existing = period((2024, 1, 10), (2024, 1, 20));
        let proposed = period((2024, 1, 20), (2024, 1, 25));
        assert!(existing.overlaps(&proposed));
        assert!(proposed.overlaps(&existing));
    }

    #[test]
    fn test_adjacent_periods_do_not_overlap() {
        let existing = period((2024, 1, 10), (2024, 1, 20));
        let proposed = period((2024, 1, 21), (2024, 1, 25));
        assert!(!existing.overlaps(&proposed));
        assert!(!proposed.overlaps(&existing));
    }

    #[test]
    fn test_contained_period_overlaps() {
        let outer = period((2024, 1, 10), (2024, 1, 20));
        let inner = period((2024, 1, 12), (2024, 1, 18));
        assert!(outer.overlaps(&inner));
        assert!(inner.overlaps(&outer));
    }
}

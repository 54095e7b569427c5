//! Rental entity: a booking of a product for a half-open date range.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::value_objects::DateRange;

/// Display status of a rental.
///
/// Never stored: derived from the stored dates, the cancellation flag and the
/// current date, so stored and derived state cannot drift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RentalStatus {
    /// Not cancelled and the end date has not yet passed
    Active,
    /// Not cancelled and the end date has passed
    Completed,
    /// Cancelled by the renter before the start date
    Cancelled,
}

/// Rental entity representing a booking of a product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rental {
    /// Unique identifier for the rental
    pub id: Uuid,

    /// Rented product
    pub product_id: Uuid,

    /// User who booked the product
    pub renter_id: Uuid,

    /// First rented day (inclusive)
    pub start_date: NaiveDate,

    /// Day after the last rented day (exclusive)
    pub end_date: NaiveDate,

    /// Price computed once at creation, immutable thereafter so later
    /// price changes on the product cannot affect existing bookings
    pub total_price: Decimal,

    /// Whether the renter cancelled the booking
    pub cancelled: bool,

    /// Timestamp when the booking was created
    pub created_at: DateTime<Utc>,
}

impl Rental {
    /// Creates a new active rental for `period`, pricing it at
    /// `price_per_day * day count`.
    pub fn new(product_id: Uuid, renter_id: Uuid, period: DateRange, price_per_day: Decimal) -> Self {
        let total_price = price_per_day * Decimal::from(period.days());
        Self {
            id: Uuid::new_v4(),
            product_id,
            renter_id,
            start_date: period.start(),
            end_date: period.end(),
            total_price,
            cancelled: false,
            created_at: Utc::now(),
        }
    }

    /// The booked period as a value object
    pub fn period(&self) -> DateRange {
        // Stored dates were validated at construction
        DateRange::new_unchecked(self.start_date, self.end_date)
    }

    /// Derives the display status for `today`
    pub fn status_on(&self, today: NaiveDate) -> RentalStatus {
        if self.cancelled {
            RentalStatus::Cancelled
        } else if self.end_date <= today {
            RentalStatus::Completed
        } else {
            RentalStatus::Active
        }
    }

    /// Whether the booking has started on or before `today`
    pub fn has_started(&self, today: NaiveDate) -> bool {
        self.start_date <= today
    }

    /// Marks the booking as cancelled
    pub fn cancel(&mut self) {
        self.cancelled = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 9, d).unwrap()
    }

    fn rental(start: u32, end: u32, price_per_day: Decimal) -> Rental {
        let period = DateRange::new(day(start), day(end)).unwrap();
        Rental::new(Uuid::new_v4(), Uuid::new_v4(), period, price_per_day)
    }

    #[test]
    fn test_total_price_is_price_per_day_times_days() {
        let r = rental(10, 15, Decimal::new(10000, 2));
        assert_eq!(r.total_price, Decimal::new(50000, 2));
    }

    #[test]
    fn test_status_projection() {
        let r = rental(10, 15, Decimal::ONE);

        assert_eq!(r.status_on(day(9)), RentalStatus::Active);
        assert_eq!(r.status_on(day(12)), RentalStatus::Active);
        // End date is exclusive, so the rental completes on its end day
        assert_eq!(r.status_on(day(15)), RentalStatus::Completed);
        assert_eq!(r.status_on(day(20)), RentalStatus::Completed);
    }

    #[test]
    fn test_cancelled_wins_over_dates() {
        let mut r = rental(10, 15, Decimal::ONE);
        r.cancel();

        assert_eq!(r.status_on(day(9)), RentalStatus::Cancelled);
        assert_eq!(r.status_on(day(20)), RentalStatus::Cancelled);
    }

    #[test]
    fn test_has_started() {
        let r = rental(10, 15, Decimal::ONE);
        assert!(!r.has_started(day(9)));
        assert!(r.has_started(day(10)));
        assert!(r.has_started(day(12)));
    }
}

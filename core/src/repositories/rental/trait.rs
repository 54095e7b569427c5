//! Rental repository trait defining the interface for booking persistence.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::rental::Rental;
use crate::domain::value_objects::DateRange;
use crate::errors::DomainResult;

/// Read-model row for a renter's booking list: the rental joined with the
/// product's display name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RentalWithProduct {
    pub rental: Rental,
    pub product_name: String,
}

/// Repository trait for Rental entity persistence operations
#[async_trait]
pub trait RentalRepository: Send + Sync {
    /// Find a rental by its unique identifier
    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<Rental>>;

    /// List all bookings made by a user, ordered by start date descending
    async fn find_by_renter(&self, renter_id: Uuid) -> DomainResult<Vec<RentalWithProduct>>;

    /// Find non-cancelled rentals on a product whose period intersects
    /// `period`, ignoring `exclude` when supplied (rebooking flows)
    async fn find_overlapping(
        &self,
        product_id: Uuid,
        period: DateRange,
        exclude: Option<Uuid>,
    ) -> DomainResult<Vec<Rental>>;

    /// Persist a new booking.
    ///
    /// The insert is the authoritative overlap guard: implementations re-check
    /// for colliding non-cancelled rentals and insert within one transaction
    /// (`SELECT ... FOR UPDATE` in the MySQL implementation, a single write
    /// lock in the mock), returning a conflict error when the period is taken.
    /// Two concurrent overlapping bookings can therefore never both commit.
    async fn create(&self, rental: Rental) -> DomainResult<Rental>;

    /// Flag a booking as cancelled
    async fn mark_cancelled(&self, id: Uuid) -> DomainResult<()>;
}

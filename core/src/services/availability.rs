//! Availability checker: decides whether a product is free for a date range.

use std::sync::Arc;
use uuid::Uuid;

use crate::domain::value_objects::DateRange;
use crate::errors::DomainResult;
use crate::repositories::RentalRepository;

/// Read-only availability check over a product's booking history.
///
/// No side effects; calling it twice with identical arguments and no
/// intervening writes returns the same result.
pub struct AvailabilityService<R>
where
    R: RentalRepository,
{
    rentals: Arc<R>,
}

impl<R> AvailabilityService<R>
where
    R: RentalRepository,
{
    /// Create a new availability checker over the given rental store
    pub fn new(rentals: Arc<R>) -> Self {
        Self { rentals }
    }

    /// Whether no non-cancelled rental on `product_id` overlaps `period`.
    ///
    /// `exclude_rental_id` lets an update or cancel-then-rebook flow ignore
    /// the rental being replaced.
    pub async fn is_available(
        &self,
        product_id: Uuid,
        period: DateRange,
        exclude_rental_id: Option<Uuid>,
    ) -> DomainResult<bool> {
        let colliding = self
            .rentals
            .find_overlapping(product_id, period, exclude_rental_id)
            .await?;
        Ok(colliding.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::rental::Rental;
    use crate::repositories::MockRentalRepository;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 9, d).unwrap()
    }

    fn range(start: u32, end: u32) -> DateRange {
        DateRange::new(day(start), day(end)).unwrap()
    }

    #[tokio::test]
    async fn test_empty_history_is_available() {
        let repo = Arc::new(MockRentalRepository::new());
        let service = AvailabilityService::new(repo);

        let available = service
            .is_available(Uuid::new_v4(), range(10, 15), None)
            .await
            .unwrap();
        assert!(available);
    }

    #[tokio::test]
    async fn test_overlapping_rental_blocks() {
        let repo = Arc::new(MockRentalRepository::new());
        let product_id = Uuid::new_v4();
        repo.create(Rental::new(
            product_id,
            Uuid::new_v4(),
            range(10, 15),
            Decimal::ONE,
        ))
        .await
        .unwrap();

        let service = AvailabilityService::new(repo);

        assert!(!service
            .is_available(product_id, range(12, 14), None)
            .await
            .unwrap());
        // Touching ranges are free under half-open semantics
        assert!(service
            .is_available(product_id, range(15, 20), None)
            .await
            .unwrap());
        // Another product is unaffected
        assert!(service
            .is_available(Uuid::new_v4(), range(12, 14), None)
            .await
            .unwrap());
    }

    #[tokio::test]
    async fn test_cancelled_rentals_do_not_block() {
        let repo = Arc::new(MockRentalRepository::new());
        let product_id = Uuid::new_v4();
        let rental = repo
            .create(Rental::new(
                product_id,
                Uuid::new_v4(),
                range(10, 15),
                Decimal::ONE,
            ))
            .await
            .unwrap();
        repo.mark_cancelled(rental.id).await.unwrap();

        let service = AvailabilityService::new(repo);
        assert!(service
            .is_available(product_id, range(12, 14), None)
            .await
            .unwrap());
    }

    #[tokio::test]
    async fn test_exclude_ignores_the_rental_being_replaced() {
        let repo = Arc::new(MockRentalRepository::new());
        let product_id = Uuid::new_v4();
        let rental = repo
            .create(Rental::new(
                product_id,
                Uuid::new_v4(),
                range(10, 15),
                Decimal::ONE,
            ))
            .await
            .unwrap();

        let service = AvailabilityService::new(repo);

        assert!(!service
            .is_available(product_id, range(12, 14), None)
            .await
            .unwrap());
        assert!(service
            .is_available(product_id, range(12, 14), Some(rental.id))
            .await
            .unwrap());
    }

    #[tokio::test]
    async fn test_idempotent_read() {
        let repo = Arc::new(MockRentalRepository::new());
        let product_id = Uuid::new_v4();
        repo.create(Rental::new(
            product_id,
            Uuid::new_v4(),
            range(10, 15),
            Decimal::ONE,
        ))
        .await
        .unwrap();

        let service = AvailabilityService::new(repo);
        let first = service
            .is_available(product_id, range(12, 14), None)
            .await
            .unwrap();
        let second = service
            .is_available(product_id, range(12, 14), None)
            .await
            .unwrap();
        assert_eq!(first, second);
    }
}

//! Rental workflow service implementation.

use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use crate::domain::entities::product::ProductSummary;
use crate::domain::entities::rental::{Rental, RentalStatus};
use crate::domain::value_objects::DateRange;
use crate::errors::{DomainError, DomainResult};
use crate::repositories::{ProductRepository, RentalRepository, ReviewRepository};
use crate::services::availability::AvailabilityService;

/// Booking summary row for a renter's "my rentals" list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RentalSummary {
    pub rental_id: Uuid,
    pub product_id: Uuid,
    pub product_name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub total_price: Decimal,
    /// Display status derived from dates and the cancellation flag
    pub status: RentalStatus,
}

/// Rental-facing product view: listing attributes plus derived state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRentalDetails {
    #[serde(flatten)]
    pub product: ProductSummary,
    /// Whether the product can be booked for today
    pub available_now: bool,
}

/// Outcome of a cancellation attempt.
///
/// The workflow boundary collapses `NotFound` and `NotOwner` into a single
/// `false` so callers cannot probe for the existence of other users'
/// rentals; the distinction is kept here for logs and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CancelOutcome {
    Cancelled,
    NotFound,
    NotOwner,
}

/// Orchestrates creation, listing and cancellation of rentals
pub struct RentalService<R, P, V>
where
    R: RentalRepository,
    P: ProductRepository,
    V: ReviewRepository,
{
    rentals: Arc<R>,
    products: Arc<P>,
    reviews: Arc<V>,
    availability: AvailabilityService<R>,
}

impl<R, P, V> RentalService<R, P, V>
where
    R: RentalRepository,
    P: ProductRepository,
    V: ReviewRepository,
{
    /// Create a new rental service
    pub fn new(rentals: Arc<R>, products: Arc<P>, reviews: Arc<V>) -> Self {
        let availability = AvailabilityService::new(rentals.clone());
        Self {
            rentals,
            products,
            reviews,
            availability,
        }
    }

    /// Book a product for `[start_date, end_date)` on behalf of `renter_id`.
    ///
    /// The total price is computed once here (`price_per_day * day count`)
    /// and never recomputed, so later price changes on the product cannot
    /// affect the booking.
    ///
    /// # Errors
    /// * `Validation` - empty/inverted range or a start date in the past
    /// * `NotFound` - product missing or withdrawn by its owner
    /// * `Conflict` - the period collides with an existing booking
    pub async fn rent_product(
        &self,
        product_id: Uuid,
        renter_id: Uuid,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> DomainResult<Uuid> {
        let period = DateRange::new(start_date, end_date)?;

        let today = Utc::now().date_naive();
        if start_date < today {
            return Err(DomainError::validation("start date cannot be in the past"));
        }

        let product = self
            .products
            .find_by_id(product_id)
            .await?
            .filter(|p| p.available)
            .ok_or_else(|| DomainError::not_found("Product"))?;

        if !self
            .availability
            .is_available(product_id, period, None)
            .await?
        {
            return Err(DomainError::conflict(
                "Product is already rented for the selected period",
            ));
        }

        let rental = Rental::new(product_id, renter_id, period, product.price_per_day);

        // The insert re-checks for collisions transactionally, so a
        // concurrent booking racing past the check above still loses here.
        let created = self.rentals.create(rental).await?;

        info!(
            rental_id = %created.id,
            product_id = %product_id,
            days = period.days(),
            "rental created"
        );
        Ok(created.id)
    }

    /// All bookings made by `user_id`, newest start date first, each
    /// annotated with its computed display status
    pub async fn get_my_rentals(&self, user_id: Uuid) -> DomainResult<Vec<RentalSummary>> {
        let today = Utc::now().date_naive();
        let rows = self.rentals.find_by_renter(user_id).await?;

        Ok(rows
            .into_iter()
            .map(|row| RentalSummary {
                rental_id: row.rental.id,
                product_id: row.rental.product_id,
                product_name: row.product_name,
                start_date: row.rental.start_date,
                end_date: row.rental.end_date,
                total_price: row.rental.total_price,
                status: row.rental.status_on(today),
            })
            .collect())
    }

    /// Cancel a booking on behalf of `user_id`.
    ///
    /// Returns `Ok(false)` when the rental does not exist or belongs to a
    /// different user; the two cases are deliberately indistinguishable at
    /// this boundary. Fails with a business-rule error when the rental has
    /// already started.
    pub async fn cancel_rental(&self, rental_id: Uuid, user_id: Uuid) -> DomainResult<bool> {
        match self.cancel_outcome(rental_id, user_id).await? {
            CancelOutcome::Cancelled => Ok(true),
            CancelOutcome::NotFound | CancelOutcome::NotOwner => Ok(false),
        }
    }

    /// Cancellation with the full outcome, for logging and tests
    pub async fn cancel_outcome(
        &self,
        rental_id: Uuid,
        user_id: Uuid,
    ) -> DomainResult<CancelOutcome> {
        let rental = match self.rentals.find_by_id(rental_id).await? {
            Some(rental) => rental,
            None => {
                warn!(rental_id = %rental_id, "cancel requested for unknown rental");
                return Ok(CancelOutcome::NotFound);
            }
        };

        if rental.renter_id != user_id {
            warn!(
                rental_id = %rental_id,
                user_id = %user_id,
                "cancel requested by non-renter"
            );
            return Ok(CancelOutcome::NotOwner);
        }

        if rental.cancelled {
            return Ok(CancelOutcome::Cancelled);
        }

        let today = Utc::now().date_naive();
        if rental.has_started(today) {
            return Err(DomainError::business_rule(
                "cannot cancel a rental that has already started",
            ));
        }

        self.rentals.mark_cancelled(rental_id).await?;
        info!(rental_id = %rental_id, "rental cancelled");
        Ok(CancelOutcome::Cancelled)
    }

    /// Read-only rental-facing product view: listing attributes plus
    /// current availability and average rating
    pub async fn get_product_details(
        &self,
        product_id: Uuid,
    ) -> DomainResult<Option<ProductRentalDetails>> {
        let summary = match self.products.summary_by_id(product_id).await? {
            Some(summary) => summary,
            None => return Ok(None),
        };

        let today = Utc::now().date_naive();
        let tomorrow = today.succ_opt().unwrap_or(today);
        let free_today = match DateRange::new(today, tomorrow) {
            Ok(period) => {
                self.availability
                    .is_available(product_id, period, None)
                    .await?
            }
            Err(_) => false,
        };

        let average_rating = self.reviews.average_stars(product_id).await?;
        let available_now = summary.available && free_today;

        Ok(Some(ProductRentalDetails {
            product: ProductSummary {
                average_rating,
                ..summary
            },
            available_now,
        }))
    }
}

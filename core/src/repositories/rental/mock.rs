//! Mock implementation of RentalRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::rental::Rental;
use crate::domain::value_objects::DateRange;
use crate::errors::{DomainError, DomainResult};

use super::trait_::{RentalRepository, RentalWithProduct};

/// Mock rental repository for testing.
///
/// `create` performs the overlap re-check under the single write lock,
/// mirroring the transactional guard of the SQL implementation.
pub struct MockRentalRepository {
    rentals: Arc<RwLock<HashMap<Uuid, Rental>>>,
    product_names: Arc<RwLock<HashMap<Uuid, String>>>,
}

impl MockRentalRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self {
            rentals: Arc::new(RwLock::new(HashMap::new())),
            product_names: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Seed the product display name joined into booking lists
    pub async fn set_product_name(&self, product_id: Uuid, name: impl Into<String>) {
        self.product_names
            .write()
            .await
            .insert(product_id, name.into());
    }

    fn overlapping<'a>(
        rentals: impl Iterator<Item = &'a Rental>,
        product_id: Uuid,
        period: DateRange,
        exclude: Option<Uuid>,
    ) -> Vec<Rental> {
        rentals
            .filter(|r| r.product_id == product_id)
            .filter(|r| !r.cancelled)
            .filter(|r| Some(r.id) != exclude)
            .filter(|r| r.period().overlaps(&period))
            .cloned()
            .collect()
    }
}

impl Default for MockRentalRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RentalRepository for MockRentalRepository {
    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<Rental>> {
        let rentals = self.rentals.read().await;
        Ok(rentals.get(&id).cloned())
    }

    async fn find_by_renter(&self, renter_id: Uuid) -> DomainResult<Vec<RentalWithProduct>> {
        let rentals = self.rentals.read().await;
        let names = self.product_names.read().await;

        let mut rows: Vec<RentalWithProduct> = rentals
            .values()
            .filter(|r| r.renter_id == renter_id)
            .map(|r| RentalWithProduct {
                rental: r.clone(),
                product_name: names
                    .get(&r.product_id)
                    .cloned()
                    .unwrap_or_else(|| "product".to_string()),
            })
            .collect();

        rows.sort_by(|a, b| b.rental.start_date.cmp(&a.rental.start_date));
        Ok(rows)
    }

    async fn find_overlapping(
        &self,
        product_id: Uuid,
        period: DateRange,
        exclude: Option<Uuid>,
    ) -> DomainResult<Vec<Rental>> {
        let rentals = self.rentals.read().await;
        Ok(Self::overlapping(
            rentals.values(),
            product_id,
            period,
            exclude,
        ))
    }

    async fn create(&self, rental: Rental) -> DomainResult<Rental> {
        let mut rentals = self.rentals.write().await;

        let colliding = Self::overlapping(
            rentals.values(),
            rental.product_id,
            rental.period(),
            None,
        );
        if !colliding.is_empty() {
            return Err(DomainError::conflict(
                "Product is already rented for the selected period",
            ));
        }

        rentals.insert(rental.id, rental.clone());
        Ok(rental)
    }

    async fn mark_cancelled(&self, id: Uuid) -> DomainResult<()> {
        let mut rentals = self.rentals.write().await;
        match rentals.get_mut(&id) {
            Some(rental) => {
                rental.cancel();
                Ok(())
            }
            None => Err(DomainError::not_found("Rental")),
        }
    }
}

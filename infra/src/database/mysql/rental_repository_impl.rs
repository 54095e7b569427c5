//! MySQL implementation of the RentalRepository trait.
//!
//! `create` is the authoritative overlap guard: the collision re-check and
//! the insert run inside one transaction with the conflicting rows locked,
//! so two concurrent overlapping bookings can never both commit.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use rh_core::domain::entities::rental::Rental;
use rh_core::domain::value_objects::DateRange;
use rh_core::errors::{DomainError, DomainResult};
use rh_core::repositories::{RentalRepository, RentalWithProduct};

/// Half-open overlap predicate over the stored date columns
const OVERLAP_WHERE: &str =
    "product_id = ? AND cancelled = FALSE AND start_date < ? AND ? < end_date";

/// MySQL implementation of RentalRepository
pub struct MySqlRentalRepository {
    pool: MySqlPool,
}

impl MySqlRentalRepository {
    /// Create a new MySQL rental repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn db_err(context: &str, e: impl std::fmt::Display) -> DomainError {
        DomainError::Database {
            message: format!("{}: {}", context, e),
        }
    }

    fn row_to_rental(row: &sqlx::mysql::MySqlRow) -> DomainResult<Rental> {
        let id: String = row
            .try_get("id")
            .map_err(|e| Self::db_err("Failed to get id", e))?;
        let product_id: String = row
            .try_get("product_id")
            .map_err(|e| Self::db_err("Failed to get product_id", e))?;
        let renter_id: String = row
            .try_get("renter_id")
            .map_err(|e| Self::db_err("Failed to get renter_id", e))?;

        Ok(Rental {
            id: Uuid::parse_str(&id).map_err(|e| Self::db_err("Invalid UUID", e))?,
            product_id: Uuid::parse_str(&product_id)
                .map_err(|e| Self::db_err("Invalid UUID", e))?,
            renter_id: Uuid::parse_str(&renter_id)
                .map_err(|e| Self::db_err("Invalid UUID", e))?,
            start_date: row
                .try_get::<NaiveDate, _>("start_date")
                .map_err(|e| Self::db_err("Failed to get start_date", e))?,
            end_date: row
                .try_get::<NaiveDate, _>("end_date")
                .map_err(|e| Self::db_err("Failed to get end_date", e))?,
            total_price: row
                .try_get::<Decimal, _>("total_price")
                .map_err(|e| Self::db_err("Failed to get total_price", e))?,
            cancelled: row
                .try_get("cancelled")
                .map_err(|e| Self::db_err("Failed to get cancelled", e))?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| Self::db_err("Failed to get created_at", e))?,
        })
    }
}

#[async_trait]
impl RentalRepository for MySqlRentalRepository {
    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<Rental>> {
        let query = r#"
            SELECT id, product_id, renter_id, start_date, end_date,
                   total_price, cancelled, created_at
            FROM rentals
            WHERE id = ?
            LIMIT 1
        "#;

        let result = sqlx::query(query)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| Self::db_err("Database query failed", e))?;

        match result {
            Some(row) => Ok(Some(Self::row_to_rental(&row)?)),
            None => Ok(None),
        }
    }

    async fn find_by_renter(&self, renter_id: Uuid) -> DomainResult<Vec<RentalWithProduct>> {
        let query = r#"
            SELECT r.id, r.product_id, r.renter_id, r.start_date, r.end_date,
                   r.total_price, r.cancelled, r.created_at,
                   p.name AS product_name
            FROM rentals r
            JOIN products p ON p.id = r.product_id
            WHERE r.renter_id = ?
            ORDER BY r.start_date DESC
        "#;

        let rows = sqlx::query(query)
            .bind(renter_id.to_string())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| Self::db_err("Database query failed", e))?;

        rows.iter()
            .map(|row| {
                let rental = Self::row_to_rental(row)?;
                let product_name: String = row
                    .try_get("product_name")
                    .map_err(|e| Self::db_err("Failed to get product_name", e))?;
                Ok(RentalWithProduct {
                    rental,
                    product_name,
                })
            })
            .collect()
    }

    async fn find_overlapping(
        &self,
        product_id: Uuid,
        period: DateRange,
        exclude: Option<Uuid>,
    ) -> DomainResult<Vec<Rental>> {
        let query = format!(
            r#"
            SELECT id, product_id, renter_id, start_date, end_date,
                   total_price, cancelled, created_at
            FROM rentals
            WHERE {}
              AND (? IS NULL OR id <> ?)
            "#,
            OVERLAP_WHERE
        );

        let exclude = exclude.map(|id| id.to_string());
        let rows = sqlx::query(&query)
            .bind(product_id.to_string())
            .bind(period.end())
            .bind(period.start())
            .bind(exclude.clone())
            .bind(exclude)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| Self::db_err("Database query failed", e))?;

        rows.iter().map(Self::row_to_rental).collect()
    }

    async fn create(&self, rental: Rental) -> DomainResult<Rental> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| Self::db_err("Failed to open transaction", e))?;

        // Lock colliding rows until commit so a racing insert serializes
        // behind this transaction.
        let check = format!(
            "SELECT COUNT(*) FROM rentals WHERE {} FOR UPDATE",
            OVERLAP_WHERE
        );
        let colliding: i64 = sqlx::query_scalar(&check)
            .bind(rental.product_id.to_string())
            .bind(rental.end_date)
            .bind(rental.start_date)
            .fetch_one(&mut *tx)
            .await
            .map_err(|e| Self::db_err("Overlap check failed", e))?;

        if colliding > 0 {
            return Err(DomainError::conflict(
                "Product is already rented for the selected period",
            ));
        }

        let insert = r#"
            INSERT INTO rentals (
                id, product_id, renter_id, start_date, end_date,
                total_price, cancelled, created_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(insert)
            .bind(rental.id.to_string())
            .bind(rental.product_id.to_string())
            .bind(rental.renter_id.to_string())
            .bind(rental.start_date)
            .bind(rental.end_date)
            .bind(rental.total_price)
            .bind(rental.cancelled)
            .bind(rental.created_at)
            .execute(&mut *tx)
            .await
            .map_err(|e| Self::db_err("Failed to create rental", e))?;

        tx.commit()
            .await
            .map_err(|e| Self::db_err("Failed to commit rental", e))?;

        Ok(rental)
    }

    async fn mark_cancelled(&self, id: Uuid) -> DomainResult<()> {
        let result = sqlx::query("UPDATE rentals SET cancelled = TRUE WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| Self::db_err("Failed to cancel rental", e))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found("Rental"));
        }
        Ok(())
    }
}

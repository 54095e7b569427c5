//! MySQL implementation of the ReviewRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use rh_core::domain::entities::review::Review;
use rh_core::errors::{DomainError, DomainResult};
use rh_core::repositories::{ReviewRepository, ReviewWithAuthor};

/// MySQL implementation of ReviewRepository
pub struct MySqlReviewRepository {
    pool: MySqlPool,
}

impl MySqlReviewRepository {
    /// Create a new MySQL review repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn db_err(context: &str, e: impl std::fmt::Display) -> DomainError {
        DomainError::Database {
            message: format!("{}: {}", context, e),
        }
    }

    fn row_to_review(row: &sqlx::mysql::MySqlRow) -> DomainResult<Review> {
        let id: String = row
            .try_get("id")
            .map_err(|e| Self::db_err("Failed to get id", e))?;
        let product_id: String = row
            .try_get("product_id")
            .map_err(|e| Self::db_err("Failed to get product_id", e))?;
        let author_id: String = row
            .try_get("author_id")
            .map_err(|e| Self::db_err("Failed to get author_id", e))?;
        let stars: i8 = row
            .try_get("stars")
            .map_err(|e| Self::db_err("Failed to get stars", e))?;

        Ok(Review {
            id: Uuid::parse_str(&id).map_err(|e| Self::db_err("Invalid UUID", e))?,
            product_id: Uuid::parse_str(&product_id)
                .map_err(|e| Self::db_err("Invalid UUID", e))?,
            author_id: Uuid::parse_str(&author_id)
                .map_err(|e| Self::db_err("Invalid UUID", e))?,
            stars: stars as u8,
            comment: row
                .try_get("comment")
                .map_err(|e| Self::db_err("Failed to get comment", e))?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| Self::db_err("Failed to get created_at", e))?,
        })
    }
}

#[async_trait]
impl ReviewRepository for MySqlReviewRepository {
    async fn create(&self, review: Review) -> DomainResult<Review> {
        let query = r#"
            INSERT INTO reviews (id, product_id, author_id, stars, comment, created_at)
            VALUES (?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(review.id.to_string())
            .bind(review.product_id.to_string())
            .bind(review.author_id.to_string())
            .bind(review.stars as i8)
            .bind(&review.comment)
            .bind(review.created_at)
            .execute(&self.pool)
            .await
            .map_err(|e| Self::db_err("Failed to create review", e))?;

        Ok(review)
    }

    async fn find_by_product(&self, product_id: Uuid) -> DomainResult<Vec<ReviewWithAuthor>> {
        let query = r#"
            SELECT r.id, r.product_id, r.author_id, r.stars, r.comment, r.created_at,
                   u.name AS author_name
            FROM reviews r
            JOIN users u ON u.id = r.author_id
            WHERE r.product_id = ?
            ORDER BY r.created_at DESC
        "#;

        let rows = sqlx::query(query)
            .bind(product_id.to_string())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| Self::db_err("Database query failed", e))?;

        rows.iter()
            .map(|row| {
                let review = Self::row_to_review(row)?;
                let author_name: String = row
                    .try_get("author_name")
                    .map_err(|e| Self::db_err("Failed to get author_name", e))?;
                Ok(ReviewWithAuthor {
                    review,
                    author_name,
                })
            })
            .collect()
    }

    async fn average_stars(&self, product_id: Uuid) -> DomainResult<Option<f64>> {
        let average: Option<f64> = sqlx::query_scalar(
            "SELECT CAST(AVG(stars) AS DOUBLE) FROM reviews WHERE product_id = ?",
        )
        .bind(product_id.to_string())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| Self::db_err("Database query failed", e))?;

        Ok(average)
    }
}

//! MySQL implementation of the FavoriteRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use rh_core::domain::entities::favorite::Favorite;
use rh_core::domain::entities::product::{Country, ProductCategory, ProductSummary};
use rh_core::errors::{DomainError, DomainResult};
use rh_core::repositories::FavoriteRepository;

/// MySQL implementation of FavoriteRepository
pub struct MySqlFavoriteRepository {
    pool: MySqlPool,
}

impl MySqlFavoriteRepository {
    /// Create a new MySQL favorite repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn db_err(context: &str, e: impl std::fmt::Display) -> DomainError {
        DomainError::Database {
            message: format!("{}: {}", context, e),
        }
    }

    fn row_to_summary(row: &sqlx::mysql::MySqlRow) -> DomainResult<ProductSummary> {
        let id: String = row
            .try_get("id")
            .map_err(|e| Self::db_err("Failed to get id", e))?;
        let category: String = row
            .try_get("category")
            .map_err(|e| Self::db_err("Failed to get category", e))?;
        let location: String = row
            .try_get("location")
            .map_err(|e| Self::db_err("Failed to get location", e))?;

        Ok(ProductSummary {
            id: Uuid::parse_str(&id).map_err(|e| Self::db_err("Invalid UUID", e))?,
            category: ProductCategory::parse(&category)
                .ok_or_else(|| Self::db_err("Unknown product category", &category))?,
            name: row
                .try_get("name")
                .map_err(|e| Self::db_err("Failed to get name", e))?,
            description: row
                .try_get("description")
                .map_err(|e| Self::db_err("Failed to get description", e))?,
            price_per_day: row
                .try_get::<Decimal, _>("price_per_day")
                .map_err(|e| Self::db_err("Failed to get price_per_day", e))?,
            location: Country::parse(&location)
                .ok_or_else(|| Self::db_err("Unknown country", &location))?,
            image_path: row
                .try_get("image_path")
                .map_err(|e| Self::db_err("Failed to get image_path", e))?,
            available: row
                .try_get("available")
                .map_err(|e| Self::db_err("Failed to get available", e))?,
            added_at: row
                .try_get::<DateTime<Utc>, _>("added_at")
                .map_err(|e| Self::db_err("Failed to get added_at", e))?,
            owner_name: row
                .try_get("owner_name")
                .map_err(|e| Self::db_err("Failed to get owner_name", e))?,
            average_rating: row
                .try_get("avg_rating")
                .map_err(|e| Self::db_err("Failed to get avg_rating", e))?,
        })
    }
}

#[async_trait]
impl FavoriteRepository for MySqlFavoriteRepository {
    async fn add(&self, favorite: Favorite) -> DomainResult<()> {
        // INSERT IGNORE keeps duplicate pairs a no-op
        let query = r#"
            INSERT IGNORE INTO favorites (user_id, product_id, created_at)
            VALUES (?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(favorite.user_id.to_string())
            .bind(favorite.product_id.to_string())
            .bind(favorite.created_at)
            .execute(&self.pool)
            .await
            .map_err(|e| Self::db_err("Failed to add favorite", e))?;

        Ok(())
    }

    async fn remove(&self, user_id: Uuid, product_id: Uuid) -> DomainResult<bool> {
        let result =
            sqlx::query("DELETE FROM favorites WHERE user_id = ? AND product_id = ?")
                .bind(user_id.to_string())
                .bind(product_id.to_string())
                .execute(&self.pool)
                .await
                .map_err(|e| Self::db_err("Failed to remove favorite", e))?;

        Ok(result.rows_affected() > 0)
    }

    async fn exists(&self, user_id: Uuid, product_id: Uuid) -> DomainResult<bool> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM favorites WHERE user_id = ? AND product_id = ?",
        )
        .bind(user_id.to_string())
        .bind(product_id.to_string())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| Self::db_err("Database query failed", e))?;

        Ok(count > 0)
    }

    async fn products_of(&self, user_id: Uuid) -> DomainResult<Vec<ProductSummary>> {
        let query = r#"
            SELECT p.id, p.category, p.name, p.description, p.price_per_day,
                   p.location, p.image_path, p.available, p.added_at,
                   u.name AS owner_name,
                   rt.avg_rating
            FROM favorites f
            JOIN products p ON p.id = f.product_id
            JOIN users u ON u.id = p.owner_id
            LEFT JOIN (
                SELECT product_id, CAST(AVG(stars) AS DOUBLE) AS avg_rating
                FROM reviews
                GROUP BY product_id
            ) rt ON rt.product_id = p.id
            WHERE f.user_id = ?
            ORDER BY f.created_at DESC
        "#;

        let rows = sqlx::query(query)
            .bind(user_id.to_string())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| Self::db_err("Database query failed", e))?;

        rows.iter().map(Self::row_to_summary).collect()
    }
}

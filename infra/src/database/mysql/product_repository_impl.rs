//! MySQL implementation of the ProductRepository trait.
//!
//! Catalog queries join the owner's display name and the review-derived
//! average rating so the whole [`ProductFilter`] executes in one statement.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::{MySql, MySqlPool, QueryBuilder, Row};
use uuid::Uuid;

use rh_core::domain::entities::product::{Country, Product, ProductCategory, ProductSummary};
use rh_core::errors::{DomainError, DomainResult};
use rh_core::repositories::{ProductFilter, ProductRepository, SortKey};

/// Shared SELECT for catalog rows: product columns plus the joined owner
/// name and average rating.
const SUMMARY_SELECT: &str = r#"
    SELECT p.id, p.owner_id, p.category, p.name, p.description, p.price_per_day,
           p.location, p.image_path, p.available, p.added_at,
           u.name AS owner_name,
           rt.avg_rating
    FROM products p
    JOIN users u ON u.id = p.owner_id
    LEFT JOIN (
        SELECT product_id, CAST(AVG(stars) AS DOUBLE) AS avg_rating
        FROM reviews
        GROUP BY product_id
    ) rt ON rt.product_id = p.id
"#;

/// MySQL implementation of ProductRepository
pub struct MySqlProductRepository {
    pool: MySqlPool,
}

impl MySqlProductRepository {
    /// Create a new MySQL product repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn db_err(context: &str, e: impl std::fmt::Display) -> DomainError {
        DomainError::Database {
            message: format!("{}: {}", context, e),
        }
    }

    fn parse_category(value: &str) -> DomainResult<ProductCategory> {
        ProductCategory::parse(value)
            .ok_or_else(|| Self::db_err("Unknown product category", value))
    }

    fn parse_location(value: &str) -> DomainResult<Country> {
        Country::parse(value).ok_or_else(|| Self::db_err("Unknown country", value))
    }

    fn row_to_product(row: &sqlx::mysql::MySqlRow) -> DomainResult<Product> {
        let id: String = row
            .try_get("id")
            .map_err(|e| Self::db_err("Failed to get id", e))?;
        let owner_id: String = row
            .try_get("owner_id")
            .map_err(|e| Self::db_err("Failed to get owner_id", e))?;
        let category: String = row
            .try_get("category")
            .map_err(|e| Self::db_err("Failed to get category", e))?;
        let location: String = row
            .try_get("location")
            .map_err(|e| Self::db_err("Failed to get location", e))?;

        Ok(Product {
            id: Uuid::parse_str(&id).map_err(|e| Self::db_err("Invalid UUID", e))?,
            owner_id: Uuid::parse_str(&owner_id).map_err(|e| Self::db_err("Invalid UUID", e))?,
            category: Self::parse_category(&category)?,
            name: row
                .try_get("name")
                .map_err(|e| Self::db_err("Failed to get name", e))?,
            description: row
                .try_get("description")
                .map_err(|e| Self::db_err("Failed to get description", e))?,
            price_per_day: row
                .try_get::<Decimal, _>("price_per_day")
                .map_err(|e| Self::db_err("Failed to get price_per_day", e))?,
            location: Self::parse_location(&location)?,
            image_path: row
                .try_get("image_path")
                .map_err(|e| Self::db_err("Failed to get image_path", e))?,
            available: row
                .try_get("available")
                .map_err(|e| Self::db_err("Failed to get available", e))?,
            added_at: row
                .try_get::<DateTime<Utc>, _>("added_at")
                .map_err(|e| Self::db_err("Failed to get added_at", e))?,
        })
    }

    fn row_to_summary(row: &sqlx::mysql::MySqlRow) -> DomainResult<ProductSummary> {
        let product = Self::row_to_product(row)?;
        let owner_name: String = row
            .try_get("owner_name")
            .map_err(|e| Self::db_err("Failed to get owner_name", e))?;
        let average_rating: Option<f64> = row
            .try_get("avg_rating")
            .map_err(|e| Self::db_err("Failed to get avg_rating", e))?;

        Ok(ProductSummary::from_product(&product, owner_name, average_rating))
    }
}

#[async_trait]
impl ProductRepository for MySqlProductRepository {
    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<Product>> {
        let query = r#"
            SELECT id, owner_id, category, name, description, price_per_day,
                   location, image_path, available, added_at
            FROM products
            WHERE id = ?
            LIMIT 1
        "#;

        let result = sqlx::query(query)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| Self::db_err("Database query failed", e))?;

        match result {
            Some(row) => Ok(Some(Self::row_to_product(&row)?)),
            None => Ok(None),
        }
    }

    async fn summary_by_id(&self, id: Uuid) -> DomainResult<Option<ProductSummary>> {
        let mut qb = QueryBuilder::<MySql>::new(SUMMARY_SELECT);
        qb.push(" WHERE p.id = ").push_bind(id.to_string());

        let result = qb
            .build()
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| Self::db_err("Database query failed", e))?;

        match result {
            Some(row) => Ok(Some(Self::row_to_summary(&row)?)),
            None => Ok(None),
        }
    }

    async fn search(&self, filter: &ProductFilter) -> DomainResult<Vec<ProductSummary>> {
        let mut qb = QueryBuilder::<MySql>::new(SUMMARY_SELECT);
        qb.push(" WHERE 1 = 1");

        if !filter.text.is_empty() {
            let pattern = format!("%{}%", filter.text.to_lowercase());
            qb.push(" AND (LOWER(p.name) LIKE ")
                .push_bind(pattern.clone())
                .push(" OR LOWER(p.description) LIKE ")
                .push_bind(pattern)
                .push(")");
        }
        if let Some(category) = filter.category {
            qb.push(" AND p.category = ").push_bind(category.as_str());
        }
        if let Some(min) = filter.min_price {
            qb.push(" AND p.price_per_day >= ").push_bind(min);
        }
        if let Some(max) = filter.max_price {
            qb.push(" AND p.price_per_day <= ").push_bind(max);
        }
        if let Some(location) = filter.location {
            qb.push(" AND p.location = ").push_bind(location.as_str());
        }
        if let Some(min_rating) = filter.min_rating {
            qb.push(" AND rt.avg_rating >= ").push_bind(min_rating);
        }

        // MySQL sorts NULLs last under DESC, which matches the
        // unrated-products-last policy of the rating sort.
        qb.push(match filter.sort {
            SortKey::Price => " ORDER BY p.price_per_day ASC",
            SortKey::Rating => " ORDER BY rt.avg_rating DESC",
            SortKey::Date => " ORDER BY p.added_at DESC",
        });

        let rows = qb
            .build()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| Self::db_err("Database query failed", e))?;

        rows.iter().map(Self::row_to_summary).collect()
    }

    async fn find_by_owner(&self, owner_id: Uuid) -> DomainResult<Vec<ProductSummary>> {
        let mut qb = QueryBuilder::<MySql>::new(SUMMARY_SELECT);
        qb.push(" WHERE p.owner_id = ")
            .push_bind(owner_id.to_string())
            .push(" ORDER BY p.added_at DESC");

        let rows = qb
            .build()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| Self::db_err("Database query failed", e))?;

        rows.iter().map(Self::row_to_summary).collect()
    }

    async fn create(&self, product: Product) -> DomainResult<Product> {
        let query = r#"
            INSERT INTO products (
                id, owner_id, category, name, description, price_per_day,
                location, image_path, available, added_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(product.id.to_string())
            .bind(product.owner_id.to_string())
            .bind(product.category.as_str())
            .bind(&product.name)
            .bind(&product.description)
            .bind(product.price_per_day)
            .bind(product.location.as_str())
            .bind(&product.image_path)
            .bind(product.available)
            .bind(product.added_at)
            .execute(&self.pool)
            .await
            .map_err(|e| Self::db_err("Failed to create product", e))?;

        Ok(product)
    }

    async fn update(&self, product: Product) -> DomainResult<Product> {
        let query = r#"
            UPDATE products
            SET category = ?, name = ?, description = ?, price_per_day = ?,
                location = ?, image_path = ?, available = ?
            WHERE id = ?
        "#;

        let result = sqlx::query(query)
            .bind(product.category.as_str())
            .bind(&product.name)
            .bind(&product.description)
            .bind(product.price_per_day)
            .bind(product.location.as_str())
            .bind(&product.image_path)
            .bind(product.available)
            .bind(product.id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| Self::db_err("Failed to update product", e))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found("Product"));
        }
        Ok(product)
    }

    async fn delete(&self, id: Uuid) -> DomainResult<bool> {
        let result = sqlx::query("DELETE FROM products WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| Self::db_err("Failed to delete product", e))?;

        Ok(result.rows_affected() > 0)
    }
}

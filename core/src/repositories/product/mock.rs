//! Mock implementation of ProductRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::product::{Product, ProductSummary};
use crate::errors::{DomainError, DomainResult};

use super::filter::ProductFilter;
use super::trait_::ProductRepository;

/// Mock product repository for testing.
///
/// Owner names and average ratings are normally joined in by SQL; tests seed
/// them explicitly through [`set_owner_name`](Self::set_owner_name) and
/// [`set_rating`](Self::set_rating).
pub struct MockProductRepository {
    products: Arc<RwLock<HashMap<Uuid, Product>>>,
    owner_names: Arc<RwLock<HashMap<Uuid, String>>>,
    ratings: Arc<RwLock<HashMap<Uuid, f64>>>,
}

impl MockProductRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self {
            products: Arc::new(RwLock::new(HashMap::new())),
            owner_names: Arc::new(RwLock::new(HashMap::new())),
            ratings: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Seed the display name joined in for an owner
    pub async fn set_owner_name(&self, owner_id: Uuid, name: impl Into<String>) {
        self.owner_names.write().await.insert(owner_id, name.into());
    }

    /// Seed the derived average rating for a product
    pub async fn set_rating(&self, product_id: Uuid, rating: f64) {
        self.ratings.write().await.insert(product_id, rating);
    }

    async fn summarize(&self, product: &Product) -> ProductSummary {
        let owner_name = self
            .owner_names
            .read()
            .await
            .get(&product.owner_id)
            .cloned()
            .unwrap_or_else(|| "user".to_string());
        let rating = self.ratings.read().await.get(&product.id).copied();
        ProductSummary::from_product(product, owner_name, rating)
    }
}

impl Default for MockProductRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProductRepository for MockProductRepository {
    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<Product>> {
        let products = self.products.read().await;
        Ok(products.get(&id).cloned())
    }

    async fn summary_by_id(&self, id: Uuid) -> DomainResult<Option<ProductSummary>> {
        let product = {
            let products = self.products.read().await;
            products.get(&id).cloned()
        };
        match product {
            Some(product) => Ok(Some(self.summarize(&product).await)),
            None => Ok(None),
        }
    }

    async fn search(&self, filter: &ProductFilter) -> DomainResult<Vec<ProductSummary>> {
        let products: Vec<Product> = {
            let products = self.products.read().await;
            products.values().cloned().collect()
        };

        let mut rows = Vec::new();
        for product in &products {
            let summary = self.summarize(product).await;
            if filter.matches(&summary) {
                rows.push(summary);
            }
        }

        filter.sort_results(&mut rows);
        Ok(rows)
    }

    async fn find_by_owner(&self, owner_id: Uuid) -> DomainResult<Vec<ProductSummary>> {
        let products: Vec<Product> = {
            let products = self.products.read().await;
            products
                .values()
                .filter(|p| p.owner_id == owner_id)
                .cloned()
                .collect()
        };

        let mut rows = Vec::new();
        for product in &products {
            rows.push(self.summarize(product).await);
        }
        // Newest listings first, matching the SQL ordering
        rows.sort_by(|a, b| b.added_at.cmp(&a.added_at));
        Ok(rows)
    }

    async fn create(&self, product: Product) -> DomainResult<Product> {
        let mut products = self.products.write().await;
        products.insert(product.id, product.clone());
        Ok(product)
    }

    async fn update(&self, product: Product) -> DomainResult<Product> {
        let mut products = self.products.write().await;

        if !products.contains_key(&product.id) {
            return Err(DomainError::not_found("Product"));
        }

        products.insert(product.id, product.clone());
        Ok(product)
    }

    async fn delete(&self, id: Uuid) -> DomainResult<bool> {
        let mut products = self.products.write().await;
        Ok(products.remove(&id).is_some())
    }
}

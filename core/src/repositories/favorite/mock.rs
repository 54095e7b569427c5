//! Mock implementation of FavoriteRepository for testing

use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::favorite::Favorite;
use crate::domain::entities::product::ProductSummary;
use crate::errors::DomainResult;

use super::trait_::FavoriteRepository;

/// Mock favorite repository for testing.
///
/// Catalog rows are normally joined in by SQL; tests seed them through
/// [`set_product`](Self::set_product).
pub struct MockFavoriteRepository {
    pairs: Arc<RwLock<HashSet<(Uuid, Uuid)>>>,
    products: Arc<RwLock<HashMap<Uuid, ProductSummary>>>,
}

impl MockFavoriteRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self {
            pairs: Arc::new(RwLock::new(HashSet::new())),
            products: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Seed the catalog row returned for a product
    pub async fn set_product(&self, summary: ProductSummary) {
        self.products.write().await.insert(summary.id, summary);
    }
}

impl Default for MockFavoriteRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl FavoriteRepository for MockFavoriteRepository {
    async fn add(&self, favorite: Favorite) -> DomainResult<()> {
        let mut pairs = self.pairs.write().await;
        pairs.insert((favorite.user_id, favorite.product_id));
        Ok(())
    }

    async fn remove(&self, user_id: Uuid, product_id: Uuid) -> DomainResult<bool> {
        let mut pairs = self.pairs.write().await;
        Ok(pairs.remove(&(user_id, product_id)))
    }

    async fn exists(&self, user_id: Uuid, product_id: Uuid) -> DomainResult<bool> {
        let pairs = self.pairs.read().await;
        Ok(pairs.contains(&(user_id, product_id)))
    }

    async fn products_of(&self, user_id: Uuid) -> DomainResult<Vec<ProductSummary>> {
        let pairs = self.pairs.read().await;
        let products = self.products.read().await;

        Ok(pairs
            .iter()
            .filter(|(uid, _)| *uid == user_id)
            .filter_map(|(_, pid)| products.get(pid).cloned())
            .collect())
    }
}

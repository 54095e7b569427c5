//! Favorite service: bookmarking products.

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::entities::favorite::Favorite;
use crate::domain::entities::product::ProductSummary;
use crate::errors::{DomainError, DomainResult};
use crate::repositories::{FavoriteRepository, ProductRepository};

/// Bookmark management over the product catalog
pub struct FavoriteService<F, P>
where
    F: FavoriteRepository,
    P: ProductRepository,
{
    favorites: Arc<F>,
    products: Arc<P>,
}

impl<F, P> FavoriteService<F, P>
where
    F: FavoriteRepository,
    P: ProductRepository,
{
    /// Create a new favorite service
    pub fn new(favorites: Arc<F>, products: Arc<P>) -> Self {
        Self {
            favorites,
            products,
        }
    }

    /// Toggle a bookmark; returns whether the product is now favorited
    pub async fn toggle(&self, user_id: Uuid, product_id: Uuid) -> DomainResult<bool> {
        if self.products.find_by_id(product_id).await?.is_none() {
            return Err(DomainError::not_found("Product"));
        }

        if self.favorites.exists(user_id, product_id).await? {
            self.favorites.remove(user_id, product_id).await?;
            Ok(false)
        } else {
            self.favorites
                .add(Favorite::new(user_id, product_id))
                .await?;
            Ok(true)
        }
    }

    /// Remove a bookmark; `false` when it did not exist
    pub async fn remove(&self, user_id: Uuid, product_id: Uuid) -> DomainResult<bool> {
        self.favorites.remove(user_id, product_id).await
    }

    /// Catalog rows for all products the user has bookmarked
    pub async fn favorites_of(&self, user_id: Uuid) -> DomainResult<Vec<ProductSummary>> {
        self.favorites.products_of(user_id).await
    }
}

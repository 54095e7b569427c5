//! Favorite repository trait defining the interface for bookmark persistence.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::favorite::Favorite;
use crate::domain::entities::product::ProductSummary;
use crate::errors::DomainResult;

/// Repository trait for Favorite persistence operations
#[async_trait]
pub trait FavoriteRepository: Send + Sync {
    /// Persist a new bookmark; a duplicate pair is a no-op
    async fn add(&self, favorite: Favorite) -> DomainResult<()>;

    /// Remove a bookmark
    ///
    /// Returns `false` when the pair did not exist.
    async fn remove(&self, user_id: Uuid, product_id: Uuid) -> DomainResult<bool>;

    /// Whether the user has bookmarked the product
    async fn exists(&self, user_id: Uuid, product_id: Uuid) -> DomainResult<bool>;

    /// Catalog rows for all products the user has bookmarked
    async fn products_of(&self, user_id: Uuid) -> DomainResult<Vec<ProductSummary>>;
}

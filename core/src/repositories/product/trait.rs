//! Product repository trait defining the interface for catalog persistence.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::product::{Product, ProductSummary};
use crate::errors::DomainResult;

use super::filter::ProductFilter;

/// Repository trait for Product entity persistence and catalog queries
///
/// `search` executes the whole [`ProductFilter`] in the store (SQL `WHERE` /
/// `ORDER BY` in the MySQL implementation); the filter's `matches` and
/// `sort_results` helpers define the semantics every implementation must
/// reproduce.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Find a product by its unique identifier
    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<Product>>;

    /// Find the catalog row (owner name + average rating joined in) for a product
    async fn summary_by_id(&self, id: Uuid) -> DomainResult<Option<ProductSummary>>;

    /// Run a catalog query, returning rows that satisfy every supplied
    /// predicate in the order selected by the filter's sort key
    async fn search(&self, filter: &ProductFilter) -> DomainResult<Vec<ProductSummary>>;

    /// List all products owned by a user
    async fn find_by_owner(&self, owner_id: Uuid) -> DomainResult<Vec<ProductSummary>>;

    /// Persist a new product listing
    async fn create(&self, product: Product) -> DomainResult<Product>;

    /// Update an existing product listing
    async fn update(&self, product: Product) -> DomainResult<Product>;

    /// Delete a product listing
    ///
    /// Returns `false` when no product with the given id exists.
    async fn delete(&self, id: Uuid) -> DomainResult<bool>;
}

//! Catalog service implementation.

use std::sync::Arc;

use rust_decimal::Decimal;
use tracing::info;
use uuid::Uuid;

use crate::domain::entities::product::{Country, Product, ProductCategory, ProductSummary};
use crate::errors::{DomainError, DomainResult};
use crate::repositories::{ProductFilter, ProductRepository};

/// Listing attributes supplied by the owner on create and update
#[derive(Debug, Clone)]
pub struct ProductData {
    pub category: ProductCategory,
    pub name: String,
    pub description: String,
    pub price_per_day: Decimal,
    pub location: Country,
    pub image_path: String,
    pub available: bool,
}

impl ProductData {
    fn validate(&self) -> DomainResult<()> {
        if self.name.trim().is_empty() {
            return Err(DomainError::validation("product name cannot be empty"));
        }
        if self.price_per_day <= Decimal::ZERO {
            return Err(DomainError::validation(
                "price per day must be greater than zero",
            ));
        }
        Ok(())
    }
}

/// Query facade plus owner-scoped CRUD over the product catalog.
///
/// Filtering is conjunctive and executed by the store; this service
/// normalizes the criteria and enforces ownership on mutations.
pub struct CatalogService<P>
where
    P: ProductRepository,
{
    products: Arc<P>,
}

impl<P> CatalogService<P>
where
    P: ProductRepository,
{
    /// Create a new catalog service
    pub fn new(products: Arc<P>) -> Self {
        Self { products }
    }

    /// Run a catalog search.
    ///
    /// Inverted price bounds simply match nothing; they are not an error.
    pub async fn search(&self, filter: &ProductFilter) -> DomainResult<Vec<ProductSummary>> {
        self.products.search(filter).await
    }

    /// Catalog row for a single product
    pub async fn get_product(&self, product_id: Uuid) -> DomainResult<Option<ProductSummary>> {
        self.products.summary_by_id(product_id).await
    }

    /// All listings owned by a user
    pub async fn products_of_owner(&self, owner_id: Uuid) -> DomainResult<Vec<ProductSummary>> {
        self.products.find_by_owner(owner_id).await
    }

    /// Create a listing owned by `owner_id`
    pub async fn create_product(&self, owner_id: Uuid, data: ProductData) -> DomainResult<Product> {
        data.validate()?;

        let mut product = Product::new(
            owner_id,
            data.category,
            data.name,
            data.description,
            data.price_per_day,
            data.location,
            data.image_path,
        );
        product.available = data.available;

        let created = self.products.create(product).await?;
        info!(product_id = %created.id, owner_id = %owner_id, "product listed");
        Ok(created)
    }

    /// Update a listing; only its owner may do so.
    ///
    /// # Errors
    /// * `NotFound` - no product with the given id
    /// * `Unauthorized` - the acting user does not own the product
    pub async fn update_product(
        &self,
        product_id: Uuid,
        user_id: Uuid,
        data: ProductData,
    ) -> DomainResult<Product> {
        data.validate()?;

        let mut product = self
            .products
            .find_by_id(product_id)
            .await?
            .ok_or_else(|| DomainError::not_found("Product"))?;

        if !product.is_owned_by(user_id) {
            return Err(DomainError::Unauthorized);
        }

        product.category = data.category;
        product.name = data.name;
        product.description = data.description;
        product.price_per_day = data.price_per_day;
        product.location = data.location;
        product.image_path = data.image_path;
        product.available = data.available;

        self.products.update(product).await
    }

    /// Delete a listing; only its owner may do so
    pub async fn delete_product(&self, product_id: Uuid, user_id: Uuid) -> DomainResult<()> {
        let product = self
            .products
            .find_by_id(product_id)
            .await?
            .ok_or_else(|| DomainError::not_found("Product"))?;

        if !product.is_owned_by(user_id) {
            return Err(DomainError::Unauthorized);
        }

        self.products.delete(product_id).await?;
        info!(product_id = %product_id, "product deleted");
        Ok(())
    }

    /// The closed category set, static configuration
    pub fn categories(&self) -> &'static [ProductCategory] {
        &ProductCategory::ALL
    }

    /// The closed location set, static configuration
    pub fn locations(&self) -> &'static [Country] {
        &Country::ALL
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::{MockProductRepository, SortKey};

    fn data(name: &str, price: i64) -> ProductData {
        ProductData {
            category: ProductCategory::Tools,
            name: name.to_string(),
            description: format!("{} description", name),
            price_per_day: Decimal::new(price, 0),
            location: Country::Romania,
            image_path: String::new(),
            available: true,
        }
    }

    fn service() -> (CatalogService<MockProductRepository>, Arc<MockProductRepository>) {
        let repo = Arc::new(MockProductRepository::new());
        (CatalogService::new(repo.clone()), repo)
    }

    #[tokio::test]
    async fn test_create_validates_input() {
        let (service, _) = service();
        let owner = Uuid::new_v4();

        let err = service
            .create_product(owner, data("  ", 10))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation { .. }));

        let err = service
            .create_product(owner, data("Drill", 0))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_only_owner_can_update_or_delete() {
        let (service, _) = service();
        let owner = Uuid::new_v4();
        let stranger = Uuid::new_v4();

        let product = service.create_product(owner, data("Drill", 25)).await.unwrap();

        let err = service
            .update_product(product.id, stranger, data("Stolen drill", 1))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Unauthorized));

        let err = service.delete_product(product.id, stranger).await.unwrap_err();
        assert!(matches!(err, DomainError::Unauthorized));

        service.delete_product(product.id, owner).await.unwrap();
        assert!(service.get_product(product.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_update_by_owner_persists_changes() {
        let (service, repo) = service();
        let owner = Uuid::new_v4();

        let product = service.create_product(owner, data("Drill", 25)).await.unwrap();
        service
            .update_product(product.id, owner, data("Hammer drill", 30))
            .await
            .unwrap();

        let stored = repo.find_by_id(product.id).await.unwrap().unwrap();
        assert_eq!(stored.name, "Hammer drill");
        assert_eq!(stored.price_per_day, Decimal::new(30, 0));
    }

    #[tokio::test]
    async fn test_missing_product_is_not_found() {
        let (service, _) = service();

        let err = service
            .update_product(Uuid::new_v4(), Uuid::new_v4(), data("Ghost", 5))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_search_with_inverted_bounds_returns_empty() {
        let (service, _) = service();
        let owner = Uuid::new_v4();
        service.create_product(owner, data("Drill", 75)).await.unwrap();

        let filter = ProductFilter {
            min_price: Some(Decimal::new(100, 0)),
            max_price: Some(Decimal::new(50, 0)),
            sort: SortKey::Price,
            ..Default::default()
        };

        let results = service.search(&filter).await.unwrap();
        assert!(results.is_empty());
    }

    #[tokio::test]
    async fn test_owner_listings_come_newest_first() {
        let (service, repo) = service();
        let owner = Uuid::new_v4();

        let older = service.create_product(owner, data("Drill", 25)).await.unwrap();
        let newer = service.create_product(owner, data("Sander", 30)).await.unwrap();

        let mut backdated = older.clone();
        backdated.added_at = backdated.added_at - chrono::Duration::days(2);
        repo.update(backdated).await.unwrap();

        let listings = service.products_of_owner(owner).await.unwrap();
        assert_eq!(
            listings.iter().map(|p| p.id).collect::<Vec<_>>(),
            vec![newer.id, older.id]
        );
    }

    #[tokio::test]
    async fn test_closed_sets_are_exposed() {
        let (service, _) = service();
        assert_eq!(service.categories().len(), ProductCategory::ALL.len());
        assert_eq!(service.locations().len(), Country::ALL.len());
    }
}
